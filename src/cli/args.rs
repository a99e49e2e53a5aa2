use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::services::geometry::TriangleInput;

/// Fly a spaceship along a route, or compute a triangle's area.
#[derive(Parser, Debug)]
#[command(name = "spaceroute")]
#[command(about = "Spaceship route passage simulator")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Fly the built-in scout scenario or one loaded from a TOML file
    Route {
        /// Scenario file; the built-in scout run is used when omitted
        #[arg(long, short = 's')]
        scenario: Option<PathBuf>,

        /// Print every passage event, leg by leg
        #[arg(long, short = 'v')]
        verbose: bool,
    },
    /// Compute a triangle's area
    Triangle {
        #[command(subcommand)]
        shape: TriangleShape,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum TriangleShape {
    /// Three side lengths (Heron's formula)
    Sides { a: f64, b: f64, c: f64 },
    /// Base and height
    BaseHeight { base: f64, height: f64 },
    /// Two sides and the included angle in degrees
    Angle { a: f64, b: f64, degrees: f64 },
}

impl From<TriangleShape> for TriangleInput {
    fn from(shape: TriangleShape) -> Self {
        match shape {
            TriangleShape::Sides { a, b, c } => TriangleInput::Sides { a, b, c },
            TriangleShape::BaseHeight { base, height } => TriangleInput::BaseHeight { base, height },
            TriangleShape::Angle { a, b, degrees } => TriangleInput::SidesAngle {
                a,
                b,
                angle_degrees: degrees,
            },
        }
    }
}

impl Args {
    /// The subcommand to run; a bare invocation flies the built-in scenario.
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Route {
            scenario: None,
            verbose: false,
        })
    }
}
