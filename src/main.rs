use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use spaceroute::cli::{Args, Command};
use spaceroute::io::{OutputWriter, TerminalOutput};
use spaceroute::services::geometry::TriangleInput;
use spaceroute::ui::presenters::{GeometryPresenter, PassageLog, RoutePresenter, ShipPresenter};
use spaceroute::{Scenario, SimResult};

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spaceroute=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut output = TerminalOutput;
    let result = match Args::parse().command() {
        Command::Route { scenario, verbose } => fly(scenario.as_deref(), verbose, &mut output),
        Command::Triangle { shape } => triangle(shape.into(), &mut output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn fly(path: Option<&Path>, verbose: bool, output: &mut dyn OutputWriter) -> SimResult<()> {
    let scenario = match path {
        Some(path) => Scenario::load(path)?,
        None => Scenario::builtin(),
    };

    ShipPresenter::show_ship(&scenario.ship, output);
    RoutePresenter::show_route(&scenario.route, output);
    output.writeln("");

    let mut voyage = scenario.into_voyage();
    let result = if verbose {
        voyage.run_observed(&mut PassageLog::new(output))
    } else {
        voyage.run()
    };

    RoutePresenter::show_outcome(&result, output);
    Ok(())
}

fn triangle(input: TriangleInput, output: &mut dyn OutputWriter) -> SimResult<()> {
    let area = input.area()?;
    GeometryPresenter::show_area(&input, area, output);
    Ok(())
}
