use crate::io::OutputWriter;
use crate::models::outcome::PassageResult;
use crate::models::route::{RouteLeg, SpaceRoute};
use crate::models::ship::Spaceship;
use crate::services::geometry::TriangleInput;
use crate::services::passage::PassageObserver;

pub struct ShipPresenter;

impl ShipPresenter {
    pub fn show_ship(ship: &Spaceship, output: &mut dyn OutputWriter) {
        let engine = ship.engine();
        let deflectors = ship.deflectors();
        output.writeln(&format!("SHIP {}", ship.name()));
        output.writeln(&format!(
            "  ENGINE      {} (FUEL USE {})",
            engine.engine_type, engine.fuel_use
        ));
        output.writeln(&format!(
            "  DEFLECTORS  CLASS {}{}",
            deflectors.class,
            if deflectors.has_photon { ", PHOTON" } else { "" }
        ));
        output.writeln(&format!("  HULL        {}", ship.hull()));
    }
}

pub struct RoutePresenter;

impl RoutePresenter {
    pub fn show_route(route: &SpaceRoute, output: &mut dyn OutputWriter) {
        output.writeln(&format!("ROUTE OF {} LEG(S)", route.legs().len()));
        for (index, leg) in route.legs().iter().enumerate() {
            output.writeln(&format!("  {}. {}", index + 1, describe_leg(leg)));
        }
    }

    /// "Success!" or "Failure: <message>".
    pub fn show_outcome(result: &PassageResult, output: &mut dyn OutputWriter) {
        if result.is_success() {
            output.writeln("Success!");
        } else {
            output.writeln(&format!("Failure: {}", result.message()));
        }
    }
}

fn describe_leg(leg: &RouteLeg) -> String {
    let obstacles = if leg.obstacles.is_empty() {
        "no obstacles".to_string()
    } else {
        leg.obstacles
            .iter()
            .map(|o| o.name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{} ({}), {}", leg.environment.name(), leg.length, obstacles)
}

/// Prints a line per passage event.
pub struct PassageLog<'a> {
    output: &'a mut dyn OutputWriter,
}

impl<'a> PassageLog<'a> {
    pub fn new(output: &'a mut dyn OutputWriter) -> Self {
        PassageLog { output }
    }
}

impl PassageObserver for PassageLog<'_> {
    fn leg_entered(&mut self, index: usize, leg: &RouteLeg) {
        self.output
            .writeln(&format!("LEG {}: ENTERING {}", index + 1, leg.environment.name()));
    }

    fn leg_blocked(&mut self, index: usize, leg: &RouteLeg) {
        self.output.writeln(&format!(
            "LEG {}: {} IS IMPASSABLE",
            index + 1,
            leg.environment.name()
        ));
    }

    fn damage_taken(&mut self, index: usize, damage: u32, hull: i32) {
        self.output.writeln(&format!(
            "LEG {}: {} DAMAGE TAKEN, HULL AT {}",
            index + 1,
            damage,
            hull
        ));
    }

    fn ship_destroyed(&mut self, ship: &Spaceship) {
        self.output
            .writeln(&format!("*** {} HAS BEEN DESTROYED ***", ship.name()));
    }

    fn route_completed(&mut self, ship: &Spaceship) {
        self.output
            .writeln(&format!("{} REACHED THE END OF THE ROUTE", ship.name()));
    }
}

pub struct GeometryPresenter;

impl GeometryPresenter {
    pub fn show_area(input: &TriangleInput, area: f64, output: &mut dyn OutputWriter) {
        let known = match input {
            TriangleInput::Sides { a, b, c } => format!("sides {}, {}, {}", a, b, c),
            TriangleInput::BaseHeight { base, height } => {
                format!("base {}, height {}", base, height)
            }
            TriangleInput::SidesAngle { a, b, angle_degrees } => {
                format!("sides {}, {} at {} degrees", a, b, angle_degrees)
            }
        };
        output.writeln(&format!("Triangle area ({}) = {}", known, area));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::environment::Environment;
    use crate::models::obstacle::Obstacle;
    use crate::models::ship::{Deflectors, Engine, EngineType};
    use crate::services::passage::pass_route;

    fn scout() -> Spaceship {
        Spaceship::new(
            "Scout",
            Engine::new(EngineType::ImpulseC, 10.0),
            10,
            Deflectors::new(1, false),
        )
    }

    #[test]
    fn outcome_lines() {
        let mut output = MockOutput::new();
        RoutePresenter::show_outcome(&PassageResult::Success, &mut output);
        RoutePresenter::show_outcome(&PassageResult::destroyed("Scout"), &mut output);
        assert_eq!(
            output.text(),
            "Success!\nFailure: Ship Scout was destroyed\n"
        );
    }

    #[test]
    fn ship_summary() {
        let mut output = MockOutput::new();
        ShipPresenter::show_ship(&scout(), &mut output);
        let text = output.text();
        assert!(text.starts_with("SHIP Scout\n"));
        assert!(text.contains("IMPULSE C (FUEL USE 10)"));
        assert!(text.contains("CLASS 1\n"));
        assert!(text.contains("HULL        10"));
    }

    #[test]
    fn route_listing() {
        let route = SpaceRoute::new(vec![
            RouteLeg::new(100.0, Environment::EmptySpace, vec![Obstacle::Meteorite]),
            RouteLeg::new(5.0, Environment::Nebula, vec![]),
        ]);
        let mut output = MockOutput::new();
        RoutePresenter::show_route(&route, &mut output);
        assert_eq!(
            output.text(),
            "ROUTE OF 2 LEG(S)\n  1. Empty space (100), Meteorite\n  2. Nebula (5), no obstacles\n"
        );
    }

    #[test]
    fn passage_log_follows_events() {
        let route = SpaceRoute::new(vec![RouteLeg::new(
            100.0,
            Environment::EmptySpace,
            vec![Obstacle::Meteorite, Obstacle::Meteorite],
        )]);
        let mut ship = scout();
        let mut output = MockOutput::new();
        pass_route(&route, &mut ship, &mut PassageLog::new(&mut output));
        assert_eq!(
            output.text(),
            "LEG 1: ENTERING Empty space\n\
             LEG 1: 120 DAMAGE TAKEN, HULL AT -110\n\
             *** Scout HAS BEEN DESTROYED ***\n"
        );
    }

    #[test]
    fn area_line() {
        let mut output = MockOutput::new();
        GeometryPresenter::show_area(
            &TriangleInput::BaseHeight { base: 10.0, height: 4.0 },
            20.0,
            &mut output,
        );
        assert_eq!(output.text(), "Triangle area (base 10, height 4) = 20\n");
    }
}
