use spaceroute::io::test_utils::MockOutput;
use spaceroute::services::passage::pass_route;
use spaceroute::ui::presenters::{PassageLog, RoutePresenter};
use spaceroute::{
    Deflectors, Engine, EngineType, Environment, Obstacle, PassageFailure, PassageResult,
    RouteLeg, Scenario, SpaceRoute, Spaceship, Voyage, VoyageState,
};

fn scout() -> Spaceship {
    Spaceship::new(
        "Scout",
        Engine::new(EngineType::ImpulseC, 10.0),
        10,
        Deflectors::new(1, false),
    )
}

#[test]
fn scout_is_destroyed_by_two_meteorites() {
    let route = SpaceRoute::new(vec![RouteLeg::new(
        100.0,
        Environment::EmptySpace,
        vec![Obstacle::Meteorite, Obstacle::Meteorite],
    )]);
    let mut ship = scout();

    let result = route.pass(&mut ship);

    assert!(!result.is_success());
    assert_eq!(result.message(), "Ship Scout was destroyed");
    assert_eq!(ship.hull(), -110);
    assert!(ship.is_destroyed());
}

#[test]
fn scout_cannot_enter_wormhole() {
    let route = SpaceRoute::new(vec![RouteLeg::new(
        500.0,
        Environment::Wormhole { length: 300 },
        vec![Obstacle::WormholeInstability, Obstacle::WormholeInstability],
    )]);
    let mut ship = scout();

    let result = route.pass(&mut ship);

    assert_eq!(
        result,
        PassageResult::Failure(PassageFailure::Blocked {
            ship: "Scout".into(),
            environment: "Wormhole".into(),
        })
    );
    assert_eq!(result.message(), "Ship Scout cannot pass Wormhole");
    assert_eq!(ship.hull(), 10, "a blocked leg deals no damage");
}

#[test]
fn photon_jumper_crosses_unstable_wormhole_and_continues() {
    let route = SpaceRoute::new(vec![
        RouteLeg::new(
            500.0,
            Environment::Wormhole { length: 300 },
            vec![Obstacle::WormholeInstability, Obstacle::WormholeInstability],
        ),
        RouteLeg::new(20.0, Environment::Nebula, vec![]),
    ]);
    let mut ship = Spaceship::new(
        "Jumper",
        Engine::new(EngineType::JumpAlpha, 30.0),
        50,
        Deflectors::new(1, true),
    );
    let mut output = MockOutput::new();

    let result = pass_route(&route, &mut ship, &mut PassageLog::new(&mut output));

    assert_eq!(ship.hull(), 50);
    // Evaluation reached the second leg, which the jump drive cannot enter.
    assert_eq!(result.message(), "Ship Jumper cannot pass Nebula");
    assert!(output.text().contains("LEG 1: 0 DAMAGE TAKEN, HULL AT 50\n"));
    assert!(output.text().contains("LEG 2: ENTERING Nebula\n"));
}

#[test]
fn builtin_scenario_matches_classic_run() {
    let mut voyage = Scenario::builtin().into_voyage();
    let result = voyage.run();

    assert_eq!(result.message(), "Ship Scout was destroyed");
    assert_eq!(voyage.state(), &VoyageState::Destroyed);
    assert_eq!(voyage.ship().hull(), -110);

    let mut output = MockOutput::new();
    RoutePresenter::show_outcome(&result, &mut output);
    assert_eq!(output.text(), "Failure: Ship Scout was destroyed\n");
}

#[test]
fn courier_scenario_arrives() {
    let scenario =
        Scenario::from_toml_str(include_str!("../scenarios/courier.toml")).unwrap();
    let mut voyage = Voyage::new(scenario.ship, scenario.route);

    let result = voyage.run();

    assert!(result.is_success());
    assert_eq!(result.message(), "");
    assert_eq!(voyage.state(), &VoyageState::Arrived);
    // One meteorite against class 2 deflectors.
    assert_eq!(voyage.ship().hull(), 80);
}

#[test]
fn scenario_loads_from_disk() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/scout.toml");
    let scenario = Scenario::load(&path).unwrap();
    assert_eq!(scenario, Scenario::builtin());
}

#[test]
fn survivor_is_worn_down_over_several_legs() {
    let route = SpaceRoute::new(vec![
        RouteLeg::new(10.0, Environment::EmptySpace, vec![Obstacle::Meteorite]),
        RouteLeg::new(10.0, Environment::Nebula, vec![Obstacle::Meteorite]),
        RouteLeg::new(10.0, Environment::AntimatterClouds, vec![Obstacle::Meteorite]),
    ]);
    let mut ship = Spaceship::new(
        "Hauler",
        Engine::new(EngineType::ImpulseE, 5.0),
        100,
        Deflectors::new(2, true),
    );

    // 40 per leg: 60, 20, then -20.
    let result = route.pass(&mut ship);

    assert_eq!(result.message(), "Ship Hauler was destroyed");
    assert_eq!(ship.hull(), -20);
}
