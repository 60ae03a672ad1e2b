use arena_bot::{
    ArenaDescription, BotConfig, BotController, ChampionKnowledge, Controller, ControllerError,
    DecisionReason, RouteState,
};
use arena_core::{Action, AsciiArena, Coords, Facing, TileKind, Weapon};

const WALLED: &str = "
    #######
    #@..#.#
    #.#.#.#
    #.#...#
    #~#~#M#
    #######
";

fn fixture(text: &str, facing: Facing, weapon: Weapon) -> AsciiArena {
    AsciiArena::parse(text)
        .expect("fixture")
        .with_agent(facing, weapon)
}

fn full_view(arena: &AsciiArena) -> ChampionKnowledge {
    ChampionKnowledge::new(arena.agent, arena.tiles.clone())
}

fn reset_for(controller: &mut BotController, arena: &AsciiArena) {
    let menhir = arena.menhir.expect("fixture has a menhir");
    controller
        .reset(&ArenaDescription::new("fixture", menhir))
        .expect("reset");
}

/// Minimal stand-in for the host: turns, steps into free land, ignores attacks.
fn apply(arena: &mut AsciiArena, action: Action) {
    let at = arena.agent;
    let Some(mut me) = arena.tiles.get_mut(&at).and_then(|tile| tile.character.take()) else {
        return;
    };

    match action {
        Action::TurnLeft => me.facing = me.facing.turn_left(),
        Action::TurnRight => me.facing = me.facing.turn_right(),
        Action::StepForward => {
            let next = at.step(me.facing);
            let free = arena.tiles.get(&next).is_some_and(|tile| {
                tile.kind == TileKind::Land && tile.character.is_none()
            });
            if free {
                arena.agent = next;
            }
        }
        Action::Attack => {}
    }

    if let Some(tile) = arena.tiles.get_mut(&arena.agent) {
        tile.character = Some(me);
    }
}

#[test]
fn walks_to_the_menhir_and_holds() {
    let mut arena = fixture(WALLED, Facing::Up, Weapon::Knife);
    let mut controller = BotController::new();
    reset_for(&mut controller, &arena);

    let mut reasons = Vec::new();
    for _ in 0..30 {
        let decision = controller
            .decide_with_reason(&full_view(&arena))
            .expect("decide");
        reasons.push(decision.reason);
        apply(&mut arena, decision.action);
    }

    assert_eq!(arena.agent, Coords::new(5, 3));
    assert_eq!(controller.route_state(), RouteState::Committed);
    assert_eq!(reasons.first(), Some(&DecisionReason::FollowRoute));
    assert_eq!(reasons.last(), Some(&DecisionReason::HoldAtGoal));
    assert!(!reasons.contains(&DecisionReason::Explore));
}

#[test]
fn short_corridor_needs_a_single_step() {
    let arena = fixture("@.M", Facing::Right, Weapon::Knife);
    let mut controller = BotController::new();
    reset_for(&mut controller, &arena);

    assert_eq!(controller.decide(&full_view(&arena)), Ok(Action::StepForward));
    assert!(controller.queue().is_empty());

    let decision = controller
        .decide_with_reason(&full_view(&arena))
        .expect("decide");
    assert_eq!(decision.action, Action::TurnLeft);
    assert_eq!(decision.reason, DecisionReason::HoldAtGoal);
}

#[test]
fn attack_preempts_routing() {
    let arena = fixture(
        "
        .E...
        .@..M
        ",
        Facing::Up,
        Weapon::Knife,
    );
    let mut controller = BotController::new();
    reset_for(&mut controller, &arena);

    let decision = controller
        .decide_with_reason(&full_view(&arena))
        .expect("decide");
    assert_eq!(decision.action, Action::Attack);
    assert_eq!(decision.reason, DecisionReason::Attack);
    assert_eq!(controller.route_state(), RouteState::Searching);
    assert!(controller.queue().is_empty());
}

#[test]
fn unloaded_bow_always_reloads_and_never_plans() {
    let arena = fixture("@....M", Facing::Right, Weapon::BowUnloaded);
    let mut controller = BotController::new();
    reset_for(&mut controller, &arena);

    for _ in 0..20 {
        let decision = controller
            .decide_with_reason(&full_view(&arena))
            .expect("decide");
        assert_eq!(decision.action, Action::Attack);
        assert_eq!(decision.reason, DecisionReason::Reload);
    }
    assert_eq!(controller.route_state(), RouteState::Searching);
    assert!(controller.queue().is_empty());
    assert_eq!(controller.weapon(), Weapon::BowUnloaded);
}

#[test]
fn explores_until_the_menhir_is_known() {
    let arena = fixture(
        "
        ..........
        ....@.....
        ..........
        .........M
        ",
        Facing::Left,
        Weapon::Sword,
    );
    let view = ChampionKnowledge::new(arena.agent, arena.visible_around(arena.agent, 1));

    let mut a = BotController::new();
    let mut b = BotController::new();
    reset_for(&mut a, &arena);
    reset_for(&mut b, &arena);

    let mut seen = Vec::new();
    for _ in 0..60 {
        let decision = a.decide_with_reason(&view).expect("decide");
        assert_eq!(decision.reason, DecisionReason::Explore);
        assert_eq!(b.decide(&view), Ok(decision.action));
        seen.push(decision.action);
    }
    assert_eq!(a.route_state(), RouteState::Searching);
    for action in [Action::TurnLeft, Action::TurnRight, Action::StepForward] {
        assert!(seen.contains(&action), "{action} never chosen");
    }
    assert!(!seen.contains(&Action::Attack));

    // Seeing the rest of the arena unlocks the route.
    let decision = a.decide_with_reason(&full_view(&arena)).expect("decide");
    assert_eq!(decision.reason, DecisionReason::FollowRoute);
    assert_eq!(a.route_state(), RouteState::Committed);
}

#[test]
fn reset_keeps_the_world_map_unless_configured() {
    let arena = fixture(WALLED, Facing::Up, Weapon::Knife);
    let known = arena.tiles.len();

    let mut keeper = BotController::new();
    reset_for(&mut keeper, &arena);
    keeper.decide(&full_view(&arena)).expect("decide");
    reset_for(&mut keeper, &arena);
    assert_eq!(keeper.world().len(), known);
    assert_eq!(keeper.route_state(), RouteState::Searching);
    assert!(keeper.queue().is_empty());
    assert_eq!(keeper.weapon(), Weapon::Knife);

    let config = BotConfig {
        clear_map_on_reset: true,
        ..BotConfig::default()
    };
    let mut forgetful = BotController::with_config(config);
    reset_for(&mut forgetful, &arena);
    forgetful.decide(&full_view(&arena)).expect("decide");
    reset_for(&mut forgetful, &arena);
    assert!(forgetful.world().is_empty());
}

#[test]
fn reset_mid_route_replans_from_the_current_pose() {
    let mut arena = fixture(WALLED, Facing::Up, Weapon::Knife);
    let mut controller = BotController::new();
    reset_for(&mut controller, &arena);

    for _ in 0..4 {
        let action = controller.decide(&full_view(&arena)).expect("decide");
        apply(&mut arena, action);
    }
    assert!(!controller.queue().is_empty());

    reset_for(&mut controller, &arena);
    assert!(controller.queue().is_empty());

    for _ in 0..30 {
        let action = controller.decide(&full_view(&arena)).expect("decide");
        apply(&mut arena, action);
    }
    assert_eq!(arena.agent, Coords::new(5, 3));
}

#[test]
fn precondition_violations_are_named() {
    let arena = fixture("@.M", Facing::Right, Weapon::Knife);
    let mut controller = BotController::new();

    assert_eq!(
        controller.decide(&full_view(&arena)),
        Err(ControllerError::NotReset)
    );

    let no_goal = ArenaDescription {
        name: "void".to_string(),
        menhir_position: None,
    };
    assert_eq!(
        controller.reset(&no_goal),
        Err(ControllerError::MissingGoal {
            arena: "void".to_string()
        })
    );

    reset_for(&mut controller, &arena);

    let mut missing_self = full_view(&arena);
    missing_self.visible_tiles.remove(&arena.agent);
    assert_eq!(
        controller.decide(&missing_self),
        Err(ControllerError::MissingSelfTile {
            position: arena.agent
        })
    );

    let mut empty_self = full_view(&arena);
    if let Some(tile) = empty_self.visible_tiles.get_mut(&arena.agent) {
        tile.character = None;
    }
    assert_eq!(
        controller.decide(&empty_self),
        Err(ControllerError::MissingSelfCharacter {
            position: arena.agent
        })
    );
    assert!(controller.world().is_empty());
}

#[test]
fn pose_and_weapon_follow_the_observation() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();

    let arena = fixture("@.M", Facing::Down, Weapon::Axe);
    let mut controller = BotController::new();
    reset_for(&mut controller, &arena);
    controller.decide(&full_view(&arena)).expect("decide");

    assert_eq!(controller.position(), Some(arena.agent));
    assert_eq!(controller.facing(), Some(Facing::Down));
    assert_eq!(controller.weapon(), Weapon::Axe);
    assert_eq!(controller.goal(), arena.menhir);
    assert_eq!(
        controller.last_decision().map(|d| d.reason),
        Some(DecisionReason::FollowRoute)
    );
}
