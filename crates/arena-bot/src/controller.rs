use std::hash::{Hash, Hasher};

use arena_core::{
    can_engage, needs_reload, Action, ActionQueue, Coords, DeterministicRng, Facing, SplitMix64,
    Weapon, WorldMap,
};
use arena_nav::{compile, find_path};
use tracing::{debug, info, trace};

use crate::{ArenaDescription, BotConfig, ChampionKnowledge, ControllerError, Result, Tabard};

const EXPLORE_ACTIONS: [Action; 3] = [Action::TurnLeft, Action::TurnRight, Action::StepForward];

/// Host-facing seam: one instance per agent, reset per match, asked for one action per cycle.
pub trait Controller {
    fn name(&self) -> &str;

    fn preferred_tabard(&self) -> Tabard;

    fn reset(&mut self, arena: &ArenaDescription) -> Result<()>;

    fn decide(&mut self, knowledge: &ChampionKnowledge) -> Result<Action>;
}

/// Whether a route to the menhir has been committed this match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteState {
    #[default]
    Searching,
    Committed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionReason {
    /// A character stands inside the weapon's effect shape.
    Attack,
    /// The weapon must be reloaded; attacking does that.
    Reload,
    /// Next queued step of the committed route.
    FollowRoute,
    /// Route finished; turn in place next to the menhir.
    HoldAtGoal,
    /// No route yet; random turn or step.
    Explore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub reason: DecisionReason,
}

impl Decision {
    fn new(action: Action, reason: DecisionReason) -> Self {
        Self { action, reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pose {
    position: Coords,
    facing: Facing,
}

/// Walks to the menhir by the shortest route it knows of, attacking whatever
/// wanders into reach on the way.
#[derive(Debug, Clone)]
pub struct BotController {
    config: BotConfig,
    rng: SplitMix64,
    world: WorldMap,
    queue: ActionQueue,
    goal: Option<Coords>,
    pose: Option<Pose>,
    weapon: Weapon,
    route: RouteState,
    last_decision: Option<Decision>,
}

impl Default for BotController {
    fn default() -> Self {
        Self::with_config(BotConfig::default())
    }
}

impl BotController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BotConfig) -> Self {
        Self {
            rng: SplitMix64::new(config.seed),
            config,
            world: WorldMap::new(),
            queue: ActionQueue::new(),
            goal: None,
            pose: None,
            weapon: Weapon::default(),
            route: RouteState::default(),
            last_decision: None,
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn goal(&self) -> Option<Coords> {
        self.goal
    }

    pub fn route_state(&self) -> RouteState {
        self.route
    }

    pub fn weapon(&self) -> Weapon {
        self.weapon
    }

    pub fn position(&self) -> Option<Coords> {
        self.pose.map(|pose| pose.position)
    }

    pub fn facing(&self) -> Option<Facing> {
        self.pose.map(|pose| pose.facing)
    }

    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    /// Like [`Controller::decide`], also returning why the action was chosen.
    pub fn decide_with_reason(&mut self, knowledge: &ChampionKnowledge) -> Result<Decision> {
        let goal = self.goal.ok_or(ControllerError::NotReset)?;
        let pose = self.refresh(knowledge)?;
        let decision = self.choose(pose, goal)?;

        debug!(
            position = %pose.position,
            facing = pose.facing.name(),
            weapon = %self.weapon,
            action = %decision.action,
            reason = ?decision.reason,
            queued = self.queue.len(),
            "decided"
        );
        self.last_decision = Some(decision);
        Ok(decision)
    }

    /// Fold the observation into the world map and re-read pose and weapon from the
    /// agent's own tile.
    fn refresh(&mut self, knowledge: &ChampionKnowledge) -> Result<Pose> {
        let position = knowledge.position;
        let tile = knowledge
            .visible_tiles
            .get(&position)
            .ok_or(ControllerError::MissingSelfTile { position })?;
        let character = tile
            .character
            .as_ref()
            .ok_or(ControllerError::MissingSelfCharacter { position })?;

        let pose = Pose {
            position,
            facing: character.facing,
        };
        self.pose = Some(pose);
        self.weapon = character.weapon;

        self.world.merge(&knowledge.visible_tiles);
        trace!(
            visible = knowledge.visible_tiles.len(),
            known = self.world.len(),
            "merged observation"
        );
        Ok(pose)
    }

    fn choose(&mut self, pose: Pose, goal: Coords) -> Result<Decision> {
        if can_engage(pose.position, pose.facing, self.weapon, &self.world) {
            return Ok(Decision::new(Action::Attack, DecisionReason::Attack));
        }
        if needs_reload(self.weapon) {
            return Ok(Decision::new(Action::Attack, DecisionReason::Reload));
        }

        if self.route == RouteState::Searching {
            if let Some(path) = find_path(&self.world, pose.position, goal) {
                // The menhir itself is reached, not entered.
                self.queue = compile(path.approach(), pose.position, pose.facing)?;
                self.route = RouteState::Committed;
                info!(
                    from = %pose.position,
                    goal = %goal,
                    cells = path.len(),
                    actions = self.queue.len(),
                    "route to menhir committed"
                );
            }
        }

        if let Some(action) = self.queue.pop() {
            return Ok(Decision::new(action, DecisionReason::FollowRoute));
        }

        if self.route == RouteState::Committed {
            return Ok(Decision::new(Action::TurnLeft, DecisionReason::HoldAtGoal));
        }

        let action = self
            .rng
            .choose(&EXPLORE_ACTIONS)
            .copied()
            .unwrap_or(Action::TurnLeft);
        Ok(Decision::new(action, DecisionReason::Explore))
    }
}

impl Controller for BotController {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn preferred_tabard(&self) -> Tabard {
        self.config.tabard
    }

    fn reset(&mut self, arena: &ArenaDescription) -> Result<()> {
        let goal = arena
            .menhir_position
            .ok_or_else(|| ControllerError::MissingGoal {
                arena: arena.name.clone(),
            })?;

        self.goal = Some(goal);
        self.weapon = Weapon::default();
        self.queue.clear();
        self.route = RouteState::Searching;
        self.last_decision = None;
        if self.config.clear_map_on_reset {
            self.world.clear();
        }

        info!(
            controller = %self.config.name,
            arena = %arena.name,
            menhir = %goal,
            known_tiles = self.world.len(),
            "reset"
        );
        Ok(())
    }

    fn decide(&mut self, knowledge: &ChampionKnowledge) -> Result<Action> {
        self.decide_with_reason(knowledge).map(|decision| decision.action)
    }
}

/// Controllers are interchangeable when their names match.
impl PartialEq for BotController {
    fn eq(&self, other: &Self) -> bool {
        self.config.name == other.config.name
    }
}

impl Eq for BotController {}

impl Hash for BotController {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.config.name.hash(state);
    }
}
