use std::collections::HashMap;

use arena_core::{Coords, TileDescription};
use serde::{Deserialize, Serialize};

/// What the host reveals once per match, before the first decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaDescription {
    pub name: String,
    pub menhir_position: Option<Coords>,
}

impl ArenaDescription {
    pub fn new(name: impl Into<String>, menhir_position: Coords) -> Self {
        Self {
            name: name.into(),
            menhir_position: Some(menhir_position),
        }
    }
}

/// One cycle's observation. `visible_tiles` must include the agent's own tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionKnowledge {
    pub position: Coords,
    pub visible_tiles: HashMap<Coords, TileDescription>,
}

impl ChampionKnowledge {
    pub fn new(position: Coords, visible_tiles: HashMap<Coords, TileDescription>) -> Self {
        Self {
            position,
            visible_tiles,
        }
    }
}
