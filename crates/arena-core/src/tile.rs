use crate::{Facing, Weapon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TileKind {
    Land,
    Sea,
    Wall,
    Menhir,
}

impl TileKind {
    pub const fn is_passable(self) -> bool {
        !matches!(self, TileKind::Sea | TileKind::Wall)
    }
}

/// A character as seen on a tile at observation time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharacterDescription {
    pub controller_name: String,
    pub weapon: Weapon,
    pub facing: Facing,
}

impl CharacterDescription {
    pub fn new(controller_name: impl Into<String>, weapon: Weapon, facing: Facing) -> Self {
        Self {
            controller_name: controller_name.into(),
            weapon,
            facing,
        }
    }
}

/// Snapshot of one tile. May be stale once the agent looks away.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileDescription {
    pub kind: TileKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub character: Option<CharacterDescription>,
}

impl TileDescription {
    pub const fn empty(kind: TileKind) -> Self {
        Self {
            kind,
            character: None,
        }
    }

    pub fn with_character(kind: TileKind, character: CharacterDescription) -> Self {
        Self {
            kind,
            character: Some(character),
        }
    }

    pub const fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }

    pub const fn is_occupied(&self) -> bool {
        self.character.is_some()
    }
}
