//! Text fixtures for arenas: one glyph per cell, top row is `y = 0`.
//!
//! | glyph | tile                                   |
//! |-------|----------------------------------------|
//! | `.`   | land                                   |
//! | `#`   | wall                                   |
//! | `~`   | sea                                    |
//! | `M`   | menhir                                 |
//! | `@`   | land holding the observing agent       |
//! | `E`   | land holding another character         |
//!
//! Blank lines and surrounding whitespace are ignored.

use std::collections::HashMap;

use thiserror::Error;

use crate::{CharacterDescription, Coords, Facing, TileDescription, TileKind, Weapon, WorldMap};

pub const AGENT_NAME: &str = "agent";
pub const ENEMY_NAME: &str = "enemy";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsciiError {
    #[error("unknown glyph `{glyph}` at {at}")]
    UnknownGlyph { glyph: char, at: Coords },

    #[error("arena has no `@` agent marker")]
    MissingAgent,

    #[error("second `@` agent marker at {at}")]
    DuplicateAgent { at: Coords },

    #[error("second `M` menhir marker at {at}")]
    DuplicateMenhir { at: Coords },
}

#[derive(Debug, Clone)]
pub struct AsciiArena {
    pub tiles: HashMap<Coords, TileDescription>,
    pub agent: Coords,
    pub menhir: Option<Coords>,
    pub enemies: Vec<Coords>,
    pub width: i32,
    pub height: i32,
}

impl AsciiArena {
    /// Parse a fixture. The agent starts facing up with a knife.
    pub fn parse(text: &str) -> Result<Self, AsciiError> {
        let mut tiles = HashMap::new();
        let mut agent = None;
        let mut menhir = None;
        let mut enemies = Vec::new();
        let mut width = 0;
        let mut height = 0;

        let rows = text.lines().map(str::trim).filter(|line| !line.is_empty());
        for (y, row) in rows.enumerate() {
            let y = y as i32;
            height = y + 1;
            for (x, glyph) in row.chars().enumerate() {
                let x = x as i32;
                width = width.max(x + 1);
                let at = Coords::new(x, y);
                let tile = match glyph {
                    '.' => TileDescription::empty(TileKind::Land),
                    '#' => TileDescription::empty(TileKind::Wall),
                    '~' => TileDescription::empty(TileKind::Sea),
                    'M' => {
                        if menhir.replace(at).is_some() {
                            return Err(AsciiError::DuplicateMenhir { at });
                        }
                        TileDescription::empty(TileKind::Menhir)
                    }
                    '@' => {
                        if agent.replace(at).is_some() {
                            return Err(AsciiError::DuplicateAgent { at });
                        }
                        TileDescription::with_character(
                            TileKind::Land,
                            CharacterDescription::new(AGENT_NAME, Weapon::Knife, Facing::Up),
                        )
                    }
                    'E' => {
                        enemies.push(at);
                        TileDescription::with_character(
                            TileKind::Land,
                            CharacterDescription::new(ENEMY_NAME, Weapon::Knife, Facing::Down),
                        )
                    }
                    glyph => return Err(AsciiError::UnknownGlyph { glyph, at }),
                };
                tiles.insert(at, tile);
            }
        }

        let agent = agent.ok_or(AsciiError::MissingAgent)?;
        Ok(Self {
            tiles,
            agent,
            menhir,
            enemies,
            width,
            height,
        })
    }

    /// Re-equip and re-orient the agent's own character.
    pub fn with_agent(mut self, facing: Facing, weapon: Weapon) -> Self {
        if let Some(character) = self
            .tiles
            .get_mut(&self.agent)
            .and_then(|tile| tile.character.as_mut())
        {
            character.facing = facing;
            character.weapon = weapon;
        }
        self
    }

    pub fn world_map(&self) -> WorldMap {
        let mut map = WorldMap::new();
        map.merge(&self.tiles);
        map
    }

    /// Tiles within `radius` (Chebyshev) of `center`, as a partial observation.
    pub fn visible_around(&self, center: Coords, radius: i32) -> HashMap<Coords, TileDescription> {
        self.tiles
            .iter()
            .filter(|(at, _)| (at.x - center.x).abs() <= radius && (at.y - center.y).abs() <= radius)
            .map(|(at, tile)| (*at, tile.clone()))
            .collect()
    }
}
