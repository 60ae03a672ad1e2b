use std::collections::HashMap;

use crate::{Coords, TileDescription};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Last-known description of every tile the agent has ever seen.
///
/// Entries are overwritten by newer observations and never removed; a cell
/// missing from the map has simply not been observed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<(Coords, TileDescription)>",
        into = "Vec<(Coords, TileDescription)>"
    )
)]
pub struct WorldMap {
    tiles: HashMap<Coords, TileDescription>,
}

impl WorldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins; keys absent from `visible` are left as they were.
    pub fn merge<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = (&'a Coords, &'a TileDescription)>,
    {
        for (coords, tile) in visible {
            self.tiles.insert(*coords, tile.clone());
        }
    }

    pub fn insert(&mut self, coords: Coords, tile: TileDescription) {
        self.tiles.insert(coords, tile);
    }

    pub fn get(&self, coords: Coords) -> Option<&TileDescription> {
        self.tiles.get(&coords)
    }

    pub fn contains(&self, coords: Coords) -> bool {
        self.tiles.contains_key(&coords)
    }

    /// Observed and not blocking. Unobserved cells are never walkable.
    pub fn is_walkable(&self, coords: Coords) -> bool {
        self.get(coords).is_some_and(TileDescription::is_passable)
    }

    /// Observed with a character on it. Unobserved cells report no occupant.
    pub fn is_occupied(&self, coords: Coords) -> bool {
        self.get(coords).is_some_and(TileDescription::is_occupied)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Coords, &TileDescription)> {
        self.tiles.iter()
    }
}

impl FromIterator<(Coords, TileDescription)> for WorldMap {
    fn from_iter<T: IntoIterator<Item = (Coords, TileDescription)>>(iter: T) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(Coords, TileDescription)>> for WorldMap {
    fn from(entries: Vec<(Coords, TileDescription)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<WorldMap> for Vec<(Coords, TileDescription)> {
    fn from(map: WorldMap) -> Self {
        map.tiles.into_iter().collect()
    }
}
