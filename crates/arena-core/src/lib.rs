//! Grid, facing, tile and weapon primitives for tile-arena agents.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod ascii;
pub mod coords;
pub mod rng;
pub mod threat;
pub mod tile;
pub mod weapon;
pub mod world;

pub use action::{Action, ActionQueue};
pub use ascii::{AsciiArena, AsciiError};
pub use coords::{Coords, Facing};
pub use rng::{DeterministicRng, SplitMix64};
pub use threat::{can_engage, needs_reload};
pub use tile::{CharacterDescription, TileDescription, TileKind};
pub use weapon::{EffectShape, Weapon};
pub use world::WorldMap;
