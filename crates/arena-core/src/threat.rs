//! Line-of-effect checks for the equipped weapon.

use crate::{Coords, Facing, Weapon, WorldMap};

/// True when some cell covered by `weapon` from this pose holds a character.
///
/// Occupancy comes from the merged map, so a character recorded on an earlier
/// cycle still counts until its cell is observed again. Unobserved cells count
/// as empty and do not stop the scan. A weapon that needs reloading covers
/// nothing; see [`needs_reload`].
pub fn can_engage(position: Coords, facing: Facing, weapon: Weapon, world: &WorldMap) -> bool {
    let Some(shape) = weapon.effect() else {
        return false;
    };
    shape
        .cells(position, facing)
        .into_iter()
        .any(|cell| world.is_occupied(cell))
}

pub fn needs_reload(weapon: Weapon) -> bool {
    weapon.needs_reload()
}
