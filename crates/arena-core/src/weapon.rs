use crate::{Coords, Facing};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cells a weapon affects, relative to the wielder's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectShape {
    /// The cell ahead plus its left and right neighbours.
    FrontalArc,
    /// The left and right neighbours of the cell ahead, not the cell itself.
    Flanks,
    /// Every cell from one step ahead up to `reach` steps ahead.
    Line { reach: u32 },
}

impl EffectShape {
    /// Coordinates covered when standing at `position` facing `facing`, nearest first.
    pub fn cells(self, position: Coords, facing: Facing) -> Vec<Coords> {
        let ahead = position.step(facing);
        match self {
            EffectShape::FrontalArc => vec![
                ahead.step(facing.turn_left()),
                ahead,
                ahead.step(facing.turn_right()),
            ],
            EffectShape::Flanks => vec![
                ahead.step(facing.turn_left()),
                ahead.step(facing.turn_right()),
            ],
            EffectShape::Line { reach } => {
                let mut out = Vec::with_capacity(reach as usize);
                let mut cell = position;
                for _ in 0..reach {
                    cell = cell.step(facing);
                    out.push(cell);
                }
                out
            }
        }
    }
}

/// Equippable weapon catalog.
///
/// An unloaded bow has no effect shape; attacking with it reloads it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Weapon {
    #[default]
    Knife,
    Sword,
    Axe,
    Amulet,
    BowLoaded,
    BowUnloaded,
}

impl Weapon {
    pub const ALL: [Weapon; 6] = [
        Weapon::Knife,
        Weapon::Sword,
        Weapon::Axe,
        Weapon::Amulet,
        Weapon::BowLoaded,
        Weapon::BowUnloaded,
    ];

    pub const fn effect(self) -> Option<EffectShape> {
        match self {
            Weapon::Knife => Some(EffectShape::Line { reach: 1 }),
            Weapon::Sword => Some(EffectShape::Line { reach: 3 }),
            Weapon::BowLoaded => Some(EffectShape::Line { reach: 50 }),
            Weapon::Axe => Some(EffectShape::FrontalArc),
            Weapon::Amulet => Some(EffectShape::Flanks),
            Weapon::BowUnloaded => None,
        }
    }

    pub const fn needs_reload(self) -> bool {
        matches!(self, Weapon::BowUnloaded)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Weapon::Knife => "knife",
            Weapon::Sword => "sword",
            Weapon::Axe => "axe",
            Weapon::Amulet => "amulet",
            Weapon::BowLoaded => "bow_loaded",
            Weapon::BowUnloaded => "bow_unloaded",
        }
    }
}

impl core::str::FromStr for Weapon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weapon::ALL
            .into_iter()
            .find(|weapon| weapon.name() == s)
            .ok_or_else(|| format!("unknown weapon `{s}`"))
    }
}

impl core::fmt::Display for Weapon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontal_arc_facing_right() {
        let cells = EffectShape::FrontalArc.cells(Coords::new(5, 5), Facing::Right);
        assert_eq!(
            cells,
            vec![Coords::new(6, 4), Coords::new(6, 5), Coords::new(6, 6)]
        );
    }

    #[test]
    fn flanks_skip_the_centre() {
        let cells = EffectShape::Flanks.cells(Coords::new(0, 0), Facing::Up);
        assert_eq!(cells, vec![Coords::new(-1, -1), Coords::new(1, -1)]);
    }

    #[test]
    fn line_reach_matches_weapon() {
        let sword = Weapon::Sword.effect().map(|e| e.cells(Coords::new(0, 0), Facing::Down));
        assert_eq!(
            sword,
            Some(vec![Coords::new(0, 1), Coords::new(0, 2), Coords::new(0, 3)])
        );
        assert_eq!(Weapon::BowUnloaded.effect(), None);
    }

    #[test]
    fn names_parse_back() {
        for weapon in Weapon::ALL {
            assert_eq!(weapon.name().parse::<Weapon>(), Ok(weapon));
        }
    }
}
