use core::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer grid coordinate: `x` is the column, `y` the row (rows grow downwards).
///
/// No bounds are attached; whether a coordinate is meaningful is decided by the
/// [`WorldMap`](crate::WorldMap) that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Coords) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// One step in `facing`.
    pub fn step(self, facing: Facing) -> Coords {
        self + facing.displacement()
    }

    /// Orthogonal neighbours in search order: up, down, left, right.
    pub fn neighbors(self) -> [Coords; 4] {
        [
            self.step(Facing::Up),
            self.step(Facing::Down),
            self.step(Facing::Left),
            self.step(Facing::Right),
        ]
    }
}

impl Add for Coords {
    type Output = Coords;

    fn add(self, rhs: Coords) -> Coords {
        Coords::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coords {
    type Output = Coords;

    fn sub(self, rhs: Coords) -> Coords {
        Coords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coords {
    fn from((x, y): (i32, i32)) -> Self {
        Coords::new(x, y)
    }
}

impl core::fmt::Display for Coords {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four directions an agent can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    pub const fn displacement(self) -> Coords {
        match self {
            Facing::Up => Coords::new(0, -1),
            Facing::Down => Coords::new(0, 1),
            Facing::Left => Coords::new(-1, 0),
            Facing::Right => Coords::new(1, 0),
        }
    }

    /// Inverse of [`Facing::displacement`]; `None` unless `delta` is a unit orthogonal step.
    pub fn from_displacement(delta: Coords) -> Option<Facing> {
        Facing::ALL
            .into_iter()
            .find(|facing| facing.displacement() == delta)
    }

    /// Counter-clockwise quarter turn.
    pub const fn turn_left(self) -> Facing {
        match self {
            Facing::Up => Facing::Left,
            Facing::Left => Facing::Down,
            Facing::Down => Facing::Right,
            Facing::Right => Facing::Up,
        }
    }

    /// Clockwise quarter turn.
    pub const fn turn_right(self) -> Facing {
        match self {
            Facing::Up => Facing::Right,
            Facing::Right => Facing::Down,
            Facing::Down => Facing::Left,
            Facing::Left => Facing::Up,
        }
    }

    pub const fn opposite(self) -> Facing {
        match self {
            Facing::Up => Facing::Down,
            Facing::Down => Facing::Up,
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

impl core::str::FromStr for Facing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facing::ALL
            .into_iter()
            .find(|facing| facing.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown facing `{s}` (expected up, down, left or right)"))
    }
}
