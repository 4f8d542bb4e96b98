//! Move directions.

use serde::{Deserialize, Serialize};

/// One of the four canonical move directions.
///
/// The engine only understands these four. Anything else is rejected at
/// the conversion boundary: [`Direction::from_u8`] returns `None` and
/// the caller treats that as a silent no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert a raw value to a direction (0=Up, 1=Down, 2=Left, 3=Right).
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Index of this direction within [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8() {
        assert_eq!(Direction::from_u8(0), Some(Direction::Up));
        assert_eq!(Direction::from_u8(1), Some(Direction::Down));
        assert_eq!(Direction::from_u8(2), Some(Direction::Left));
        assert_eq!(Direction::from_u8(3), Some(Direction::Right));
        assert_eq!(Direction::from_u8(4), None);
        assert_eq!(Direction::from_u8(255), None);
    }

    #[test]
    fn test_all_matches_index() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), i);
            assert_eq!(Direction::from_u8(i as u8), Some(*direction));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Direction::Up), "up");
        assert_eq!(format!("{}", Direction::Right), "right");
    }
}
