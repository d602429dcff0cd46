use std::{convert::TryFrom, error::Error, fmt, ops::Neg, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::Direction::{East, North, South, West};

/// The cardinal label which stands for the sign of a coordinate:
/// north/south for the latitude and east/west for the longitude.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// N
    North,
    /// S
    South,
    /// E
    East,
    /// W
    West,
}

impl Direction {
    /// The labels used for the non-negative values (north and east)
    pub fn is_positive(self) -> bool {
        matches!(self, North | East)
    }

    /// The north/south pair labels the latitude
    pub fn is_latitude(self) -> bool {
        matches!(self, North | South)
    }

    /// Name of the direction in Persian
    pub fn persian_name(self) -> &'static str {
        match self {
            North => "شمال",
            South => "جنوب",
            East => "شرق",
            West => "غرب",
        }
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }
}

#[derive(Debug)]
/// The label is not one of `N`, `S`, `E` or `W`
pub struct ParseDirectionError {
    failed: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse Direction from {:?}", self.failed)
    }
}

impl Error for ParseDirectionError {}

impl TryFrom<char> for Direction {
    type Error = ParseDirectionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(North),
            'S' => Ok(South),
            'E' => Ok(East),
            'W' => Ok(West),
            _ => Err(ParseDirectionError {
                failed: c.to_string(),
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ParseDirectionError {
                failed: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            North => 'N',
            South => 'S',
            East => 'E',
            West => 'W',
        };
        write!(f, "{symbol}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse() {
        for direction in [North, South, East, West] {
            let s = direction.to_string();
            assert_eq!(s.len(), 1);
            assert_eq!(s.parse::<Direction>().unwrap(), direction);
        }
    }

    #[test]
    fn opposite() {
        assert_eq!(-North, South);
        assert_eq!(-East, West);
        assert_eq!(-(-West), West);
    }

    #[test]
    fn signs() {
        assert!(North.is_positive());
        assert!(East.is_positive());
        assert!(!South.is_positive());
        assert!(!West.is_positive());

        assert!(South.is_latitude());
        assert!(!East.is_latitude());
    }

    #[test]
    #[should_panic(expected = "failed: \"n\"")]
    fn lowercase_is_not_direction() {
        let _d = Direction::try_from('n').unwrap();
    }

    #[test]
    #[should_panic(expected = "NE")]
    fn two_letters() {
        let _d: Direction = "NE".parse().unwrap();
    }

    #[test]
    fn error_message() {
        let err = "".parse::<Direction>().unwrap_err();
        assert_eq!(err.to_string(), "Cannot parse Direction from \"\"");
    }
}
