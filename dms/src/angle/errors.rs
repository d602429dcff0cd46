use std::{
    error::Error,
    fmt,
    num::{ParseFloatError, ParseIntError},
};

use crate::{coord::ParseDirectionError, enum_trivial_from_impl};

/// Some part of a coordinate is out of its valid range
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// |lat| > 90
    Latitude,
    /// |lon| > 180
    Longitude,
    /// min >= 60
    ArcMinutes,
    /// sec >= 60 or negative
    ArcSeconds,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Latitude | Self::Longitude => "invalid latitude or longitude value",
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60)",
            Self::ArcSeconds => "Angle's arc second value not in range [0..60)",
        };

        write!(f, "{msg}")
    }
}

impl Error for RangeError {}

#[derive(Debug)]
/// Failure to read the Degree-Minute-Second notation
pub enum ParseDmsError {
    /// Minutes or seconds are too big
    Range(RangeError),
    /// Too many digits in degrees or minutes
    Int(ParseIntError),
    /// Bad seconds
    Float(ParseFloatError),
    /// Unknown direction label
    Direction(ParseDirectionError),
    /// The string does not look like a DMS
    DmsNotation,
}

enum_trivial_from_impl!(RangeError => ParseDmsError:Range);
enum_trivial_from_impl!(ParseIntError => ParseDmsError:Int);
enum_trivial_from_impl!(ParseFloatError => ParseDmsError:Float);
enum_trivial_from_impl!(ParseDirectionError => ParseDmsError:Direction);

impl fmt::Display for ParseDmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Direction(inner) => write!(f, "{inner}"),
            Self::DmsNotation => write!(f, "not a Degree-Minute-Second notation"),
        }
    }
}

impl Error for ParseDmsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Int(inner) => Some(inner),
            Self::Float(inner) => Some(inner),
            Self::Direction(inner) => Some(inner),
            Self::DmsNotation => None,
        }
    }
}
