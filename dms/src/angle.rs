//! The Degree-Minute-Second representation of a single coordinate axis.
//!
//! The value is stored as an unsigned magnitude with an optional direction label,
//! so the sign of the original decimal degrees lives only in the label.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{coord::Direction, utils::carry};

use self::consts::{
    HALF_MINUTES, HALF_SECONDS, MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE,
};

pub(crate) mod consts;
mod errors;
mod parse;
mod render;

pub use errors::{ParseDmsError, RangeError};
pub use render::{Persian, RightToLeft};

/// Degrees, arc minutes and arc seconds of an angle with an optional direction label.
///
/// The minutes and seconds are always less than 60:
/// any overflow produced by rounding is carried into the higher unit.
/// The degrees have no upper bound here, the range of the latitude
/// and the longitude is checked when constructing a [`Point`](crate::Point).
#[derive(Debug, PartialEq, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDms"))]
pub struct Dms {
    degree: u32,
    minutes: u8,
    seconds: f64,
    direction: Option<Direction>,
}

/// Unchecked parts of the deserialized [`Dms`]
#[cfg(feature = "serde")]
#[derive(Debug, Deserialize)]
struct RawDms {
    degree: u32,
    minutes: u8,
    seconds: f64,
    direction: Option<Direction>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDms> for Dms {
    type Error = RangeError;

    fn try_from(raw: RawDms) -> Result<Self, Self::Error> {
        Self::with_dms(raw.degree, raw.minutes, raw.seconds, raw.direction)
    }
}

impl Dms {
    /// Construct the angle from its parts.
    ///
    /// # Errors
    /// When the minutes are 60 or more, or the seconds are not in the `[0..60)` range.
    ///
    /// ```
    /// use dms_coord::{Direction, Dms};
    ///
    /// let dms = Dms::with_dms(40, 26, 46.3, Some(Direction::North)).unwrap();
    /// assert_eq!(dms.to_string(), "40°26'46.30\" N");
    /// ```
    pub fn with_dms(
        degree: u32,
        minutes: u8,
        seconds: f64,
        direction: Option<Direction>,
    ) -> Result<Self, RangeError> {
        if minutes >= MINUTES_IN_DEGREE {
            return Err(RangeError::ArcMinutes);
        }

        // NaN is not contained in any range
        if !(0.0..f64::from(SECONDS_IN_MINUTE)).contains(&seconds) {
            return Err(RangeError::ArcSeconds);
        }

        Ok(Self {
            degree,
            minutes,
            seconds,
            direction,
        })
    }

    /// Split the absolute value of decimal degrees into degrees, minutes and seconds.
    /// The result has no direction.
    ///
    /// The seconds are not rounded, so they keep the floating point residue.
    pub fn from_decimal(value: f64) -> Self {
        let value = value.abs();
        let degree = value.floor();
        let minutes = ((value - degree) * f64::from(MINUTES_IN_DEGREE)).floor();
        let seconds = (value - degree - minutes / f64::from(MINUTES_IN_DEGREE))
            * f64::from(SECONDS_IN_DEGREE);

        Self {
            degree: degree as u32,
            minutes: minutes as u8,
            seconds,
            direction: None,
        }
    }

    /// Same as [`from_decimal`](Self::from_decimal), but label the result
    /// with the `positive` direction for the non-negative values (zero included)
    /// and with the `negative` one otherwise.
    pub fn from_decimal_with(value: f64, positive: Direction, negative: Direction) -> Self {
        let direction = if value >= 0.0 { positive } else { negative };
        Self {
            direction: Some(direction),
            ..Self::from_decimal(value)
        }
    }

    /// The whole degrees
    pub fn degree(self) -> u32 {
        self.degree
    }

    /// The arc minutes in range `[0..60)`
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    /// The arc seconds with the fraction in range `[0..60)`
    pub fn seconds(self) -> f64 {
        self.seconds
    }

    /// The label of the angle if any
    pub fn direction(self) -> Option<Direction> {
        self.direction
    }

    /// Decimal degrees of the magnitude.
    /// The direction is ignored, so the result is never negative.
    pub fn to_decimal(self) -> f64 {
        f64::from(self.degree)
            + f64::from(self.minutes) / f64::from(MINUTES_IN_DEGREE)
            + self.seconds / f64::from(SECONDS_IN_DEGREE)
    }

    /// Decimal degrees which are negative for the southern and western directions
    pub fn to_signed_decimal(self) -> f64 {
        let magnitude = self.to_decimal();
        match self.direction {
            Some(direction) if !direction.is_positive() => -magnitude,
            _ => magnitude,
        }
    }

    /// Round the seconds to the nearest whole number
    /// (half away from zero) carrying the overflow up.
    #[must_use]
    pub fn round_to_minute(self) -> Self {
        self.with_whole_seconds(self.seconds.round())
    }

    /// Round the seconds up with a half second bias:
    /// the `seconds + 0.5` gets rounded to the nearest whole number,
    /// so 59.4 seconds become the next minute.
    #[must_use]
    pub fn round_to_second(self) -> Self {
        self.with_whole_seconds((self.seconds + 0.5).round())
    }

    /// Drop the minutes and seconds rounding the degrees.
    /// 29 minutes and 30 seconds is enough to round up.
    ///
    /// ```
    /// use dms_coord::Dms;
    ///
    /// let dms = Dms::with_dms(5, 29, 30.0, None).unwrap();
    /// assert_eq!(dms.round_to_degree().degree(), 6);
    /// ```
    #[must_use]
    pub fn round_to_degree(self) -> Self {
        let round_up = self.minutes >= HALF_MINUTES
            || (self.minutes == HALF_MINUTES - 1 && self.seconds >= HALF_SECONDS);

        let degree = if round_up {
            self.degree.saturating_add(1)
        } else {
            self.degree
        };

        Self {
            degree,
            minutes: 0,
            seconds: 0.0,
            ..self
        }
    }

    fn with_whole_seconds(self, seconds: f64) -> Self {
        let (seconds, minutes) = carry(
            seconds,
            u32::from(self.minutes),
            f64::from(SECONDS_IN_MINUTE),
        );
        let (minutes, degree) = carry(minutes, self.degree, u32::from(MINUTES_IN_DEGREE));

        Self {
            degree,
            // less than 60 after the carry
            minutes: minutes as u8,
            seconds,
            ..self
        }
    }
}

impl From<Dms> for f64 {
    fn from(dms: Dms) -> Self {
        dms.to_decimal()
    }
}

/// Convert the decimal degrees into the DMS labeled with one of the given directions
/// depending on the sign of the `value`. Zero is treated as positive.
///
/// ```
/// use dms_coord::{decimal_to_dms, Direction};
///
/// let dms = decimal_to_dms(-79.982_222, Direction::East, Direction::West);
/// assert_eq!(dms.degree(), 79);
/// assert_eq!(dms.minutes(), 58);
/// assert_eq!(dms.direction(), Some(Direction::West));
/// ```
pub fn decimal_to_dms(value: f64, positive: Direction, negative: Direction) -> Dms {
    Dms::from_decimal_with(value, positive, negative)
}

/// Convert the DMS back into decimal degrees dropping the direction
pub fn dms_to_decimal(dms: Dms) -> f64 {
    dms.to_decimal()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::coord::Direction::North;

    use super::*;

    #[test]
    fn json_round_trip() {
        let dms = Dms::with_dms(40, 26, 46.3, Some(North)).unwrap();
        let json = serde_json::to_string(&dms).unwrap();
        assert_eq!(
            json,
            r#"{"degree":40,"minutes":26,"seconds":46.3,"direction":"North"}"#
        );
        assert_eq!(serde_json::from_str::<Dms>(&json).unwrap(), dms);
    }

    #[test]
    fn no_direction() {
        let json = r#"{"degree":7,"minutes":5,"seconds":3.0,"direction":null}"#;
        let dms: Dms = serde_json::from_str(json).unwrap();
        assert_eq!(dms, Dms::with_dms(7, 5, 3.0, None).unwrap());
    }

    #[test]
    #[should_panic(expected = "arc minute value not in range")]
    fn too_many_minutes() {
        let json = r#"{"degree":1,"minutes":200,"seconds":15.0,"direction":null}"#;
        let _a: Dms = serde_json::from_str(json).unwrap();
    }

    #[test]
    #[should_panic(expected = "arc second value not in range")]
    fn too_many_seconds() {
        let json = r#"{"degree":1,"minutes":20,"seconds":75.0,"direction":null}"#;
        let _a: Dms = serde_json::from_str(json).unwrap();
    }

    #[test]
    #[should_panic(expected = "arc second value not in range")]
    fn negative_seconds() {
        let json = r#"{"degree":1,"minutes":20,"seconds":-1.5,"direction":"North"}"#;
        let _a: Dms = serde_json::from_str(json).unwrap();
    }
}
