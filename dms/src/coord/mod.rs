use std::fmt;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{
    consts::{MAX_LATITUDE, MAX_LONGITUDE},
    decimal_to_dms, Dms, RangeError,
};

pub use self::direction::{Direction, ParseDirectionError};

use self::direction::Direction::{East, North, South, West};

mod direction;

#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoint"))]
/// The point on the surface, represented as the pair (latitude, longitude)
/// in the Degree-Minute-Second notation
pub struct Point {
    lat: Dms,
    lon: Dms,
}

#[cfg(feature = "serde")]
#[derive(Debug, Deserialize)]
struct RawPoint {
    lat: Dms,
    lon: Dms,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoint> for Point {
    type Error = RangeError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Self::from_parts(raw.lat, raw.lon)
    }
}

impl Point {
    /// Construct a point from the decimal degrees.
    ///
    /// # Errors
    /// The absolute value of the latitude is more than 90
    /// or the absolute value of the longitude is more than 180.
    /// Nothing is converted when any of the values is invalid.
    pub fn new(lat: f64, lon: f64) -> Result<Self, RangeError> {
        // NaN is not contained in any range
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            debug!("Latitude {lat} is out of range");
            return Err(RangeError::Latitude);
        }

        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
            debug!("Longitude {lon} is out of range");
            return Err(RangeError::Longitude);
        }

        Ok(Self {
            lat: decimal_to_dms(lat, North, South),
            lon: decimal_to_dms(lon, East, West),
        })
    }

    /// Construct a point from the ready DMS values.
    ///
    /// # Errors
    /// The latitude is more than 90 degrees or labeled with `E`/`W`,
    /// the longitude is more than 180 degrees or labeled with `N`/`S`.
    pub fn from_parts(lat: Dms, lon: Dms) -> Result<Self, RangeError> {
        let lat_label_ok = lat.direction().map_or(true, Direction::is_latitude);
        if !lat_label_ok || lat.to_decimal() > MAX_LATITUDE {
            debug!("Latitude {lat} is out of range");
            return Err(RangeError::Latitude);
        }

        let lon_label_ok = lon.direction().map_or(true, |d| !d.is_latitude());
        if !lon_label_ok || lon.to_decimal() > MAX_LONGITUDE {
            debug!("Longitude {lon} is out of range");
            return Err(RangeError::Longitude);
        }

        Ok(Self { lat, lon })
    }

    /// The latitude labeled with `N` or `S`
    pub fn lat(&self) -> Dms {
        self.lat
    }

    /// The longitude labeled with `E` or `W`
    pub fn lon(&self) -> Dms {
        self.lon
    }

    /// Split into the latitude and the longitude
    pub fn into_parts(self) -> (Dms, Dms) {
        (self.lat, self.lon)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#}, {:#}", self.lat, self.lon)
        } else {
            write!(f, "{}, {}", self.lat, self.lon)
        }
    }
}

/// Convert the latitude and the longitude given in decimal degrees
/// into the DMS pair.
///
/// # Errors
/// `RangeError` when `|lat| > 90` or `|lon| > 180`.
///
/// ```
/// use dms_coord::new_coordinate;
///
/// let (lat, lon) = new_coordinate(40.446_195, -79.982_222).unwrap();
/// assert_eq!(lat.to_string(), "40°26'46.30\" N");
/// assert_eq!(lon.to_string(), "79°58'56.00\" W");
///
/// assert!(new_coordinate(91.0, 0.0).is_err());
/// ```
pub fn new_coordinate(lat: f64, lon: f64) -> Result<(Dms, Dms), RangeError> {
    Point::new(lat, lon).map(Point::into_parts)
}


#[cfg(test)]
mod parts_tests {
    use super::*;

    #[test]
    fn from_ready_parts() {
        let lat = Dms::with_dms(59, 56, 15.0, Some(North)).unwrap();
        let lon = Dms::with_dms(30, 18, 31.0, None).unwrap();
        let point = Point::from_parts(lat, lon).unwrap();
        assert_eq!(point.into_parts(), (lat, lon));
    }

    #[test]
    fn parts_beyond_the_pole() {
        let lat = Dms::with_dms(90, 0, 0.5, Some(North)).unwrap();
        let lon = Dms::default();
        assert_eq!(Point::from_parts(lat, lon), Err(RangeError::Latitude));
    }

    #[test]
    fn parts_beyond_the_antimeridian() {
        let lat = Dms::default();
        let lon = Dms::with_dms(180, 1, 0.0, Some(West)).unwrap();
        assert_eq!(Point::from_parts(lat, lon), Err(RangeError::Longitude));
    }

    #[test]
    fn parts_with_swapped_labels() {
        let lat = Dms::with_dms(10, 0, 0.0, Some(East)).unwrap();
        let lon = Dms::with_dms(10, 0, 0.0, Some(East)).unwrap();
        assert_eq!(Point::from_parts(lat, lon), Err(RangeError::Latitude));

        let lat = Dms::with_dms(10, 0, 0.0, Some(South)).unwrap();
        let lon = Dms::with_dms(10, 0, 0.0, Some(North)).unwrap();
        assert_eq!(Point::from_parts(lat, lon), Err(RangeError::Longitude));
    }
}
