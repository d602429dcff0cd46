//! Rounding of the decimal degrees to the whole arc minutes or arc seconds.
//!
//! The functions expect the unsigned magnitude of a coordinate.

use crate::angle::consts::{MINUTES_IN_DEGREE, SECONDS_IN_MINUTE};

/// Round the decimal degrees to the nearest whole arc minute.
///
/// ```
/// use dms_coord::round_decimal_to_minute;
///
/// // 10°15′40″ -> 10°16′
/// let rounded = round_decimal_to_minute(10.0 + 15.0 / 60.0 + 40.0 / 3600.0);
/// assert!((rounded - (10.0 + 16.0 / 60.0)).abs() < 1e-9);
/// ```
pub fn round_decimal_to_minute(value: f64) -> f64 {
    let per_degree = f64::from(MINUTES_IN_DEGREE);
    let degree = value.floor();
    let minutes = ((value - degree) * per_degree).round();
    degree + minutes / per_degree
}

/// Round the decimal degrees to the nearest whole arc second.
pub fn round_decimal_to_second(value: f64) -> f64 {
    let per_degree = f64::from(MINUTES_IN_DEGREE);
    let per_minute = f64::from(SECONDS_IN_MINUTE);

    let degree = value.floor();
    let total_minutes = (value - degree) * per_degree;
    let minutes = total_minutes.floor();
    let seconds = ((total_minutes - minutes) * per_minute).round();
    degree + (minutes + seconds / per_minute) / per_degree
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn decimal(deg: f64, min: f64, sec: f64) -> f64 {
        deg + min / 60.0 + sec / 3600.0
    }

    #[test]
    fn minute_down() {
        let rounded = round_decimal_to_minute(decimal(10.0, 15.0, 29.0));
        assert!((rounded - decimal(10.0, 15.0, 0.0)).abs() < EPS);
    }

    #[test]
    fn minute_up_to_next_degree() {
        let rounded = round_decimal_to_minute(decimal(10.0, 59.0, 45.0));
        assert!((rounded - 11.0).abs() < EPS);
    }

    #[test]
    fn minute_whole_degree() {
        assert!((round_decimal_to_minute(42.0) - 42.0).abs() < EPS);
        assert!(round_decimal_to_minute(0.0).abs() < EPS);
    }

    #[test]
    fn minute_half_rounds_up() {
        // 10°7′30″ is exactly 10.125
        let rounded = round_decimal_to_minute(10.125);
        assert!((rounded - decimal(10.0, 8.0, 0.0)).abs() < EPS);
    }

    #[test]
    fn second_down() {
        let rounded = round_decimal_to_second(decimal(40.0, 26.0, 46.302));
        assert!((rounded - decimal(40.0, 26.0, 46.0)).abs() < EPS);
    }

    #[test]
    fn second_up() {
        let rounded = round_decimal_to_second(decimal(40.0, 26.0, 46.7));
        assert!((rounded - decimal(40.0, 26.0, 47.0)).abs() < EPS);
    }

    #[test]
    fn second_half_rounds_up() {
        // 10°1′52.5″ is exactly 10.03125
        let rounded = round_decimal_to_second(10.031_25);
        assert!((rounded - decimal(10.0, 1.0, 53.0)).abs() < EPS);
    }

    #[test]
    fn second_up_to_next_minute_and_degree() {
        let rounded = round_decimal_to_second(decimal(10.0, 15.0, 59.8));
        assert!((rounded - decimal(10.0, 16.0, 0.0)).abs() < EPS);

        let rounded = round_decimal_to_second(decimal(10.0, 59.0, 59.8));
        assert!((rounded - 11.0).abs() < EPS);
    }

    #[test]
    fn idempotent() {
        let once = round_decimal_to_second(decimal(77.0, 7.0, 7.7));
        assert!((round_decimal_to_second(once) - once).abs() < EPS);

        let once = round_decimal_to_minute(decimal(77.0, 7.0, 37.0));
        assert!((round_decimal_to_minute(once) - once).abs() < EPS);
    }
}
