pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;
pub(crate) const SECONDS_IN_DEGREE: u16 = 3600;

/// Half a degree (in arc minutes) and half a minute (in arc seconds)
pub(crate) const HALF_MINUTES: u8 = MINUTES_IN_DEGREE >> 1;
pub(crate) const HALF_SECONDS: f64 = 30.0;

pub(crate) const MAX_LATITUDE: f64 = 90.0;
pub(crate) const MAX_LONGITUDE: f64 = 180.0;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

pub(crate) const ASCII_ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ASCII_ARC_SECOND_SIGN: char = '"';

pub(crate) const PERSIAN_DEGREE: &str = "درجه";
pub(crate) const PERSIAN_MINUTE: &str = "دقیقه";
pub(crate) const PERSIAN_SECOND: &str = "ثانیه";
