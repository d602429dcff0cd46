use std::str::FromStr;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::coord::Direction;

use super::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, ASCII_ARC_MINUTE_SIGN, ASCII_ARC_SECOND_SIGN,
        DEGREE_SIGN,
    },
    Dms, ParseDmsError,
};

/// Construct regular expression to parse Degree-Minute-Second representation of a coordinate
fn parse_dms_re(is_ascii: bool) -> String {
    let (deg, min, sec) = if is_ascii {
        (
            format!("[{DEGREE_SIGN}*]"),
            ASCII_ARC_MINUTE_SIGN,
            ASCII_ARC_SECOND_SIGN,
        )
    } else {
        (DEGREE_SIGN.to_string(), ARC_MINUTE_SIGN, ARC_SECOND_SIGN)
    };

    format!(
        r"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<deg>\d{{1,10}})                             # mandatory degree VALUE - may overflow
        {deg}                                           # degree sign
        \x20?                                           # optional space
        (?P<min>\d{{1,2}})                              # minutes VALUE (0..=99) - requires more validation!
        {min}                                           # arcminute sign
        \x20?                                           # optional space
        (?P<sec>\d{{1,2}}(?:\.\d+)?)                    # seconds with the optional fraction
        {sec}                                           # arcsecond sign
        (?:\x20?                                        # direction optionally started with the space
            (?P<dir>[A-Za-z])                               # direction label (validated later)
        )?                                              # direction is optional
        $                                           # match the whole line till the end
        "
    )
}

lazy_static! {
    static ref RE_UNICODE: Regex = Regex::new(&parse_dms_re(false)).expect("Unicode regex is valid");
    static ref RE_ASCII: Regex = Regex::new(&parse_dms_re(true)).expect("ASCII regex is valid");
}

/// Read the left-to-right notation, either with the ASCII quotes
/// (`40°26'46.30" N`) or with the primes (`40°26′46.30″ N`).
impl FromStr for Dms {
    type Err = ParseDmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let capture = RE_UNICODE
            .captures(s)
            .or_else(|| RE_ASCII.captures(s))
            .ok_or_else(|| {
                trace!("{s:?} does not match the DMS notation");
                ParseDmsError::DmsNotation
            })?;

        let deg = capture.name("deg").ok_or(ParseDmsError::DmsNotation)?;
        let min = capture.name("min").ok_or(ParseDmsError::DmsNotation)?;
        let sec = capture.name("sec").ok_or(ParseDmsError::DmsNotation)?;

        let deg: u32 = deg.as_str().parse()?;
        let min: u8 = min.as_str().parse()?;
        let sec: f64 = sec.as_str().parse()?;
        let direction = capture
            .name("dir")
            .map(|m| m.as_str().parse::<Direction>())
            .transpose()?;

        let dms = Self::with_dms(deg, min, sec, direction)?;
        Ok(dms)
    }
}
