//! Text representations of the DMS

use std::fmt;

use super::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, ASCII_ARC_MINUTE_SIGN, ASCII_ARC_SECOND_SIGN,
        DEGREE_SIGN, PERSIAN_DEGREE, PERSIAN_MINUTE, PERSIAN_SECOND,
    },
    Dms,
};

/// Left-to-right notation: `40°26'46.30" N`.
///
/// The alternate form (`{:#}`) uses the prime signs: `40°26′46.30″ N`.
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min_sign, sec_sign) = if f.alternate() {
            (ARC_MINUTE_SIGN, ARC_SECOND_SIGN)
        } else {
            (ASCII_ARC_MINUTE_SIGN, ASCII_ARC_SECOND_SIGN)
        };

        write!(
            f,
            "{}{}{}{}{:.2}{}",
            self.degree, DEGREE_SIGN, self.minutes, min_sign, self.seconds, sec_sign
        )?;

        if let Some(direction) = self.direction {
            write!(f, " {direction}")
        } else {
            Ok(())
        }
    }
}

/// The DMS with the tokens in the reversed order
/// to be embedded into the right-to-left text: `N "46.30 '26 °40`.
/// The numbers themselves are not reversed.
#[derive(Debug, Copy, Clone)]
pub struct RightToLeft(Dms);

impl fmt::Display for RightToLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dms = self.0;
        if let Some(direction) = dms.direction {
            write!(f, "{direction} ")?;
        }

        write!(
            f,
            "{}{:.2} {}{} {}{}",
            ASCII_ARC_SECOND_SIGN,
            dms.seconds,
            ASCII_ARC_MINUTE_SIGN,
            dms.minutes,
            DEGREE_SIGN,
            dms.degree
        )
    }
}

/// The DMS spelled with the Persian unit names,
/// the direction label is appended right after the seconds:
/// `40 درجه 26 دقیقه 46.30 ثانیهN`.
///
/// The alternate form (`{:#}`) spells the direction in Persian as well:
/// `40 درجه 26 دقیقه 46.30 ثانیه شمال`.
#[derive(Debug, Copy, Clone)]
pub struct Persian(Dms);

impl fmt::Display for Persian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dms = self.0;
        write!(
            f,
            "{} {} {} {} {:.2} {}",
            dms.degree, PERSIAN_DEGREE, dms.minutes, PERSIAN_MINUTE, dms.seconds, PERSIAN_SECOND
        )?;

        match dms.direction {
            Some(direction) if f.alternate() => write!(f, " {}", direction.persian_name()),
            Some(direction) => write!(f, "{direction}"),
            None => Ok(()),
        }
    }
}

impl Dms {
    /// Displayable right-to-left representation
    pub fn rtl(self) -> RightToLeft {
        RightToLeft(self)
    }

    /// Displayable representation with the Persian unit names
    pub fn persian(self) -> Persian {
        Persian(self)
    }

    /// Render the right-to-left representation
    pub fn to_string_rtl(self) -> String {
        self.rtl().to_string()
    }

    /// Render the representation with the Persian unit names
    pub fn to_string_persian(self) -> String {
        self.persian().to_string()
    }
}
