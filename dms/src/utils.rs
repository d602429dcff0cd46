//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Move the whole units of the smaller part into the bigger part.
///
/// Only a single unit is carried: the smaller part is expected
/// to be less than two full units.
pub(crate) fn carry<T>(small: T, big: u32, unit: T) -> (T, u32)
where
    T: Copy + PartialOrd + std::ops::Sub<Output = T>,
{
    if small >= unit {
        (small - unit, big.saturating_add(1))
    } else {
        (small, big)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_float() {
        assert_eq!(carry(60.0, 4, 60.0), (0.0, 5));
        assert_eq!(carry(61.5, 4, 60.0), (1.5, 5));
        assert_eq!(carry(59.99, 4, 60.0), (59.99, 4));
    }

    #[test]
    fn carry_int() {
        assert_eq!(carry(60_u8, 0, 60), (0, 1));
        assert_eq!(carry(12_u8, 0, 60), (12, 0));
    }

    #[test]
    fn carry_saturates() {
        assert_eq!(carry(60_u8, u32::MAX, 60), (0, u32::MAX));
    }
}
