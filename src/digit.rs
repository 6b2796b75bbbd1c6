//! A decimal digit that wraps around instead of leaving `0..=9`.

use core::fmt;

use crate::{Error, Result};

/// A value in `0..=9`.
///
/// [`increment`](Self::increment) and [`decrement`](Self::decrement) wrap, so the value can never
/// leave the range or go negative.
///
/// ```rust
/// use led_digit::digit::Digit;
///
/// let nine = Digit::ZERO.decrement();
/// assert_eq!(nine.get(), 9);
/// assert_eq!(nine.increment(), Digit::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Number of distinct digits.
    pub const COUNT: u8 = 10;

    /// The digit shown at startup.
    pub const ZERO: Self = Self(0);

    /// The largest digit.
    pub const NINE: Self = Self(9);

    /// Every digit, in ascending order.
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Returns the digit for `value`, or `None` when `value` is 10 or more.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index into per-digit tables.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// `(self + 1) mod 10`.
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 >= Self::NINE.0 {
            Self::ZERO
        } else {
            Self(self.0.wrapping_add(1))
        }
    }

    /// `(self + 9) mod 10`, i.e. one less with 0 wrapping to 9.
    #[must_use]
    pub const fn decrement(self) -> Self {
        match self.0.checked_sub(1) {
            Some(value) => Self(value),
            None => Self::NINE,
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value).ok_or(Error::DigitOutOfRange(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
