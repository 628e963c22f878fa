//! Fixed-width unsigned bit vectors.
//!
//! A [`Bits`] value behaves like a hardware wire of `W` bits: every value is
//! truncated to the width on construction and all arithmetic wraps modulo
//! `2^W`. Overflow is defined behavior, never an error.

use super::error::BitsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, BitAnd, BitOr};

/// Unsigned value truncated to `W` bits (`1 <= W <= 8`).
///
/// # Example
///
/// ```rust
/// use doorstep::core::Bits2;
///
/// let closing = Bits2::new(0b11);
/// let one = Bits2::new(1);
///
/// // 3 + 1 wraps back to 0 in two bits
/// assert_eq!(closing.add(one), Bits2::new(0));
/// assert_eq!(Bits2::new(0b110), Bits2::new(0b10));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Bits<const W: u32>(u8);

/// The register and wire width used by the door controller.
pub type Bits2 = Bits<2>;

impl<const W: u32> Bits<W> {
    const MASK: u8 = {
        assert!(W >= 1 && W <= 8, "bit width must be between 1 and 8");
        ((1u16 << W) - 1) as u8
    };

    /// Largest representable value, `2^W - 1`.
    pub const MAX: Self = Self(Self::MASK);

    /// All bits clear.
    pub const ZERO: Self = Self(0);

    /// Create a value, truncating anything above the width.
    pub const fn new(value: u8) -> Self {
        Self(value & Self::MASK)
    }

    /// Create a value, rejecting anything that does not fit the width.
    pub fn try_new(value: u8) -> Result<Self, BitsError> {
        if value > Self::MASK {
            return Err(BitsError::OutOfRange { value, width: W });
        }
        Ok(Self(value))
    }

    /// `1` when `level` is set, `0` otherwise.
    pub const fn from_bool(level: bool) -> Self {
        Self(level as u8)
    }

    /// The raw value, always within `0..=MAX`.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// `(self + other) mod 2^W`.
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.0.wrapping_add(other.0))
    }

    /// `(self * factor) mod 2^W`.
    pub const fn scale(self, factor: u8) -> Self {
        Self::new(self.0.wrapping_mul(factor))
    }

    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn and(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Bitwise OR of three wires.
    pub const fn or3(a: Self, b: Self, c: Self) -> Self {
        a.or(b).or(c)
    }
}

impl<const W: u32> Add for Bits<W> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Bits::add(self, rhs)
    }
}

impl<const W: u32> BitOr for Bits<W> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<const W: u32> BitAnd for Bits<W> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<const W: u32> TryFrom<u8> for Bits<W> {
    type Error = BitsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl<const W: u32> From<Bits<W>> for u8 {
    fn from(bits: Bits<W>) -> Self {
        bits.0
    }
}

impl<const W: u32> fmt::Display for Bits<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.0, width = W as usize)
    }
}

impl<const W: u32> fmt::Debug for Bits<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits<{}>(0b{})", W, self)
    }
}
