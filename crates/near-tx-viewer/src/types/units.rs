//! NEAR token amounts.

use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// One milliNEAR in yoctoNEAR (10^-3 NEAR = 10^21 yocto).
const YOCTO_PER_MILLINEAR: u128 = 1_000_000_000_000_000_000_000;
/// Decimal places shown when displaying NEAR.
pub const DISPLAY_DECIMALS: u32 = 6;
/// yoctoNEAR per displayed unit of the last decimal place (10^18).
const YOCTO_PER_DISPLAY_UNIT: u128 = 10u128.pow(24 - DISPLAY_DECIMALS);

/// A NEAR token amount with yoctoNEAR precision (10^-24 NEAR).
///
/// Displays as NEAR with exactly six decimals, rounded half-up:
///
/// ```
/// use near_tx_viewer::NearToken;
///
/// assert_eq!(NearToken::millinear(1).to_string(), "0.001000");
/// assert_eq!(NearToken::yocto(499_999_999_999_999_999).to_string(), "0.000000");
/// assert_eq!(NearToken::yocto(500_000_000_000_000_000).to_string(), "0.000001");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NearToken(u128);

impl NearToken {
    /// Zero NEAR.
    pub const ZERO: Self = Self(0);

    /// Create from milliNEAR.
    pub const fn millinear(millinear: u128) -> Self {
        Self(millinear * YOCTO_PER_MILLINEAR)
    }

    /// Create from yoctoNEAR.
    pub const fn yocto(yocto: u128) -> Self {
        Self(yocto)
    }

    /// Parse a yoctoNEAR amount as the indexer reports fees.
    ///
    /// Surrounding whitespace is ignored and an empty string is zero. Plain
    /// base-10 digits are read exactly; anything else numeric (decimal point,
    /// exponent) is read as a float and rounded to the nearest yoctoNEAR.
    /// Negative, non-finite and out-of-range values are rejected.
    pub fn from_yocto_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Some(Self::ZERO);
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(yocto) = s.parse() {
                return Some(Self(yocto));
            }
        }
        let yocto: f64 = s.parse().ok()?;
        let yocto = yocto.round();
        (yocto.is_finite() && yocto >= 0.0 && yocto < u128::MAX as f64)
            .then(|| Self(yocto as u128))
    }
}

impl Display for NearToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = 10u128.pow(DISPLAY_DECIMALS);
        // Rounding before the split keeps carries (0.9999995 -> 1.000000) right.
        let units = self.0 / YOCTO_PER_DISPLAY_UNIT
            + u128::from(self.0 % YOCTO_PER_DISPLAY_UNIT >= YOCTO_PER_DISPLAY_UNIT / 2);
        write!(
            f,
            "{}.{:0width$}",
            units / scale,
            units % scale,
            width = DISPLAY_DECIMALS as usize
        )
    }
}

// Serde: serialize as string (yoctoNEAR) for JSON compatibility with NearBlocks
impl Serialize for NearToken {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0.to_string())
    }
}
