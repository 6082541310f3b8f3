//! Integer price representation with VND display formatting.
//!
//! The backend quotes prices as whole Vietnamese đồng, so a plain `i64`
//! newtype is sufficient - no fractional units, no decimal arithmetic.

use serde::{Deserialize, Serialize};

/// A price in whole Vietnamese đồng.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a new price from a whole-đồng amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// The pre-discount price implied by a discount percentage.
    ///
    /// The backend stores the discounted price; the strike-through "old
    /// price" is reconstructed as `round(price / (1 - percent/100))`.
    /// Returns `None` for a zero percentage (nothing to strike through)
    /// and for nonsensical percentages of 100 or more.
    #[must_use]
    pub fn undiscount(&self, percent: u8) -> Option<Self> {
        if percent == 0 || percent >= 100 {
            return None;
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let original = (self.0 as f64 / (1.0 - f64::from(percent) / 100.0)).round() as i64;
        Some(Self(original))
    }
}

impl std::fmt::Display for Price {
    /// Formats as grouped đồng, e.g. `1.250.000 ₫`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
        let lead = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - lead) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{grouped} \u{20ab}")
    }
}
