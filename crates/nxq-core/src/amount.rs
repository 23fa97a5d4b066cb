// crates/nxq-core/src/amount.rs
//
// Token amounts and coins.
//
// The smallest unit of NXQ is the "anxq" (atto-NXQ). 1 NXQ = 10^18 anxq.
// All internal accounting uses integer anxq. Amounts are serialized as
// decimal strings so they survive JSON and TOML, neither of which carries
// integers above 2^63 reliably.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of anxq in one NXQ. 1 NXQ = 10^18 anxq.
pub const ANXQ_PER_NXQ: u128 = 1_000_000_000_000_000_000;

/// Amount of a token in its smallest denomination.
pub type Amount = u128;

/// A denominated amount, the unit the bank collaborator mints and moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination, e.g. `anxq`.
    pub denom: String,
    /// Amount in the smallest unit of `denom`.
    #[serde(with = "as_string")]
    pub amount: Amount,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: Amount) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Render an anxq amount as whole NXQ, trimming trailing fractional zeros.
///
/// # Example
/// ```
/// use nxq_core::amount::{format_nxq, ANXQ_PER_NXQ};
/// assert_eq!(format_nxq(7200 * ANXQ_PER_NXQ), "7200 NXQ");
/// assert_eq!(format_nxq(ANXQ_PER_NXQ / 2), "0.5 NXQ");
/// ```
pub fn format_nxq(amount: Amount) -> String {
    let whole = amount / ANXQ_PER_NXQ;
    let frac = amount % ANXQ_PER_NXQ;
    if frac == 0 {
        format!("{} NXQ", whole)
    } else {
        let frac_str = format!("{:018}", frac);
        let trimmed = frac_str.trim_end_matches('0');
        format!("{}.{} NXQ", whole, trimmed)
    }
}

/// Serde adapter that writes an [`Amount`] as a decimal string and accepts
/// either a string or a plain integer on input.
pub mod as_string {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    use super::Amount;

    pub fn serialize<S: Serializer>(value: &Amount, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Amount, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = Amount;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative integer or a decimal string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
            v.trim()
                .parse::<Amount>()
                .map_err(|e| E::custom(format!("invalid amount {:?}: {}", v, e)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
            Ok(v as Amount)
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<Amount, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
            Amount::try_from(v).map_err(|_| E::custom(format!("amount cannot be negative: {}", v)))
        }
    }
}
