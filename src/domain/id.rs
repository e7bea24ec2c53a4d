//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Holder address - newtype for type safety.
///
/// Addresses are opaque keys; nothing checks that they correspond to a
/// real on-chain identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create a new `Address` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Token identifier - newtype for type safety.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    /// Create a new `TokenId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the token ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Canonical key for an unordered token pair.
///
/// The two tokens are stored sorted, so `PairKey::new(a, b)` and
/// `PairKey::new(b, a)` are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    low: TokenId,
    high: TokenId,
}

impl PairKey {
    /// Separator used when rendering the key as a single string.
    pub const SEPARATOR: char = '-';

    /// Build the canonical key for `{a, b}`.
    pub fn new(a: impl Into<TokenId>, b: impl Into<TokenId>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The lexically smaller token.
    #[must_use]
    pub fn low(&self) -> &TokenId {
        &self.low
    }

    /// The lexically larger token.
    #[must_use]
    pub fn high(&self) -> &TokenId {
        &self.high
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.low, Self::SEPARATOR, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_display_and_as_str() {
        let addr = Address::new("0xabc");
        assert_eq!(addr.as_str(), "0xabc");
        assert_eq!(format!("{addr}"), "0xabc");
    }

    #[test]
    fn address_serializes_as_plain_string() {
        let json = serde_json::to_string(&Address::from("alice")).unwrap();
        assert_eq!(json, "\"alice\"");
    }

    #[test]
    fn pair_key_is_order_independent() {
        assert_eq!(PairKey::new("ETH", "USDC"), PairKey::new("USDC", "ETH"));
    }

    #[test]
    fn pair_key_sorts_tokens() {
        let key = PairKey::new("USDC", "ETH");
        assert_eq!(key.low().as_str(), "ETH");
        assert_eq!(key.high().as_str(), "USDC");
        assert_eq!(key.to_string(), "ETH-USDC");
    }

    #[test]
    fn pair_keys_with_separator_in_token_stay_distinct() {
        assert_ne!(PairKey::new("A-B", "C"), PairKey::new("A", "B-C"));
    }
}
