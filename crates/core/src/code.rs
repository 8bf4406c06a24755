//! Product code value object and its validation.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A 2-character product code: an uppercase letter followed by a digit `1`-`9`.
///
/// The digit doubles as the unit's relative volume, which is what outbound
/// packing orders by. Digit `0` is excluded by construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ProductCode([u8; 2]);

impl ProductCode {
    /// Validate a single raw token into a product code.
    ///
    /// The token must be exactly 2 characters, already uppercase-normalized:
    /// `'A'..='Z'` then `'1'..='9'`. Anything else is `InvalidProduct`.
    pub fn parse(token: &str) -> DomainResult<Self> {
        let bytes = token.as_bytes();
        if bytes.len() != 2 {
            return Err(DomainError::invalid_product(format!(
                "expected 2 characters, got {token:?}"
            )));
        }
        if !bytes[0].is_ascii_uppercase() {
            return Err(DomainError::invalid_product(format!(
                "first character must be A-Z in {token:?}"
            )));
        }
        if !(b'1'..=b'9').contains(&bytes[1]) {
            return Err(DomainError::invalid_product(format!(
                "second character must be 1-9 in {token:?}"
            )));
        }
        Ok(Self([bytes[0], bytes[1]]))
    }

    /// The letter naming the product line.
    pub fn letter(&self) -> char {
        self.0[0] as char
    }

    /// The numeric digit (1-9), used as the packing volume key.
    pub fn digit(&self) -> u32 {
        u32::from(self.0[1] - b'0')
    }
}

/// Validate a raw space-separated batch into product codes, all-or-nothing.
///
/// The string is split on single spaces, so doubled spaces produce empty
/// tokens that fail the length check. One malformed token rejects the whole
/// batch; no partial batches.
pub fn parse_batch(raw: &str) -> DomainResult<Vec<ProductCode>> {
    let mut batch = Vec::new();
    for token in raw.split(' ') {
        if token.len() != 2 {
            return Err(DomainError::invalid_batch(format!(
                "malformed token {token:?}"
            )));
        }
        let code = ProductCode::parse(token)
            .map_err(|_| DomainError::invalid_batch(format!("malformed token {token:?}")))?;
        batch.push(code);
    }
    Ok(batch)
}

impl ValueObject for ProductCode {}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

impl core::fmt::Debug for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ProductCode({self})")
    }
}

impl FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serialize as the 2-character string, not as a byte array.
impl Serialize for ProductCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProductCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
