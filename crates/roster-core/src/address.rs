//! Ledger account addresses.
//!
//! An [`Address`] identifies a ledger account and is used both for caller
//! identities and for team identifiers. The only way to obtain one from
//! untrusted text is [`Address::parse`], so every address-typed value in the
//! system has passed the same format check before it reaches a provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the canonical textual form: `0x` prefix plus 40 hex digits.
pub const ADDRESS_LEN: usize = 42;

/// Reason an address string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum AddressFormatError {
    /// The input is not exactly [`ADDRESS_LEN`] characters long.
    #[error("expected {ADDRESS_LEN} characters, got {len}")]
    Length {
        /// Length of the rejected input
        len: usize,
    },
    /// The input does not start with `0x`.
    #[error("missing 0x prefix")]
    Prefix,
    /// A character outside the hexadecimal alphabet.
    #[error("non-hexadecimal character at position {at}")]
    Charset {
        /// Byte offset of the first offending character
        at: usize,
    },
}

/// A ledger account identifier in canonical textual form.
///
/// Hex digits are accepted in either case and stored as given; equality is
/// on the stored string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Validate `input` against the ledger address format.
    pub fn parse(input: &str) -> Result<Self, AddressFormatError> {
        if input.len() != ADDRESS_LEN {
            return Err(AddressFormatError::Length { len: input.len() });
        }
        if !input.starts_with("0x") {
            return Err(AddressFormatError::Prefix);
        }
        // the prefix is ASCII, so the byte index is a character boundary
        let digits = &input[2..];
        if let Err(err) = hex::decode(digits) {
            let at = match err {
                hex::FromHexError::InvalidHexCharacter { index, .. } => index + 2,
                // digits is 40 bytes, so odd-length decode failures cannot occur
                _ => 2,
            };
            return Err(AddressFormatError::Charset { at });
        }
        Ok(Self(input.to_string()))
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = AddressFormatError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_lowercase_hex() {
        let addr = Address::parse("0x00a329c0648769a73afac7f9381e08fb43dbea72").unwrap();
        assert_eq!(addr.as_str(), "0x00a329c0648769a73afac7f9381e08fb43dbea72");
    }

    #[test]
    fn accepts_mixed_case_hex() {
        assert!(Address::parse("0x2A9C558f293140bF3Bf0d833Ee7859DBc325542F").is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Address::parse("0x123"),
            Err(AddressFormatError::Length { len: 5 })
        );
        assert_eq!(Address::parse(""), Err(AddressFormatError::Length { len: 0 }));
        let long = format!("0x{}", "a".repeat(41));
        assert_eq!(
            Address::parse(&long),
            Err(AddressFormatError::Length { len: 43 })
        );
    }

    #[test]
    fn rejects_missing_prefix() {
        let bare = "00a329c0648769a73afac7f9381e08fb43dbea7212";
        assert_eq!(Address::parse(bare), Err(AddressFormatError::Prefix));
    }

    #[test]
    fn rejects_non_hex_characters() {
        let input = "0xzza329c0648769a73afac7f9381e08fb43dbea72";
        assert_eq!(
            Address::parse(input),
            Err(AddressFormatError::Charset { at: 2 })
        );
    }

    #[test]
    fn round_trips_through_from_str_and_display() {
        let addr: Address = "0x1111111111111111111111111111111111111111"
            .parse()
            .unwrap();
        assert_eq!(addr.to_string().parse::<Address>().unwrap(), addr);
    }

    proptest! {
        #[test]
        fn never_accepts_inputs_of_the_wrong_length(input in ".*") {
            prop_assume!(input.len() != ADDRESS_LEN);
            prop_assert!(Address::parse(&input).is_err());
        }

        #[test]
        fn accepts_any_40_hex_digits(digits in "[0-9a-fA-F]{40}") {
            let input = format!("0x{digits}");
            prop_assert!(Address::parse(&input).is_ok());
        }
    }
}
