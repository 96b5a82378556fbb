//! Short identifier value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbols an identifier may be built from: lowercase ASCII letters and digits.
pub const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default identifier length.
pub const DEFAULT_LENGTH: usize = 6;

/// Errors returned when parsing an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A short key naming a shortened URL.
///
/// Always non-empty and made only of [`ALPHABET`] symbols. The length is not
/// fixed by the type; the generator decides it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Parses and validates an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] if the input is empty or contains a symbol
    /// outside [`ALPHABET`].
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        if input.is_empty() {
            return Err(IdentifierError::Empty);
        }

        if let Some(c) = input.chars().find(|c| !is_alphabet_char(*c)) {
            return Err(IdentifierError::InvalidCharacter(c));
        }

        Ok(Self(input.to_string()))
    }

    /// Builds an identifier from alphabet indices. Indices wrap modulo 36.
    pub(crate) fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(
            indices
                .into_iter()
                .map(|i| ALPHABET[i % ALPHABET.len()] as char)
                .collect(),
        )
    }

    /// Builds the identifier at position `ordinal` in the lexicographic order
    /// of all identifiers of `length`. Ordinals wrap at the space size.
    pub(crate) fn from_ordinal(mut ordinal: u64, length: usize) -> Self {
        let base = ALPHABET.len() as u64;
        let mut indices = vec![0; length];
        for slot in indices.iter_mut().rev() {
            *slot = (ordinal % base) as usize;
            ordinal /= base;
        }
        Self::from_indices(indices)
    }

    /// Position of this identifier among identifiers of the same length.
    pub(crate) fn ordinal(&self) -> u64 {
        let base = ALPHABET.len() as u64;
        self.0.bytes().fold(0u64, |acc, b| {
            let index = ALPHABET.iter().position(|&a| a == b).unwrap_or(0) as u64;
            acc.wrapping_mul(base).wrapping_add(index)
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_alphabet_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Number of distinct identifiers of the given length, saturating at `u64::MAX`.
pub fn id_space_size(length: usize) -> u64 {
    let Ok(exp) = u32::try_from(length) else {
        return u64::MAX;
    };
    (ALPHABET.len() as u64).saturating_pow(exp)
}
