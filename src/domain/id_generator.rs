//! Random identifier generation.
//!
//! Generators are pure: they draw candidates and never touch storage. The
//! uniqueness check and reservation happen in
//! [`crate::application::services::ShortenerService`] against the store.

use rand::Rng;

use crate::domain::entities::{ALPHABET, DEFAULT_LENGTH, Identifier};

/// Produces candidate identifiers of a fixed length.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Draws a fresh candidate identifier.
    fn generate(&self) -> Identifier;

    /// Length of every identifier this generator produces.
    fn length(&self) -> usize;
}

/// Draws each symbol uniformly from the 36-symbol alphabet using the
/// thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    /// Creates a generator for identifiers of `length` symbols.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn new(length: usize) -> Self {
        assert!(length > 0, "identifier length must be positive");
        Self { length }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Identifier {
        let mut rng = rand::rng();
        Identifier::from_indices((0..self.length).map(|_| rng.random_range(0..ALPHABET.len())))
    }

    fn length(&self) -> usize {
        self.length
    }
}
