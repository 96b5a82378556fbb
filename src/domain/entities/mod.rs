//! Core domain entities.
//!
//! - [`Identifier`] - Validated short key over the `[a-z0-9]` alphabet
//! - [`Entry`] - A committed identifier → URL mapping
//! - [`Slot`] - Per-identifier state inside a store (`Reserved` or `Bound`)

pub mod entry;
pub mod identifier;

pub use entry::{Entry, Slot};
pub use identifier::{ALPHABET, DEFAULT_LENGTH, Identifier, IdentifierError, id_space_size};
