//! Infrastructure layer for storage backends.
//!
//! Implements the contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-memory [`crate::domain::repositories::MappingStore`]

pub mod memory;
