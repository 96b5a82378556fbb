//! Repository trait definitions for the domain layer.
//!
//! The traits define the storage contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for service tests.
//!
//! - [`MappingStore`] - identifier ↔ URL mappings and reservations

pub mod mapping_store;

pub use mapping_store::{MappingStore, StoreStats};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
