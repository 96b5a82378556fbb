//! Domain layer: entities, identifier generation, and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Identifier, entry, and slot types
//! - [`id_generator`] - Candidate identifier generation
//! - [`repositories`] - The [`repositories::MappingStore`] contract
//!
//! The domain layer has no dependency on HTTP or concrete storage. Allocation
//! logic lives in [`crate::application::services`].

pub mod entities;
pub mod id_generator;
pub mod repositories;
