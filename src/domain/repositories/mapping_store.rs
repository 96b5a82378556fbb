//! Repository trait for identifier → URL mappings.

use crate::domain::entities::Identifier;
use crate::error::AppError;

/// Slot counts reported by a [`MappingStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Identifiers bound to a URL.
    pub entries: usize,
    /// Identifiers held by an in-flight reservation.
    pub reserved: usize,
}

impl StoreStats {
    /// Slots that are not available for allocation.
    pub fn occupied(&self) -> usize {
        self.entries + self.reserved
    }
}

/// Bidirectional store of shortened URLs with reservation support.
///
/// Each identifier is in one of three states: absent, `Reserved`, or bound to
/// a URL. Every mutation must be atomic to concurrent callers, and the
/// identifier → URL and URL → identifier views must change together.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryMappingStore`] - process-lifetime store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait MappingStore: Send + Sync {
    /// Returns the URL bound to `id`.
    ///
    /// Reserved identifiers are reported as absent.
    fn get(&self, id: &Identifier) -> Result<Option<String>, AppError>;

    /// Commits `id → url`.
    ///
    /// If `url` is already bound to another identifier, the reservation on `id`
    /// is released and the existing identifier is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateId`] if `id` is already bound.
    fn put(&self, id: &Identifier, url: &str) -> Result<Identifier, AppError>;

    /// Reverse lookup: the identifier bound to `url`, if any.
    fn find_id_for_url(&self, url: &str) -> Result<Option<Identifier>, AppError>;

    /// Returns `true` if `id` is reserved or bound.
    fn contains(&self, id: &Identifier) -> Result<bool, AppError>;

    /// Atomically claims `id`. Returns `false` if it is already reserved or bound.
    fn reserve(&self, id: &Identifier) -> Result<bool, AppError>;

    /// Drops a reservation. Bound and absent identifiers are left untouched.
    fn release(&self, id: &Identifier) -> Result<(), AppError>;

    /// Current slot counts.
    fn stats(&self) -> Result<StoreStats, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupied_counts_reservations() {
        let stats = StoreStats {
            entries: 3,
            reserved: 2,
        };
        assert_eq!(stats.occupied(), 5);
        assert_eq!(StoreStats::default().occupied(), 0);
    }
}
