//! Entry entity representing a committed identifier → URL mapping.

use chrono::{DateTime, Utc};

use super::identifier::Identifier;

/// A shortened URL mapping.
///
/// Created exactly once, when a URL is first shortened. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: Identifier,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Creates a new entry stamped with the current time.
    pub fn new(id: Identifier, url: String) -> Self {
        Self {
            id,
            url,
            created_at: Utc::now(),
        }
    }
}

/// State of an identifier inside a mapping store.
///
/// An absent slot is `Unallocated`. A slot moves `Reserved -> Bound` on commit,
/// or is removed again when the reservation is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Reserved,
    Bound(Entry),
}

impl Slot {
    /// The committed entry, if any.
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Slot::Bound(entry) => Some(entry),
            Slot::Reserved => None,
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, Slot::Reserved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Identifier {
        Identifier::parse(s).unwrap()
    }

    #[test]
    fn test_entry_creation() {
        let before = Utc::now();
        let entry = Entry::new(id("abc123"), "https://example.com".to_string());

        assert_eq!(entry.id.as_str(), "abc123");
        assert_eq!(entry.url, "https://example.com");
        assert!(entry.created_at >= before);
    }

    #[test]
    fn test_reserved_slot_has_no_entry() {
        let slot = Slot::Reserved;
        assert!(slot.is_reserved());
        assert!(slot.entry().is_none());
    }

    #[test]
    fn test_bound_slot_exposes_entry() {
        let slot = Slot::Bound(Entry::new(id("xyz789"), "https://rust-lang.org".to_string()));

        assert!(!slot.is_reserved());
        assert_eq!(slot.entry().unwrap().url, "https://rust-lang.org");
    }
}
