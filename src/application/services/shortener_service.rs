//! Link shortening and resolution service.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{Identifier, id_space_size};
use crate::domain::id_generator::IdGenerator;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::url_validator::validate_url;

/// Default number of candidate identifiers tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 32;

/// Outcome of a successful [`ShortenerService::shorten`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenResult {
    pub identifier: Identifier,
    pub short_url: String,
}

/// Outcome of a successful [`ShortenerService::resolve`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveResult {
    pub url: String,
}

/// Store and identifier-space usage, for health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceStats {
    pub entries: usize,
    pub reserved: usize,
    pub id_length: usize,
    pub id_space: u64,
}

/// A claimed identifier that is released again unless committed.
struct Reservation<'a, S: MappingStore + ?Sized> {
    store: &'a S,
    id: Identifier,
    committed: bool,
}

impl<'a, S: MappingStore + ?Sized> Reservation<'a, S> {
    fn new(store: &'a S, id: Identifier) -> Self {
        Self {
            store,
            id,
            committed: false,
        }
    }

    fn id(&self) -> &Identifier {
        &self.id
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl<S: MappingStore + ?Sized> Drop for Reservation<'_, S> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(e) = self.store.release(&self.id) {
            warn!(id = %self.id, "Failed to release reservation: {}", e);
        }
    }
}

/// Service for shortening URLs and resolving identifiers.
///
/// Shortening is idempotent: a URL that is already stored gets its existing
/// identifier back. New identifiers are reserved in the store before the
/// mapping is committed, so concurrent callers never share one.
pub struct ShortenerService<S: MappingStore, G: IdGenerator> {
    store: Arc<S>,
    generator: G,
    base_url: String,
    max_attempts: usize,
    excluded: HashSet<Identifier>,
}

impl<S: MappingStore, G: IdGenerator> ShortenerService<S, G> {
    /// Creates a new shortener service.
    ///
    /// `base_url` prefixes every short URL; a trailing `/` is ignored.
    /// `max_attempts` bounds identifier collisions per request (minimum 1).
    pub fn new(
        store: Arc<S>,
        generator: G,
        base_url: impl Into<String>,
        max_attempts: usize,
    ) -> Self {
        Self {
            store,
            generator,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts: max_attempts.max(1),
            excluded: HashSet::new(),
        }
    }

    /// Identifiers that are never handed out, e.g. path segments owned by
    /// other routes.
    pub fn with_excluded_ids(mut self, ids: impl IntoIterator<Item = Identifier>) -> Self {
        self.excluded.extend(ids);
        self
    }

    pub fn is_excluded(&self, id: &Identifier) -> bool {
        self.excluded.contains(id)
    }

    /// Shortens `raw_url`, reusing the existing identifier when the URL is known.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the input is not an absolute URL with a host
    /// - [`AppError::ExhaustedIdSpace`] if no free identifier could be reserved
    /// - [`AppError::DuplicateId`] if the store reports a double bind
    pub fn shorten(&self, raw_url: &str) -> Result<ShortenResult, AppError> {
        let url =
            validate_url(raw_url).map_err(|e| AppError::invalid_url(raw_url, e.to_string()))?;

        if let Some(existing) = self.store.find_id_for_url(url)? {
            debug!(id = %existing, "URL already shortened");
            return Ok(self.result_for(existing));
        }

        let reservation = self.allocate()?;

        let bound = match self.store.put(reservation.id(), url) {
            Ok(bound) => bound,
            Err(e @ AppError::DuplicateId { .. }) => {
                error!(id = %reservation.id(), "Reserved identifier was already bound: {}", e);
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        if &bound == reservation.id() {
            metrics::counter!("shortener_links_created_total").increment(1);
            info!(id = %bound, url = %url, "Short link created");
        } else {
            debug!(id = %bound, "Concurrent request bound the URL first");
        }
        reservation.commit();

        Ok(self.result_for(bound))
    }

    /// Resolves an identifier to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed, unknown, or merely
    /// reserved identifiers.
    pub fn resolve(&self, id: &str) -> Result<ResolveResult, AppError> {
        let Ok(identifier) = Identifier::parse(id) else {
            return Err(AppError::not_found(id));
        };

        let url = self
            .store
            .get(&identifier)?
            .ok_or_else(|| AppError::not_found(id))?;

        metrics::counter!("shortener_links_resolved_total").increment(1);
        Ok(ResolveResult { url })
    }

    /// Builds the public short URL for an identifier.
    pub fn short_url(&self, id: &Identifier) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current store usage and identifier-space size.
    pub fn stats(&self) -> Result<ServiceStats, AppError> {
        let stats = self.store.stats()?;
        let id_length = self.generator.length();

        Ok(ServiceStats {
            entries: stats.entries,
            reserved: stats.reserved,
            id_length,
            id_space: id_space_size(id_length),
        })
    }

    fn result_for(&self, identifier: Identifier) -> ShortenResult {
        ShortenResult {
            short_url: self.short_url(&identifier),
            identifier,
        }
    }

    /// Draws candidates until one can be reserved.
    ///
    /// Fails fast when every identifier of the configured length is taken.
    /// After `max_attempts` random collisions the space is scanned in order
    /// from the last drawn candidate, so the error is only returned when no
    /// identifier is free.
    fn allocate(&self) -> Result<Reservation<'_, S>, AppError> {
        let length = self.generator.length();
        let space = id_space_size(length);
        let unusable = self.excluded.iter().filter(|id| id.len() == length).count() as u64;
        let occupied = self.store.stats()?.occupied() as u64;

        if occupied.saturating_add(unusable) >= space {
            warn!(length, occupied, "Identifier space exhausted");
            return Err(AppError::ExhaustedIdSpace {
                length,
                attempts: 0,
            });
        }

        let mut offset = 0;
        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();
            offset = candidate.ordinal();

            if let Some(reservation) = self.try_reserve(candidate.clone())? {
                return Ok(reservation);
            }

            debug!(id = %candidate, attempt, "Identifier collision, retrying");
        }

        debug!(length, "Random draws exhausted, scanning identifier space");
        for step in 1..space {
            let ordinal = (u128::from(offset) + u128::from(step)) % u128::from(space);
            let candidate = Identifier::from_ordinal(ordinal as u64, length);

            if let Some(reservation) = self.try_reserve(candidate)? {
                return Ok(reservation);
            }
        }

        warn!(
            length,
            attempts = self.max_attempts,
            "Failed to reserve an identifier"
        );
        Err(AppError::ExhaustedIdSpace {
            length,
            attempts: self.max_attempts,
        })
    }

    fn try_reserve(&self, candidate: Identifier) -> Result<Option<Reservation<'_, S>>, AppError> {
        if self.is_excluded(&candidate) || !self.store.reserve(&candidate)? {
            return Ok(None);
        }
        Ok(Some(Reservation::new(self.store.as_ref(), candidate)))
    }
}
