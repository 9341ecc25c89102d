//! Read-through cache in front of a [`TutorGateway`].

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use super::TutorGateway;
use crate::browse::BrowseFilter;
use crate::marketplace::error::ClientError;
use crate::marketplace::models::{Paginated, TutorProfile, TutorProfileDraft};
use crate::marketplace::token::AccessToken;

struct CacheEntry<T> {
    stored_at: Instant,
    value: T,
}

type CacheMap<T> = Mutex<HashMap<String, CacheEntry<T>>>;

/// Tutor gateway that remembers listings and public profiles for a while.
///
/// Listings are keyed by the serialized filter, so paging back and forth
/// reuses earlier responses. The caller's own profile is never cached. Any
/// successful write clears everything, and a zero TTL disables caching.
pub struct CachingTutorGateway<G> {
    inner: G,
    ttl: Duration,
    listings: CacheMap<Paginated<TutorProfile>>,
    profiles: CacheMap<TutorProfile>,
}

impl<G: TutorGateway> CachingTutorGateway<G> {
    /// Wraps `inner`, keeping responses for `ttl`.
    #[must_use]
    pub fn new(inner: G, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            listings: Mutex::new(HashMap::new()),
            profiles: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the wrapped gateway.
    #[must_use]
    pub const fn inner(&self) -> &G {
        &self.inner
    }

    /// Drops every cached response.
    pub fn invalidate(&self) {
        self.listings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.profiles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn lookup<T: Clone>(&self, cache: &CacheMap<T>, key: &str) -> Option<T> {
        if self.ttl.is_zero() {
            return None;
        }
        let entries = cache.lock().unwrap_or_else(PoisonError::into_inner);
        let hit = entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone());
        if hit.is_some() {
            debug!(key, "serving tutor data from cache");
        } else {
            debug!(key, "tutor cache miss");
        }
        hit
    }

    fn store<T>(&self, cache: &CacheMap<T>, key: String, value: T) {
        if self.ttl.is_zero() {
            return;
        }
        let mut entries = cache.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    fn invalidate_on_success<T>(&self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if result.is_ok() {
            self.invalidate();
        }
        result
    }
}

#[async_trait]
impl<G: TutorGateway> TutorGateway for CachingTutorGateway<G> {
    async fn list_tutors(
        &self,
        filter: &BrowseFilter,
    ) -> Result<Paginated<TutorProfile>, ClientError> {
        let key = filter.serialize();
        if let Some(cached) = self.lookup(&self.listings, &key) {
            return Ok(cached);
        }
        let page = self.inner.list_tutors(filter).await?;
        self.store(&self.listings, key, page.clone());
        Ok(page)
    }

    async fn tutor_profile(&self, tutor_id: &str) -> Result<TutorProfile, ClientError> {
        if let Some(cached) = self.lookup(&self.profiles, tutor_id) {
            return Ok(cached);
        }
        let profile = self.inner.tutor_profile(tutor_id).await?;
        self.store(&self.profiles, tutor_id.to_owned(), profile.clone());
        Ok(profile)
    }

    async fn own_profile(&self, token: &AccessToken) -> Result<Option<TutorProfile>, ClientError> {
        self.inner.own_profile(token).await
    }

    async fn create_profile(
        &self,
        token: &AccessToken,
        draft: &TutorProfileDraft,
    ) -> Result<TutorProfile, ClientError> {
        let result = self.inner.create_profile(token, draft).await;
        self.invalidate_on_success(result)
    }

    async fn update_profile(
        &self,
        token: &AccessToken,
        tutor_id: &str,
        draft: &TutorProfileDraft,
    ) -> Result<TutorProfile, ClientError> {
        let result = self.inner.update_profile(token, tutor_id, draft).await;
        self.invalidate_on_success(result)
    }

    async fn delete_profile(&self, token: &AccessToken, tutor_id: &str) -> Result<(), ClientError> {
        let result = self.inner.delete_profile(token, tutor_id).await;
        self.invalidate_on_success(result)
    }
}
