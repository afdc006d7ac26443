//! In-memory implementation of `CollectionService`.
//!
//! `InMemoryCollectionService` keeps collections in a map behind a `Mutex`
//! and records every call it receives. Failures can be injected per
//! operation, which makes it the reference backend for exercising the
//! updater without a network.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use tracing::debug;

use colperm_contracts::{
    collection::{CollectionDescriptor, CollectionUpdate},
    config::CollectionTarget,
    error::RemoteFailure,
};

use crate::traits::CollectionService;

// ── Internal mutable state ────────────────────────────────────────────────────

#[derive(Default)]
struct InMemoryState {
    collections: HashMap<(String, String), CollectionDescriptor>,
    get_calls: Vec<CollectionTarget>,
    update_calls: Vec<(CollectionTarget, CollectionUpdate)>,
    fetch_failure: Option<RemoteFailure>,
    update_failure: Option<RemoteFailure>,
}

fn key(target: &CollectionTarget) -> (String, String) {
    (target.database_id.clone(), target.collection_id.clone())
}

fn not_found() -> RemoteFailure {
    RemoteFailure::Service {
        status: 404,
        kind: Some("collection_not_found".to_string()),
        message: "Collection with the requested ID could not be found.".to_string(),
    }
}

// ── Public service ────────────────────────────────────────────────────────────

/// A map-backed collection store that records every call.
///
/// # Panics
///
/// Every method, including the `CollectionService` calls, panics if a
/// previous caller panicked while holding the internal lock.
#[derive(Default)]
pub struct InMemoryCollectionService {
    state: Mutex<InMemoryState>,
}

impl InMemoryCollectionService {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, InMemoryState> {
        self.state.lock().expect("collection state lock poisoned")
    }

    /// Store `descriptor` under `target`, replacing any previous entry.
    pub fn insert(&self, target: CollectionTarget, descriptor: CollectionDescriptor) {
        self.state().collections.insert(key(&target), descriptor);
    }

    /// The descriptor currently stored under `target`.
    pub fn collection(&self, target: &CollectionTarget) -> Option<CollectionDescriptor> {
        self.state().collections.get(&key(target)).cloned()
    }

    /// Make every subsequent fetch fail with `failure`.
    pub fn fail_fetches_with(&self, failure: RemoteFailure) {
        self.state().fetch_failure = Some(failure);
    }

    /// Make every subsequent update fail with `failure`. Stored state is left untouched.
    pub fn fail_updates_with(&self, failure: RemoteFailure) {
        self.state().update_failure = Some(failure);
    }

    pub fn get_call_count(&self) -> usize {
        self.state().get_calls.len()
    }

    /// Every update received, in order, including rejected ones.
    pub fn update_calls(&self) -> Vec<(CollectionTarget, CollectionUpdate)> {
        self.state().update_calls.clone()
    }

    /// Total calls of either kind.
    pub fn call_count(&self) -> usize {
        let state = self.state();
        state.get_calls.len() + state.update_calls.len()
    }
}

impl CollectionService for InMemoryCollectionService {
    fn get_collection(&self, target: &CollectionTarget) -> Result<CollectionDescriptor, RemoteFailure> {
        let mut state = self.state();
        state.get_calls.push(target.clone());

        if let Some(failure) = &state.fetch_failure {
            return Err(failure.clone());
        }
        state
            .collections
            .get(&key(target))
            .cloned()
            .ok_or_else(not_found)
    }

    fn update_collection(
        &self,
        target: &CollectionTarget,
        update: &CollectionUpdate,
    ) -> Result<(), RemoteFailure> {
        let mut state = self.state();
        state.update_calls.push((target.clone(), update.clone()));

        if let Some(failure) = &state.update_failure {
            return Err(failure.clone());
        }

        let stored = state
            .collections
            .get_mut(&key(target))
            .ok_or_else(not_found)?;
        stored.name = update.name.clone();
        stored.permissions = Some(update.permissions.iter().map(ToString::to_string).collect());
        stored.document_security = Some(update.document_security);
        if update.enabled.is_some() {
            stored.enabled = update.enabled;
        }

        debug!(
            collection_id = %target.collection_id,
            entries = update.permissions.len(),
            "in-memory collection updated"
        );
        Ok(())
    }
}
