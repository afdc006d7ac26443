//! The seam between the updater and the remote database service.
//!
//! `CollectionService` is the only way the updater touches the remote side.
//! The HTTP client implements it for production; `InMemoryCollectionService`
//! implements it for tests and local runs.

use colperm_contracts::{
    collection::{CollectionDescriptor, CollectionUpdate},
    config::CollectionTarget,
    error::RemoteFailure,
};

/// Remote collection operations consumed by the updater.
///
/// Implementations report failures as [`RemoteFailure`] exactly as received.
/// They must not retry: every call on this trait maps to one request.
pub trait CollectionService: Send + Sync {
    /// Fetch the descriptor of `target`.
    fn get_collection(&self, target: &CollectionTarget) -> Result<CollectionDescriptor, RemoteFailure>;

    /// Replace name, permissions, and document-security flag of `target`.
    ///
    /// The service applies the update atomically or rejects it. Any success
    /// status means the update was applied, whatever the response body holds.
    fn update_collection(
        &self,
        target: &CollectionTarget,
        update: &CollectionUpdate,
    ) -> Result<(), RemoteFailure>;
}

impl<S: CollectionService + ?Sized> CollectionService for &S {
    fn get_collection(&self, target: &CollectionTarget) -> Result<CollectionDescriptor, RemoteFailure> {
        (**self).get_collection(target)
    }

    fn update_collection(
        &self,
        target: &CollectionTarget,
        update: &CollectionUpdate,
    ) -> Result<(), RemoteFailure> {
        (**self).update_collection(target, update)
    }
}

impl<S: CollectionService + ?Sized> CollectionService for Box<S> {
    fn get_collection(&self, target: &CollectionTarget) -> Result<CollectionDescriptor, RemoteFailure> {
        (**self).get_collection(target)
    }

    fn update_collection(
        &self,
        target: &CollectionTarget,
        update: &CollectionUpdate,
    ) -> Result<(), RemoteFailure> {
        (**self).update_collection(target, update)
    }
}
