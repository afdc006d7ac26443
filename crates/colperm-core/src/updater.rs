//! The permission updater: fetch, rebuild, overwrite.
//!
//! The updater runs one linear sequence per call:
//!
//!   Fetch descriptor → Build update from policy → Submit update
//!
//! The update is never submitted if the fetch fails, and neither call is
//! retried. Remote failures are wrapped with the operation they came from and
//! otherwise passed through untouched.

use tracing::{debug, info, warn};

use colperm_contracts::{
    collection::{CollectionDescriptor, CollectionUpdate},
    config::CollectionTarget,
    error::{ColpermError, ColpermResult},
};
use colperm_policy::PermissionPolicy;

use crate::{summary::ChangeSummary, traits::CollectionService};

/// An update that has been computed but not submitted.
#[derive(Debug, Clone)]
pub struct UpdatePlan {
    /// The descriptor as fetched.
    pub current: CollectionDescriptor,
    /// The body that would be submitted.
    pub update: CollectionUpdate,
    pub summary: ChangeSummary,
}

/// Rewrites the permission set of a collection according to a policy.
pub struct PermissionUpdater<S> {
    service: S,
    policy: PermissionPolicy,
}

impl<S: CollectionService> PermissionUpdater<S> {
    pub fn new(service: S, policy: PermissionPolicy) -> Self {
        Self { service, policy }
    }

    pub fn policy(&self) -> &PermissionPolicy {
        &self.policy
    }

    /// Fetch the collection and compute the update without submitting it.
    ///
    /// # Errors
    ///
    /// `ColpermError::FetchFailed` if the descriptor cannot be retrieved.
    pub fn plan(&self, target: &CollectionTarget) -> ColpermResult<UpdatePlan> {
        debug!(
            database_id = %target.database_id,
            collection_id = %target.collection_id,
            "fetching collection"
        );

        let current = self.service.get_collection(target).map_err(|failure| {
            warn!(
                collection_id = %target.collection_id,
                status = ?failure.status(),
                "collection fetch failed"
            );
            ColpermError::FetchFailed {
                collection_id: target.collection_id.clone(),
                failure,
            }
        })?;

        let update = self.policy.build_update(&current);
        let summary = ChangeSummary::between(&current, &update);

        Ok(UpdatePlan {
            current,
            update,
            summary,
        })
    }

    /// Fetch the collection and overwrite its permissions.
    ///
    /// The update is submitted even when the summary is a no-op: the call is
    /// a pure overwrite, so repeating it is harmless.
    ///
    /// # Errors
    ///
    /// `ColpermError::FetchFailed` if the fetch fails (no update is sent),
    /// `ColpermError::UpdateFailed` if the service rejects the update.
    pub fn apply(&self, target: &CollectionTarget) -> ColpermResult<UpdatePlan> {
        let plan = self.plan(target)?;

        info!(
            collection_id = %target.collection_id,
            name = %plan.current.name,
            added = plan.summary.added.len(),
            removed = plan.summary.removed.len(),
            document_security = plan.update.document_security,
            "submitting permission update"
        );

        self.service
            .update_collection(target, &plan.update)
            .map_err(|failure| {
                warn!(
                    collection_id = %target.collection_id,
                    status = ?failure.status(),
                    "collection update failed"
                );
                ColpermError::UpdateFailed {
                    collection_id: target.collection_id.clone(),
                    failure,
                }
            })?;

        info!(
            collection_id = %target.collection_id,
            name = %plan.current.name,
            "collection permissions updated"
        );
        Ok(plan)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
