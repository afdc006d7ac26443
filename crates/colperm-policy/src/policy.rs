//! The permission policy applied to the target collection.
//!
//! The policy is fixed: reads are public, every mutation requires an
//! authenticated user, and documents may carry their own narrower
//! permissions. It is not derived from configuration or from the collection's
//! current state, so applying it twice yields the same update.

use tracing::debug;

use colperm_contracts::{
    collection::{CollectionDescriptor, CollectionUpdate},
    permission::{Permission, Role},
};

/// A complete replacement permission set for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionPolicy {
    /// Collection-level permission entries, in submission order.
    pub permissions: Vec<Permission>,

    /// Whether documents may define permissions narrower than the collection's.
    pub document_security: bool,
}

impl PermissionPolicy {
    /// Public read, authenticated create/update/delete, document security on.
    pub fn user_profiles() -> Self {
        Self {
            permissions: vec![
                Permission::create(Role::users()),
                Permission::read(Role::Any),
                Permission::update(Role::users()),
                Permission::delete(Role::users()),
            ],
            document_security: true,
        }
    }

    /// The entries rendered in the service's string syntax.
    pub fn rendered(&self) -> Vec<String> {
        self.permissions.iter().map(ToString::to_string).collect()
    }

    /// Build the update for `current`.
    ///
    /// Only the display name and the `enabled` flag are taken from the
    /// fetched descriptor; the permission set is replaced wholesale.
    pub fn build_update(&self, current: &CollectionDescriptor) -> CollectionUpdate {
        debug!(
            name = %current.name,
            entries = self.permissions.len(),
            document_security = self.document_security,
            "building collection update"
        );

        CollectionUpdate {
            name: current.name.clone(),
            permissions: self.permissions.clone(),
            document_security: self.document_security,
            enabled: current.enabled,
        }
    }
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::user_profiles()
    }
}
