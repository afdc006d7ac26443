//! What an update changes relative to the collection's current state.

use std::fmt;

use colperm_contracts::collection::{CollectionDescriptor, CollectionUpdate};

/// Difference between a fetched descriptor and the update built for it.
///
/// Permissions are compared in their wire form. Order is ignored: the
/// service treats the permission list as a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSummary {
    /// Entries the update introduces, in update order.
    pub added: Vec<String>,
    /// Entries the update drops, in fetched order.
    pub removed: Vec<String>,
    /// False when the service did not report the current permissions. In
    /// that case every desired entry is listed as added and none as removed.
    pub permissions_known: bool,
    /// Document-security flag before the update, if the service reported it.
    pub document_security_before: Option<bool>,
    pub document_security_after: bool,
}

impl ChangeSummary {
    pub fn between(current: &CollectionDescriptor, update: &CollectionUpdate) -> Self {
        let desired: Vec<String> = update.permissions.iter().map(ToString::to_string).collect();

        let fetched = current.permissions.as_deref().unwrap_or_default();

        let added = desired
            .iter()
            .filter(|p| !fetched.contains(p))
            .cloned()
            .collect();
        let removed = fetched
            .iter()
            .filter(|p| !desired.contains(p))
            .cloned()
            .collect();

        Self {
            added,
            removed,
            permissions_known: current.permissions.is_some(),
            document_security_before: current.document_security,
            document_security_after: update.document_security,
        }
    }

    pub fn document_security_changes(&self) -> bool {
        self.document_security_before != Some(self.document_security_after)
    }

    /// True when the update would leave the collection's access rules as they are.
    pub fn is_noop(&self) -> bool {
        self.permissions_known
            && self.added.is_empty()
            && self.removed.is_empty()
            && !self.document_security_changes()
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            return f.write_str("  no changes");
        }
        if !self.permissions_known {
            writeln!(f, "  ? current permissions: unknown")?;
        }
        for p in &self.added {
            writeln!(f, "  + {p}")?;
        }
        for p in &self.removed {
            writeln!(f, "  - {p}")?;
        }
        if self.document_security_changes() {
            let before = match self.document_security_before {
                Some(flag) => flag.to_string(),
                None => "unknown".to_string(),
            };
            write!(
                f,
                "  ~ documentSecurity: {before} -> {}",
                self.document_security_after
            )?;
        }
        Ok(())
    }
}
