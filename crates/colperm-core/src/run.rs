//! One complete colperm invocation: configure, connect, plan or apply.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{info, info_span};
use uuid::Uuid;

use colperm_contracts::{config::ServiceConfig, error::ColpermResult};
use colperm_policy::PermissionPolicy;

use crate::{summary::ChangeSummary, traits::CollectionService, updater::PermissionUpdater};

/// Whether a run submits the update or only reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Apply,
    Plan,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Correlates this run's log lines.
    pub run_id: Uuid,
    pub collection_id: String,
    /// Display name of the collection, as fetched.
    pub collection_name: String,
    /// Last modification time the service reported before this run.
    pub updated_at: Option<DateTime<Utc>>,
    pub summary: ChangeSummary,
    /// False in plan mode.
    pub applied: bool,
}

impl RunReport {
    /// The line printed to stdout when the run succeeds.
    pub fn confirmation(&self) -> String {
        if self.applied {
            format!("Collection '{}' permissions updated", self.collection_name)
        } else {
            let updated = match self.updated_at {
                Some(at) => at.to_rfc3339_opts(SecondsFormat::Secs, true),
                None => "unknown".to_string(),
            };
            format!(
                "Collection '{}' permission changes (not applied, last updated {updated}):\n{}",
                self.collection_name, self.summary
            )
        }
    }
}

/// Run colperm end to end.
///
/// `lookup` resolves configuration names; `connect` turns the validated
/// configuration into a service. Configuration is checked before `connect`
/// is called, so an incomplete environment never reaches the remote side.
pub fn run<L, C, S>(lookup: L, connect: C, mode: RunMode) -> ColpermResult<RunReport>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&ServiceConfig) -> ColpermResult<S>,
    S: CollectionService,
{
    let run_id = Uuid::new_v4();
    let span = info_span!("run", run_id = %run_id, mode = ?mode);
    let _guard = span.enter();

    let config = ServiceConfig::from_lookup(lookup)?;
    info!(
        endpoint = %config.endpoint,
        project_id = %config.project_id,
        database_id = %config.target.database_id,
        collection_id = %config.target.collection_id,
        "configuration loaded"
    );

    let service = connect(&config)?;
    let updater = PermissionUpdater::new(service, PermissionPolicy::default());

    let plan = match mode {
        RunMode::Apply => updater.apply(&config.target)?,
        RunMode::Plan => updater.plan(&config.target)?,
    };

    Ok(RunReport {
        run_id,
        collection_id: config.target.collection_id,
        collection_name: plan.current.name,
        updated_at: plan.current.updated_at,
        summary: plan.summary,
        applied: mode == RunMode::Apply,
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────
