//! # colperm-core
//!
//! The collection permission updater.
//!
//! This crate provides:
//! - The `CollectionService` trait, the only path to the remote database
//! - The `PermissionUpdater` that fetches a collection and overwrites its permissions
//! - `run`, which wires configuration, connection, and the updater together
//! - `InMemoryCollectionService`, a recording backend for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use colperm_core::{run, RunMode};
//!
//! let report = run(|name| std::env::var(name).ok(), connect, RunMode::Apply)?;
//! println!("{}", report.confirmation());
//! ```

pub mod memory;
pub mod run;
pub mod summary;
pub mod traits;
pub mod updater;

pub use memory::InMemoryCollectionService;
pub use run::{run, RunMode, RunReport};
pub use summary::ChangeSummary;
pub use traits::CollectionService;
pub use updater::{PermissionUpdater, UpdatePlan};
