//! # colperm-policy
//!
//! The static permission policy colperm writes onto a collection.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use colperm_policy::PermissionPolicy;
//!
//! let update = PermissionPolicy::default().build_update(&descriptor);
//! ```

pub mod policy;

pub use policy::PermissionPolicy;

// ── Tests ─────────────────────────────────────────────────────────────────────
