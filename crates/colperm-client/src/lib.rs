//! # colperm-client
//!
//! HTTP access to the remote database service.
//!
//! [`HttpCollectionService`] implements
//! [`CollectionService`](colperm_core::CollectionService) with a blocking
//! `reqwest` client. Pass [`HttpCollectionService::connect`] to
//! [`colperm_core::run`] as the connect step.

pub mod http;

pub use http::HttpCollectionService;
