//! Networking modules for the backend API and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the HTTP gateway (bearer attachment, typed endpoints, global
//! unauthorized eviction), `identity` bridges the host page's identity SDK,
//! `reconcile` drives session reconciliation between the two, and `types`
//! defines the wire schema.

pub mod api;
pub mod identity;
pub mod reconcile;
pub mod types;
