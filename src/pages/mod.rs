//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (resources, form state,
//! navigation) and delegates rendering details to `components`.

pub mod about;
pub mod contact;
pub mod coverage;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod payment;
pub mod payment_cancelled;
pub mod payment_success;
pub mod register;
pub mod service_details;
pub mod services;
