//! Role-specific dashboard panels.
//!
//! The dashboard page picks one of these by the session user's role;
//! admin management screens live alongside as tab content.

pub mod admin_dashboard;
pub mod analytics;
pub mod decorator_dashboard;
pub mod manage_bookings;
pub mod manage_decorators;
pub mod manage_services;
pub mod user_dashboard;
