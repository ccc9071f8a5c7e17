//! CampusGrid — school onboarding core for the group admin portal.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod session;
pub mod wizard;
