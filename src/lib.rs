//! Claimsy portal core: role-based navigation, vendor onboarding and the
//! vendor application desk, served over a small REST API.

pub mod applications;
pub mod config;
pub mod error;
pub mod navigation;
pub mod onboarding;
pub mod server;
pub mod session;
pub mod store;
