//! # Services Module
//!
//! Collaborators behind the domain seams: login and report delivery.

pub mod auth;
pub mod report;

pub use auth::*;
pub use report::*;
