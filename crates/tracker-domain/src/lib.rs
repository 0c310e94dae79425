//! # Vehicle Tracker - Domain Model
//!
//! Vehicle records, map projection, map view state, the login form state
//! machine and report snapshots for the aircraft/ship tracking dashboard.
//! These types carry no browser dependency so every rule the UI enforces
//! can be exercised natively.
//!
//! ## Modules
//!
//! - [`vehicle`]: vehicle type, status and the structured vehicle record
//! - [`map`]: geographic points, screen projection and zoom/reset state
//! - [`auth`]: credentials, the login form machine and the authenticator seam
//! - [`report`]: report snapshots and the report sink seam

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod auth;
pub mod error;
pub mod map;
pub mod report;
pub mod vehicle;

pub use auth::{AuthOutcome, Authenticator, Credentials, LoginForm, LoginPhase, LoginResolution};
pub use error::{DomainError, Result};
pub use map::{GeoPoint, MapView, MapViewConfig, ScreenPoint, TrajectoryPoint};
pub use report::{ReportSink, ReportSnapshot};
pub use vehicle::{VehicleField, VehiclePayload, VehicleRecord, VehicleStatus, VehicleType};
