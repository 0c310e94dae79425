//! Domain error types.
//!
//! Display strings are shown to the user verbatim in notification banners,
//! so they are written in the dashboard's UI language.

use thiserror::Error;

use crate::auth::LoginPhase;
use crate::vehicle::{VehicleField, VehicleType};

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Report requested without a vehicle identifier
    #[error("Por favor ingrese un identificador válido")]
    MissingIdentifier,

    /// Login submitted with an empty email or password
    #[error("Por favor complete todos los campos")]
    MissingCredentials,

    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: lat={lat}, lon={lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    /// Field edited that the current vehicle type does not carry
    #[error("Field {field:?} does not apply to {vehicle_type:?}")]
    FieldNotApplicable {
        field: VehicleField,
        vehicle_type: VehicleType,
    },

    /// Login form asked to do something its current phase does not allow
    #[error("Cannot {action} while login form is {phase:?}")]
    InvalidLoginTransition {
        phase: LoginPhase,
        action: &'static str,
    },

    /// Report sink could not accept the snapshot
    #[error("Report delivery failed: {0}")]
    ReportDelivery(String),
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
