//! Vehicle type, status and the structured vehicle record.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

// =============================================================================
// ENUMS
// =============================================================================

/// Kind of vehicle being tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    #[default]
    Aircraft,
    Ship,
}

impl VehicleType {
    pub const ALL: [Self; 2] = [Self::Aircraft, Self::Ship];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aircraft => "aircraft",
            Self::Ship => "ship",
        }
    }

    /// Tab caption
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Aircraft => "Aeronave",
            Self::Ship => "Buque",
        }
    }

    /// Transponder identifier scheme: ICAO 24-bit address or MMSI
    pub fn identifier_scheme(&self) -> &'static str {
        match self {
            Self::Aircraft => "ICAO24",
            Self::Ship => "MMSI",
        }
    }

    pub fn identifier_label(&self) -> String {
        format!("Identificador: {}", self.identifier_scheme())
    }

    pub fn identifier_placeholder(&self) -> String {
        format!("Código {}", self.identifier_scheme())
    }

    pub fn speed_unit(&self) -> &'static str {
        match self {
            Self::Aircraft => "kt",
            Self::Ship => "nudos",
        }
    }

    /// Altitude is only tracked for aircraft
    pub fn has_altitude(&self) -> bool {
        match self {
            Self::Aircraft => true,
            Self::Ship => false,
        }
    }

    /// Airline for aircraft, flag state for ships
    pub fn flag_company_label(&self) -> &'static str {
        match self {
            Self::Aircraft => "Compañía",
            Self::Ship => "Bandera",
        }
    }

    pub fn flag_company_placeholder(&self) -> &'static str {
        match self {
            Self::Aircraft => "Línea aérea",
            Self::Ship => "País de bandera",
        }
    }
}

/// Voyage/flight status offered by the status selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[serde(rename = "en-ruta")]
    EnRoute,
    #[serde(rename = "arribando")]
    Arriving,
    #[serde(rename = "en-puerto")]
    InPort,
    #[serde(rename = "retrasado")]
    Delayed,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl VehicleStatus {
    pub const ALL: [Self; 5] = [
        Self::EnRoute,
        Self::Arriving,
        Self::InPort,
        Self::Delayed,
        Self::Cancelled,
    ];

    /// Value submitted by the selector widget
    pub fn value(&self) -> &'static str {
        match self {
            Self::EnRoute => "en-ruta",
            Self::Arriving => "arribando",
            Self::InPort => "en-puerto",
            Self::Delayed => "retrasado",
            Self::Cancelled => "cancelado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EnRoute => "En ruta",
            Self::Arriving => "Arribando",
            Self::InPort => "En puerto/aeropuerto",
            Self::Delayed => "Retrasado",
            Self::Cancelled => "Cancelado",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

/// Editable field of a [`VehicleRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleField {
    Origin,
    Destination,
    Status,
    Identifier,
    Speed,
    Heading,
    Altitude,
    FlagCompany,
}

impl VehicleField {
    /// Element id used by the form inputs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::Status => "status",
            Self::Identifier => "identifier",
            Self::Speed => "speed",
            Self::Heading => "heading",
            Self::Altitude => "altitude",
            Self::FlagCompany => "flagCompany",
        }
    }
}

// =============================================================================
// VEHICLE RECORD
// =============================================================================

/// Vehicle-specific part of the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "vehicleType", rename_all = "lowercase")]
pub enum VehiclePayload {
    Aircraft { altitude: String },
    Ship,
}

impl VehiclePayload {
    /// Fresh payload for a vehicle type, with every field blank
    pub fn empty(vehicle_type: VehicleType) -> Self {
        match vehicle_type {
            VehicleType::Aircraft => Self::Aircraft {
                altitude: String::new(),
            },
            VehicleType::Ship => Self::Ship,
        }
    }

    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            Self::Aircraft { .. } => VehicleType::Aircraft,
            Self::Ship => VehicleType::Ship,
        }
    }
}

/// Free-text vehicle metadata edited in the data panel.
///
/// Values are kept exactly as typed; nothing is parsed or range checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub origin: String,
    pub destination: String,
    pub status: Option<VehicleStatus>,
    pub identifier: String,
    pub speed: String,
    pub heading: String,
    pub flag_company: String,
    #[serde(flatten)]
    pub payload: VehiclePayload,
}

impl VehicleRecord {
    pub fn new(vehicle_type: VehicleType) -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            status: None,
            identifier: String::new(),
            speed: String::new(),
            heading: String::new(),
            flag_company: String::new(),
            payload: VehiclePayload::empty(vehicle_type),
        }
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.payload.vehicle_type()
    }

    pub fn altitude(&self) -> Option<&str> {
        match &self.payload {
            VehiclePayload::Aircraft { altitude } => Some(altitude),
            VehiclePayload::Ship => None,
        }
    }

    /// Change vehicle type. The vehicle-specific payload is rebuilt blank, so
    /// an aircraft altitude does not survive a round trip through ship.
    pub fn switch_type(&mut self, vehicle_type: VehicleType) {
        if self.vehicle_type() != vehicle_type {
            self.payload = VehiclePayload::empty(vehicle_type);
        }
    }

    /// Current text of a field, `None` when the field is absent for this type
    pub fn field(&self, field: VehicleField) -> Option<&str> {
        match field {
            VehicleField::Origin => Some(&self.origin),
            VehicleField::Destination => Some(&self.destination),
            VehicleField::Status => Some(self.status.map_or("", |s| s.value())),
            VehicleField::Identifier => Some(&self.identifier),
            VehicleField::Speed => Some(&self.speed),
            VehicleField::Heading => Some(&self.heading),
            VehicleField::Altitude => self.altitude(),
            VehicleField::FlagCompany => Some(&self.flag_company),
        }
    }

    /// Apply an edit reported by the form.
    ///
    /// Status values that are not one of the selector's options clear the
    /// status. Editing altitude on a ship is rejected.
    pub fn set_field(&mut self, field: VehicleField, value: String) -> Result<()> {
        match field {
            VehicleField::Origin => self.origin = value,
            VehicleField::Destination => self.destination = value,
            VehicleField::Status => self.status = VehicleStatus::from_value(&value),
            VehicleField::Identifier => self.identifier = value,
            VehicleField::Speed => self.speed = value,
            VehicleField::Heading => self.heading = value,
            VehicleField::FlagCompany => self.flag_company = value,
            VehicleField::Altitude => match &mut self.payload {
                VehiclePayload::Aircraft { altitude } => *altitude = value,
                VehiclePayload::Ship => {
                    return Err(DomainError::FieldNotApplicable {
                        field,
                        vehicle_type: VehicleType::Ship,
                    });
                }
            },
        }
        Ok(())
    }
}

impl Default for VehicleRecord {
    fn default() -> Self {
        Self::new(VehicleType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::lorem::en::Sentence;

    #[test]
    fn test_labels_follow_vehicle_type() {
        assert_eq!(VehicleType::Aircraft.identifier_label(), "Identificador: ICAO24");
        assert_eq!(VehicleType::Ship.identifier_label(), "Identificador: MMSI");
        assert_eq!(VehicleType::Aircraft.identifier_placeholder(), "Código ICAO24");
        assert_eq!(VehicleType::Ship.speed_unit(), "nudos");
        assert_eq!(VehicleType::Aircraft.speed_unit(), "kt");
        assert_eq!(VehicleType::Ship.flag_company_label(), "Bandera");
        assert!(VehicleType::Aircraft.has_altitude());
        assert!(!VehicleType::Ship.has_altitude());
    }

    #[test]
    fn test_switch_to_ship_clears_altitude() {
        let mut record = VehicleRecord::new(VehicleType::Aircraft);
        record
            .set_field(VehicleField::Altitude, "35000".into())
            .unwrap();
        assert_eq!(record.altitude(), Some("35000"));

        record.switch_type(VehicleType::Ship);
        assert_eq!(record.altitude(), None);
        assert_eq!(record.field(VehicleField::Altitude), None);

        record.switch_type(VehicleType::Aircraft);
        assert_eq!(record.altitude(), Some(""));
    }

    #[test]
    fn test_switch_keeps_common_fields() {
        let mut record = VehicleRecord::default();
        record.set_field(VehicleField::Origin, "Lima".into()).unwrap();
        record.set_field(VehicleField::Identifier, "ABC123".into()).unwrap();

        record.switch_type(VehicleType::Ship);
        assert_eq!(record.origin, "Lima");
        assert_eq!(record.identifier, "ABC123");
    }

    #[test]
    fn test_reselecting_aircraft_keeps_altitude() {
        let mut record = VehicleRecord::new(VehicleType::Aircraft);
        record.set_field(VehicleField::Altitude, "12000".into()).unwrap();
        record.switch_type(VehicleType::Aircraft);
        assert_eq!(record.altitude(), Some("12000"));
    }

    #[test]
    fn test_altitude_rejected_for_ship() {
        let mut record = VehicleRecord::new(VehicleType::Ship);
        let err = record
            .set_field(VehicleField::Altitude, "100".into())
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::FieldNotApplicable {
                field: VehicleField::Altitude,
                vehicle_type: VehicleType::Ship,
            }
        );
    }

    #[test]
    fn test_free_text_is_stored_verbatim() {
        let mut record = VehicleRecord::default();
        let fields = [
            VehicleField::Origin,
            VehicleField::Destination,
            VehicleField::Identifier,
            VehicleField::Speed,
            VehicleField::Heading,
            VehicleField::Altitude,
            VehicleField::FlagCompany,
        ];
        for field in fields {
            let text: String = Sentence(1..6).fake();
            record.set_field(field, text.clone()).unwrap();
            assert_eq!(record.field(field), Some(text.as_str()));
        }

        record.set_field(VehicleField::Speed, "not a number".into()).unwrap();
        assert_eq!(record.speed, "not a number");
    }

    #[test]
    fn test_status_selector_values() {
        let mut record = VehicleRecord::default();
        record.set_field(VehicleField::Status, "en-puerto".into()).unwrap();
        assert_eq!(record.status, Some(VehicleStatus::InPort));
        assert_eq!(record.field(VehicleField::Status), Some("en-puerto"));

        record.set_field(VehicleField::Status, String::new()).unwrap();
        assert_eq!(record.status, None);
        assert_eq!(record.field(VehicleField::Status), Some(""));

        for status in VehicleStatus::ALL {
            assert_eq!(VehicleStatus::from_value(status.value()), Some(status));
        }
    }
}
