//! Report snapshots.
//!
//! A report is a frozen copy of the data panel at the moment the user asks
//! for it. Where it goes afterwards is up to a [`ReportSink`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::map::GeoPoint;
use crate::vehicle::{VehicleRecord, VehicleStatus, VehicleType};

/// Vehicle data plus time and position, as captured for a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub vehicle_type: VehicleType,
    pub origin: String,
    pub destination: String,
    pub status: Option<VehicleStatus>,
    pub identifier: String,
    pub speed: String,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<String>,
    pub flag_company: String,
    pub timestamp: DateTime<Utc>,
    pub position: Option<GeoPoint>,
}

impl ReportSnapshot {
    /// Capture a record. Fails when no identifier has been entered.
    pub fn capture(
        record: &VehicleRecord,
        timestamp: DateTime<Utc>,
        position: Option<GeoPoint>,
    ) -> Result<Self> {
        if record.identifier.is_empty() {
            return Err(DomainError::MissingIdentifier);
        }

        Ok(Self {
            vehicle_type: record.vehicle_type(),
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            status: record.status,
            identifier: record.identifier.clone(),
            speed: record.speed.clone(),
            heading: record.heading.clone(),
            altitude: record.altitude().map(str::to_owned),
            flag_company: record.flag_company.clone(),
            timestamp,
            position,
        })
    }
}

/// Destination for generated reports
pub trait ReportSink {
    fn submit(&self, report: &ReportSnapshot) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleField;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Collecting(RefCell<Vec<ReportSnapshot>>);

    impl ReportSink for Collecting {
        fn submit(&self, report: &ReportSnapshot) -> Result<()> {
            self.0.borrow_mut().push(report.clone());
            Ok(())
        }
    }

    fn position() -> Option<GeoPoint> {
        Some(GeoPoint::new(39.9526, -75.1652).unwrap())
    }

    #[test]
    fn test_missing_identifier_aborts() {
        let record = VehicleRecord::new(VehicleType::Aircraft);
        let result = ReportSnapshot::capture(&record, Utc::now(), position());
        assert_eq!(result, Err(DomainError::MissingIdentifier));
        assert_eq!(
            DomainError::MissingIdentifier.to_string(),
            "Por favor ingrese un identificador válido"
        );
    }

    #[test]
    fn test_capture_with_identifier() {
        let mut record = VehicleRecord::new(VehicleType::Aircraft);
        record.set_field(VehicleField::Identifier, "ABC123".into()).unwrap();
        record.set_field(VehicleField::Altitude, "31000".into()).unwrap();
        record.set_field(VehicleField::Status, "en-ruta".into()).unwrap();

        let now = Utc::now();
        let snapshot = ReportSnapshot::capture(&record, now, position()).unwrap();
        assert_eq!(snapshot.identifier, "ABC123");
        assert_eq!(snapshot.altitude.as_deref(), Some("31000"));
        assert_eq!(snapshot.status, Some(VehicleStatus::EnRoute));
        assert_eq!(snapshot.timestamp, now);
        assert_eq!(snapshot.position, position());

        let sink = Collecting::default();
        sink.submit(&snapshot).unwrap();
        assert_eq!(sink.0.borrow().len(), 1);
    }

    #[test]
    fn test_ship_report_has_no_altitude() {
        let mut record = VehicleRecord::new(VehicleType::Ship);
        record.set_field(VehicleField::Identifier, "366999999".into()).unwrap();

        let snapshot = ReportSnapshot::capture(&record, Utc::now(), None).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["vehicleType"], "ship");
        assert_eq!(json["flagCompany"], "");
        assert!(json.get("altitude").is_none());
        assert!(json.get("timestamp").is_some());
    }
}
