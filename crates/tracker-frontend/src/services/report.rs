//! # Report Delivery
//!
//! Reports are only written to the browser console for now.

use tracker_domain::{DomainError, ReportSink, ReportSnapshot, Result};

/// Report sink that logs the snapshot as pretty JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReportSink;

impl ConsoleReportSink {
    pub fn render(report: &ReportSnapshot) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(|e| DomainError::ReportDelivery(e.to_string()))
    }
}

impl ReportSink for ConsoleReportSink {
    fn submit(&self, report: &ReportSnapshot) -> Result<()> {
        let json = Self::render(report)?;
        log::info!("Reporte generado: {json}");
        Ok(())
    }
}
