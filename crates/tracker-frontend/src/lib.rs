//! # Vehicle Tracker Frontend
//!
//! Browser dashboard for following an aircraft or a ship on a stylized map,
//! editing its metadata and walking through a simulated login.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod components;
pub mod config;
pub mod services;
pub mod state;

use chrono::{TimeZone, Utc};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use tracker_domain::{
    GeoPoint, ReportSink, ReportSnapshot, TrajectoryPoint, VehicleField, VehicleRecord,
    VehicleType,
};
use wasm_bindgen::JsCast;

use components::*;
use config::Config;
use services::{ConsoleReportSink, SimulatedAuthenticator};
use state::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = Config::default();
    provide_context(config.clone());
    provide_toaster(&config);

    view! {
        <Title text="Sistema de Seguimiento de Vehículos" />
        <ErrorBoundary fallback=|errors| view! { <RecoveryScreen errors=errors /> }>
            {load_mock_data().map(|data| view! { <TrackingDashboard data=data /> })}
        </ErrorBoundary>
        <ToastContainer />
    }
}

/// Dashboard root: owns vehicle data and the login flag, wires the panels
#[component]
pub fn TrackingDashboard(data: DashboardData) -> impl IntoView {
    let config = expect_context::<Config>();
    let toaster = use_toaster();
    let state = AppState::new();
    let current_position = data.current_position;

    let vehicle_type = Signal::derive(move || state.vehicle.with(VehicleRecord::vehicle_type));

    let on_vehicle_type_change = Callback::new(move |vehicle_type: VehicleType| {
        log::debug!("Vehicle type -> {}", vehicle_type.as_str());
        state.vehicle.update(|record| record.switch_type(vehicle_type));
    });

    let on_field_change = Callback::new(move |(field, value): (VehicleField, String)| {
        state.vehicle.update(|record| {
            if let Err(err) = record.set_field(field, value) {
                log::warn!("Ignoring edit: {err}");
            }
        });
    });

    let on_generate_report = Callback::new(move |()| {
        let result = state.vehicle.with_untracked(|record| {
            generate_report(record, current_position, &ConsoleReportSink)
        });
        match result {
            Ok(()) => toaster.success("Reporte generado exitosamente"),
            Err(err) => {
                log::warn!("Report not generated: {err}");
                toaster.error(err.to_string());
            }
        }
    });

    view! {
        <div class="page">
            <div class="page-inner">
                <Header on_login=move || state.login_open.set(true) />

                <VehicleTypeSelector
                    vehicle_type=vehicle_type
                    on_change=on_vehicle_type_change
                />

                <TrackingMap
                    trajectory=data.trajectory
                    vehicle_type=vehicle_type
                    current_position=current_position
                    background_url=config.map_background_url.clone()
                    view_config=config.map
                />

                <VehicleDataPanel
                    data=state.vehicle
                    on_change=on_field_change
                    on_generate_report=on_generate_report
                />

                <LoginDialog
                    open=state.login_open
                    on_open_change=Callback::new(move |open: bool| state.login_open.set(open))
                    authenticator=SimulatedAuthenticator::new(config.login_delay_ms)
                />
            </div>
        </div>
    }
}

#[component]
fn ToastContainer() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-container">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let on_dismiss = move |_| toaster.dismiss(id);
                    view! {
                        <div class=format!("toast {}", toast.kind.class()) role="status">
                            <span>{toast.message.clone()}</span>
                            <button class="toast-close" on:click=on_dismiss>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Capture the record as it is now and hand it to `sink`
fn generate_report(
    record: &VehicleRecord,
    position: Option<GeoPoint>,
    sink: &impl ReportSink,
) -> tracker_domain::Result<()> {
    let report = ReportSnapshot::capture(record, Utc::now(), position)?;
    sink.submit(&report)
}

/// Fixed trajectory and position shown on the map
fn load_mock_data() -> tracker_domain::Result<DashboardData> {
    let fixes = [
        (40.7128, -74.0060, 10),
        (41.8781, -87.6298, 12),
        (39.9526, -75.1652, 14),
    ];

    let trajectory = fixes
        .into_iter()
        .map(|(lat, lng, hour)| {
            Ok(TrajectoryPoint {
                position: GeoPoint::new(lat, lng)?,
                timestamp: Utc
                    .with_ymd_and_hms(2025, 10, 1, hour, 0, 0)
                    .single()
                    .unwrap_or_default(),
            })
        })
        .collect::<tracker_domain::Result<Vec<_>>>()?;

    Ok(DashboardData {
        trajectory,
        current_position: Some(GeoPoint::new(39.9526, -75.1652)?),
    })
}

pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Config::default().log_level);
    log::info!("Vehicle Tracker v{}", env!("CARGO_PKG_VERSION"));

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("root"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => leptos::mount::mount_to(root, App).forget(),
        None => {
            log::warn!("No #root element, mounting to <body>");
            leptos::mount::mount_to_body(App);
        }
    }
}
