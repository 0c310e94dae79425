//! # Map Component
//!
//! Static world picture with the trajectory, current position and zoom
//! controls drawn over it. Points are placed with [`GeoPoint::project`];
//! zooming only changes a CSS transform on the layer.

use leptos::prelude::*;
use tracker_domain::map::{polyline_path, project_trajectory};
use tracker_domain::{GeoPoint, MapView, MapViewConfig, TrajectoryPoint, VehicleType};

use super::icons::{MapPinIcon, NavigationIcon, ResetIcon, ZoomInIcon, ZoomOutIcon};

/// Decorative port/airport markers, positioned in CSS
const LANDMARKS: [&str; 4] = [
    "top: 35%; left: 25%;",
    "top: 45%; right: 30%;",
    "bottom: 35%; left: 35%;",
    "top: 25%; right: 20%;",
];

/// Tracking map panel
#[component]
pub fn TrackingMap(
    trajectory: Vec<TrajectoryPoint>,
    #[prop(into)] vehicle_type: Signal<VehicleType>,
    current_position: Option<GeoPoint>,
    #[prop(into)] background_url: String,
    #[prop(optional)] view_config: MapViewConfig,
) -> impl IntoView {
    let view_state = RwSignal::new(MapView::new(view_config));
    let image_failed = RwSignal::new(false);

    let points = project_trajectory(&trajectory);
    let path = polyline_path(&points);
    let current_screen = current_position.map(|pos| pos.project());
    log::debug!("Map projected {} trajectory points", points.len());

    let trajectory_overlay = path.map(|d| {
        view! {
            <svg class="map-trajectory">
                <path
                    d=d
                    stroke="#ef4444"
                    stroke-width="2"
                    fill="none"
                    stroke-dasharray="5,5"
                />
                {points
                    .iter()
                    .map(|p| {
                        view! {
                            <circle
                                cx=format!("{}%", p.x)
                                cy=format!("{}%", p.y)
                                r="3"
                                fill="#dc2626"
                                stroke="white"
                                stroke-width="1"
                            />
                        }
                    })
                    .collect_view()}
            </svg>
        }
    });

    let current_marker = current_screen.map(|pos| {
        view! {
            <div
                class="current-marker"
                style=format!("left: {}%; top: {}%;", pos.x, pos.y)
            >
                <div class="current-marker-dot">
                    {move || match vehicle_type.get() {
                        VehicleType::Aircraft => view! { <NavigationIcon /> }.into_any(),
                        VehicleType::Ship => view! { <MapPinIcon /> }.into_any(),
                    }}
                </div>
                <div class="current-marker-ping"></div>
            </div>
        }
    });

    let zoom_label = move || format!("Zoom: {}%", view_state.with(|v| v.zoom_pct));
    let point_count = trajectory.len();

    view! {
        <div class="map-container">
            <div
                class="map-layer"
                style:transform=move || view_state.with(MapView::css_transform)
            >
                <div class="map-background">
                    <Show
                        when=move || !image_failed.get()
                        fallback=|| view! {
                            <div class="map-image-fallback">
                                <span class="text-muted">"Mapa no disponible"</span>
                            </div>
                        }
                    >
                        <img
                            src=background_url.clone()
                            alt="Mapa mundial satelital"
                            class="map-image"
                            on:error=move |_| {
                                log::warn!("Map background failed to load, using placeholder");
                                image_failed.set(true);
                            }
                        />
                    </Show>
                    <div class="map-shade"></div>
                    <div class="map-grid"></div>
                    {LANDMARKS
                        .iter()
                        .map(|style| view! { <div class="map-landmark" style=*style></div> })
                        .collect_view()}
                </div>
                {trajectory_overlay}
                {current_marker}
            </div>

            <div class="map-controls">
                <button
                    class="btn btn-icon"
                    title="Acercar"
                    disabled=move || !view_state.with(MapView::can_zoom_in)
                    on:click=move |_| view_state.update(MapView::zoom_in)
                >
                    <ZoomInIcon />
                </button>
                <button
                    class="btn btn-icon"
                    title="Alejar"
                    disabled=move || !view_state.with(MapView::can_zoom_out)
                    on:click=move |_| view_state.update(MapView::zoom_out)
                >
                    <ZoomOutIcon />
                </button>
                <button
                    class="btn btn-icon"
                    title="Restablecer"
                    on:click=move |_| view_state.update(MapView::reset)
                >
                    <ResetIcon />
                </button>
            </div>

            <div class="map-info">
                <h4>"MAPA CON TRAYECTORIA"</h4>
                <div class="text-sm text-muted">
                    {current_position.map(|pos| view! { <p>"Posición: "{pos.display()}</p> })}
                    <p>{zoom_label}</p>
                    {(point_count > 0).then(|| view! {
                        <p>"Puntos de trayectoria: "{point_count}</p>
                    })}
                </div>
            </div>

            <div class="map-legend">
                <div class="legend-row">
                    <span class="legend-line"></span>
                    <span>"Trayectoria"</span>
                </div>
                <div class="legend-row">
                    <span class="legend-dot current"></span>
                    <span>"Posición actual"</span>
                </div>
                <div class="legend-row">
                    <span class="legend-dot landmark"></span>
                    <span>"Puertos/Aeropuertos"</span>
                </div>
            </div>
        </div>
    }
}
