//! # Application State
//!
//! Reactive state owned by the dashboard root and the toast surface.

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use tracker_domain::{GeoPoint, TrajectoryPoint, VehicleRecord, VehicleType};
use uuid::Uuid;

use crate::config::Config;

/// State owned by the dashboard root
#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub vehicle: RwSignal<VehicleRecord>,
    pub login_open: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            vehicle: RwSignal::new(VehicleRecord::new(VehicleType::Aircraft)),
            login_open: RwSignal::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed data the dashboard renders
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub trajectory: Vec<TrajectoryPoint>,
    pub current_position: Option<GeoPoint>,
}

// =============================================================================
// TOASTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Append a toast, evicting the oldest beyond `max_visible`
pub fn push_toast(toasts: &mut Vec<Toast>, toast: Toast, max_visible: usize) {
    toasts.push(toast);
    if toasts.len() > max_visible {
        let excess = toasts.len() - max_visible;
        toasts.drain(..excess);
    }
}

/// Handle for raising transient notifications
#[derive(Clone, Copy, Debug)]
pub struct Toaster {
    pub toasts: RwSignal<Vec<Toast>>,
    duration_ms: u32,
    max_visible: usize,
}

impl Toaster {
    pub fn new(config: &Config) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            duration_ms: config.toast_duration_ms,
            max_visible: config.max_visible_toasts,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Toast::new(ToastKind::Success, message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Toast::new(ToastKind::Error, message));
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn show(&self, toast: Toast) {
        let id = toast.id;
        let max_visible = self.max_visible;
        self.toasts
            .update(|toasts| push_toast(toasts, toast, max_visible));

        let this = *self;
        Timeout::new(self.duration_ms, move || this.dismiss(id)).forget();
    }
}

pub fn provide_toaster(config: &Config) -> Toaster {
    let toaster = Toaster::new(config);
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}
