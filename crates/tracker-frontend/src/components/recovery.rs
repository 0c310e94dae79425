//! # Recovery Screen
//!
//! Shown in place of the whole dashboard when rendering fails.

use leptos::error::Errors;
use leptos::prelude::*;

#[component]
pub fn RecoveryScreen(errors: ArcRwSignal<Errors>) -> impl IntoView {
    Effect::new(move |_| {
        for (_, err) in errors.get() {
            log::error!("Dashboard failed to render: {err:?}");
        }
    });

    let reload = move |_| match web_sys::window().map(|w| w.location().reload()) {
        Some(Ok(())) => {}
        Some(Err(err)) => log::error!("Page reload failed: {err:?}"),
        None => log::error!("Page reload failed: no window"),
    };

    view! {
        <div class="recovery-screen">
            <div class="recovery-body">
                <h1>"Sistema de Seguimiento de Vehículos"</h1>
                <p class="text-muted">
                    "Ha ocurrido un error inesperado. Por favor, recargue la página."
                </p>
                <button class="btn btn-primary" on:click=reload>"Recargar página"</button>
            </div>
        </div>
    }
}
