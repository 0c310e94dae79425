//! # Header Component
//!
//! Page title, subtitle and the login trigger.

use leptos::prelude::*;

use super::icons::LogInIcon;

/// Header with title and login button
#[component]
pub fn Header(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-title">
                <h1>"Sistema de Seguimiento de Vehículos"</h1>
                <p class="text-muted">"Monitoreo en tiempo real de aeronaves y embarcaciones"</p>
            </div>
            <button class="btn btn-outline login-trigger" on:click=move |_| on_login.run(())>
                <LogInIcon />
                "Login"
            </button>
        </header>
    }
}
