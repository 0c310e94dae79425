//! # Login Dialog
//!
//! Modal email/password form. The host owns the open flag; the dialog owns
//! the typed credentials and the [`LoginForm`] machine, and hands complete
//! credentials to whatever [`Authenticator`] it was given.

use leptos::ev::{self, KeyboardEvent, SubmitEvent};
use leptos::prelude::*;
use tracker_domain::{Authenticator, LoginForm, LoginResolution};

use super::icons::{EyeIcon, EyeOffIcon, LogInIcon};
use crate::state::use_toaster;

#[component]
pub fn LoginDialog<A>(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_open_change: Callback<bool>,
    authenticator: A,
) -> impl IntoView
where
    A: Authenticator + Clone + Send + 'static,
{
    let toaster = use_toaster();
    let form = RwSignal::new(LoginForm::new());
    let submitting = Memo::new(move |_| form.with(LoginForm::is_submitting));

    // Escape and backdrop dismiss in any phase; an attempt in flight still
    // finishes and resets the form.
    let close = move || on_open_change.run(false);

    let escape = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(attempt) = form.try_update(LoginForm::begin_submit) else {
            return;
        };
        let credentials = match attempt {
            Ok(credentials) => credentials,
            Err(err) => {
                log::debug!("Login not submitted: {err}");
                toaster.error(err.to_string());
                return;
            }
        };

        let authenticator = authenticator.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = authenticator.authenticate(credentials).await;
            let Some(resolution) = form.try_update(|f| f.finish(outcome)) else {
                log::debug!("Login dialog gone before authentication finished");
                return;
            };
            match resolution {
                Ok(LoginResolution::Close) => {
                    log::info!("Login accepted");
                    toaster.success("Inicio de sesión exitoso");
                    on_open_change.run(false);
                }
                Ok(LoginResolution::Retry { reason }) => {
                    log::warn!("Login rejected: {reason}");
                    toaster.error(reason);
                }
                Err(err) => log::error!("Login finished out of order: {err}"),
            }
        });
    };

    let show_password = move || form.with(LoginForm::show_password);

    view! {
        <div
            class="dialog-root"
            class:open=move || open.get()
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class="dialog-backdrop" on:click=move |_| close()></div>
            <div class="dialog-content" role="dialog" aria-modal="true" aria-labelledby="login-title">
                <div class="dialog-header">
                    <h2 id="login-title" class="dialog-title">
                        <LogInIcon />
                        "Iniciar Sesión"
                    </h2>
                    <p class="text-muted text-sm">
                        "Ingrese sus credenciales para acceder al sistema de seguimiento"
                    </p>
                </div>

                <form class="dialog-form" on:submit=on_submit>
                    <div class="form-row">
                        <label for="email">"Correo electrónico"</label>
                        <input
                            id="email"
                            type="email"
                            class="input"
                            placeholder="usuario@ejemplo.com"
                            prop:value=move || form.with(|f| f.credentials().email.clone())
                            disabled=move || submitting.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    if let Err(err) = f.set_email(value) {
                                        log::debug!("{err}");
                                    }
                                });
                            }
                        />
                    </div>

                    <div class="form-row">
                        <label for="password">"Contraseña"</label>
                        <div class="password-field">
                            <input
                                id="password"
                                type=move || if show_password() { "text" } else { "password" }
                                class="input"
                                placeholder="Ingrese su contraseña"
                                prop:value=move || form.with(|f| f.credentials().password.clone())
                                disabled=move || submitting.get()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| {
                                        if let Err(err) = f.set_password(value) {
                                            log::debug!("{err}");
                                        }
                                    });
                                }
                            />
                            <button
                                type="button"
                                class="btn btn-ghost btn-icon password-toggle"
                                disabled=move || submitting.get()
                                on:click=move |_| form.update(LoginForm::toggle_password_visibility)
                            >
                                {move || if show_password() {
                                    view! { <EyeOffIcon /> }.into_any()
                                } else {
                                    view! { <EyeIcon /> }.into_any()
                                }}
                            </button>
                        </div>
                    </div>

                    <div class="dialog-actions">
                        <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                            {move || if submitting.get() {
                                view! {
                                    <span class="busy">
                                        <span class="spinner"></span>
                                        "Iniciando sesión..."
                                    </span>
                                }.into_any()
                            } else {
                                "Iniciar Sesión".into_any()
                            }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-outline btn-block"
                            disabled=move || !form.with(LoginForm::can_cancel)
                            on:click=move |_| close()
                        >
                            "Cancelar"
                        </button>
                    </div>
                </form>

                <div class="dialog-footer text-sm text-muted">
                    <p>"¿Olvidaste tu contraseña?"</p>
                    <button type="button" class="btn btn-link">"Recuperar contraseña"</button>
                </div>
            </div>
        </div>
    }
}
