//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use tracker_domain::{AuthOutcome, Authenticator, Credentials, LoginForm, LoginResolution};
use tracker_frontend::components::LoginDialog;
use tracker_frontend::config::Config;
use tracker_frontend::services::SimulatedAuthenticator;
use tracker_frontend::state::{ToastKind, Toaster, provide_toaster};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_simulated_login_accepts_after_delay() {
    let authenticator = SimulatedAuthenticator::new(50);
    let start = js_sys::Date::now();

    let outcome = authenticator
        .authenticate(Credentials {
            email: "usuario@ejemplo.com".into(),
            password: "secreto".into(),
        })
        .await;

    assert_eq!(outcome, AuthOutcome::Accepted);
    assert!(js_sys::Date::now() - start >= 45.0);
}

#[wasm_bindgen_test]
async fn test_login_form_closes_on_simulated_success() {
    let mut form = LoginForm::new();
    form.set_email("usuario@ejemplo.com".into()).unwrap();
    form.set_password("secreto".into()).unwrap();

    let credentials = form.begin_submit().unwrap();
    let outcome = SimulatedAuthenticator::new(10).authenticate(credentials).await;

    assert_eq!(form.finish(outcome), Ok(LoginResolution::Close));
    assert!(form.credentials().email.is_empty());
}

fn type_into(host: &HtmlElement, selector: &str, value: &str) {
    let input = host
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    input.set_value(value);
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

#[wasm_bindgen_test]
async fn test_escape_dismisses_dialog_while_submitting() {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();

    let open = RwSignal::new(true);
    let toaster_slot: Rc<Cell<Option<Toaster>>> = Rc::default();
    let slot = Rc::clone(&toaster_slot);
    let _mounted = leptos::mount::mount_to(host.clone(), move || {
        slot.set(Some(provide_toaster(&Config::default())));
        view! {
            <LoginDialog
                open=open
                on_open_change=move |value: bool| open.set(value)
                authenticator=SimulatedAuthenticator::new(100)
            />
        }
    });
    let toaster = toaster_slot.get().unwrap();

    type_into(&host, "#email", "usuario@ejemplo.com");
    type_into(&host, "#password", "secreto");
    let form = host.query_selector("form").unwrap().unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&escape).unwrap();
    assert!(!open.get_untracked());

    TimeoutFuture::new(200).await;
    let toasts = toaster.toasts.get_untracked();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "Inicio de sesión exitoso");

    let email = host
        .query_selector("#email")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert_eq!(email.value(), "");
}
