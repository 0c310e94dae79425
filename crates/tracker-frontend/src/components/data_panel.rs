//! # Vehicle Data Panel
//!
//! Controlled form over a [`VehicleRecord`]. Every input shows the value it is
//! handed and reports edits as `(field, text)` without keeping state.

use leptos::prelude::*;
use tracker_domain::{VehicleField, VehicleRecord, VehicleStatus};

type FieldCallback = Callback<(VehicleField, String)>;

/// Bound text input for one record field
fn field_input<P>(
    field: VehicleField,
    placeholder: P,
    data: Signal<VehicleRecord>,
    on_change: FieldCallback,
) -> impl IntoView
where
    P: Fn() -> String + Send + Sync + 'static,
{
    view! {
        <input
            id=field.as_str()
            class="input"
            placeholder=placeholder
            prop:value=move || data.with(|r| r.field(field).unwrap_or_default().to_owned())
            on:input=move |ev| on_change.run((field, event_target_value(&ev)))
        />
    }
}

/// Text input followed by a unit suffix
fn field_with_unit<P, U>(
    field: VehicleField,
    placeholder: P,
    unit: U,
    data: Signal<VehicleRecord>,
    on_change: FieldCallback,
) -> impl IntoView
where
    P: Fn() -> String + Send + Sync + 'static,
    U: Fn() -> &'static str + Send + Sync + 'static,
{
    view! {
        <div class="input-with-unit">
            {field_input(field, placeholder, data, on_change)}
            <span class="text-muted text-sm">{unit}</span>
        </div>
    }
}

/// Whether the status option with `value` is the one the record holds.
/// The blank placeholder is selected while no status is set.
fn status_selected(record: &VehicleRecord, value: &str) -> bool {
    record.field(VehicleField::Status).unwrap_or_default() == value
}

#[component]
pub fn VehicleDataPanel(
    #[prop(into)] data: Signal<VehicleRecord>,
    #[prop(into)] on_change: FieldCallback,
    #[prop(into)] on_generate_report: Callback<()>,
) -> impl IntoView {
    let vehicle_type = Memo::new(move |_| data.with(VehicleRecord::vehicle_type));

    view! {
        <div class="panel-grid">
            <section class="card">
                <div class="card-header">
                    <h2 class="card-title">"DATOS"</h2>
                </div>
                <div class="card-body">
                    <div class="form-row">
                        <label for="origin">"Origen"</label>
                        {field_input(
                            VehicleField::Origin,
                            || "Ciudad/Puerto de origen".to_owned(),
                            data,
                            on_change,
                        )}
                    </div>
                    <div class="form-row">
                        <label for="destination">"Destino"</label>
                        {field_input(
                            VehicleField::Destination,
                            || "Ciudad/Puerto de destino".to_owned(),
                            data,
                            on_change,
                        )}
                    </div>
                    <div class="form-row">
                        <label for="status">"Estado"</label>
                        <select
                            id="status"
                            class="select"
                            on:change=move |ev| {
                                on_change.run((VehicleField::Status, event_target_value(&ev)))
                            }
                        >
                            <option
                                value=""
                                disabled=true
                                prop:selected=move || data.with(|r| status_selected(r, ""))
                            >
                                "Seleccionar estado"
                            </option>
                            {VehicleStatus::ALL
                                .into_iter()
                                .map(|status| view! {
                                    <option
                                        value=status.value()
                                        prop:selected=move || {
                                            data.with(|r| status_selected(r, status.value()))
                                        }
                                    >
                                        {status.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <button
                        class="btn btn-outline btn-block"
                        on:click=move |_| on_generate_report.run(())
                    >
                        "Generar reporte"
                    </button>
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h2 class="card-title">"DATOS EN TIEMPO REAL"</h2>
                </div>
                <div class="card-body">
                    <div class="form-row">
                        <label for="identifier">{move || vehicle_type.get().identifier_label()}</label>
                        {field_input(
                            VehicleField::Identifier,
                            move || vehicle_type.get().identifier_placeholder(),
                            data,
                            on_change,
                        )}
                    </div>
                    <div class="form-row">
                        <label for="speed">"Velocidad"</label>
                        {field_with_unit(
                            VehicleField::Speed,
                            || "0".to_owned(),
                            move || vehicle_type.get().speed_unit(),
                            data,
                            on_change,
                        )}
                    </div>
                    <div class="form-row">
                        <label for="heading">"Rumbo"</label>
                        {field_with_unit(VehicleField::Heading, || "0".to_owned(), || "°", data, on_change)}
                    </div>
                    <Show when=move || vehicle_type.get().has_altitude()>
                        <div class="form-row">
                            <label for="altitude">"Altitud"</label>
                            {field_with_unit(VehicleField::Altitude, || "0".to_owned(), || "ft", data, on_change)}
                        </div>
                    </Show>
                    <div class="form-row">
                        <label for="flagCompany">{move || vehicle_type.get().flag_company_label()}</label>
                        {field_input(
                            VehicleField::FlagCompany,
                            move || vehicle_type.get().flag_company_placeholder().to_owned(),
                            data,
                            on_change,
                        )}
                    </div>
                </div>
            </section>
        </div>
    }
}
