//! # Vehicle Type Selector
//!
//! Two tabs, one per vehicle type. Stateless: the selection comes in as a
//! signal and changes go out through the callback.

use leptos::prelude::*;
use tracker_domain::VehicleType;

use super::icons::VehicleIcon;

#[component]
pub fn VehicleTypeSelector(
    #[prop(into)] vehicle_type: Signal<VehicleType>,
    #[prop(into)] on_change: Callback<VehicleType>,
) -> impl IntoView {
    view! {
        <div class="tabs" role="tablist">
            {VehicleType::ALL
                .into_iter()
                .map(|option| {
                    let selected = move || vehicle_type.get() == option;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="tab-trigger"
                            class:active=selected
                            aria-selected=move || selected().to_string()
                            on:click=move |_| {
                                if vehicle_type.get_untracked() != option {
                                    on_change.run(option);
                                }
                            }
                        >
                            <VehicleIcon vehicle_type=option />
                            {option.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
