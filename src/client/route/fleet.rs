use dioxus::prelude::*;

use crate::{
    client::{component::Page, constant::SITE_NAME, model::cache::Cache},
    model::fleet::AircraftDto,
};

#[cfg(feature = "web")]
use crate::client::api::portal::get_fleet;

/// Badge colour for an aircraft status.
fn status_class(status: &str) -> &'static str {
    match status {
        "Available" => "badge badge-success",
        "InFlight" => "badge badge-info",
        "Maintenance" => "badge badge-warning",
        "Grounded" => "badge badge-error",
        _ => "badge badge-ghost",
    }
}

#[component]
pub fn Fleet() -> Element {
    let mut fleet = use_signal(Cache::<Vec<AircraftDto>>::default);
    let mut filter = use_signal(String::new);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_fleet);

        use_effect(move || {
            if let Some(result) = &*future.read() {
                fleet.set(result.clone().into());
            }
        });
    }

    let needle = filter().trim().to_uppercase();

    rsx! {
        Title { "Fleet | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 max-w-5xl mx-auto",
            input {
                class: "input input-bordered w-full max-w-xs",
                placeholder: "Filter by type, registration or ICAO",
                value: "{filter}",
                oninput: move |evt| filter.set(evt.value()),
            }
            match fleet() {
                Cache::NotFetched => rsx! { span { class: "loading loading-dots" } },
                Cache::Error(e) => rsx! { p { class: "text-error", "{e}" } },
                Cache::Fetched(aircraft) => rsx! {
                    table {
                        class: "table table-zebra",
                        thead {
                            tr {
                                th { "Registration" }
                                th { "Type" }
                                th { "Location" }
                                th { "Condition" }
                                th { "Hours" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for ac in aircraft.into_iter().filter(|ac| {
                                needle.is_empty()
                                    || ac.registration.contains(&needle)
                                    || ac.aircraft_type.to_uppercase().contains(&needle)
                                    || ac.current_location.contains(&needle)
                            }) {
                                tr {
                                    key: "{ac.registration}",
                                    td { class: "font-mono", "{ac.registration}" }
                                    td { "{ac.aircraft_type}" }
                                    td { "{ac.current_location}" }
                                    td {
                                        progress {
                                            class: "progress w-24",
                                            value: "{ac.condition}",
                                            max: "100",
                                        }
                                    }
                                    td { {format!("{:.1}", ac.total_hours)} }
                                    td { span { class: status_class(&ac.status), "{ac.status}" } }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
