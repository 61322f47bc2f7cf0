use dioxus::prelude::*;

use crate::{
    client::{component::Page, constant::SITE_NAME, model::cache::Cache},
    model::traffic::TrafficListDto,
};

#[cfg(feature = "web")]
use crate::client::{api::portal::get_active_flights, constant::TRAFFIC_REFRESH_SECS};

#[component]
pub fn ActiveFlights() -> Element {
    let mut traffic = use_signal(Cache::<TrafficListDto>::default);
    let mut global = use_signal(|| false);
    let mut tick = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        use_future(move || async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(TRAFFIC_REFRESH_SECS * 1_000).await;
                tick.set(tick() + 1);
            }
        });

        let future = use_resource(move || async move {
            let _ = tick();
            get_active_flights(global()).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                traffic.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "Live map | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 max-w-6xl mx-auto",
            div {
                class: "flex justify-between items-center",
                h1 {
                    class: "text-2xl",
                    "Active flights "
                    if let Some(list) = traffic().data() {
                        span { class: "badge badge-primary", "{list.count}" }
                    }
                }
                label {
                    class: "label cursor-pointer gap-2",
                    span { class: "label-text", "Include VATSIM and IVAO" }
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: global(),
                        onchange: move |evt| global.set(evt.checked()),
                    }
                }
            }
            match traffic() {
                Cache::NotFetched => rsx! { span { class: "loading loading-dots" } },
                Cache::Error(e) => rsx! { p { class: "text-error", "{e}" } },
                Cache::Fetched(list) if list.flights.is_empty() => rsx! {
                    p { class: "opacity-60", "Nobody is flying right now." }
                },
                Cache::Fetched(list) => rsx! {
                    table {
                        class: "table table-sm",
                        thead {
                            tr {
                                th { "Callsign" }
                                th { "Pilot" }
                                th { "Route" }
                                th { "Aircraft" }
                                th { "Altitude" }
                                th { "GS" }
                                th { "Phase" }
                                th { "Source" }
                            }
                        }
                        tbody {
                            for flight in list.flights {
                                tr {
                                    key: "{flight.source}-{flight.callsign}",
                                    td { class: "font-mono", "{flight.callsign}" }
                                    td { "{flight.pilot_name}" }
                                    td { "{flight.departure} → {flight.arrival}" }
                                    td { "{flight.aircraft}" }
                                    td { {format!("{:.0} ft", flight.altitude)} }
                                    td { {format!("{:.0} kt", flight.ground_speed)} }
                                    td { {flight.phase.clone().unwrap_or_default()} }
                                    td { span { class: "badge badge-outline", "{flight.source}" } }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
