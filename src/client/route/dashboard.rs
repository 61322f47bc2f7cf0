use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::{auth::AuthState, cache::Cache},
    },
    model::{
        bid::{BidDto, CurrentBidDto},
        content::{CurrentDotmDto, NotamDto},
        pilot::PilotDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::portal::{cancel_bids, get_current_bid, get_dotm, get_notams};

/// Render NOTAM markdown to HTML.
fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all());
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let pilot = auth.read().pilot().cloned();

    let mut bid = use_signal(Cache::<CurrentBidDto>::default);
    let mut notams = use_signal(Cache::<Vec<NotamDto>>::default);
    let mut dotm = use_signal(Cache::<CurrentDotmDto>::default);
    let refetch_bid = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let mut auth = auth;
        let bid_future = use_resource(move || async move {
            let _ = refetch_bid();
            get_current_bid().await
        });
        let notam_future = use_resource(get_notams);
        let dotm_future = use_resource(get_dotm);

        use_effect(move || {
            if let Some(result) = &*bid_future.read() {
                // Session expired since the page loaded
                if result.as_ref().is_err_and(|e| e.is_unauthorized()) {
                    auth.set(AuthState::NotLoggedIn);
                }
                bid.set(result.clone().into());
            }
        });
        use_effect(move || {
            if let Some(result) = &*notam_future.read() {
                notams.set(result.clone().into());
            }
        });
        use_effect(move || {
            if let Some(result) = &*dotm_future.read() {
                dotm.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 max-w-5xl mx-auto",
            if let Some(pilot) = pilot {
                PilotSummary { pilot }
            }
            div {
                class: "grid md:grid-cols-2 gap-6",
                BidCard { bid: bid(), refetch: refetch_bid }
                DotmCard { dotm: dotm() }
            }
            NotamList { notams: notams() }
        }
    }
}

#[component]
fn PilotSummary(pilot: PilotDto) -> Element {
    let hours = format!("{:.1}", pilot.total_hours + pilot.transfer_hours);

    rsx! {
        div {
            class: "stats stats-vertical md:stats-horizontal shadow bg-base-200",
            div {
                class: "stat",
                div { class: "stat-title", "{pilot.pilot_id}" }
                div { class: "stat-value text-2xl", "{pilot.first_name} {pilot.last_name}" }
                div { class: "stat-desc", "{pilot.rank}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Hours" }
                div { class: "stat-value", "{hours}" }
                div { class: "stat-desc", "{pilot.total_flights} flights" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Balance" }
                div { class: "stat-value", "{pilot.balance} cr" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Location" }
                div { class: "stat-value", "{pilot.current_location}" }
                div { class: "stat-desc", "Base {pilot.home_base}" }
            }
        }
    }
}

#[component]
fn BidCard(bid: Cache<CurrentBidDto>, mut refetch: Signal<u32>) -> Element {
    let mut cancelling = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_cancel = move |_| {
        cancelling.set(true);
        #[cfg(feature = "web")]
        spawn(async move {
            match cancel_bids().await {
                Ok(_) => refetch.set(refetch() + 1),
                Err(e) => error.set(Some(e.message)),
            }
            cancelling.set(false);
        });
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Current booking" }
                match bid {
                    Cache::NotFetched => rsx! { span { class: "loading loading-dots" } },
                    Cache::Error(e) => rsx! { p { class: "text-error", "{e}" } },
                    Cache::Fetched(CurrentBidDto { bid: None }) => rsx! {
                        p { class: "opacity-60", "No active booking. Book a flight from the ACARS client." }
                    },
                    Cache::Fetched(CurrentBidDto { bid: Some(bid) }) => rsx! {
                        BidDetails { bid }
                        if let Some(message) = error() {
                            p { class: "text-error text-sm", "{message}" }
                        }
                        div {
                            class: "card-actions justify-end",
                            button {
                                class: "btn btn-error btn-outline btn-sm",
                                disabled: cancelling(),
                                onclick: on_cancel,
                                "Cancel booking"
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn BidDetails(bid: BidDto) -> Element {
    let expires = bid.expires_at.format("%Y-%m-%d %H:%MZ").to_string();
    let registration = bid.aircraft_registration.clone().unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col gap-1",
            p { class: "text-lg font-semibold", "{bid.flight_number} ({bid.callsign})" }
            p { "{bid.departure_icao} → {bid.arrival_icao}" }
            p { class: "opacity-70", "{bid.aircraft_type} {registration}" }
            if let Some(route) = bid.route.clone() {
                p { class: "font-mono text-xs opacity-70", "{route}" }
            }
            p { class: "text-xs opacity-60", "Expires {expires}" }
        }
    }
}

#[component]
fn DotmCard(dotm: Cache<CurrentDotmDto>) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Destination of the month" }
                match dotm {
                    Cache::NotFetched => rsx! { span { class: "loading loading-dots" } },
                    Cache::Error(e) => rsx! { p { class: "text-error", "{e}" } },
                    Cache::Fetched(CurrentDotmDto { dotm: None }) => rsx! {
                        p { class: "opacity-60", "No destination this month." }
                    },
                    Cache::Fetched(CurrentDotmDto { dotm: Some(dotm) }) => rsx! {
                        p { class: "text-3xl font-bold", "{dotm.airport_icao}" }
                        p { class: "badge badge-accent", "+{dotm.bonus_points} bonus" }
                        if let Some(description) = dotm.description {
                            p { class: "opacity-70", "{description}" }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn NotamList(notams: Cache<Vec<NotamDto>>) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-3",
            h2 { class: "text-xl", "NOTAMs" }
            match notams {
                Cache::NotFetched => rsx! { span { class: "loading loading-dots" } },
                Cache::Error(e) => rsx! { p { class: "text-error", "{e}" } },
                Cache::Fetched(notams) if notams.is_empty() => rsx! {
                    p { class: "opacity-60", "No active NOTAMs." }
                },
                Cache::Fetched(notams) => rsx! {
                    for notam in notams {
                        div {
                            key: "{notam.id}",
                            class: "collapse collapse-arrow bg-base-200",
                            input { r#type: "checkbox" }
                            div {
                                class: "collapse-title flex gap-2 items-center",
                                span { class: "badge badge-outline", "{notam.kind}" }
                                if let Some(icao) = notam.airport_icao.clone() {
                                    span { class: "badge badge-ghost", "{icao}" }
                                }
                                span { "{notam.title}" }
                            }
                            div {
                                class: "collapse-content prose max-w-none",
                                dangerous_inner_html: markdown_to_html(&notam.content)
                            }
                        }
                    }
                },
            }
        }
    }
}
