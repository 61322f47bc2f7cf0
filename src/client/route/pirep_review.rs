use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::Page, constant::SITE_NAME, model::cache::Cache},
    model::{api::PageDto, pirep::PirepDto},
};

#[cfg(feature = "web")]
use crate::client::api::admin::{get_pireps, review_pirep};

const PAGE_SIZE: u64 = 20;

/// Admin queue of submitted PIREPs.
///
/// Pending reports can be approved or denied inline; denial asks for a reason that is
/// passed on to the pilot as the admin comment.
#[component]
pub fn PirepReview() -> Element {
    let mut status = use_signal(|| "pending");
    let mut page = use_signal(|| 1u64);
    let mut pireps = use_signal(Cache::<PageDto<PirepDto>>::default);
    let refetch = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch();
            get_pireps(status(), page(), PAGE_SIZE).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                pireps.set(result.clone().into());
            }
        });
    }

    let total_pages = pireps().data().map(|p| p.total_pages.max(1)).unwrap_or(1);

    rsx! {
        Title { "PIREP review | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 max-w-6xl mx-auto",
            div {
                role: "tablist",
                class: "tabs tabs-boxed w-fit",
                for value in ["pending", "approved", "denied"] {
                    a {
                        key: "{value}",
                        role: "tab",
                        class: if status() == value { "tab tab-active capitalize" } else { "tab capitalize" },
                        onclick: move |_| {
                            status.set(value);
                            page.set(1);
                            pireps.set(Cache::NotFetched);
                        },
                        "{value}"
                    }
                }
            }
            match pireps() {
                Cache::NotFetched => rsx! { span { class: "loading loading-dots" } },
                Cache::Error(e) => rsx! { p { class: "text-error", "{e}" } },
                Cache::Fetched(result) if result.items.is_empty() => rsx! {
                    p { class: "opacity-60", "Nothing here." }
                },
                Cache::Fetched(result) => rsx! {
                    table {
                        class: "table table-sm",
                        thead {
                            tr {
                                th { "Submitted" }
                                th { "Pilot" }
                                th { "Flight" }
                                th { "Aircraft" }
                                th { "Landing" }
                                th { "Score" }
                                th { "Profit" }
                                th {}
                            }
                        }
                        tbody {
                            for pirep in result.items {
                                PirepRow { key: "{pirep.id}", pirep, refetch }
                            }
                        }
                    }
                },
            }
            div {
                class: "join self-center",
                button {
                    class: "join-item btn btn-sm",
                    disabled: page() <= 1,
                    onclick: move |_| page.set(page() - 1),
                    "«"
                }
                button { class: "join-item btn btn-sm", "Page {page} of {total_pages}" }
                button {
                    class: "join-item btn btn-sm",
                    disabled: page() >= total_pages,
                    onclick: move |_| page.set(page() + 1),
                    "»"
                }
            }
        }
    }
}

#[component]
fn PirepRow(pirep: PirepDto, mut refetch: Signal<u32>) -> Element {
    let mut busy = use_signal(|| false);
    let mut reason = use_signal(String::new);

    let id = pirep.id;
    let pending = pirep.status == "pending";
    let submitted = pirep.submitted_at.format("%Y-%m-%d %H:%MZ").to_string();
    let duration = format!("{}h{:02}m", pirep.flight_time / 60, pirep.flight_time % 60);

    let mut review = move |decision: &'static str| {
        let comment = Some(reason().trim().to_string()).filter(|c| !c.is_empty());
        if decision == "denied" && comment.is_none() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match review_pirep(id, decision, comment).await {
                Ok(_) => refetch.set(refetch() + 1),
                Err(e) => tracing::error!("Failed to review PIREP {}: {}", id, e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "web"))]
        tracing::debug!("PIREP {} review skipped outside the browser: {:?}", id, comment);
    };

    rsx! {
        tr {
            td { class: "text-xs", "{submitted}" }
            td { "{pirep.pilot_name}" }
            td {
                p { class: "font-mono", "{pirep.flight_number}" }
                p { class: "text-xs opacity-70", "{pirep.departure_icao} → {pirep.arrival_icao} · {duration}" }
            }
            td { "{pirep.aircraft_type}" }
            td { {format!("{:.0} fpm {}", pirep.landing_rate, pirep.landing_grade)} }
            td { "{pirep.score}" }
            td { class: if pirep.real_profit < 0 { "text-error" } else { "text-success" }, "{pirep.real_profit}" }
            td {
                if pending {
                    div {
                        class: "flex gap-1 items-center",
                        input {
                            class: "input input-bordered input-xs w-32",
                            placeholder: "Reason",
                            value: "{reason}",
                            oninput: move |evt| reason.set(evt.value()),
                        }
                        button {
                            class: "btn btn-success btn-xs",
                            disabled: busy(),
                            onclick: move |_| review("approved"),
                            "Approve"
                        }
                        button {
                            class: "btn btn-error btn-xs",
                            disabled: busy() || reason().trim().is_empty(),
                            onclick: move |_| review("denied"),
                            "Deny"
                        }
                    }
                } else if let Some(comment) = pirep.admin_comments.clone() {
                    span { class: "text-xs opacity-70", "{comment}" }
                }
            }
        }
    }
}
