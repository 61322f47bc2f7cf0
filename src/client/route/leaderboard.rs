use dioxus::prelude::*;

use crate::{
    client::{component::Page, constant::SITE_NAME, model::cache::Cache},
    model::pilot::LeaderboardDto,
};

#[cfg(feature = "web")]
use crate::client::api::portal::get_leaderboard;

const KINDS: [(&str, &str); 3] = [
    ("all-time", "All time"),
    ("monthly", "This month"),
    ("credits", "Credits"),
];

#[component]
pub fn Leaderboard() -> Element {
    let mut kind = use_signal(|| "all-time");
    let mut board = use_signal(Cache::<LeaderboardDto>::default);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_leaderboard(kind()).await });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                board.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "Leaderboard | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 max-w-4xl mx-auto",
            div {
                role: "tablist",
                class: "tabs tabs-boxed w-fit",
                for (value, label) in KINDS {
                    a {
                        key: "{value}",
                        role: "tab",
                        class: if kind() == value { "tab tab-active" } else { "tab" },
                        onclick: move |_| {
                            kind.set(value);
                            board.set(Cache::NotFetched);
                        },
                        "{label}"
                    }
                }
            }
            match board() {
                Cache::NotFetched => rsx! { span { class: "loading loading-dots" } },
                Cache::Error(e) => rsx! { p { class: "text-error", "{e}" } },
                Cache::Fetched(board) if board.entries.is_empty() => rsx! {
                    p { class: "opacity-60", "No flights logged yet." }
                },
                Cache::Fetched(board) => rsx! {
                    table {
                        class: "table table-zebra",
                        thead {
                            tr {
                                th { "#" }
                                th { "Pilot" }
                                th { "Rank" }
                                th { "Hours" }
                                th { "Flights" }
                                th { "Credits" }
                            }
                        }
                        tbody {
                            for entry in board.entries {
                                tr {
                                    key: "{entry.pilot_id}",
                                    td { "{entry.position}" }
                                    td { "{entry.pilot_id} {entry.name}" }
                                    td { "{entry.rank}" }
                                    td { {format!("{:.1}", entry.hours)} }
                                    td { "{entry.flights}" }
                                    td { "{entry.credits}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
