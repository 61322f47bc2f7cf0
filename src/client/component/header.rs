use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlaneDeparture, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthState, router::Route};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;

#[component]
pub fn Header() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let nav = navigator();

    let resolved = auth.read().is_resolved();
    let logged_in = auth.read().is_authenticated();
    let is_admin = auth.read().is_admin();
    let callsign = auth
        .read()
        .pilot()
        .map(|pilot| pilot.pilot_id.clone())
        .unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        {
            let mut auth = auth;
            spawn(async move {
                if let Err(e) = logout().await {
                    dioxus_logger::tracing::error!("Failed to log out: {}", e);
                }
                auth.set(AuthState::NotLoggedIn);
                nav.push(Route::Login {});
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = nav;
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Dashboard {},
                div {
                    class: "flex items-center gap-3",
                    Icon { width: 28, height: 28, icon: FaPlaneDeparture }
                    p { class: "md:text-xl text-wrap", {SITE_NAME} }
                }
            }
            Link { to: Route::Leaderboard {}, class: "link link-hover", "Leaderboard" }
            Link { to: Route::Fleet {}, class: "link link-hover", "Fleet" }
            if logged_in {
                Link { to: Route::ActiveFlights {}, class: "link link-hover", "Live map" }
            }
        }
        div {
            class: "flex items-center gap-2",
            if resolved && logged_in {
                span { class: "badge badge-ghost", "{callsign}" }
                if is_admin {
                    Link {
                        to: Route::PirepReview {},
                        class: "btn btn-outline",
                        "PIREPs"
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: on_logout,
                    "Logout"
                }
            } else if resolved {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Login"
                }
            }
        }
    })
}
