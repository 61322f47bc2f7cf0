use dioxus::prelude::*;

use crate::client::{component::Header, constant::SITE_NAME, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(
        div {
            class: "flex flex-col min-h-screen",
            Header {}
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
            footer {
                class: "footer footer-center p-4 text-xs opacity-60",
                p { "{SITE_NAME} crew portal. Not for real-world navigation." }
            }
        }
    )
}
