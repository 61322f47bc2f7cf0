use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthState, router::Route};

#[cfg(feature = "web")]
use crate::client::api::auth::get_session;

#[component]
pub fn App() -> Element {
    let auth = use_context_provider(|| Signal::new(AuthState::Initializing));

    // Resolve the session once on load
    #[cfg(feature = "web")]
    {
        let mut auth = auth;
        let session = use_resource(get_session);

        use_effect(move || {
            if let Some(result) = &*session.read() {
                auth.set(match result {
                    Ok(pilot) => AuthState::from(pilot.clone()),
                    Err(e) => AuthState::Error(e.clone()),
                });
            }
        });
    }
    #[cfg(not(feature = "web"))]
    let _ = auth;

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Virtual airline crew portal"
        }
        document::Link { rel: "stylesheet", href: "/tailwind.css" }
        Router::<Route> {}
    }
}
