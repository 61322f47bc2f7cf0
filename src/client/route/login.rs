use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlaneDeparture, Icon};

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::AuthState,
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::login;

#[component]
pub fn Login() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.push(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }

        submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        {
            let mut auth = auth;
            spawn(async move {
                match login(email(), password()).await {
                    Ok(pilot) => auth.set(AuthState::from(pilot)),
                    Err(e) => error.set(Some(e.message)),
                }
                submitting.set(false);
            });
        }
    };

    let state = auth.read().clone();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-4",
                        Icon { width: 96, height: 96, icon: FaPlaneDeparture }
                        p { class: "text-2xl", {SITE_NAME} }
                    }
                    form {
                        class: "flex flex-col gap-3 w-full max-w-sm",
                        onsubmit: on_submit,
                        input {
                            class: "input input-bordered w-full",
                            r#type: "email",
                            placeholder: "Email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(message) = error() {
                            p { class: "text-error text-sm", "{message}" }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            } else {
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    }
}
