use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::AuthState,
    router::Route,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Admin,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permission: Permission::LoggedIn }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permission: Permission::Admin }
    }
}

#[component]
fn ProtectedLayout(permission: Permission) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let nav = navigator();

    let state = auth.read().clone();
    let resolved = state.is_resolved();
    let logged_in = state.is_authenticated();
    let permitted = match permission {
        Permission::LoggedIn => logged_in,
        Permission::Admin => state.is_admin(),
    };

    use_effect(use_reactive!(|(resolved, logged_in)| {
        if resolved && !logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        match state {
            AuthState::Initializing => rsx! { LoadingPage {} },
            AuthState::Error(e) => rsx! {
                ErrorPage { status: e.status, message: e.message }
            },
            _ if logged_in && !permitted => rsx! {
                ErrorPage { status: 403, message: "You don't have permission to view this page" }
            },
            _ if permitted => rsx! { Outlet::<Route> {} },
            // Redirecting to login
            _ => rsx! {},
        }
    }
}
