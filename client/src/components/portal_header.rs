//! Header bar shared by the three portals, with the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::toast::{ToastState, notify_success};
use crate::util::route_guard::LOGIN_PATH;

pub const LOGGED_OUT: &str = "You've been logged out successfully.";

#[component]
pub fn PortalHeader(title: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.update(SessionState::sign_out);
        notify_success(toasts, LOGGED_OUT);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="portal-header">
            <h1 class="portal-header__title">{title}</h1>
            <span class="portal-header__spacer"></span>
            <span class="portal-header__user">
                {move || session.get().username().map(str::to_owned).unwrap_or_default()}
            </span>
            <button class="btn portal-header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
