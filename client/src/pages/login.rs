//! Login page: username/email + password against `POST /login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the root route and the target of every guard redirect. A visitor
//! who already holds a session record is forwarded to their portal.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{LoginRequest, Role};
use crate::state::session::SessionState;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::abort_scope::AbortScope;

pub const MISSING_CREDENTIALS: &str = "Enter your username and password.";

fn validate_login_input(identifier: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = identifier.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

fn register_href(role: Role) -> String {
    format!("/register?role={}", role.as_str())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let scope = AbortScope::for_component();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if let Some(role) = session.get().role() {
            navigate(role.home_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let typed = identifier.get_untracked();
        let request = match validate_login_input(&typed, &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notify_error(toasts, message);
                return;
            }
        };
        busy.set(true);
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = api::login(&request).await;
            scope.apply(|| {
                busy.set(false);
                match result {
                    Ok(response) => {
                        // The forwarding effect above navigates once the session changes.
                        let user = response.into_session(&typed);
                        notify_success(toasts, format!("Welcome, {}", user.username));
                        session.update(|s| s.sign_in(user));
                    }
                    Err(e) => notify_error(toasts, e.to_string()),
                }
            });
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"NHF Pulse Connect"</h1>
                <p class="login-card__subtitle">"Sign in to your portal"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Email or username"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"New here? Register as"</p>
                <div class="login-card__roles">
                    {Role::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <a class="login-card__role-link" href=register_href(role)>
                                    {role.article_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
