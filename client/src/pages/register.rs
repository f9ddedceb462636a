//! Account registration for all three roles.
//!
//! The role comes from `?role=`; unknown or missing values register an
//! applicant. Success returns to the login route.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::types::Role;
use crate::state::registration::{RegistrationForm, fields_for};
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::abort_scope::AbortScope;
use crate::util::route_guard::LOGIN_PATH;

pub const REGISTERED: &str = "Registration successful! Please log in.";

fn role_from_query(raw: Option<&str>) -> Role {
    raw.and_then(Role::parse).unwrap_or(Role::Applicant)
}

type Getter = fn(&RegistrationForm) -> &String;
type Setter = fn(&mut RegistrationForm, String);

fn common_input(
    form: RwSignal<RegistrationForm>,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                required=true
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let scope = AbortScope::for_component();

    let role = Memo::new(move |_| role_from_query(query.with(|q| q.get("role")).as_deref()));
    let form = RwSignal::new(RegistrationForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let role = role.get_untracked();
        let payload = match form.with_untracked(|f| f.build(role)) {
            Ok(payload) => payload,
            Err(message) => {
                notify_error(toasts, message);
                return;
            }
        };
        busy.set(true);
        let scope = scope.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::register(role, &payload).await;
            scope.apply(|| {
                busy.set(false);
                match result {
                    Ok(()) => {
                        notify_success(toasts, REGISTERED);
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    }
                    Err(e) => notify_error(toasts, e.to_string()),
                }
            });
        });
    };

    let role_fields = move || {
        fields_for(role.get())
            .iter()
            .copied()
            .map(|field| {
                view! {
                    <label class="form-field">
                        <span class="form-field__label">{field.label()}</span>
                        <input
                            class="form-field__input"
                            type=field.input_type()
                            placeholder=field.placeholder()
                            required=true
                            prop:value=move || form.with(|f| f.field(field).to_owned())
                            on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                        />
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <a class="login-card__back" href=LOGIN_PATH>
                    "← Back to Login"
                </a>
                <h1>"Create Account"</h1>
                <p class="login-card__subtitle">{move || format!("Register as {}", role.get().article_label())}</p>
                <form class="login-form" on:submit=on_submit>
                    <div class="form-grid">
                        {common_input(form, "First Name", "text", "John", |f| &f.first_name, |f, v| f.first_name = v)}
                        {common_input(form, "Last Name", "text", "Doe", |f| &f.last_name, |f, v| f.last_name = v)}
                    </div>
                    {common_input(form, "Email", "email", "john@example.com", |f| &f.email, |f, v| f.email = v)}
                    {role_fields}
                    {common_input(form, "Password", "password", "", |f| &f.password, |f, v| f.password = v)}
                    {common_input(
                        form,
                        "Confirm Password",
                        "password",
                        "",
                        |f| &f.confirm_password,
                        |f, v| f.confirm_password = v,
                    )}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
