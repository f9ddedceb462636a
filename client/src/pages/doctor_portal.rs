//! Doctor portal: look up an application by code and certify it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::doctor_certification_form::DoctorCertificationForm;
use crate::components::portal_header::PortalHeader;
use crate::net::api;
use crate::net::types::Role;
use crate::state::doctor::{PatientRecord, patient_from_lookup, validate_lookup_code};
use crate::state::session::SessionState;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::abort_scope::AbortScope;
use crate::util::route_guard::{guard_allows, install_role_guard};

const ALLOWED: &[Role] = &[Role::Doctor];

fn info(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details-field">
            <p class="details-field__label">{label}</p>
            <p class="details-field__value">{value}</p>
        </div>
    }
}

#[component]
pub fn DoctorPortal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = AbortScope::for_component();
    install_role_guard(session, ALLOWED, use_navigate());
    let allowed = guard_allows(session, ALLOWED);

    let code = RwSignal::new(String::new());
    let patient = RwSignal::new(None::<PatientRecord>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let search = move || {
        if loading.get_untracked() {
            return;
        }
        let lookup_code = match validate_lookup_code(&code.get_untracked()) {
            Ok(c) => c,
            Err(message) => {
                notify_error(toasts, message);
                return;
            }
        };
        loading.set(true);
        patient.set(None);
        error.set(None);
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = api::lookup_application_for_doctor(&lookup_code).await;
            scope.apply(|| {
                loading.set(false);
                let outcome = result.map_err(|e| e.to_string()).and_then(|found| patient_from_lookup(found).map_err(str::to_owned));
                match outcome {
                    Ok(record) => {
                        patient.set(Some(record));
                        notify_success(toasts, "Patient application found!");
                    }
                    Err(message) => {
                        error.set(Some(message.clone()));
                        notify_error(toasts, message);
                    }
                }
            });
        });
    };
    let search = StoredValue::new(search);

    let on_certified = Callback::new(move |()| {
        patient.update(|p| {
            if let Some(p) = p.as_mut() {
                p.is_certified = true;
            }
        });
    });

    let patient_panel = move || {
        patient.get().map(|p| {
            let certified = p.is_certified;
            view! {
                <section class="panel">
                    <h2>"Patient Information"</h2>
                    <div class="details-grid">
                        {info("Full Name", p.display_name())}
                        {info("Date of Birth", p.dob.clone())}
                        {info("TRN", p.trn.clone())}
                        {info("Gender", p.gender.clone())}
                        {info("Phone", p.phone.clone())}
                        {info("Parish", p.parish.clone())}
                        {info("Address", p.address.clone())}
                    </div>
                    <Show when=move || certified>
                        <p class="status status--approved">"This application has been certified."</p>
                    </Show>
                </section>
                <DoctorCertificationForm patient=p on_certified=on_certified />
            }
        })
    };

    view! {
        <Show when=allowed fallback=|| view! { <div class="portal-page portal-page--waiting"></div> }>
            <div class="portal-page">
                <PortalHeader title="Doctor Portal" />
                <main class="portal-page__main portal-page__main--narrow">
                    <section class="panel">
                        <h2>"Patient Application Lookup"</h2>
                        <p class="panel__description">
                            "Enter the patient's application code to view and certify their application"
                        </p>
                        <div class="lookup-bar">
                            <input
                                class="form-field__input"
                                aria-label="Application Code"
                                placeholder="Enter application code (e.g., NHF-20251019-ABC123)"
                                disabled=move || loading.get()
                                prop:value=move || code.get()
                                on:input=move |ev| code.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        search.with_value(|f| f());
                                    }
                                }
                            />
                            <button
                                class="btn btn--primary"
                                disabled=move || loading.get()
                                on:click=move |_| search.with_value(|f| f())
                            >
                                {move || if loading.get() { "Searching..." } else { "Search" }}
                            </button>
                        </div>
                        <Show when=move || error.get().is_some()>
                            <p class="portal-page__error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                    </section>
                    {patient_panel}
                </main>
            </div>
        </Show>
    }
}
