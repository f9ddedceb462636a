//! Applicant portal: application status, submission, and the member card.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page looks up the applicant's own application, then its
//! approval status, then (only when approved) the member record. Each step
//! is a sequential await inside one task; responses arriving after the page
//! unmounts are dropped by the page's `AbortScope`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::application_form::ApplicationForm;
use crate::components::digital_card::DigitalCard;
use crate::components::portal_header::PortalHeader;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{ApprovalStatus, Role};
use crate::state::applicant::{ApplicantIdentity, ApplicantStage, ApplicantState, ApplicantTab, find_own_application};
use crate::state::session::SessionState;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::abort_scope::AbortScope;
use crate::util::route_guard::{guard_allows, install_role_guard};

const ALLOWED: &[Role] = &[Role::Applicant];
const LOAD_FAILED: &str = "Failed to load your data.";

#[component]
pub fn ApplicantPortal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = AbortScope::for_component();
    install_role_guard(session, ALLOWED, use_navigate());
    let allowed = guard_allows(session, ALLOWED);

    let state = RwSignal::new(ApplicantState::loading());
    let tab = RwSignal::new(ApplicantTab::default());
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if !allowed() || requested.get_untracked() {
            return;
        }
        requested.set(true);
        let Some(user) = session.get_untracked().user else {
            return;
        };
        load_applicant_data(ApplicantIdentity::from_session(&user), state, tab, toasts, scope.clone());
    });

    let on_submitted = Callback::new(move |(code, trn): (String, String)| {
        notify_success(toasts, format!("Application submitted successfully! Code: {code}"));
        state.update(|s| s.record_submission(code, &trn));
        tab.set(ApplicantTab::Application);
    });

    let stage = move || state.with(ApplicantState::stage);
    let status_class = move || match stage() {
        ApplicantStage::Approved => "status status--approved",
        ApplicantStage::Rejected => "status status--rejected",
        ApplicantStage::Pending | ApplicantStage::NotApplied => "status status--pending",
    };

    // Narrow slices so a status write never rebuilds a half-filled form.
    let can_submit = Memo::new(move |_| state.with(ApplicantState::can_submit));
    let headline = Memo::new(move |_| state.with(ApplicantState::headline));
    let summary = Memo::new(move |_| {
        state.with(|s| s.application.as_ref().map(|app| (app.code.clone(), s.status, s.stage())))
    });

    let application_tab = move || {
        view! {
            <section class="panel">
                <h2>"Health Fund Application"</h2>
                <p class="panel__description">{move || headline.get()}</p>
                {move || {
                    summary
                        .get()
                        .map(|(code, status, stage)| {
                            let unresolved = stage == ApplicantStage::Pending;
                            view! {
                                <div class="application-summary">
                                    <p>
                                        <strong>"Application Code: "</strong>
                                        {code}
                                    </p>
                                    <p>
                                        <strong>"Status: "</strong>
                                        <span class=status_class>{status.as_str()}</span>
                                    </p>
                                    <Show when=move || unresolved>
                                        <p class="muted">
                                            "You cannot submit another application until this one is resolved."
                                        </p>
                                    </Show>
                                </div>
                            }
                        })
                }}
                <Show when=move || can_submit.get()>
                    <ApplicationForm on_submitted=on_submitted />
                </Show>
            </section>
        }
    };

    let card_tab = move || {
        let current = state.get();
        if current.card_available() {
            view! { <DigitalCard member=current.member.clone() /> }.into_any()
        } else {
            view! {
                <section class="panel">
                    <h2>"Digital NHF Card"</h2>
                    <p class="panel__description">{current.card_message()}</p>
                </section>
            }
            .into_any()
        }
    };

    let approved = move || stage() == ApplicantStage::Approved;

    view! {
        <Show when=allowed fallback=|| view! { <div class="portal-page portal-page--waiting"></div> }>
            <div class="portal-page">
                <PortalHeader title="Applicant Portal" />
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <p class="portal-page__loading">"Loading your data..."</p> }
                >
                    <main class="portal-page__main">
                        <nav class="tabs">
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == ApplicantTab::Application
                                disabled=approved
                                on:click=move |_| tab.set(ApplicantTab::Application)
                            >
                                "Application"
                            </button>
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == ApplicantTab::Card
                                disabled=move || !approved()
                                on:click=move |_| tab.set(ApplicantTab::Card)
                            >
                                "View Card"
                            </button>
                        </nav>
                        <Show when=move || state.with(|s| s.error.is_some())>
                            <p class="portal-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                        </Show>
                        {move || match tab.get() {
                            ApplicantTab::Application => application_tab().into_any(),
                            ApplicantTab::Card => card_tab().into_any(),
                        }}
                    </main>
                </Show>
            </div>
        </Show>
    }
}

fn load_applicant_data(
    identity: ApplicantIdentity,
    state: RwSignal<ApplicantState>,
    tab: RwSignal<ApplicantTab>,
    toasts: RwSignal<ToastState>,
    scope: AbortScope,
) {
    leptos::task::spawn_local(async move {
        let result = fetch_applicant_data(&identity, state, &scope).await;
        scope.apply(|| {
            if result.is_err() {
                notify_error(toasts, LOAD_FAILED);
            }
            state.update(|s| {
                s.loading = false;
                if result.is_err() {
                    s.error = Some(LOAD_FAILED.to_owned());
                }
            });
            tab.set(state.with_untracked(ApplicantState::default_tab));
        });
    });
}

/// Runs the lookup chain, writing each result into `state` while `scope` is live.
async fn fetch_applicant_data(
    identity: &ApplicantIdentity,
    state: RwSignal<ApplicantState>,
    scope: &AbortScope,
) -> Result<(), ApiError> {
    let records = api::fetch_applications(&identity.query_pairs()).await?;
    let Some(found) = find_own_application(records, identity) else {
        return Ok(());
    };
    let code = found.code.clone();
    let trn = found.trn.clone();
    if !scope.apply(|| state.update(|s| s.found(found))) {
        return Ok(());
    }

    match api::fetch_application_details(&code).await {
        Ok(details) => {
            if details.approval.is_some() {
                let status = details.approval_status();
                scope.apply(|| state.update(|s| s.status = status));
            }
        }
        // A missing review record leaves the status as listed.
        Err(ApiError::Backend { .. }) => {}
        Err(e) => return Err(e),
    }

    let approved = state.try_with_untracked(|s| s.status == ApprovalStatus::Approved).unwrap_or(false);
    let Some(trn) = trn.filter(|t| approved && !t.trim().is_empty()) else {
        return Ok(());
    };
    if let Some(member) = api::fetch_member(&trn).await? {
        scope.apply(|| state.update(|s| s.member = Some(member)));
    }
    Ok(())
}
