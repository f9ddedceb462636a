//! Staff portal: pending-application queue with review and decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decision flow: post `{app_code, action, reviewer_username}`, refresh the
//! list, refresh the open dialog if it still shows the same code, then close
//! the dialog whatever the outcome.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::application_details_dialog::ApplicationDetailsDialog;
use crate::components::portal_header::PortalHeader;
use crate::config::STAFF_PAGE_SIZE;
use crate::net::api;
use crate::net::types::{Decision, Role};
use crate::state::session::SessionState;
use crate::state::staff::{ApplicationRow, StaffState, approval_request, decision_toast};
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::abort_scope::AbortScope;
use crate::util::format::display_timestamp;
use crate::util::route_guard::{guard_allows, install_role_guard};

const ALLOWED: &[Role] = &[Role::Staff];

fn list_query() -> Vec<(&'static str, String)> {
    vec![("limit", STAFF_PAGE_SIZE.to_string())]
}

/// Reload the list into `state`. Failures surface as a toast.
async fn refresh_list(state: RwSignal<StaffState>, toasts: RwSignal<ToastState>, scope: &AbortScope) {
    let result = api::fetch_applications(&list_query()).await;
    scope.apply(|| {
        state.update(|s| {
            s.loading = false;
            match result {
                Ok(records) => {
                    s.records = records;
                    s.error = None;
                }
                Err(e) => {
                    s.error = Some(e.to_string());
                    notify_error(toasts, e.to_string());
                }
            }
        });
    });
}

#[component]
pub fn StaffPortal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = AbortScope::for_component();
    install_role_guard(session, ALLOWED, use_navigate());
    let allowed = guard_allows(session, ALLOWED);

    let state = RwSignal::new(StaffState { loading: true, ..StaffState::default() });
    let requested = RwSignal::new(false);

    let load_scope = scope.clone();
    Effect::new(move || {
        if !allowed() || requested.get_untracked() {
            return;
        }
        requested.set(true);
        let scope = load_scope.clone();
        leptos::task::spawn_local(async move { refresh_list(state, toasts, &scope).await });
    });

    let view_scope = scope.clone();
    let on_view = Callback::new(move |code: String| {
        if !state.try_update(|s| s.begin(&code)).unwrap_or(false) {
            return;
        }
        let scope = view_scope.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_application_details(&code).await;
            scope.apply(|| {
                state.update(|s| {
                    s.finish_lookup();
                    match result {
                        Ok(details) => s.open_details(details),
                        Err(e) => notify_error(toasts, e.to_string()),
                    }
                });
            });
        });
    });

    let on_decide = Callback::new(move |(code, decision): (String, Decision)| {
        let request = match session.with_untracked(|s| approval_request(&code, decision, s)) {
            Ok(request) => request,
            Err(message) => {
                notify_error(toasts, message);
                return;
            }
        };
        if !state.try_update(|s| s.begin(&code)).unwrap_or(false) {
            return;
        }
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::submit_decision(&request).await;
            if !scope.is_live() {
                return;
            }
            match outcome {
                Ok(()) => {
                    notify_success(toasts, decision_toast(decision));
                    state.update(|s| s.record_decision(&code, decision));
                    refresh_list(state, toasts, &scope).await;
                    if state.try_with_untracked(|s| s.should_refresh_detail(&code)).unwrap_or(false)
                        && let Ok(fresh) = api::fetch_application_details(&code).await
                    {
                        scope.apply(|| state.update(|s| s.refresh_detail(fresh)));
                    }
                }
                Err(e) => notify_error(toasts, e.to_string()),
            }
            scope.apply(|| state.update(StaffState::finish_decision));
        });
    });

    let on_close = Callback::new(move |()| state.update(StaffState::close_dialog));

    let row_view = move |row: ApplicationRow| {
        let code = row.code.clone();
        let busy_code = row.code.clone();
        view! {
            <article class="application-row">
                <div class="application-row__info">
                    <div class="application-row__title">
                        <h3>{row.patient_name}</h3>
                        <span class="badge">{row.code}</span>
                    </div>
                    <div class="application-row__meta">
                        <p><span class="application-row__label">"TRN: "</span>{row.trn}</p>
                        <p><span class="application-row__label">"Doctor: "</span>{row.doctor_name}</p>
                        <p>
                            <span class="application-row__label">"Submitted: "</span>
                            {display_timestamp(&row.submitted_date)}
                        </p>
                        <p><span class="application-row__label">"Conditions: "</span>{row.conditions_count}</p>
                    </div>
                </div>
                <button
                    class="btn"
                    disabled=move || state.with(|s| s.is_busy(&busy_code))
                    on:click=move |_| on_view.run(code.clone())
                >
                    "View Details"
                </button>
            </article>
        }
    };

    // Busy flips and list reloads leave these untouched, so the dialog stays mounted.
    let dialog_open = Memo::new(move |_| state.with(|s| s.dialog_open));
    let selected = Memo::new(move |_| state.with(|s| s.selected.clone()));

    let dialog = move || {
        if !dialog_open.get() {
            return None;
        }
        let details = selected.get()?;
        let code = details.application.code.clone();
        let busy = Signal::derive(move || state.with(|s| s.is_busy(&code)));
        Some(view! {
            <ApplicationDetailsDialog details=details busy=busy on_close=on_close on_decide=on_decide />
        })
    };

    view! {
        <Show when=allowed fallback=|| view! { <div class="portal-page portal-page--waiting"></div> }>
            <div class="portal-page">
                <PortalHeader title="NHF Staff Portal" />
                <main class="portal-page__main portal-page__main--wide">
                    <section class="panel">
                        <div class="panel__header">
                            <div>
                                <h2>"Applications"</h2>
                                <p class="panel__description">"Review and process submitted applications"</p>
                            </div>
                            <span class="badge badge--count">
                                {move || format!("{} Applications", state.with(|s| s.pending_rows().len()))}
                            </span>
                        </div>
                        <Show
                            when=move || !state.with(|s| s.loading)
                            fallback=|| view! { <p class="portal-page__loading">"Loading applications..."</p> }
                        >
                            {move || {
                                let rows = state.with(StaffState::pending_rows);
                                if rows.is_empty() {
                                    view! {
                                        <div class="empty-state">
                                            <h3>"No Pending Applications"</h3>
                                            <p class="muted">"All applications have been processed"</p>
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter().map(row_view).collect_view().into_any()
                                }
                            }}
                        </Show>
                    </section>
                </main>
                {dialog}
            </div>
        </Show>
    }
}
