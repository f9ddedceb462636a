//! Applicant-facing health-fund application form.

use leptos::prelude::*;

use crate::net::api;
use crate::state::applicant::ApplicationDraft;
use crate::state::session::SessionState;
use crate::state::toast::{ToastState, notify_error};
use crate::util::abort_scope::AbortScope;

type Getter = fn(&ApplicationDraft) -> &String;
type Setter = fn(&mut ApplicationDraft, String);

fn draft_input(
    draft: RwSignal<ApplicationDraft>,
    label: &'static str,
    input_type: &'static str,
    required: bool,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}{required.then_some(" *")}</span>
            <input
                class="form-field__input"
                type=input_type
                required=required
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        </label>
    }
}

/// Collects an application and posts it; `on_submitted` receives the new
/// code and the TRN it was filed under.
#[component]
pub fn ApplicationForm(on_submitted: Callback<(String, String)>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = AbortScope::for_component();
    let draft = RwSignal::new(ApplicationDraft::for_session(session.get_untracked().user.as_ref()));
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let user_id = session.with_untracked(|s| s.user.as_ref().and_then(|u| u.id));
        let body = match draft.with_untracked(|d| d.build(user_id)) {
            Ok(body) => body,
            Err(message) => {
                notify_error(toasts, message);
                return;
            }
        };
        submitting.set(true);
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = api::submit_application(&body).await;
            scope.apply(|| {
                submitting.set(false);
                match result {
                    Ok(created) => {
                        session.update(|s| s.remember_trn(&body.trn));
                        draft.set(ApplicationDraft::default());
                        on_submitted.run((created.code, body.trn));
                    }
                    Err(e) => notify_error(toasts, e.to_string()),
                }
            });
        });
    };

    view! {
        <form class="application-form" on:submit=on_submit>
            <div class="form-grid">
                {draft_input(draft, "Full Name", "text", true, |d| &d.full_name, |d, v| d.full_name = v)}
                {draft_input(draft, "TRN", "text", true, |d| &d.trn, |d, v| d.trn = v)}
                {draft_input(draft, "Date of Birth", "date", true, |d| &d.dob, |d, v| d.dob = v)}
                <label class="form-field">
                    <span class="form-field__label">"Gender *"</span>
                    <select
                        class="form-field__input"
                        required=true
                        prop:value=move || draft.with(|d| d.gender.clone())
                        on:change=move |ev| draft.update(|d| d.gender = event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        <option value="male">"Male"</option>
                        <option value="female">"Female"</option>
                        <option value="other">"Other"</option>
                    </select>
                </label>
                {draft_input(draft, "Phone", "tel", false, |d| &d.phone, |d, v| d.phone = v)}
                {draft_input(draft, "Parish", "text", false, |d| &d.parish, |d, v| d.parish = v)}
                {draft_input(draft, "Mailing Address", "text", false, |d| &d.address, |d, v| d.address = v)}
            </div>
            <label class="form-field">
                <span class="form-field__label">"Medical Condition"</span>
                <textarea
                    class="form-field__input"
                    rows="3"
                    prop:value=move || draft.with(|d| d.condition.clone())
                    on:input=move |ev| draft.update(|d| d.condition = event_target_value(&ev))
                ></textarea>
            </label>
            <div class="form-actions">
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Application" }}
                </button>
            </div>
        </form>
    }
}
