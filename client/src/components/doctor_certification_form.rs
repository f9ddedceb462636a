//! Certification form: dynamic condition rows plus the doctor's details.

use leptos::prelude::*;

use crate::net::api;
use crate::state::doctor::{CertificationDraft, ConditionField, PatientRecord};
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::abort_scope::AbortScope;

pub const CERTIFIED: &str = "Certification submitted successfully!";

type Getter = fn(&CertificationDraft) -> &String;
type Setter = fn(&mut CertificationDraft, String);

fn draft_input(
    draft: RwSignal<CertificationDraft>,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <label class="form-field" for=id>
            <span class="form-field__label">{label}</span>
            <input
                id=id
                class="form-field__input"
                type=input_type
                required=true
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        </label>
    }
}

/// `on_certified` fires after the backend accepts the certification.
#[component]
pub fn DoctorCertificationForm(patient: PatientRecord, on_certified: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = AbortScope::for_component();
    let draft = RwSignal::new(CertificationDraft::default());
    let submitting = RwSignal::new(false);
    let attestation = format!("I certify that {} has the following conditions:", patient.attestation_name());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let body = match draft.with_untracked(|d| d.build(&patient)) {
            Ok(body) => body,
            Err(message) => {
                notify_error(toasts, message);
                return;
            }
        };
        submitting.set(true);
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = api::submit_certification(&body).await;
            scope.apply(|| {
                submitting.set(false);
                match result {
                    Ok(()) => {
                        notify_success(toasts, CERTIFIED);
                        draft.set(CertificationDraft::default());
                        on_certified.run(());
                    }
                    Err(e) => notify_error(toasts, e.to_string()),
                }
            });
        });
    };

    // Rows re-render only when the count changes so inputs keep focus.
    let row_count = Memo::new(move |_| draft.with(|d| d.conditions.len()));
    let removable = Memo::new(move |_| draft.with(|d| d.conditions.can_remove()));
    let entry_value = move |index: usize, field: ConditionField| {
        draft.with(|d| {
            d.conditions
                .entries()
                .get(index)
                .map(|e| match field {
                    ConditionField::Name => e.name.clone(),
                    ConditionField::Severity => e.severity.clone(),
                })
                .unwrap_or_default()
        })
    };
    let condition_rows = move || {
        (0..row_count.get())
            .map(|index| {
                view! {
                    <div class="condition-row">
                        <label class="form-field">
                            <span class="form-field__label">{format!("Condition {}", index + 1)}</span>
                            <input
                                class="form-field__input"
                                placeholder="e.g., Diabetes Type 2"
                                required=true
                                prop:value=move || entry_value(index, ConditionField::Name)
                                on:input=move |ev| {
                                    draft.update(|d| d.conditions.update(index, ConditionField::Name, event_target_value(&ev)));
                                }
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Severity"</span>
                            <input
                                class="form-field__input"
                                placeholder="e.g., Moderate"
                                required=true
                                prop:value=move || entry_value(index, ConditionField::Severity)
                                on:input=move |ev| {
                                    draft.update(|d| d.conditions.update(index, ConditionField::Severity, event_target_value(&ev)));
                                }
                            />
                        </label>
                        <Show when=move || removable.get()>
                            <button
                                class="btn condition-row__remove"
                                type="button"
                                title="Remove condition"
                                on:click=move |_| draft.update(|d| d.conditions.remove(index))
                            >
                                "✕"
                            </button>
                        </Show>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <form class="certification-form" on:submit=on_submit>
            <h4 class="certification-form__attestation">{attestation}</h4>
            <div class="condition-list">{condition_rows}</div>
            <button class="btn" type="button" on:click=move |_| draft.update(|d| d.conditions.add())>
                "+ Add Another Condition"
            </button>

            <div class="form-grid">
                {draft_input(draft, "certificationDate", "Date *", "date", |d| &d.certification_date, |d, v| d.certification_date = v)}
                {draft_input(draft, "mcjRegNo", "MCJ Reg No. *", "text", |d| &d.mcj_reg_no, |d, v| d.mcj_reg_no = v)}
                {draft_input(draft, "doctorSurname", "Doctor's Surname *", "text", |d| &d.doctor_surname, |d, v| d.doctor_surname = v)}
                {draft_input(draft, "doctorFirstName", "Doctor's First Name *", "text", |d| &d.doctor_first_name, |d, v| d.doctor_first_name = v)}
                {draft_input(draft, "officeAddress", "Office Address *", "text", |d| &d.office_address, |d, v| d.office_address = v)}
                {draft_input(draft, "parish", "Parish *", "text", |d| &d.parish, |d, v| d.parish = v)}
                {draft_input(draft, "officePhone", "Office Phone *", "tel", |d| &d.office_phone, |d, v| d.office_phone = v)}
                {draft_input(draft, "signature", "Doctor Signature (Type Name) *", "text", |d| &d.signature, |d, v| d.signature = v)}
            </div>

            <p class="certification-form__count">
                "Total Number of Conditions: "
                {move || draft.with(|d| d.conditions.valid_count())}
            </p>

            <div class="form-actions">
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Certify & Submit to NHF" }}
                </button>
            </div>
        </form>
    }
}
