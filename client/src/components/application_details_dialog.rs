//! Read-only review dialog for one application.
//!
//! Renders the application/certification/approval triple in four panels and
//! hands approve/reject back to the staff portal.

use leptos::prelude::*;

use crate::net::types::{ApplicationDetails, Decision};
use crate::util::format::{PLACEHOLDER, capitalize_first, or_placeholder, timestamp_or_placeholder};

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details-field">
            <p class="details-field__label">{label}</p>
            <p class="details-field__value">{value}</p>
        </div>
    }
}

#[component]
pub fn ApplicationDetailsDialog(
    details: ApplicationDetails,
    #[prop(into)] busy: Signal<bool>,
    on_close: Callback<()>,
    on_decide: Callback<(String, Decision)>,
) -> impl IntoView {
    let conditions = details.condition_list();
    let status = details.approval_status();
    let ApplicationDetails { application: app, certification, approval } = details;
    let approval = approval.unwrap_or_default();
    let code = app.code.clone();
    let has_code = !code.trim().is_empty();

    let gender = app
        .gender
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map_or_else(|| PLACEHOLDER.to_owned(), capitalize_first);

    let certification_panel = match certification {
        Some(cert) => view! {
            <div class="details-grid">
                {field("Doctor Name", or_placeholder(cert.doctor_name.as_deref()))}
                {field("MCJ Reg No", or_placeholder(cert.mcj_reg_no.as_deref()))}
                {field("Office Address", or_placeholder(cert.office_address.as_deref()))}
                {field("Office Phone", or_placeholder(cert.office_phone.as_deref()))}
                {field("Parish", or_placeholder(cert.parish.as_deref()))}
                {field("Certification Date", or_placeholder(cert.certification_date.as_deref()))}
            </div>
        }
        .into_any(),
        None => view! {
            <p class="details-empty">"No certification data available for this application."</p>
        }
        .into_any(),
    };

    let conditions_panel = if conditions.is_empty() {
        view! { <p class="details-empty">"No conditions listed."</p> }.into_any()
    } else {
        conditions
            .into_iter()
            .map(|c| view! { <div class="details-condition">{c}</div> })
            .collect_view()
            .into_any()
    };

    let decide = move |decision: Decision| {
        let code = code.clone();
        move |_: leptos::ev::MouseEvent| {
            if has_code {
                on_decide.run((code.clone(), decision));
            }
        }
    };
    let button_label = move |idle: &'static str| move || if busy.get() { "Processing..." } else { idle };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--details" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"Application Details"</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <p class="dialog__subtitle">"Review complete application information before approval"</p>

                <section class="details-section">
                    <h3>"Personal Information"</h3>
                    <div class="details-grid">
                        {field("Full Name", or_placeholder(app.full_name.as_deref()))}
                        {field("TRN", or_placeholder(app.trn.as_deref()))}
                        {field("Date of Birth", or_placeholder(app.dob.as_deref()))}
                        {field("Gender", gender)}
                        {field("Phone", or_placeholder(app.phone.as_deref()))}
                        {field("Parish", or_placeholder(app.parish.as_deref()))}
                        {field("Mailing Address", or_placeholder(app.address.as_deref()))}
                        {field("Submitted At", timestamp_or_placeholder(app.created_at.as_deref()))}
                    </div>
                </section>

                <section class="details-section">
                    <h3>"Medical Condition(s)"</h3>
                    {conditions_panel}
                </section>

                <section class="details-section">
                    <h3>"Doctor Certification"</h3>
                    {certification_panel}
                </section>

                <section class="details-section">
                    <h3>"Approval Information"</h3>
                    <div class="details-grid">
                        {field("Status", capitalize_first(status.as_str()))}
                        {field("Reviewed By", or_placeholder(approval.reviewer_username.as_deref()))}
                        {field("Reviewed At", timestamp_or_placeholder(approval.reviewed_at.as_deref()))}
                        {field("Reason", or_placeholder(approval.reason.as_deref()))}
                    </div>
                </section>

                <div class="dialog__actions">
                    <button
                        class="btn btn--danger"
                        disabled=move || !has_code || busy.get()
                        on:click=decide(Decision::Rejected)
                    >
                        {button_label("Reject Application")}
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !has_code || busy.get()
                        on:click=decide(Decision::Approved)
                    >
                        {button_label("Approve Application")}
                    </button>
                </div>
            </div>
        </div>
    }
}
