//! Digital member card with a TRN visibility toggle.
//!
//! The QR payload is the member record serialized as JSON. It is exposed on
//! the `data-qr-value` attribute of `.digital-card__qr`, where the page's QR
//! renderer picks it up.

#[cfg(test)]
#[path = "digital_card_test.rs"]
mod digital_card_test;

use leptos::prelude::*;

use crate::net::types::MemberCard;
use crate::util::format::masked_trn;

/// JSON encoding of the member record carried by the QR code.
#[must_use]
pub fn qr_payload(member: &MemberCard) -> String {
    serde_json::to_string(member).unwrap_or_default()
}

#[component]
pub fn DigitalCard(member: Option<MemberCard>) -> impl IntoView {
    let Some(member) = member else {
        return view! {
            <div class="digital-card digital-card--empty">
                <p>"No NHF card data available."</p>
            </div>
        }
        .into_any();
    };

    let show_trn = RwSignal::new(true);
    let qr_value = qr_payload(&member);
    let trn = member.trn.clone();

    view! {
        <div class="digital-card">
            <div class="digital-card__header">
                <div>
                    <h2 class="digital-card__issuer">"National Health Fund"</h2>
                    <h1 class="digital-card__title">"Member Card"</h1>
                </div>
                <div class="digital-card__valid">
                    <p class="digital-card__label">"Valid From"</p>
                    <p class="digital-card__value">{member.valid_from}</p>
                </div>
            </div>
            <div class="digital-card__body">
                <p class="digital-card__label">"Member Name"</p>
                <p class="digital-card__name">{member.full_name}</p>
                <div class="digital-card__trn-row">
                    <div>
                        <p class="digital-card__label">"TRN Number"</p>
                        <p class="digital-card__mono">{move || masked_trn(&trn, show_trn.get())}</p>
                    </div>
                    <button
                        class="btn digital-card__toggle"
                        title=move || if show_trn.get() { "Hide TRN" } else { "Show TRN" }
                        on:click=move |_| show_trn.update(|v| *v = !*v)
                    >
                        {move || if show_trn.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                <p class="digital-card__label">"Member Number"</p>
                <p class="digital-card__mono">{member.member_number}</p>
            </div>
            <div class="digital-card__footer">
                <div class="digital-card__qr" data-qr-value=qr_value></div>
                <p class="digital-card__hint">"Scan QR code at healthcare facilities for instant verification"</p>
            </div>
        </div>
    }
    .into_any()
}
