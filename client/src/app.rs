//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    applicant_portal::ApplicantPortal, doctor_portal::DoctorPortal, login::LoginPage, register::RegisterPage,
    staff_portal::StaffPortal,
};
use crate::state::{session::SessionState, toast::ToastState};
use crate::util::route_guard::LOGIN_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts and sets up client-side routing.
/// The session starts unrestored; the effect below reads `localStorage` once
/// the browser has hydrated, which releases the route guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    Effect::new(move || {
        if !session.with_untracked(|s| s.restored) {
            session.set(SessionState::restore());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/pulse-connect.css"/>
        <Title text="NHF Pulse Connect"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("applicant") view=ApplicantPortal/>
                <Route path=StaticSegment("doctor") view=DoctorPortal/>
                <Route path=StaticSegment("staff") view=StaffPortal/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
