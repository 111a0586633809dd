//! Application shell: context providers, URL routes, and view selection.
//!
//! ARCHITECTURE
//! ============
//! `App` provides the session, UI, and journal state plus the credential
//! verifier through Leptos context, then mounts a single `/` route. Which
//! screen that route shows is decided per render by `routing::select_view`
//! over the current session — there are no per-role URLs to deep-link into
//! an unauthenticated dashboard.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::navigation::Navigation;
use crate::components::toast::ToastHost;
use crate::pages::admin::AdminDashboard;
use crate::pages::landing::LandingPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::student::StudentDashboard;
use crate::pages::volunteer::VolunteerDashboard;
use crate::routing::{ActiveView, select_view};
use crate::state::journal::JournalState;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::credentials::{DemoDirectory, SharedVerifier};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(Session::new()));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(JournalState::default()));
    provide_context(SharedVerifier(Arc::new(DemoDirectory::new())));

    view! {
        <Title text="MindCare AI"/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// Renders exactly one of the four mutually exclusive views for the current
/// session. Authenticated views get the shared navigation chrome.
#[component]
fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    move || {
        let current = session.get();
        match select_view(current.current_identity()) {
            ActiveView::Landing => view! { <LandingPage/> }.into_any(),
            ActiveView::Student => view! {
                <div class="app-shell">
                    <Navigation/>
                    <main>
                        <StudentDashboard/>
                    </main>
                </div>
            }
            .into_any(),
            ActiveView::Volunteer => view! {
                <div class="app-shell">
                    <Navigation/>
                    <main>
                        <VolunteerDashboard/>
                    </main>
                </div>
            }
            .into_any(),
            ActiveView::Admin => view! {
                <div class="app-shell">
                    <Navigation/>
                    <main>
                        <AdminDashboard/>
                    </main>
                </div>
            }
            .into_any(),
        }
    }
}
