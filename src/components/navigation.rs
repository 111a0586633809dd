//! Top navigation bar for authenticated views.

use leptos::prelude::*;

use crate::state::session::Session;

/// Brand, role badge, user name, and logout. Renders nothing while the
/// session is unauthenticated.
#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let identity = move || session.get().current_identity().cloned();
    let on_logout = move |_| session.update(Session::logout);

    view! {
        <Show when=move || session.get().is_authenticated()>
            <nav class="nav">
                <div class="nav__inner">
                    <div class="nav__brand-group">
                        <h1 class="nav__brand">"MindCare AI"</h1>
                        <span class="nav__role-badge">
                            {move || identity().map(|i| i.role.label()).unwrap_or_default()}
                        </span>
                    </div>
                    <div class="nav__user-group">
                        <span class="nav__user">
                            {move || identity().map(|i| i.name).unwrap_or_default()}
                        </span>
                        <button class="btn btn--ghost" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </div>
            </nav>
        </Show>
    }
}
