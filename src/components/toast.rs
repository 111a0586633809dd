//! Toast notification host rendered above every view.

use leptos::prelude::*;

use crate::state::ui::{ToastTone, UiState};

/// Renders the current toast, if any, and auto-dismisses it after a few
/// seconds unless a newer toast has replaced it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let state = ui.get();
        if state.toast.is_none() {
            return;
        }
        let seq = state.toast_seq;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
            ui.update(|u| {
                if u.toast_seq == seq {
                    u.clear_toast();
                }
            });
        });
    });

    let tone = move || ui.get().toast.map(|t| t.tone).unwrap_or_default();

    view! {
        <Show when=move || ui.get().toast.is_some()>
            <div
                class="toast"
                class:toast--success=move || tone() == ToastTone::Success
                class:toast--error=move || tone() == ToastTone::Error
                role="status"
            >
                <strong class="toast__title">
                    {move || ui.get().toast.map(|t| t.title).unwrap_or_default()}
                </strong>
                <span class="toast__message">
                    {move || ui.get().toast.map(|t| t.message).unwrap_or_default()}
                </span>
                <button
                    class="toast__dismiss"
                    on:click=move |_| ui.update(UiState::clear_toast)
                    aria-label="Dismiss notification"
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
