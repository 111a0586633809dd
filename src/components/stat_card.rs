//! Small metric card shared by the three dashboards.

use leptos::prelude::*;

/// Icon/title header, a prominent value, and an optional caption or
/// progress bar underneath.
#[component]
pub fn StatCard(
    icon: &'static str,
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] caption: Option<&'static str>,
    #[prop(optional)] progress: Option<u8>,
    /// CSS tone modifier for the value (e.g. `"primary"`, `"success"`).
    #[prop(default = "primary")]
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__icon" aria-hidden="true">{icon}</span>
                <span class="stat-card__title">{title}</span>
            </div>
            <div class=format!("stat-card__value stat-card__value--{tone}")>{move || value.get()}</div>
            <Show when=move || caption.is_some()>
                <p class="stat-card__caption">{caption.unwrap_or_default()}</p>
            </Show>
            <Show when=move || progress.is_some()>
                <div class="stat-card__progress">
                    <div
                        class="stat-card__progress-fill"
                        style:width=move || format!("{}%", progress.unwrap_or(0).min(100))
                    ></div>
                </div>
            </Show>
        </div>
    }
}
