//! Click-to-expand feature card for the landing page.

use leptos::prelude::*;

/// A card with an icon, title, and blurb that expands to show more detail
/// when clicked.
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] expanded_content: Option<&'static str>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <div
            class="feature-card"
            class:feature-card--expanded=move || expanded.get()
            on:click=move |_| expanded.update(|e| *e = !*e)
        >
            <div class="feature-card__icon" aria-hidden="true">{icon}</div>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
            <Show when=move || expanded.get() && expanded_content.is_some()>
                <p class="feature-card__expanded">{expanded_content.unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
