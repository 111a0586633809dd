//! Student dashboard: journaling, mood tracking, and quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The journal is the one feature with real persistence: entries are read
//! from `localStorage` once when this page first mounts and the whole list
//! is written back after each save.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::journal::{self, JournalState, MOOD_MAX, MOOD_MIN};
use crate::util::{datetime, journal_store};

/// Hardcoded demo metrics, matching the marketing copy.
const WELLBEING_SCORE: u8 = 78;
const WEEKLY_PROGRESS: u8 = 12;
const DEFAULT_MOOD: u8 = 7;

#[component]
pub fn StudentDashboard() -> impl IntoView {
    let journal = expect_context::<RwSignal<JournalState>>();

    let draft = RwSignal::new(String::new());
    let mood = RwSignal::new(DEFAULT_MOOD);

    // One-time read of saved entries. `load_entries` is empty outside the
    // browser, so the non-hydrate path just marks the journal loaded.
    Effect::new(move || {
        if journal.get_untracked().loaded {
            return;
        }
        let saved = journal_store::load_entries();
        journal.update(|j| {
            j.entries = saved;
            j.loaded = true;
        });
    });

    let on_save = move |_| {
        let Some(entry) = journal::new_entry(&draft.get(), mood.get(), datetime::today_label()) else {
            return;
        };
        journal.update(|j| j.insert(entry));
        journal_store::save_entries(&journal.get_untracked().entries);
        draft.set(String::new());
    };

    let entry_count = move || journal.get().entries.len();

    view! {
        <div class="dashboard student-dashboard">
            <header class="dashboard__intro">
                <h1>"Student Dashboard"</h1>
                <p>"Your personal mental health companion"</p>
            </header>

            <div class="dashboard__stats">
                <StatCard
                    icon="❤️"
                    title="Wellbeing Score"
                    value=format!("{WELLBEING_SCORE}/100")
                    progress=WELLBEING_SCORE
                    tone="success"
                />
                <StatCard
                    icon="📈"
                    title="Weekly Progress"
                    value=format!("+{WEEKLY_PROGRESS}%")
                    caption="vs last week"
                />
                <StatCard
                    icon="✍️"
                    title="Journal Entries"
                    value=Signal::derive(move || entry_count().to_string())
                    caption="total entries"
                />
                <StatCard icon="🕑" title="Last Session" value="2d".to_owned() caption="ago" tone="warning"/>
            </div>

            <div class="dashboard__grid">
                <section class="journal-panel">
                    <div class="panel">
                        <h2 class="panel__title">"✍️ Digital Journal"</h2>
                        <p class="panel__subtitle">
                            "Express your thoughts and track your mental health journey"
                        </p>

                        <label class="journal-mood">
                            {format!("How are you feeling today? ({MOOD_MIN}-{MOOD_MAX})")}
                            <div class="journal-mood__row">
                                <span aria-hidden="true">"😟"</span>
                                <input
                                    type="range"
                                    min=MOOD_MIN.to_string()
                                    max=MOOD_MAX.to_string()
                                    prop:value=move || mood.get().to_string()
                                    on:input=move |ev| {
                                        let parsed = event_target_value(&ev).parse().unwrap_or(DEFAULT_MOOD);
                                        mood.set(journal::clamp_mood(parsed));
                                    }
                                />
                                <span aria-hidden="true">"😊"</span>
                                <span class="badge">{move || format!("{}/{MOOD_MAX}", mood.get())}</span>
                            </div>
                        </label>

                        <textarea
                            class="journal-draft"
                            placeholder="What's on your mind today? Write about your feelings, experiences, or anything you'd like to reflect on..."
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        ></textarea>

                        <button class="btn btn--primary journal-save" on:click=on_save>
                            "+ Save Entry"
                        </button>
                    </div>

                    <Show when=move || { entry_count() > 0 }>
                        <div class="panel journal-recent">
                            <h2 class="panel__title">"Recent Entries"</h2>
                            <div class="journal-recent__list">
                                {move || {
                                    journal
                                        .get()
                                        .entries
                                        .iter()
                                        .take(3)
                                        .map(|entry| {
                                            view! {
                                                <div class="journal-entry">
                                                    <div class="journal-entry__meta">
                                                        <span class="journal-entry__date">{entry.date.clone()}</span>
                                                        <span class="badge">{format!("Mood: {}/{MOOD_MAX}", entry.mood)}</span>
                                                    </div>
                                                    <p class="journal-entry__preview">
                                                        {journal::preview(&entry.content, 150)}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </div>
                    </Show>
                </section>

                <aside class="dashboard__actions">
                    <QuickAction icon="🧠" title="AI Chatbot"
                        blurb="Get immediate support with evidence-based coping strategies"
                        action="Start Chat"/>
                    <QuickAction icon="❤️" title="Quick Assessment"
                        blurb="Take a brief wellbeing check-in (PHQ-9, GAD-7)"
                        action="Start Assessment"/>
                    <QuickAction icon="📅" title="Book Session"
                        blurb="Schedule a confidential session with a counselor"
                        action="Schedule Now"/>
                    <QuickAction icon="📖" title="Resource Hub"
                        blurb="Access guided meditations, videos, and articles"
                        action="Explore Resources"/>
                    <QuickAction icon="👥" title="Peer Forum"
                        blurb="Connect with other students anonymously"
                        action="Join Community"/>
                </aside>
            </div>
        </div>
    }
}

/// Sidebar card with a single call-to-action button. The actions are demo
/// stubs; clicking logs the request and nothing else.
#[component]
fn QuickAction(
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    action: &'static str,
) -> impl IntoView {
    view! {
        <div class="panel quick-action">
            <h3 class="panel__title">{icon} " " {title}</h3>
            <p class="quick-action__blurb">{blurb}</p>
            <button
                class="btn btn--soft"
                on:click=move |_| log::info!("quick action requested: {title}")
            >
                {action}
            </button>
        </div>
    }
}
