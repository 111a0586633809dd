//! Volunteer dashboard: peer-support inbox and response composer.
//!
//! All inbox data is hardcoded demo content; sending a response or
//! escalating only logs the action.

#[cfg(test)]
#[path = "volunteer_test.rs"]
mod volunteer_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;

/// How urgently a student message needs attention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    fn label(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            Urgency::Low => "badge",
            Urgency::Medium => "badge badge--outline",
            Urgency::High => "badge badge--danger",
        }
    }
}

/// Triage state of a student message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InboxStatus {
    New,
    Responded,
    Escalated,
}

impl InboxStatus {
    fn label(self) -> &'static str {
        match self {
            InboxStatus::New => "new",
            InboxStatus::Responded => "responded",
            InboxStatus::Escalated => "escalated",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            InboxStatus::New => "badge",
            InboxStatus::Responded => "badge badge--success",
            InboxStatus::Escalated => "badge badge--danger",
        }
    }
}

/// One anonymized student message in the demo inbox.
pub struct InboxMessage {
    pub id: &'static str,
    pub student_alias: &'static str,
    pub body: &'static str,
    pub received: &'static str,
    pub urgency: Urgency,
    pub status: InboxStatus,
}

const DEMO_INBOX: &[InboxMessage] = &[
    InboxMessage {
        id: "1",
        student_alias: "Student_A47",
        body: "I've been feeling overwhelmed with my coursework lately. Everything seems too much and I'm having trouble sleeping. Any advice on managing stress?",
        received: "2 hours ago",
        urgency: Urgency::Medium,
        status: InboxStatus::New,
    },
    InboxMessage {
        id: "2",
        student_alias: "Student_B23",
        body: "Thank you for your response yesterday. The breathing exercises really helped during my presentation today!",
        received: "4 hours ago",
        urgency: Urgency::Low,
        status: InboxStatus::Responded,
    },
    InboxMessage {
        id: "3",
        student_alias: "Student_C91",
        body: "I'm having some really dark thoughts and I don't know what to do. I feel like I'm losing control.",
        received: "6 hours ago",
        urgency: Urgency::High,
        status: InboxStatus::Escalated,
    },
];

#[component]
pub fn VolunteerDashboard() -> impl IntoView {
    let response = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<&'static str>);

    let on_send = move |_| {
        let Some(message_id) = selected.get() else {
            return;
        };
        if response.get().trim().is_empty() {
            return;
        }
        log::info!("response sent for message {message_id}");
        response.set(String::new());
        selected.set(None);
    };

    let on_escalate = move |message_id: &'static str| {
        log::warn!("message {message_id} escalated to faculty");
    };

    view! {
        <div class="dashboard volunteer-dashboard">
            <header class="dashboard__intro">
                <h1>"Volunteer Dashboard"</h1>
                <p>"Supporting students through peer-to-peer assistance"</p>
            </header>

            <div class="dashboard__stats">
                <StatCard icon="💬" title="Active Conversations" value="12".to_owned() caption="ongoing"/>
                <StatCard icon="👥" title="Students Helped" value="47".to_owned() caption="this semester" tone="success"/>
                <StatCard icon="🕑" title="Avg Response Time" value="1.8h".to_owned() caption="last 7 days" tone="warning"/>
                <StatCard icon="📈" title="Positive Feedback" value="94%".to_owned() caption="of responses" tone="success"/>
            </div>

            <div class="dashboard__grid">
                <section class="panel inbox-panel">
                    <h2 class="panel__title">"💬 Student Messages"</h2>
                    <div class="inbox">
                        {DEMO_INBOX
                            .iter()
                            .map(|message| {
                                let id = message.id;
                                view! {
                                    <div
                                        class="inbox-message"
                                        class:inbox-message--selected=move || selected.get() == Some(id)
                                        on:click=move |_| selected.set(Some(id))
                                    >
                                        <div class="inbox-message__meta">
                                            <span class="inbox-message__alias">{message.student_alias}</span>
                                            <span class=message.urgency.badge_class()>{message.urgency.label()}</span>
                                            <span class=message.status.badge_class()>{message.status.label()}</span>
                                            <span class="inbox-message__time">{message.received}</span>
                                        </div>
                                        <p class="inbox-message__body">{message.body}</p>
                                        <button
                                            class="btn btn--ghost inbox-message__escalate"
                                            on:click=move |ev: leptos::ev::MouseEvent| {
                                                ev.stop_propagation();
                                                on_escalate(id);
                                            }
                                        >
                                            "⚠ Escalate"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <aside class="panel composer-panel">
                    <h2 class="panel__title">"Respond"</h2>
                    <Show
                        when=move || selected.get().is_some()
                        fallback=|| view! { <p class="composer-hint">"Select a message to respond."</p> }
                    >
                        <textarea
                            class="composer-draft"
                            placeholder="Write a supportive response..."
                            prop:value=move || response.get()
                            on:input=move |ev| response.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary" on:click=on_send>
                            "Send Response"
                        </button>
                    </Show>
                </aside>
            </div>
        </div>
    }
}
