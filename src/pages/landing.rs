//! Unauthenticated landing page: hero, feature grid, vision, and login entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only view rendered while the session holds no identity. It
//! owns the login-modal open state and remembers which role button opened it
//! so the modal can prefill the matching demo account.

use leptos::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::login_modal::LoginModal;
use crate::state::session::Role;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    expanded: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧠",
        title: "AI-Guided Chatbot",
        description: "First-aid coping strategies with seamless human escalation",
        expanded: "Our AI provides immediate support using evidence-based therapeutic techniques, with automatic escalation to human counselors when needed.",
    },
    Feature {
        icon: "❤️",
        title: "Wellbeing Assessment",
        description: "Validated tools including PHQ-9, GAD-7, and custom metrics",
        expanded: "Comprehensive psychological assessments that track your mental health journey with clinically validated instruments.",
    },
    Feature {
        icon: "📅",
        title: "Confidential Booking",
        description: "Secure appointment scheduling with privacy protection",
        expanded: "Book sessions with counselors and volunteers while maintaining complete anonymity and data protection.",
    },
    Feature {
        icon: "📖",
        title: "Resource Hub",
        description: "Curated videos, audio guides, and educational materials",
        expanded: "Access a library of mental health resources, guided meditations, and educational content tailored to your needs.",
    },
    Feature {
        icon: "👥",
        title: "Peer Support Forum",
        description: "Anonymous community interaction and mutual support",
        expanded: "Connect with peers in a safe, moderated environment where you can share experiences and find community support.",
    },
    Feature {
        icon: "✍️",
        title: "Digital Journaling",
        description: "Private, secure space for reflection and progress tracking",
        expanded: "Express yourself safely with journaling tools that help track mood patterns and personal growth.",
    },
    Feature {
        icon: "🤝",
        title: "Volunteer Support",
        description: "Trained student volunteers for peer-to-peer assistance",
        expanded: "Connect with specially trained student volunteers who understand your experience and can provide peer support.",
    },
    Feature {
        icon: "📊",
        title: "Analytics Dashboard",
        description: "Insights for administrators and continuous improvement",
        expanded: "Comprehensive analytics for program effectiveness, helping institutions improve mental health support continuously.",
    },
];

const VISION_POINTS: &[(&str, &str, &str)] = &[
    ("🛡", "Individual Care", "Personalized mental health support for every student"),
    ("🌐", "Institutional Integration", "Seamless integration with university health systems"),
    ("📈", "Policy Impact", "Data-driven insights for national mental health policy"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let show_login = RwSignal::new(false);
    let login_role = RwSignal::new(Role::Student);

    let open_login = move |role: Role| {
        login_role.set(role);
        show_login.set(true);
    };
    let on_close = Callback::new(move |()| show_login.set(false));

    view! {
        <div class="landing-page">
            <section class="landing-hero">
                <h1 class="landing-hero__title">"AI to guide → Humans to heal"</h1>
                <p class="landing-hero__subtitle">
                    "A context-aware psychological intervention system that combines AI \
                     efficiency with human empathy for comprehensive mental health support."
                </p>
                <div class="landing-hero__actions">
                    <button class="btn btn--primary btn--lg" on:click=move |_| open_login(Role::Student)>
                        "Login as Student"
                    </button>
                    <button class="btn btn--glass btn--lg" on:click=move |_| open_login(Role::Admin)>
                        "Login as Admin"
                    </button>
                    <button class="btn btn--glass btn--lg" on:click=move |_| open_login(Role::Volunteer)>
                        "Login as Volunteer"
                    </button>
                </div>
            </section>

            <section class="landing-features">
                <div class="landing-section__intro">
                    <h2>"Interactive MVP Features"</h2>
                    <p>
                        "Explore our comprehensive mental health support system designed \
                         for the modern student experience"
                    </p>
                </div>
                <div class="landing-features__grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <FeatureCard
                                    icon=f.icon
                                    title=f.title
                                    description=f.description
                                    expanded_content=f.expanded
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="landing-vision">
                <div class="landing-section__intro">
                    <h2>"Long-Term Vision"</h2>
                    <p>
                        "Scaling from individual care to institutional transformation \
                         to national policy impact"
                    </p>
                </div>
                <div class="landing-vision__grid">
                    {VISION_POINTS
                        .iter()
                        .map(|(icon, title, description)| {
                            view! {
                                <div class="vision-point">
                                    <div class="vision-point__icon" aria-hidden="true">{*icon}</div>
                                    <h3 class="vision-point__title">{*title}</h3>
                                    <p class="vision-point__description">{*description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="landing-cta">
                <h2>"Ready to Transform Mental Health Support?"</h2>
                <p>"Join our mission to create a more empathetic and effective mental health ecosystem"</p>
                <button class="btn btn--primary btn--lg" on:click=move |_| open_login(Role::Student)>
                    "Get Started →"
                </button>
            </section>

            <footer class="landing-footer">
                <h3>"MindCare AI"</h3>
                <p>"Demo site — GDPR-style privacy, anonymity, and human escalation emphasized"</p>
                <span class="landing-footer__note">
                    "🛡 Privacy-first design with end-to-end encryption and human oversight"
                </span>
            </footer>

            <Show when=move || show_login.get()>
                <LoginModal on_close=on_close prefill=login_role.get()/>
            </Show>
        </div>
    }
}
