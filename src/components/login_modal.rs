//! Login modal with demo-account shortcuts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only way into an authenticated session. Submits synchronously against
//! the [`SharedVerifier`] from context; success closes the modal and raises a
//! success toast, failure stays open and raises a destructive toast alongside
//! an inline error line.

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;

use leptos::prelude::*;

use crate::state::session::{Role, Session};
use crate::state::ui::{Toast, UiState};
use crate::util::credentials::{DemoDirectory, SharedVerifier};

/// Trim the email and require both fields before attempting a login.
/// The secret is deliberately not trimmed.
fn validate_login_input(email: &str, secret: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || secret.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), secret.to_owned()))
}

fn failed_login_toast() -> Toast {
    Toast::error("Login failed", "Invalid email or password. Please try again.")
}

/// Modal dialog for signing into a demo account.
#[component]
pub fn LoginModal(on_close: Callback<()>, #[prop(optional)] prefill: Option<Role>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let verifier = expect_context::<SharedVerifier>();

    let prefilled = prefill.and_then(DemoDirectory::account_for_role);
    let email = RwSignal::new(prefilled.map(|(e, _)| e.to_owned()).unwrap_or_default());
    let secret = RwSignal::new(prefilled.map(|(_, s)| s.to_owned()).unwrap_or_default());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, secret_value) = match validate_login_input(&email.get(), &secret.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };

        let mut ok = false;
        session.update(|s| ok = s.login(verifier.0.as_ref(), &email_value, &secret_value));

        if ok {
            ui.update(|u| {
                u.push_toast(Toast::success("Login successful", "Welcome to MindCare AI."));
            });
            email.set(String::new());
            secret.set(String::new());
            error.set(String::new());
            on_close.run(());
        } else {
            ui.update(|u| u.push_toast(failed_login_toast()));
            error.set("Invalid email or password. Please try again.".to_owned());
        }
    };

    let fill_demo = move |role: Role| {
        if let Some((demo_email, demo_secret)) = DemoDirectory::account_for_role(role) {
            email.set(demo_email.to_owned());
            secret.set(demo_secret.to_owned());
            error.set(String::new());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--login" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Login"</h2>
                <p class="dialog__subtitle">"Access your mental health dashboard"</p>

                <div class="login-demo-hint">
                    <strong>"Demo Accounts:"</strong>
                    <span>"Student: student@demo.com / demo123"</span>
                    <span>"Admin: admin@demo.com / admin123"</span>
                    <span>"Volunteer: volunteer@demo.com / volunteer123"</span>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || secret.get()
                            on:input=move |ev| secret.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="login-demo-buttons">
                        <button class="btn btn--soft" type="button" on:click=move |_| fill_demo(Role::Student)>
                            "Student Demo"
                        </button>
                        <button class="btn btn--soft" type="button" on:click=move |_| fill_demo(Role::Admin)>
                            "Admin Demo"
                        </button>
                        <button class="btn btn--soft" type="button" on:click=move |_| fill_demo(Role::Volunteer)>
                            "Volunteer Demo"
                        </button>
                    </div>

                    <Show when=move || !error.get().is_empty()>
                        <p class="login-error">{move || error.get()}</p>
                    </Show>

                    <button class="btn btn--primary login-submit" type="submit">
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
