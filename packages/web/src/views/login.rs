//! Login page with email/password sign-in and a sign-up mode.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_auth;

use crate::Route;

/// Login page component. One form serves both modes; the toggle at the
/// bottom switches between signing in and creating an account.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut signup = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the feed
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            let result = if signup() {
                let n = name().trim().to_string();
                if n.is_empty() {
                    error.set(Some("Name is required".to_string()));
                    return;
                }
                if p.len() < 8 {
                    error.set(Some("Password must be at least 8 characters".to_string()));
                    return;
                }
                loading.set(true);
                api::register(e, p, n).await
            } else {
                loading.set(true);
                api::login(e, p).await
            };

            match result {
                Ok(user) => {
                    let mut state = auth();
                    state.user = Some(user);
                    state.loading = false;
                    auth.set(state);
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(surface_error(&err)));
                }
            }
        });
    };

    let tagline = if signup() {
        "Create your account"
    } else {
        "Sign in to your account"
    };
    let password_placeholder = if signup() {
        "Password (min 8 characters)"
    } else {
        "Password"
    };
    let submit_label = match (loading(), signup()) {
        (true, true) => "Creating account...",
        (true, false) => "Signing in...",
        (false, true) => "Sign up",
        (false, false) => "Sign in",
    };
    let toggle_prompt = if signup() {
        "Already have an account? "
    } else {
        "Don't have an account? "
    };
    let toggle_label = if signup() { "Sign in" } else { "Sign up" };

    rsx! {
        div {
            class: "login-page",

            h1 { class: "login-brand", "Ripple" }
            p { class: "login-tagline", "{tagline}" }

            form {
                class: "login-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                if signup() {
                    Input {
                        r#type: "text",
                        placeholder: "Name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "{password_placeholder}",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    "{submit_label}"
                }
            }

            p {
                class: "login-toggle",
                "{toggle_prompt}"
                button {
                    class: "link-button",
                    onclick: move |_| {
                        error.set(None);
                        signup.set(!signup());
                    },
                    "{toggle_label}"
                }
            }
        }
    }
}

/// The interesting part of an auth failure is the server's own message, not
/// the transport wrapper around it.
fn surface_error(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}
