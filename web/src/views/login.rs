//! Login page view.

use dioxus::prelude::*;
use ui::{use_auth, validate_credentials, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);

    // If already logged in, skip the form
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_login = move |_| match validate_credentials(&email(), &password()) {
        Err(message) => error.set(message.to_string()),
        Ok(()) => {
            tracing::info!("signed in as {}", email());
            auth.set(AuthState::signed_in(email()));
            nav.push(Route::Dashboard {});
        }
    };

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "login-card",
                h2 { class: "login-title", "Login" }

                input {
                    class: "login-input",
                    r#type: "text",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    class: "login-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                if !error().is_empty() {
                    p { class: "login-error", "{error}" }
                }

                button {
                    class: "login-submit",
                    onclick: handle_login,
                    "Login"
                }
            }
        }
    }
}
