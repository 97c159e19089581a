//! Authentication context and hooks for the UI.
//!
//! The session lives in a context signal provided at the app root, not in a
//! process-wide flag, so any component can read it and logout is a defined
//! transition rather than a missing one.

use dioxus::prelude::*;

/// The signed-in identity. There is no credential verification behind it;
/// holding a session only means the login form was passed this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// State after a successful login.
    pub fn signed_in(email: impl Into<String>) -> Self {
        Self {
            session: Some(Session {
                email: email.into(),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Check the login form inputs. Returns the inline message to show when a
/// rule fails; navigation is blocked until both pass.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Enter valid email");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Button that clears the session. The host app navigates afterwards via
/// `on_logout` (the route type lives there, not here).
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        tracing::info!("session cleared");
        auth.set(AuthState::default());
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_credentials_pass() {
        assert_eq!(validate_credentials("a@b.com", "abcdef"), Ok(()));
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        assert_eq!(
            validate_credentials("bad", "abcdef"),
            Err("Enter valid email")
        );
    }

    #[test]
    fn short_password_is_rejected() {
        assert_eq!(
            validate_credentials("a@b.com", "abcde"),
            Err("Password must be at least 6 characters")
        );
    }

    #[test]
    fn email_rule_is_checked_first() {
        assert_eq!(validate_credentials("bad", "x"), Err("Enter valid email"));
    }

    #[test]
    fn session_state_transitions() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());

        let state = AuthState::signed_in("a@b.com");
        assert!(state.is_authenticated());
        assert_eq!(state.session.as_ref().unwrap().email, "a@b.com");
    }
}
