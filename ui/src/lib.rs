//! Shared UI for the console: the authentication context, the navbar shell,
//! and the add/edit user dialog.

mod auth;
pub use auth::{use_auth, validate_credentials, AuthProvider, AuthState, LogoutButton, Session};

mod navbar;
pub use navbar::Navbar;

mod modal;
pub use modal::ModalOverlay;

mod user_dialog;
pub use user_dialog::UserDialog;
