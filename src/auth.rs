//! Authentication Flow
//!
//! Sign-in / sign-up submission and session creation.

use crate::api::{ApiClient, ApiError, SIGN_IN_PATH, SIGN_UP_PATH};
use crate::models::{Credentials, Session};
use crate::session::SessionContext;

/// Which auth endpoint the login form submits to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AuthMode::SignIn => SIGN_IN_PATH,
            AuthMode::SignUp => SIGN_UP_PATH,
        }
    }

    /// The other mode. Switching modes keeps the typed fields.
    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in to your account",
            AuthMode::SignUp => "Join us to manage your tasks",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account?",
            AuthMode::SignUp => "Already have an account?",
        }
    }

    /// Label of the button that switches to the other mode
    pub fn switch_label(&self) -> &'static str {
        self.toggled().short_label()
    }

    fn short_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }
}

/// Submit credentials and persist the resulting session.
///
/// The session is written exactly once on success and never on failure.
pub async fn authenticate(
    api: &ApiClient,
    sessions: &SessionContext,
    mode: AuthMode,
    credentials: Credentials,
) -> Result<Session, ApiError> {
    let response = api.authenticate(mode.endpoint(), &credentials).await?;
    let session = Session::from_auth(response, &credentials.email);
    sessions.set_session(&session);
    log::info!("Authenticated via {}", mode.endpoint());
    Ok(session)
}
