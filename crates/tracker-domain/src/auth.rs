//! Login form state machine and the authentication seam.
//!
//! The dialog's open/closed flag belongs to whoever hosts the dialog. This
//! module covers what happens while it is open:
//!
//! ```text
//! Idle --begin_submit (both fields set)--> Submitting
//! Submitting --finish(Accepted)--> Idle, credentials cleared, host closes dialog
//! Submitting --finish(Rejected)--> Idle, credentials kept
//! ```
//!
//! Dismissing the dialog (Escape, backdrop) never touches the form, so an
//! attempt already in flight still finishes and resets it.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// Email/password pair typed into the dialog
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of an authentication attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthOutcome {
    Accepted,
    Rejected { reason: String },
}

/// Something that can check credentials.
///
/// The dialog only sees this trait; the shipped implementation just waits and
/// accepts.
pub trait Authenticator {
    fn authenticate(&self, credentials: Credentials) -> impl Future<Output = AuthOutcome>;
}

/// Phase of an open login dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
}

/// What the host should do once an attempt resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResolution {
    Close,
    Retry { reason: String },
}

/// Local state of the login dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    credentials: Credentials,
    phase: LoginPhase,
    show_password: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// Inputs are disabled while an attempt is in flight
    pub fn set_email(&mut self, email: String) -> Result<()> {
        self.ensure_idle("edit email")?;
        self.credentials.email = email;
        Ok(())
    }

    pub fn set_password(&mut self, password: String) -> Result<()> {
        self.ensure_idle("edit password")?;
        self.credentials.password = password;
        Ok(())
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// The Cancel button is only offered between attempts
    pub fn can_cancel(&self) -> bool {
        self.phase == LoginPhase::Idle
    }

    /// Validate and enter `Submitting`, handing back the credentials to send.
    ///
    /// With a blank field the form stays `Idle`.
    pub fn begin_submit(&mut self) -> Result<Credentials> {
        self.ensure_idle("submit")?;
        if !self.credentials.is_complete() {
            return Err(DomainError::MissingCredentials);
        }
        self.phase = LoginPhase::Submitting;
        Ok(self.credentials.clone())
    }

    /// Leave `Submitting` with the authenticator's answer
    pub fn finish(&mut self, outcome: AuthOutcome) -> Result<LoginResolution> {
        if self.phase != LoginPhase::Submitting {
            return Err(DomainError::InvalidLoginTransition {
                phase: self.phase,
                action: "finish",
            });
        }
        self.phase = LoginPhase::Idle;
        match outcome {
            AuthOutcome::Accepted => {
                self.credentials = Credentials::default();
                Ok(LoginResolution::Close)
            }
            AuthOutcome::Rejected { reason } => Ok(LoginResolution::Retry { reason }),
        }
    }

    fn ensure_idle(&self, action: &'static str) -> Result<()> {
        match self.phase {
            LoginPhase::Idle => Ok(()),
            LoginPhase::Submitting => Err(DomainError::InvalidLoginTransition {
                phase: self.phase,
                action,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::internet::en::{Password, SafeEmail};
    use futures::executor::block_on;

    struct Fixed(AuthOutcome);

    impl Authenticator for Fixed {
        async fn authenticate(&self, _credentials: Credentials) -> AuthOutcome {
            self.0.clone()
        }
    }

    fn filled_form() -> LoginForm {
        let mut form = LoginForm::new();
        form.set_email(SafeEmail().fake()).unwrap();
        form.set_password(Password(8..16).fake()).unwrap();
        form
    }

    #[test]
    fn test_empty_fields_never_submit() {
        let cases = [("", ""), ("user@example.com", ""), ("", "secret")];
        for (email, password) in cases {
            let mut form = LoginForm::new();
            form.set_email(email.into()).unwrap();
            form.set_password(password.into()).unwrap();

            assert_eq!(form.begin_submit(), Err(DomainError::MissingCredentials));
            assert_eq!(form.phase(), LoginPhase::Idle);
            assert_eq!(form.credentials().email, email);
        }
    }

    #[test]
    fn test_accepted_login_resets_form() {
        let mut form = filled_form();
        let sent = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert!(!form.can_cancel());
        assert!(sent.is_complete());

        let outcome = block_on(Fixed(AuthOutcome::Accepted).authenticate(sent));
        assert_eq!(form.finish(outcome), Ok(LoginResolution::Close));
        assert_eq!(form.phase(), LoginPhase::Idle);
        assert_eq!(form.credentials(), &Credentials::default());
    }

    #[test]
    fn test_rejected_login_keeps_input() {
        let mut form = filled_form();
        let typed = form.credentials().clone();
        let sent = form.begin_submit().unwrap();

        let authenticator = Fixed(AuthOutcome::Rejected {
            reason: "bad password".into(),
        });
        let outcome = block_on(authenticator.authenticate(sent));
        assert_eq!(
            form.finish(outcome),
            Ok(LoginResolution::Retry {
                reason: "bad password".into()
            })
        );
        assert_eq!(form.credentials(), &typed);
    }

    #[test]
    fn test_dismissed_mid_submit_still_resets() {
        let mut form = filled_form();
        let sent = form.begin_submit().unwrap();

        // Host closes the dialog here; nothing on the form changes.
        assert!(form.is_submitting());

        let outcome = block_on(Fixed(AuthOutcome::Accepted).authenticate(sent));
        assert_eq!(form.finish(outcome), Ok(LoginResolution::Close));
        assert_eq!(form.credentials(), &Credentials::default());
        assert!(form.can_cancel());
    }

    #[test]
    fn test_inputs_locked_while_submitting() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        assert!(form.set_email("other@example.com".into()).is_err());
        assert!(form.set_password("other".into()).is_err());
        assert!(matches!(
            form.begin_submit(),
            Err(DomainError::InvalidLoginTransition { .. })
        ));
    }

    #[test]
    fn test_finish_requires_submitting() {
        let mut form = LoginForm::new();
        assert_eq!(
            form.finish(AuthOutcome::Accepted),
            Err(DomainError::InvalidLoginTransition {
                phase: LoginPhase::Idle,
                action: "finish",
            })
        );
    }

    #[test]
    fn test_password_toggle_is_independent() {
        let mut form = filled_form();
        form.toggle_password_visibility();
        assert!(form.show_password());

        form.begin_submit().unwrap();
        form.toggle_password_visibility();
        assert!(!form.show_password());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials {
            email: "a@b.c".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
