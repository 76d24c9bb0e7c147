//! Driving port for user registration use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! register users without knowing (or importing) the backing infrastructure.
//! This makes HTTP handler tests deterministic because they can substitute a
//! test double instead of wiring persistence, password hashing, or token
//! issuance.

use async_trait::async_trait;

use crate::domain::registration::RegistrationCommand;
use crate::domain::user::UserProfile;

/// Errors raised by registration handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The requested username or email is already registered.
    #[error("The specified user already exists.")]
    AlreadyExists,
    /// The handler rejected the registration as invalid input.
    #[error("registration rejected: {message}")]
    Rejected { message: String },
    /// The handler failed for a reason unrelated to the input.
    #[error("registration failed: {message}")]
    Failure { message: String },
}

impl RegistrationError {
    /// Shorthand constructor for [`RegistrationError::Rejected`].
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Shorthand constructor for [`RegistrationError::Failure`].
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}

/// Domain use-case port for registering users.
///
/// Implementations own validation beyond the command's structural checks,
/// credential storage, and token issuance. Exactly one of the success profile
/// or a [`RegistrationError`] is produced per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new user and return the public profile for the caller.
    async fn register(
        &self,
        registration: &RegistrationCommand,
    ) -> Result<UserProfile, RegistrationError>;
}

/// Temporary in-crate registration handler used until persistence is wired.
///
/// Echoes the requested username and email back with a fixed token and no
/// bio or image, which is the state a freshly registered user starts in.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegistrationService;

#[async_trait]
impl RegistrationService for FixtureRegistrationService {
    async fn register(
        &self,
        registration: &RegistrationCommand,
    ) -> Result<UserProfile, RegistrationError> {
        Ok(UserProfile::new(
            registration.email().clone(),
            "fixture.jwt.token",
            registration.username().clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_service_echoes_the_requested_identity() {
        let service = FixtureRegistrationService;
        let registration =
            RegistrationCommand::try_from_parts("jake", "jake@jake.jake", "jakejake")
                .expect("registration shape");

        let profile = service
            .register(&registration)
            .await
            .expect("fixture registration should succeed");

        assert_eq!(profile.username().as_ref(), "jake");
        assert_eq!(profile.email().as_ref(), "jake@jake.jake");
        assert_eq!(profile.token(), "fixture.jwt.token");
        assert_eq!(profile.bio(), None);
        assert_eq!(profile.image(), None);
    }

    #[test]
    fn already_exists_error_carries_the_published_message() {
        assert_eq!(
            RegistrationError::AlreadyExists.to_string(),
            "The specified user already exists."
        );
    }

    #[test]
    fn shorthand_constructors_preserve_messages() {
        assert_eq!(
            RegistrationError::rejected("nope").to_string(),
            "registration rejected: nope"
        );
        assert_eq!(
            RegistrationError::failure("boom").to_string(),
            "registration failed: boom"
        );
    }
}
