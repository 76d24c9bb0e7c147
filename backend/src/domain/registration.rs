//! Registration command submitted to the registration port.
//!
//! Keep inbound payload parsing outside the domain by exposing a constructor
//! that validates raw string inputs before a handler talks to the port.

use zeroize::Zeroizing;

use crate::domain::user::{Email, UserValidationError, Username};

/// Validated registration command.
///
/// ## Invariants
/// - `username` and `email` satisfy the [`Username`] and [`Email`] invariants.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use conduit_backend::domain::RegistrationCommand;
///
/// let registration =
///     RegistrationCommand::try_from_parts("jake", "jake@jake.jake", "jakejake").unwrap();
/// assert_eq!(registration.username().as_ref(), "jake");
/// assert_eq!(registration.email().as_ref(), "jake@jake.jake");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationCommand {
    username: Username,
    email: Email,
    password: Zeroizing<String>,
}

impl RegistrationCommand {
    /// Construct a command from raw username/email/password inputs.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, UserValidationError> {
        let username = Username::new(username)?;
        let email = Email::new(email)?;
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }

        Ok(Self {
            username,
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
