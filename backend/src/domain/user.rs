//! User identity value objects and the registered-user profile.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Validation errors returned by the user value-object constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Username exceeds the allowed length.
    UsernameTooLong { max: usize },
    /// Username contains characters outside the allowed set.
    UsernameInvalidCharacters,
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Email does not have the `local@domain` shape.
    InvalidEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::UsernameInvalidCharacters => write!(
                f,
                "username may only contain letters, numbers, underscores, or hyphens",
            ),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must have the shape local@domain"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 64;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains allowed characters.
        let pattern = "^[A-Za-z0-9_-]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

/// Public handle a user registers and publishes under.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace and non-empty after trimming.
/// - At most [`USERNAME_MAX`] characters.
/// - Contains only letters, numbers, underscores, or hyphens.
///
/// # Examples
/// ```
/// use conduit_backend::domain::Username;
///
/// let username = Username::new("jake").unwrap();
/// assert_eq!(username.as_ref(), "jake");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from raw input.
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalized = username.as_ref().trim();
        if normalized.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if normalized.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        if !username_regex().is_match(normalized) {
            return Err(UserValidationError::UsernameInvalidCharacters);
        }

        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Email address a user registers with.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace and non-empty after trimming.
/// - Exactly one `@` with a non-empty local part and domain.
///
/// Full RFC 5321 validation is out of scope; the registration handler is the
/// collaborator that decides whether an address is deliverable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`] from raw input.
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalized = email.as_ref().trim();
        if normalized.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }

        let mut parts = normalized.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(normalized.to_owned()))
            }
            _ => Err(UserValidationError::InvalidEmail),
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Public-facing representation of a registered user.
///
/// Produced by the registration port and returned to clients verbatim; the
/// HTTP adapter performs no transformation of these values. `bio` and `image`
/// are optional and surface as explicit JSON `null` on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    email: Email,
    token: String,
    username: Username,
    bio: Option<String>,
    image: Option<String>,
}

impl UserProfile {
    /// Build a profile with no bio or image set.
    pub fn new(email: Email, token: impl Into<String>, username: Username) -> Self {
        Self {
            email,
            token: token.into(),
            username,
            bio: None,
            image: None,
        }
    }

    /// Attach a bio to the profile.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Attach an avatar image URL to the profile.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Email address the user registered with.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Authentication token issued for the user.
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Public handle the user registered under.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Short biography, when the user has set one.
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Avatar image URL, when the user has set one.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
