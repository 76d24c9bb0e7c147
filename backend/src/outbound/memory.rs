//! Process-local registration adapter backed by an in-memory registry.
//!
//! Default wiring for the server binary and integration tests. The registry
//! lives for the lifetime of the process; durable storage sits behind the
//! same port and can replace this adapter without touching handlers.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::domain::RegistrationCommand;
use crate::domain::UserProfile;
use crate::domain::ports::{RegistrationError, RegistrationService};

#[derive(Debug, Default)]
struct Registry {
    usernames: HashSet<String>,
    emails: HashSet<String>,
}

/// In-memory [`RegistrationService`] rejecting duplicate usernames or emails.
///
/// Tokens are minted as opaque random strings; real token issuance (JWT
/// signing or similar) belongs to the adapter that replaces this one.
///
/// # Examples
/// ```
/// use conduit_backend::outbound::memory::InMemoryRegistrationService;
///
/// let service = InMemoryRegistrationService::new();
/// # let _ = service;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRegistrationService {
    registry: Mutex<Registry>,
}

impl InMemoryRegistrationService {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationService for InMemoryRegistrationService {
    async fn register(
        &self,
        registration: &RegistrationCommand,
    ) -> Result<UserProfile, RegistrationError> {
        let username = registration.username().as_ref().to_owned();
        let email = registration.email().as_ref().to_owned();

        let mut registry = self
            .registry
            .lock()
            .map_err(|_| RegistrationError::failure("registration registry poisoned"))?;

        if registry.usernames.contains(&username) || registry.emails.contains(&email) {
            return Err(RegistrationError::AlreadyExists);
        }
        registry.usernames.insert(username);
        registry.emails.insert(email);
        drop(registry);

        let token = Uuid::new_v4().simple().to_string();
        info!(username = %registration.username(), "registered user");

        Ok(UserProfile::new(
            registration.email().clone(),
            token,
            registration.username().clone(),
        ))
    }
}
