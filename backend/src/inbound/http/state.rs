//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::RegistrationService;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use conduit_backend::domain::ports::FixtureRegistrationService;
/// use conduit_backend::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(FixtureRegistrationService));
/// let _registration = state.registration.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Registration use-case invoked by `POST /api/users`.
    pub registration: Arc<dyn RegistrationService>,
}

impl HttpState {
    /// Construct state from a registration port implementation.
    pub fn new(registration: Arc<dyn RegistrationService>) -> Self {
        Self { registration }
    }
}
