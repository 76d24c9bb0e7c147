//! Domain ports and supporting types for the hexagonal boundary.

mod registration_service;

#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::{FixtureRegistrationService, RegistrationError, RegistrationService};
