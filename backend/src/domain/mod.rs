//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP adapter
//! and the registration port. Keep types immutable and document invariants in
//! each type's Rustdoc; transport concerns (serde envelopes, status codes)
//! stay in the inbound adapter layer.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic API error payload.
//! - `Username` / `Email` / `UserProfile`: user identity value objects and
//!   the registered-user aggregate.
//! - `RegistrationCommand`: validated registration input.
//! - `ports`: driving ports substitutable with test doubles.

pub mod error;
pub mod ports;
pub mod registration;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::registration::RegistrationCommand;
pub use self::user::{Email, UserProfile, UserValidationError, Username};
