//! Conduit-style backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds transport-agnostic
//! types and ports, [`inbound`] holds the HTTP adapter, and [`outbound`]
//! holds port implementations.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
