//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete HTTP clients for the upstream joke providers.
//!
//! # Modules
//!
//! - [`sources`] - `reqwest` clients for the Chuck Norris and dad joke APIs

pub mod sources;
