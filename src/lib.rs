//! Mission Control Data Service Library
//!
//! This library crate defines the core modules of the mission control data
//! service. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`launches`**: The spaceflight catalog. Synchronizes launch records from
//!   a remote bulk-query API on first load, allocates flight numbers for newly
//!   scheduled launches, and handles launch aborts.
//! - **`planets`**: The habitable-planet catalog. Streams a CSV dataset of
//!   astronomical observations, applies the habitability filter, and persists
//!   the qualifying planets.
//! - **`store`**: The persistence layer. A keyed document collection with
//!   upsert and atomic find-and-update semantics, injected into the services
//!   above as their single source of truth.

pub mod launches;
pub mod planets;
pub mod store;
