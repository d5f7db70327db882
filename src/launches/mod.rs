//! Launches Service Module
//!
//! Owns the spaceflight catalog: first-load synchronization from the remote
//! launch catalog, flight-number allocation, scheduling, and aborts.
//!
//! ## Workflow
//! 1. **Presence check**: A canonical first-launch fingerprint decides whether
//!    the catalog is already loaded.
//! 2. **Bulk fetch**: One unpaginated query downloads every launch with its
//!    rocket and payload relations expanded inline.
//! 3. **Transform**: Remote documents are mapped onto the canonical launch
//!    shape, flattening payload customer lists.
//! 4. **Persist**: Each launch is upserted by flight number, strictly in
//!    fetched order.

pub mod catalog;
pub mod handlers;
pub mod service;
pub mod types;
