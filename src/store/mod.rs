//! Document Store Module
//!
//! Implements the keyed in-process document store backing both catalogs.
//!
//! ## Core Concepts
//! - **Collections**: Each entity type lives in its own typed `Collection`,
//!   keyed by the entity's uniqueness-bearing field (flight number, kepler name).
//! - **Upsert**: All writes are insert-or-replace by key; a repeated write of
//!   the same key is a no-op on the final state.
//! - **Atomicity**: Mutations lock a single document at a time; there are no
//!   cross-document transactions.
//! - **Injection**: Collections are created at startup and passed by `Arc` to
//!   every component that needs them, never held as module-level globals.

pub mod collection;
