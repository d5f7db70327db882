//! Planets Service Module
//!
//! Builds the catalog of candidate habitable planets from a CSV dataset of
//! astronomical observations.
//!
//! ## Workflow
//! 1. **Stream**: Reads the Kepler dataset row by row, skipping `#` comment lines.
//! 2. **Filter**: Applies the habitability predicate to every observation.
//! 3. **Storage**: Upserts qualifying planets keyed by kepler name, joining on
//!    all in-flight writes before reporting completion.

pub mod habitability;
pub mod handlers;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
