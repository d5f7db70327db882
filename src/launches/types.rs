//! Launch Data Types
//!
//! Defines the canonical launch document, the scheduling request DTO, and the
//! error/policy types used by the scheduling path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One spaceflight attempt as persisted in the store.
///
/// `flight_number` is application-assigned, unique, and the natural sort key;
/// it is never generated by the store. `success` is `None` while the outcome
/// is undetermined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
    pub flight_number: u32,
    pub mission: String,
    pub rocket: String,
    pub launch_date: String,
    pub customers: Vec<String>,
    pub upcoming: bool,
    pub success: Option<bool>,
}

/// Caller-supplied fields for scheduling a new launch. The flight number,
/// customer list, and status flags are filled in by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub mission: String,
    pub rocket: String,
    pub launch_date: String,
    /// Kepler name of the destination planet.
    pub target: String,
}

/// Policy applied when a scheduling request names a target planet that is not
/// in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPolicy {
    /// Log a warning and schedule anyway.
    Warn,
    /// Refuse to schedule the launch.
    Reject,
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no matching planet found for target {0}")]
    UnknownTarget(String),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Error payload returned by the HTTP handlers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
