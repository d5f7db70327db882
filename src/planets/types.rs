//! Planet Data Types
//!
//! Defines the persisted planet document and the reduced view of one dataset
//! row that the habitability filter reads.

use serde::{Deserialize, Serialize};

/// A candidate habitable planet as persisted in the store.
///
/// Only the identifying kepler name survives ingestion; the observation
/// fields that qualified the planet are discarded once the filter has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub kepler_name: String,
}

/// One row of the observation dataset, reduced to the fields the filter needs.
///
/// Numeric fields are parsed leniently: an absent or malformed value becomes
/// `None` and fails the habitability comparisons instead of erroring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeplerObservation {
    pub kepler_name: Option<String>,
    pub koi_disposition: Option<String>,
    pub koi_insol: Option<f64>,
    pub koi_prad: Option<f64>,
}
