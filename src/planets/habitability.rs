//! Habitability Predicate
//!
//! The pure filter deciding which observed bodies count as candidate
//! habitable planets. A body qualifies when it is a confirmed exoplanet,
//! receives a stellar flux comparable to Earth's, and is small enough to be
//! rocky.

use super::types::KeplerObservation;

const CONFIRMED_DISPOSITION: &str = "CONFIRMED";
const MIN_INSOLATION: f64 = 0.36;
const MAX_INSOLATION: f64 = 1.11;
const MAX_RADIUS: f64 = 1.6;

/// Returns true iff the observation is a confirmed planet with insolation
/// strictly inside (0.36, 1.11) and radius strictly below 1.6 Earth radii.
/// Missing or unparseable fields fail the comparison rather than erroring.
pub fn is_habitable(observation: &KeplerObservation) -> bool {
    observation.koi_disposition.as_deref() == Some(CONFIRMED_DISPOSITION)
        && observation
            .koi_insol
            .is_some_and(|insol| insol > MIN_INSOLATION && insol < MAX_INSOLATION)
        && observation.koi_prad.is_some_and(|prad| prad < MAX_RADIUS)
}
