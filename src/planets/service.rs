use super::habitability::is_habitable;
use super::types::{KeplerObservation, Planet};
use crate::store::collection::Collection;

use anyhow::{Context, Result};
use csv::StringRecord;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Cap on per-record upserts allowed in flight while the stream keeps emitting.
const UPSERT_CONCURRENCY: usize = 16;

/// Owns the habitable-planet catalog: first-load CSV ingestion and reads.
pub struct PlanetService {
    planets: Arc<Collection<String, Planet>>,
    dataset_path: PathBuf,
}

impl PlanetService {
    pub fn new(planets: Arc<Collection<String, Planet>>, dataset_path: PathBuf) -> Arc<Self> {
        Arc::new(Self {
            planets,
            dataset_path,
        })
    }

    /// Streams the observation dataset, persisting every habitable planet.
    ///
    /// Idempotent: rerunning against a populated store upserts the same keys.
    /// A failed upsert of a single planet is logged and skipped; a failure of
    /// the stream itself (missing file, malformed record) fails the whole
    /// ingestion. Returns the persisted habitable-planet count.
    ///
    /// The stream running dry is not a completion barrier: upserts spawned for
    /// earlier rows may still be in flight, so the join below drains every
    /// outstanding write before the count is read.
    pub async fn load_planets_data(&self) -> Result<usize> {
        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_path(&self.dataset_path)
            .with_context(|| {
                format!("opening kepler dataset {}", self.dataset_path.display())
            })?;

        let columns = ObservationColumns::resolve(reader.headers()?);

        let mut in_flight: JoinSet<(String, Result<()>)> = JoinSet::new();
        let mut stream_error = None;
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    // The stream itself failed; stop producing but still join
                    // on the upserts already issued below.
                    stream_error = Some(err);
                    break;
                }
            };
            let observation = columns.observation(&record);

            if !is_habitable(&observation) {
                continue;
            }
            let Some(kepler_name) = observation.kepler_name else {
                tracing::warn!("Habitable observation without a kepler name, skipping");
                continue;
            };

            while in_flight.len() >= UPSERT_CONCURRENCY {
                join_upsert(in_flight.join_next().await);
            }

            let planets = self.planets.clone();
            in_flight.spawn(async move {
                let result = planets
                    .upsert(
                        kepler_name.clone(),
                        Planet {
                            kepler_name: kepler_name.clone(),
                        },
                    )
                    .await;
                (kepler_name, result)
            });
        }

        while let Some(joined) = in_flight.join_next().await {
            join_upsert(Some(joined));
        }

        if let Some(err) = stream_error {
            return Err(err).context("reading kepler dataset");
        }

        let count = self.planets.len().await;
        tracing::info!("{} habitable planets found", count);
        Ok(count)
    }

    /// All persisted planets, ordered by kepler name.
    pub async fn get_all_planets(&self) -> Vec<Planet> {
        self.planets.all_sorted().await
    }
}

/// Absorbs the outcome of one per-record upsert: failures are logged and the
/// stream continues (best effort), they never abort ingestion.
fn join_upsert(joined: Option<Result<(String, Result<()>), tokio::task::JoinError>>) {
    match joined {
        Some(Ok((kepler_name, Ok(())))) => {
            tracing::debug!("Planet {} saved", kepler_name);
        }
        Some(Ok((kepler_name, Err(err)))) => {
            tracing::error!("Could not save planet {}: {}", kepler_name, err);
        }
        Some(Err(err)) => {
            tracing::error!("Planet upsert task failed: {}", err);
        }
        None => {}
    }
}

/// Header-resolved column indices for the observation fields.
///
/// The dataset is header-driven, so the fields may sit at any position. A
/// column missing from the header leaves its field `None` on every row, which
/// the filter treats as non-habitable.
struct ObservationColumns {
    kepler_name: Option<usize>,
    koi_disposition: Option<usize>,
    koi_insol: Option<usize>,
    koi_prad: Option<usize>,
}

impl ObservationColumns {
    fn resolve(headers: &StringRecord) -> Self {
        let index_of = |name: &str| headers.iter().position(|header| header == name);
        Self {
            kepler_name: index_of("kepler_name"),
            koi_disposition: index_of("koi_disposition"),
            koi_insol: index_of("koi_insol"),
            koi_prad: index_of("koi_prad"),
        }
    }

    fn observation(&self, record: &StringRecord) -> KeplerObservation {
        let text = |column: Option<usize>| {
            column
                .and_then(|index| record.get(index))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let numeric = |column: Option<usize>| {
            column
                .and_then(|index| record.get(index))
                .and_then(|value| value.parse::<f64>().ok())
        };

        KeplerObservation {
            kepler_name: text(self.kepler_name),
            koi_disposition: text(self.koi_disposition),
            koi_insol: numeric(self.koi_insol),
            koi_prad: numeric(self.koi_prad),
        }
    }
}
