use super::catalog::{self, CatalogLaunch};
use super::types::{Launch, LaunchRequest, ScheduleError, TargetPolicy};
use crate::planets::types::Planet;
use crate::store::collection::Collection;

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Baseline returned by the allocator while no launches exist.
pub const DEFAULT_FLIGHT_NUMBER: u32 = 100;

/// Customers attached to every manually scheduled launch.
pub const SCHEDULED_CUSTOMERS: [&str; 2] = ["ZTM", "NASA"];

// Fingerprint of the canonical first launch; its presence means the remote
// catalog has already been synchronized into the store.
const FIRST_FLIGHT_NUMBER: u32 = 1;
const FIRST_ROCKET: &str = "Falcon 1";
const FIRST_MISSION: &str = "FalconSat";

/// Owns the launch catalog: startup synchronization, scheduling, and aborts.
pub struct LaunchService {
    launches: Arc<Collection<u32, Launch>>,
    planets: Arc<Collection<String, Planet>>,
    http_client: reqwest::Client,
    catalog_url: String,
    target_policy: TargetPolicy,
    /// Serializes read-max-then-upsert so concurrent schedulers cannot
    /// allocate the same flight number.
    schedule_lock: Mutex<()>,
}

impl LaunchService {
    pub fn new(
        launches: Arc<Collection<u32, Launch>>,
        planets: Arc<Collection<String, Planet>>,
        catalog_url: String,
        target_policy: TargetPolicy,
    ) -> Arc<Self> {
        Arc::new(Self {
            launches,
            planets,
            http_client: reqwest::Client::new(),
            catalog_url,
            target_policy,
            schedule_lock: Mutex::new(()),
        })
    }

    /// First-load synchronization of the launch catalog.
    ///
    /// Idempotent: when the canonical first launch is already in the store the
    /// whole run is a no-op and nothing is fetched. Transport failures and
    /// upsert failures propagate to the caller uncaught.
    pub async fn load_launch_data(&self) -> Result<()> {
        let first_launch = self
            .launches
            .find_one(|launch| {
                launch.flight_number == FIRST_FLIGHT_NUMBER
                    && launch.rocket == FIRST_ROCKET
                    && launch.mission == FIRST_MISSION
            })
            .await;

        if first_launch.is_some() {
            tracing::info!("Launch data already loaded");
            return Ok(());
        }

        let docs = catalog::fetch_catalog(&self.http_client, &self.catalog_url).await?;
        self.sync_catalog(docs).await
    }

    /// Transforms and persists fetched launches strictly in order, awaiting
    /// each upsert before issuing the next. An upsert failure aborts the run,
    /// leaving exactly a prefix of the catalog persisted; nothing is rolled
    /// back.
    pub async fn sync_catalog(&self, docs: Vec<CatalogLaunch>) -> Result<()> {
        for doc in docs {
            let launch = transform_launch(doc);
            tracing::info!("{} {}", launch.flight_number, launch.mission);
            self.save_launch(launch).await?;
        }
        Ok(())
    }

    async fn save_launch(&self, launch: Launch) -> Result<()> {
        self.launches.upsert(launch.flight_number, launch).await
    }

    /// Highest flight number currently in the store, read fresh on every
    /// call; `DEFAULT_FLIGHT_NUMBER` while the store is empty.
    pub async fn latest_flight_number(&self) -> u32 {
        self.launches
            .max_key()
            .await
            .unwrap_or(DEFAULT_FLIGHT_NUMBER)
    }

    /// Schedules a new launch under the next flight number.
    ///
    /// An unknown target planet is handled per the configured policy: warn
    /// and proceed, or reject before anything is allocated.
    pub async fn schedule_new_launch(
        &self,
        request: LaunchRequest,
    ) -> Result<Launch, ScheduleError> {
        if self.planets.get(&request.target).await.is_none() {
            match self.target_policy {
                TargetPolicy::Warn => {
                    tracing::warn!("No matching planet found for target {}", request.target);
                }
                TargetPolicy::Reject => {
                    return Err(ScheduleError::UnknownTarget(request.target));
                }
            }
        }

        let _reservation = self.schedule_lock.lock().await;
        let flight_number = self.latest_flight_number().await + 1;
        let launch = Launch {
            flight_number,
            mission: request.mission,
            rocket: request.rocket,
            launch_date: request.launch_date,
            customers: SCHEDULED_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
            upcoming: true,
            success: Some(true),
        };
        self.save_launch(launch.clone()).await?;
        Ok(launch)
    }

    /// Marks the launch as no longer upcoming and unsuccessful, returning the
    /// post-update record. `None` means no launch carries that flight number;
    /// callers treat that as "not found", not as an error.
    pub async fn abort_launch_by_id(&self, flight_number: u32) -> Option<Launch> {
        self.launches
            .update(&flight_number, |launch| {
                launch.upcoming = false;
                launch.success = Some(false);
            })
            .await
    }

    /// All launches ascending by flight number, honoring skip/limit
    /// pagination. An absent limit returns everything past the skip.
    pub async fn get_all_launches(&self, skip: usize, limit: Option<usize>) -> Vec<Launch> {
        let launches = self.launches.all_sorted().await.into_iter().skip(skip);
        match limit {
            Some(limit) => launches.take(limit).collect(),
            None => launches.collect(),
        }
    }

    pub async fn exists_launch_with_id(&self, flight_number: u32) -> bool {
        self.launches.get(&flight_number).await.is_some()
    }
}

/// Maps a remote catalog document onto the canonical launch shape, flattening
/// the payload customer lists in payload order then customer order.
pub fn transform_launch(doc: CatalogLaunch) -> Launch {
    let customers = doc
        .payloads
        .into_iter()
        .flat_map(|payload| payload.customers)
        .collect();

    Launch {
        flight_number: doc.flight_number,
        mission: doc.name,
        rocket: doc.rocket.name,
        launch_date: doc.date_local,
        customers,
        upcoming: doc.upcoming,
        success: doc.success,
    }
}
