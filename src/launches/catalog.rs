//! Remote Launch Catalog Client
//!
//! Fetches the full launch collection from the remote catalog in one bulk
//! query: empty filter, pagination disabled, and the rocket name and payload
//! customer relations expanded inline so no follow-up requests are needed.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const DEFAULT_CATALOG_URL: &str = "https://api.spacexdata.com/v4/launches/query";

#[derive(Debug, Serialize)]
struct CatalogQuery {
    query: Value,
    options: CatalogOptions,
}

#[derive(Debug, Serialize)]
struct CatalogOptions {
    pagination: bool,
    populate: Vec<Populate>,
}

#[derive(Debug, Serialize)]
struct Populate {
    path: &'static str,
    select: Value,
}

fn bulk_query() -> CatalogQuery {
    CatalogQuery {
        query: json!({}),
        options: CatalogOptions {
            pagination: false,
            populate: vec![
                Populate {
                    path: "rocket",
                    select: json!({ "name": 1 }),
                },
                Populate {
                    path: "payloads",
                    select: json!({ "customers": 1 }),
                },
            ],
        },
    }
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    docs: Vec<CatalogLaunch>,
}

/// One launch document as returned by the remote catalog, raw field names
/// preserved, relations expanded inline.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogLaunch {
    pub flight_number: u32,
    pub name: String,
    pub rocket: CatalogRocket,
    pub date_local: String,
    #[serde(default)]
    pub payloads: Vec<CatalogPayload>,
    pub upcoming: bool,
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRocket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPayload {
    #[serde(default)]
    pub customers: Vec<String>,
}

/// Downloads the complete launch collection. A non-success status is fatal
/// for the synchronization run; there is no retry at this layer.
pub async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<Vec<CatalogLaunch>> {
    tracing::info!("Downloading launch data from {}", url);

    let response = client
        .post(url)
        .json(&bulk_query())
        .send()
        .await
        .context("launch catalog request failed")?;

    if !response.status().is_success() {
        bail!("launch data download failed: {}", response.status());
    }

    let catalog: CatalogResponse = response
        .json()
        .await
        .context("decoding launch catalog response")?;
    Ok(catalog.docs)
}
