//! Planets Module Tests
//!
//! Validates the habitability predicate and the CSV ingestion pipeline.
//!
//! ## Test Scopes
//! - **Habitability**: exact boundary behavior of the disposition, insolation,
//!   and radius checks, including missing fields.
//! - **Ingestion**: filtering, comment stripping, idempotent reruns, and the
//!   fatal stream-error paths.

#[cfg(test)]
mod tests {
    use crate::planets::habitability::is_habitable;
    use crate::planets::service::PlanetService;
    use crate::planets::types::{KeplerObservation, Planet};
    use crate::store::collection::Collection;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn observation(disposition: &str, insol: f64, prad: f64) -> KeplerObservation {
        KeplerObservation {
            kepler_name: Some("Kepler-442 b".to_string()),
            koi_disposition: Some(disposition.to_string()),
            koi_insol: Some(insol),
            koi_prad: Some(prad),
        }
    }

    // ============================================================
    // HABITABILITY PREDICATE
    // ============================================================

    #[test]
    fn test_confirmed_in_range_is_habitable() {
        assert!(is_habitable(&observation("CONFIRMED", 0.5, 1.0)));
    }

    #[test]
    fn test_disposition_must_be_confirmed() {
        assert!(!is_habitable(&observation("CANDIDATE", 0.5, 1.0)));
        assert!(!is_habitable(&observation("FALSE POSITIVE", 0.5, 1.0)));
        assert!(!is_habitable(&observation("confirmed", 0.5, 1.0)));
    }

    #[test]
    fn test_insolation_boundaries_are_exclusive() {
        assert!(!is_habitable(&observation("CONFIRMED", 0.36, 1.0)));
        assert!(!is_habitable(&observation("CONFIRMED", 1.11, 1.0)));
        assert!(is_habitable(&observation("CONFIRMED", 0.3600001, 1.0)));
        assert!(is_habitable(&observation("CONFIRMED", 1.1099999, 1.0)));
    }

    #[test]
    fn test_radius_boundary_is_exclusive() {
        assert!(!is_habitable(&observation("CONFIRMED", 0.5, 1.6)));
        assert!(is_habitable(&observation("CONFIRMED", 0.5, 1.5999999)));
    }

    #[test]
    fn test_missing_fields_are_not_habitable() {
        assert!(!is_habitable(&KeplerObservation::default()));

        let mut no_insol = observation("CONFIRMED", 0.5, 1.0);
        no_insol.koi_insol = None;
        assert!(!is_habitable(&no_insol));

        let mut no_prad = observation("CONFIRMED", 0.5, 1.0);
        no_prad.koi_prad = None;
        assert!(!is_habitable(&no_prad));
    }

    // ============================================================
    // CSV INGESTION PIPELINE
    // ============================================================

    fn write_dataset(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kepler-data.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    fn service_for(path: PathBuf) -> (Arc<Collection<String, Planet>>, Arc<PlanetService>) {
        let planets = Arc::new(Collection::new());
        let service = PlanetService::new(planets.clone(), path);
        (planets, service)
    }

    #[tokio::test]
    async fn test_ingestion_persists_only_habitable_rows() {
        let (_dir, path) = write_dataset(
            "kepler_name,koi_disposition,koi_insol,koi_prad\n\
             K-1,CONFIRMED,0.5,1.0\n\
             K-2,CANDIDATE,0.5,1.0\n\
             K-3,CONFIRMED,2.0,1.0\n",
        );
        let (planets, service) = service_for(path);

        let count = service.load_planets_data().await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            planets.get(&"K-1".to_string()).await,
            Some(Planet {
                kepler_name: "K-1".to_string()
            })
        );
        assert!(planets.get(&"K-2".to_string()).await.is_none());
        assert!(planets.get(&"K-3".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn test_ingestion_skips_comment_lines() {
        let (_dir, path) = write_dataset(
            "# Kepler cumulative table\n\
             # COLUMN kepler_name: Kepler Name\n\
             kepler_name,koi_disposition,koi_insol,koi_prad\n\
             # mid-file annotation\n\
             K-1,CONFIRMED,0.5,1.0\n",
        );
        let (_planets, service) = service_for(path);

        let count = service.load_planets_data().await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_ingestion_is_idempotent() {
        let (_dir, path) = write_dataset(
            "kepler_name,koi_disposition,koi_insol,koi_prad\n\
             K-1,CONFIRMED,0.5,1.0\n\
             K-2,CONFIRMED,0.9,1.2\n",
        );
        let (planets, service) = service_for(path);

        let first = service.load_planets_data().await.unwrap();
        let second = service.load_planets_data().await.unwrap();

        assert_eq!(first, 2);
        assert_eq!(second, 2);
        assert_eq!(planets.len().await, 2);
    }

    #[tokio::test]
    async fn test_ingestion_handles_columns_in_any_order() {
        let (_dir, path) = write_dataset(
            "koi_prad,kepler_name,koi_insol,koi_disposition\n\
             1.0,K-9,0.5,CONFIRMED\n",
        );
        let (planets, service) = service_for(path);

        service.load_planets_data().await.unwrap();
        assert!(planets.get(&"K-9".to_string()).await.is_some());
    }

    #[tokio::test]
    async fn test_malformed_numeric_field_is_skipped_not_fatal() {
        let (_dir, path) = write_dataset(
            "kepler_name,koi_disposition,koi_insol,koi_prad\n\
             K-1,CONFIRMED,not-a-number,1.0\n\
             K-2,CONFIRMED,0.5,1.0\n",
        );
        let (planets, service) = service_for(path);

        let count = service.load_planets_data().await.unwrap();

        assert_eq!(count, 1);
        assert!(planets.get(&"K-2".to_string()).await.is_some());
    }

    #[tokio::test]
    async fn test_habitable_row_without_name_is_skipped() {
        let (_dir, path) = write_dataset(
            "kepler_name,koi_disposition,koi_insol,koi_prad\n\
             ,CONFIRMED,0.5,1.0\n",
        );
        let (planets, service) = service_for(path);

        let count = service.load_planets_data().await.unwrap();

        assert_eq!(count, 0);
        assert!(planets.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_dataset_is_fatal() {
        let (planets, service) = service_for(PathBuf::from("/nonexistent/kepler-data.csv"));

        assert!(service.load_planets_data().await.is_err());
        assert!(planets.is_empty().await);
    }

    #[tokio::test]
    async fn test_structurally_malformed_record_is_fatal() {
        // Second data row has too few columns, which fails the record stream
        // itself rather than a single upsert.
        let (_dir, path) = write_dataset(
            "kepler_name,koi_disposition,koi_insol,koi_prad\n\
             K-1,CONFIRMED,0.5,1.0\n\
             K-2,CONFIRMED\n",
        );
        let (planets, service) = service_for(path);

        assert!(service.load_planets_data().await.is_err());
        // No rollback of rows already persisted before the failure.
        assert!(planets.get(&"K-1".to_string()).await.is_some());
    }

    #[tokio::test]
    async fn test_get_all_planets_sorted_by_name() {
        let (_dir, path) = write_dataset(
            "kepler_name,koi_disposition,koi_insol,koi_prad\n\
             K-b,CONFIRMED,0.5,1.0\n\
             K-a,CONFIRMED,0.9,1.2\n",
        );
        let (_planets, service) = service_for(path);

        service.load_planets_data().await.unwrap();

        let names: Vec<String> = service
            .get_all_planets()
            .await
            .into_iter()
            .map(|planet| planet.kepler_name)
            .collect();
        assert_eq!(names, vec!["K-a".to_string(), "K-b".to_string()]);
    }
}
