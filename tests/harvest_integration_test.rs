//! End-to-end harvest tests against a mock GeoNode server
//!
//! The real HTTP downloader and JSON file publisher are used; only the catalog
//! is simulated.

use mimu_harvester::adapters::geonode::ReqwestDownloader;
use mimu_harvester::adapters::publisher::JsonFilePublisher;
use mimu_harvester::config::{parse_config, HarvesterConfig, MappingErrorPolicy};
use mimu_harvester::core::harvest::{HarvestCoordinator, RecordStage};
use mimu_harvester::domain::HarvestError;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const LISTING: &str = include_str!("fixtures/mimu_layers.json");

fn config_for(base_url: &str, output_dir: &Path) -> HarvesterConfig {
    let mut config = parse_config(
        r#"
[hdx]
maintainer = "196196be-6037-4488-8b71-d786adf4c081"
owner_org = "bde18602-2e92-462a-8e88-a0018a7b13f9"

[vocabulary]
id = "4e61d464-4943-4e97-973a-84673c1aaa87"
tags = ["populated places - settlements", "land use and land cover"]
"#,
    )
    .unwrap();
    config.geonode.base_url = base_url.to_string();
    config.harvest.output_dir = output_dir.to_string_lossy().into_owned();
    config
}

fn coordinator(config: &HarvesterConfig) -> HarvestCoordinator {
    let downloader = Arc::new(ReqwestDownloader::new(&config.geonode).unwrap());
    let publisher = Arc::new(JsonFilePublisher::new(&config.harvest.output_dir));
    HarvestCoordinator::new(config, downloader, publisher).unwrap()
}

async fn serve(server: &mut mockito::Server, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/api/layers")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_harvest_writes_one_document_per_layer() {
    let mut server = mockito::Server::new_async().await;
    let _mock = serve(&mut server, LISTING).await;
    let out = TempDir::new().unwrap();
    let config = config_for(&format!("{}/", server.url()), out.path());

    let summary = coordinator(&config).execute().await.unwrap();

    assert!(summary.is_successful());
    assert_eq!(summary.total_records, 2);
    assert_eq!(summary.published, 2);
    assert_eq!(
        summary.dataset_names,
        vec![
            "mimu-myanmar-town-2019-july".to_string(),
            "mimu-myanmar-2002-2014-forest-cover-change".to_string()
        ]
    );

    let written = std::fs::read_to_string(out.path().join("mimu-myanmar-town-2019-july.json"))
        .unwrap();
    let document: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(document["dataset"]["dataset_date"], "08/05/2019");
    assert_eq!(
        document["showcase"]["name"],
        "mimu-myanmar-town-2019-july-showcase"
    );

    let resource_url = document["dataset"]["resources"][0]["url"].as_str().unwrap();
    assert!(resource_url.starts_with(&format!("{}/geoserver/wfs?", server.url())));
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = serve(&mut server, LISTING).await;
    let out = TempDir::new().unwrap();
    let output_dir = out.path().join("datasets");
    let mut config = config_for(&format!("{}/", server.url()), &output_dir);
    config.application.dry_run = true;

    let summary = coordinator(&config).execute().await.unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.transformed, 2);
    assert_eq!(summary.published, 0);
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_skip_and_abort_on_unmappable_layer() {
    let body = r#"{"objects": [
        {"distribution_url": "http://geonode.themimu.info/layers/geonode%3Auntitled"},
        {"title": "Myanmar Town 2019 July", "distribution_url": "http://geonode.themimu.info/layers/geonode%3Ammr_town_2019_july"}
    ]}"#;

    let mut server = mockito::Server::new_async().await;
    let _mock = serve(&mut server, body).await;
    let out = TempDir::new().unwrap();
    let mut config = config_for(&format!("{}/", server.url()), out.path());

    let summary = coordinator(&config).execute().await.unwrap();
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.published, 1);
    assert_eq!(summary.errors[0].stage, RecordStage::Transform);
    assert!(summary.errors[0].title.is_none());

    config.harvest.on_mapping_error = MappingErrorPolicy::Abort;
    let err = coordinator(&config).execute().await.unwrap_err();
    assert!(matches!(err, HarvestError::DataMapping(_)));
}

#[tokio::test]
async fn test_badly_typed_record_is_skipped_not_fatal() {
    let body = r#"{"objects": [
        {"title": "Roads", "distribution_url": "http://geonode.themimu.info/layers/geonode%3Aroads"},
        {"title": "Odd", "distribution_url": "http://geonode.themimu.info/layers/geonode%3Aodd", "date": 20190805}
    ]}"#;

    let mut server = mockito::Server::new_async().await;
    let _mock = serve(&mut server, body).await;
    let out = TempDir::new().unwrap();
    let config = config_for(&format!("{}/", server.url()), out.path());

    let summary = coordinator(&config).execute().await.unwrap();

    assert_eq!(summary.total_records, 2);
    assert_eq!(summary.published, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.errors[0].title.as_deref(), Some("Odd"));
    assert!(out.path().join("mimu-roads.json").exists());
}

#[tokio::test]
async fn test_unreachable_catalog() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/layers")
        .with_status(500)
        .create_async()
        .await;
    let out = TempDir::new().unwrap();
    let config = config_for(&format!("{}/", server.url()), out.path());

    let err = coordinator(&config).execute().await.unwrap_err();
    assert!(matches!(err, HarvestError::Fetch(_)));
}
