//! Integration tests covering mixed batches and the catalog-to-downloader
//! workflow end to end.

use std::fs;

use depfetch::catalog::ReleaseCatalog;
use depfetch::download::{Download, Status};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

/// A batch mixing already-present, downloadable, and invalid entries ends
/// with per-file outcomes that sum up no matter how the pool scheduled them.
#[tokio::test]
async fn test_mixed_batch_outcomes_sum_up() {
    let server = MockServer::start().await;
    let temp_dir = create_temp_dir();

    let mut downloads = Vec::new();

    // Three files already on disk.
    for i in 0..3 {
        let name = format!("existing_{i}.csv");
        write_file(temp_dir.path(), &name, b"old content");
        downloads.push(server_download(&server, &format!("/dl/{name}"), &name));
    }

    // Five downloadable files.
    for i in 0..5 {
        let name = format!("fresh_{i}.csv");
        let route = format!("/dl/{name}");
        mock_file(&server, &route, format!("payload {i}").as_bytes()).await;
        downloads.push(server_download(&server, &route, &name));
    }

    // Two invalid descriptors.
    for i in 0..2 {
        downloads.push(Download::new("", &format!("invalid_{i}.csv"), 0));
    }

    let report = quiet_downloader(temp_dir.path())
        .concurrent_downloads(4)
        .retries(2)
        .build()
        .download(&downloads)
        .await;

    assert_eq!(report.total(), 10);
    assert_eq!(report.succeeded(), 5);
    assert_eq!(report.skipped(), 3);
    assert_eq!(report.failed(), 2);
    assert_eq!(
        report.succeeded() + report.failed() + report.skipped(),
        report.total()
    );

    // Each file carries its own expected outcome.
    for summary in report.summaries() {
        let name = &summary.download().filename;
        match summary.status() {
            Status::Success => assert!(name.starts_with("fresh_"), "unexpected success: {name}"),
            Status::Skipped(_) => {
                assert!(name.starts_with("existing_"), "unexpected skip: {name}")
            }
            Status::Fail(_) => assert!(name.starts_with("invalid_"), "unexpected failure: {name}"),
            Status::NotStarted => panic!("{name} never reached a terminal status"),
        }
    }

    for i in 0..5 {
        let content = fs::read(temp_dir.path().join(format!("fresh_{i}.csv"))).unwrap();
        assert_eq!(content, format!("payload {i}").as_bytes());
    }
    assert_no_scratch_files(temp_dir.path());
}

/// One failing file never aborts its siblings.
#[tokio::test]
async fn test_failure_is_isolated_per_file() {
    let server = MockServer::start().await;
    let temp_dir = create_temp_dir();

    mock_file(&server, "/dl/good.csv", b"good").await;
    Mock::given(method("GET"))
        .and(path("/dl/bad.csv"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let downloads = vec![
        server_download(&server, "/dl/good.csv", "good.csv"),
        server_download(&server, "/dl/bad.csv", "bad.csv"),
    ];
    let report = quiet_downloader(temp_dir.path())
        .retries(2)
        .build()
        .download(&downloads)
        .await;

    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(
        fs::read(temp_dir.path().join("good.csv")).unwrap(),
        b"good"
    );
}

/// Full workflow: resolve a release's files from the catalog, then download
/// them into a directory named after the release.
#[tokio::test]
async fn test_catalog_to_downloader_workflow() {
    let server = MockServer::start().await;
    let temp_dir = create_temp_dir();

    mock_file(&server, "/dl/model.csv", b"model data").await;
    mock_file(&server, "/dl/mutations.csv", b"mutation data").await;
    Mock::given(method("GET"))
        .and(path("/articles/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [
                {"name": "model.csv", "download_url": file_url(&server, "/dl/model.csv"), "size": 10},
                {"name": "mutations.csv", "download_url": file_url(&server, "/dl/mutations.csv"), "size": 13},
            ]
        })))
        .mount(&server)
        .await;

    let catalog = ReleaseCatalog::with_endpoints(&server.uri(), &server.uri());
    let files = catalog.release_files(42).await;
    assert_eq!(files.len(), 2);

    let directory = temp_dir
        .path()
        .join(depfetch::sanitize_dir_name("DepMap 24Q4 (Public)"));
    let report = quiet_downloader(&directory).build().download(&files).await;

    assert_eq!(report.succeeded(), 2);
    assert!(report.destination().ends_with("DepMap_24Q4__Public_"));
    assert_eq!(
        fs::read(directory.join("model.csv")).unwrap(),
        b"model data"
    );
    assert_eq!(
        fs::read(directory.join("mutations.csv")).unwrap(),
        b"mutation data"
    );
}
