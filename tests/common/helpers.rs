use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use depfetch::download::Download;
use depfetch::downloader::DownloaderBuilder;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a file with the given content below the test directory
pub fn write_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// Creates test file content of specified size
pub fn test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Mounts a GET route serving the given bytes
pub async fn mock_file(server: &MockServer, route: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(server)
        .await;
}

/// Absolute URL of a route on the mock server
pub fn file_url(server: &MockServer, route: &str) -> String {
    format!("{}{}", server.uri(), route)
}

/// A download pointing at a route on the mock server
pub fn server_download(server: &MockServer, route: &str, filename: &str) -> Download {
    Download::new(&file_url(server, route), filename, 0)
}

/// Downloader builder with hidden progress bars and test-friendly backoff
pub fn quiet_downloader(dir: &Path) -> DownloaderBuilder {
    DownloaderBuilder::hidden()
        .directory(dir.to_path_buf())
        .backoff_unit(Duration::from_millis(10))
}

/// Number of requests the mock server has received so far
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
        .len()
}

/// Asserts that no `.part` scratch file is left below the directory
pub fn assert_no_scratch_files(dir: &Path) {
    let leftovers: Vec<_> = fs::read_dir(dir)
        .expect("Failed to read test directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".part"))
        .collect();
    assert!(
        leftovers.is_empty(),
        "leftover scratch files: {:?}",
        leftovers
    );
}
