//! Tests for the downloader builder and configuration surface.

use depfetch::downloader::DownloaderBuilder;
use depfetch::StyleOptions;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

mod common;
use common::helpers::*;

#[test]
fn test_builder_defaults() {
    let downloader = DownloaderBuilder::new().build();

    assert_eq!(downloader.retries(), 3);
    assert_eq!(downloader.concurrent_downloads(), 4);
    assert_eq!(downloader.backoff_unit(), Duration::from_secs(1));
    assert!(downloader.timeout().is_none());
    assert!(downloader.headers().is_none());
}

#[test]
fn test_builder_configuration() {
    let temp_dir = create_temp_dir();
    let downloader = DownloaderBuilder::new()
        .directory(temp_dir.path().to_path_buf())
        .retries(5)
        .concurrent_downloads(10)
        .backoff_unit(Duration::from_millis(250))
        .timeout(Duration::from_secs(30))
        .build();

    assert_eq!(downloader.directory(), temp_dir.path());
    assert_eq!(downloader.retries(), 5);
    assert_eq!(downloader.concurrent_downloads(), 10);
    assert_eq!(downloader.backoff_unit(), Duration::from_millis(250));
    assert_eq!(downloader.timeout(), Some(Duration::from_secs(30)));
}

#[test]
fn test_builder_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("depfetch-test-agent"));
    let downloader = DownloaderBuilder::new().headers(headers).build();

    assert!(downloader.headers().is_some());
    assert_eq!(
        downloader.headers().unwrap().get(USER_AGENT),
        Some(&HeaderValue::from_static("depfetch-test-agent"))
    );
}

#[test]
fn test_builder_single_header() {
    let downloader = DownloaderBuilder::new()
        .header(USER_AGENT, HeaderValue::from_static("single-test-agent"))
        .build();

    assert!(downloader.headers().is_some());
    assert_eq!(
        downloader.headers().unwrap().get(USER_AGENT),
        Some(&HeaderValue::from_static("single-test-agent"))
    );
}

#[test]
fn test_builder_hidden() {
    let downloader = DownloaderBuilder::hidden().build();

    assert_eq!(downloader.retries(), 3);
    assert_eq!(downloader.concurrent_downloads(), 4);
    assert!(!downloader.style_options().is_enabled());
}

#[test]
fn test_builder_style_options() {
    let downloader = DownloaderBuilder::new()
        .style_options(StyleOptions {
            main: true,
            child: false,
        })
        .build();

    assert!(downloader.style_options().main);
    assert!(!downloader.style_options().child);
}

#[test]
fn test_downloader_debug() {
    let downloader = DownloaderBuilder::new().build();
    let debug_str = format!("{:?}", downloader);

    assert!(debug_str.contains("Downloader"));
    assert!(debug_str.contains("config"));
}

#[test]
fn test_downloader_clone() {
    let downloader = DownloaderBuilder::new().retries(7).build();
    let cloned = downloader.clone();

    assert_eq!(downloader.retries(), cloned.retries());
    assert_eq!(
        downloader.concurrent_downloads(),
        cloned.concurrent_downloads()
    );
}
