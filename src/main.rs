//! Interactive DepMap dataset downloader.
//!
//! Thin terminal adapter: all selection parsing and formatting lives in
//! [`depfetch::cli`], this binary only reads lines and prints.

use depfetch::catalog::{Release, ReleaseCatalog};
use depfetch::cli::{
    apply_limit, format_file_listing, format_release_table, format_report, parse_choice,
    parse_file_limit, parse_release_index, MenuChoice,
};
use depfetch::download::{Download, Status};
use depfetch::downloader::DownloaderBuilder;
use depfetch::utils::sanitize_dir_name;

use reqwest::header::{HeaderValue, USER_AGENT};
use std::io::{self, Write};
use std::path::Path;
use tracing::{error, info};

/// Root directory all releases are downloaded under.
const DOWNLOAD_ROOT: &str = "depmap_data";
/// Rows shown when previewing a release's file listing.
const LISTING_PREVIEW_ROWS: usize = 10;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line
}

#[tokio::main]
async fn main() {
    init_tracing();

    println!("=== DepMap dataset downloader ===");
    println!("querying the catalog for available releases...");

    let catalog = ReleaseCatalog::new();
    let releases = catalog.list_releases().await;
    if releases.is_empty() {
        println!("no catalog releases found; only the current release can be downloaded");
    }

    println!();
    println!("1. download the current release");
    if !releases.is_empty() {
        println!("2. download a historical release");
        println!("3. inspect a release's file listing");
    }

    let input = prompt("\nselection: ");
    match parse_choice(&input) {
        Some(MenuChoice::DownloadCurrent) => download_current(&catalog).await,
        Some(MenuChoice::DownloadHistorical) if !releases.is_empty() => {
            download_historical(&catalog, &releases).await
        }
        Some(MenuChoice::InspectRelease) if !releases.is_empty() => {
            inspect_release(&catalog, &releases).await
        }
        _ => println!("invalid selection"),
    }
}

async fn download_current(catalog: &ReleaseCatalog) {
    let files = catalog.current_release_files().await;
    if files.is_empty() {
        println!("could not retrieve the current release file listing");
        return;
    }
    run_download("current_release", files).await;
}

async fn download_historical(catalog: &ReleaseCatalog, releases: &[Release]) {
    print!("{}", format_release_table(releases));
    let index = match parse_release_index(&prompt("\nrelease to download: "), releases.len()) {
        Ok(index) => index,
        Err(e) => {
            println!("{e}");
            return;
        }
    };

    let release = &releases[index];
    let files = catalog.release_files(release.id).await;
    if files.is_empty() {
        println!("could not retrieve the file listing of {}", release.title);
        return;
    }
    run_download(&release.title, files).await;
}

async fn inspect_release(catalog: &ReleaseCatalog, releases: &[Release]) {
    print!("{}", format_release_table(releases));
    let index = match parse_release_index(&prompt("\nrelease to inspect: "), releases.len()) {
        Ok(index) => index,
        Err(e) => {
            println!("{e}");
            return;
        }
    };

    let release = &releases[index];
    println!("\n{}", release.title);
    if !release.url.is_empty() {
        println!("url: {}", release.url);
    }
    if let Some(published) = release.published {
        println!("published: {}", published.format("%Y-%m-%d"));
    }

    let files = catalog.release_files(release.id).await;
    if files.is_empty() {
        println!("could not retrieve the file listing");
        return;
    }
    print!("{}", format_file_listing(&files, LISTING_PREVIEW_ROWS));
}

async fn run_download(label: &str, files: Vec<Download>) {
    let limit = match parse_file_limit(&prompt("number of files to download (blank for all): ")) {
        Ok(limit) => limit,
        Err(e) => {
            println!("{e}");
            return;
        }
    };
    let files = apply_limit(files, limit);

    let directory = Path::new(DOWNLOAD_ROOT).join(sanitize_dir_name(label));
    println!("downloading {} files to {}", files.len(), directory.display());

    let downloader = DownloaderBuilder::new()
        .directory(directory)
        .header(USER_AGENT, HeaderValue::from_static(depfetch::USER_AGENT))
        .on_complete(|summary| match summary.status() {
            Status::Success => info!("downloaded {}", summary.download().filename),
            Status::Skipped(reason) => {
                info!("skipped {}: {}", summary.download().filename, reason)
            }
            Status::Fail(detail) => {
                error!("failed {}: {}", summary.download().filename, detail)
            }
            Status::NotStarted => {}
        })
        .build();

    let report = downloader.download(&files).await;
    print!("{}", format_report(&report));
}
