//! HTTP client for the Figshare catalog and the DepMap portal.

use crate::catalog::release::{sort_newest_first, Release, ReleaseVersion};
use crate::download::Download;
use crate::error::Result;
use crate::http::{create_http_client, HttpClientConfig};

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use std::convert::TryFrom;
use std::time::Duration;
use tracing::{error, info, warn};

const FIGSHARE_API: &str = "https://api.figshare.com/v2";
const PORTAL_API: &str = "https://depmap.org/portal/api";

/// Item type filter for the search endpoint: 2 selects datasets.
const ITEM_TYPE_DATASET: &str = "2";
const SEARCH_TERM: &str = "DepMap";

/// Per-request timeout for catalog calls. Catalog payloads are small, so
/// this is much tighter than a file download needs to be.
const CATALOG_TIMEOUT: Duration = Duration::from_secs(30);

/// Article record returned by the search endpoint.
///
/// Every field carries an explicit default so a sparse catalog record maps
/// to a well-typed value instead of a parse failure.
#[derive(Debug, Deserialize)]
struct SearchArticle {
    #[serde(default)]
    title: String,
    #[serde(default)]
    id: u64,
    #[serde(default)]
    url: String,
    #[serde(default)]
    published_date: Option<String>,
}

/// Article detail record, of which only the file list is used.
#[derive(Debug, Deserialize)]
struct ArticleDetail {
    #[serde(default)]
    files: Vec<ArticleFile>,
}

#[derive(Debug, Deserialize)]
struct ArticleFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    download_url: String,
    #[serde(default)]
    size: u64,
}

/// Row of the portal's CSV file listing. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct PortalFileRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    size: u64,
}

/// Client for the release catalog.
///
/// Queries the Figshare search API for DepMap dataset releases and resolves
/// their downloadable file lists, either per release (Figshare article
/// detail) or for the current release (portal CSV listing).
#[derive(Clone)]
pub struct ReleaseCatalog {
    client: ClientWithMiddleware,
    figshare_api: String,
    portal_api: String,
}

impl std::fmt::Debug for ReleaseCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseCatalog")
            .field("figshare_api", &self.figshare_api)
            .field("portal_api", &self.portal_api)
            .finish()
    }
}

impl ReleaseCatalog {
    /// Creates a catalog client against the public endpoints.
    pub fn new() -> Self {
        Self::with_endpoints(FIGSHARE_API, PORTAL_API)
    }

    /// Creates a catalog client against custom endpoints.
    ///
    /// Used by tests to point the catalog at a local server double.
    pub fn with_endpoints(figshare_api: &str, portal_api: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(crate::USER_AGENT));

        let client = create_http_client(HttpClientConfig {
            timeout: Some(CATALOG_TIMEOUT),
            proxy: None,
            headers: Some(headers),
        })
        .unwrap();

        Self {
            client,
            figshare_api: figshare_api.trim_end_matches('/').to_string(),
            portal_api: portal_api.trim_end_matches('/').to_string(),
        }
    }

    /// List the known DepMap releases, newest first.
    ///
    /// Fails soft: on any network or parse error this logs a diagnostic and
    /// returns an empty list.
    pub async fn list_releases(&self) -> Vec<Release> {
        match self.try_list_releases().await {
            Ok(releases) => {
                info!("found {} DepMap releases in the catalog", releases.len());
                releases
            }
            Err(e) => {
                error!("failed to list releases: {e}");
                Vec::new()
            }
        }
    }

    /// List the downloadable files of one release.
    ///
    /// Fails soft like [`ReleaseCatalog::list_releases`].
    pub async fn release_files(&self, article_id: u64) -> Vec<Download> {
        match self.try_release_files(article_id).await {
            Ok(files) => {
                info!("release {} contains {} files", article_id, files.len());
                files
            }
            Err(e) => {
                error!("failed to list files of release {article_id}: {e}");
                Vec::new()
            }
        }
    }

    /// List the files of the current release from the portal CSV listing.
    ///
    /// Fails soft like [`ReleaseCatalog::list_releases`].
    pub async fn current_release_files(&self) -> Vec<Download> {
        match self.try_current_release_files().await {
            Ok(files) => {
                info!("current release contains {} files", files.len());
                files
            }
            Err(e) => {
                error!("failed to list current release files: {e}");
                Vec::new()
            }
        }
    }

    async fn try_list_releases(&self) -> Result<Vec<Release>> {
        let articles: Vec<SearchArticle> = self
            .client
            .get(format!("{}/articles/search", self.figshare_api))
            .query(&[
                ("search_for", SEARCH_TERM),
                ("item_type", ITEM_TYPE_DATASET),
                ("order", "published_date"),
                ("order_direction", "desc"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut releases: Vec<Release> = articles
            .into_iter()
            .filter_map(|article| {
                let version = ReleaseVersion::from_title(&article.title);
                if !is_depmap_release(&article.title, version) {
                    return None;
                }
                Some(Release {
                    published: parse_published(article.published_date.as_deref()),
                    title: article.title,
                    id: article.id,
                    url: article.url,
                    version,
                })
            })
            .collect();

        sort_newest_first(&mut releases);
        Ok(releases)
    }

    async fn try_release_files(&self, article_id: u64) -> Result<Vec<Download>> {
        let detail: ArticleDetail = self
            .client
            .get(format!("{}/articles/{}", self.figshare_api, article_id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(detail
            .files
            .into_iter()
            .filter_map(|f| to_download(&f.name, &f.download_url, f.size))
            .collect())
    }

    async fn try_current_release_files(&self) -> Result<Vec<Download>> {
        let body = self
            .client
            .get(format!("{}/download/files", self.portal_api))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let mut files = Vec::new();
        for row in reader.deserialize::<PortalFileRow>() {
            let row = row?;
            if let Some(download) = to_download(&row.name, &row.url, row.size) {
                files.push(download);
            }
        }
        Ok(files)
    }
}

impl Default for ReleaseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep only DepMap releases: the title must mention DepMap and either be a
/// public release or carry a version tag.
fn is_depmap_release(title: &str, version: ReleaseVersion) -> bool {
    title.contains("DepMap") && (title.contains("Public") || version.is_known())
}

fn parse_published(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            warn!("unparseable published date {raw:?}: {e}");
            None
        }
    }
}

/// Build a [`Download`] from a catalog record, deriving the filename from
/// the URL when the record has none. Records with neither name nor URL are
/// dropped.
///
/// Note that a record with a name but an empty URL is kept: the downloader
/// reports it as a per-file failure instead of the catalog hiding it.
fn to_download(name: &str, url: &str, size: u64) -> Option<Download> {
    if !name.is_empty() {
        return Some(Download::new(url, name, size));
    }
    if url.is_empty() {
        warn!("dropping catalog file entry without name or URL");
        return None;
    }
    match Download::try_from(url) {
        Ok(download) => Some(Download { size, ..download }),
        Err(e) => {
            warn!("dropping catalog file entry: {e}");
            None
        }
    }
}
