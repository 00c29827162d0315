use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use reqwest::Client;

use crate::retry::{with_retries, MAX_ATTEMPTS};
use crate::scrape::extract_comic_urls;

const COMIC_PAGE_URL: &str = "http://www.girlgeniusonline.com/comic.php";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Canonical page URL for a publication date.
pub fn page_url(date: NaiveDate) -> String {
    format!("{}?date={}", COMIC_PAGE_URL, date.format("%Y%m%d"))
}

/// Shared HTTP client used by both pipeline stages.
pub fn new_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("girl-genius-archiver/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch the page for `date` and return the comic image URLs in document
/// order. A non-success status counts as a transport failure and is
/// retried like one. `None` means resolution failed after all attempts;
/// callers treat that as zero links so one bad date cannot stall the run,
/// and count it separately from a date that published nothing.
pub async fn resolve_links(client: &Client, date: NaiveDate) -> Option<Vec<String>> {
    with_retries(MAX_ATTEMPTS, || try_resolve(client, date)).await
}

async fn try_resolve(client: &Client, date: NaiveDate) -> Option<Vec<String>> {
    let url = page_url(date);
    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Error getting comic page for {}: {}", date, e);
            return None;
        }
    };
    if !response.status().is_success() {
        warn!("Comic page for {} returned {}", date, response.status());
        return None;
    }
    match response.text().await {
        Ok(html) => Some(extract_comic_urls(&html)),
        Err(e) => {
            warn!("Error reading comic page for {}: {}", date, e);
            None
        }
    }
}

/// Download one comic image. Same retry policy as link resolution; `None`
/// means the download failed after all attempts.
pub async fn download_image(client: &Client, url: &str) -> Option<Vec<u8>> {
    with_retries(MAX_ATTEMPTS, || try_download(client, url)).await
}

async fn try_download(client: &Client, url: &str) -> Option<Vec<u8>> {
    info!("Downloading {}", url);
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Download of {} failed: {}", url, e);
            return None;
        }
    };
    if !response.status().is_success() {
        warn!("Download of {} returned {}", url, response.status());
        return None;
    }
    match response.bytes().await {
        Ok(bytes) => Some(bytes.to_vec()),
        Err(e) => {
            warn!("Download of {} failed mid-body: {}", url, e);
            None
        }
    }
}
