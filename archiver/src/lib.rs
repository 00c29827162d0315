// Export the pipeline modules
pub mod archive;
pub mod dates;
pub mod fetch;
pub mod pipeline;
pub mod resume;
pub mod retry;
pub mod scrape;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::archive::{entry_name, ComicArchive, DEFAULT_ARCHIVE_NAME};
pub use crate::dates::publication_dates;
pub use crate::fetch::{download_image, new_client, page_url, resolve_links};
pub use crate::pipeline::{archive_comics, RunSummary};
pub use crate::resume::ResumeState;
pub use crate::scrape::extract_comic_urls;
