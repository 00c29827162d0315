use std::future::Future;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use futures_util::{pin_mut, stream, StreamExt};
use log::{info, warn};

use crate::archive::{entry_name, ComicArchive};
use crate::dates::publication_dates;
use crate::fetch::{download_image, new_client, resolve_links};
use crate::resume::ResumeState;

/// Workers per pipeline stage. Resolution of later dates overlaps with the
/// downloads for earlier ones.
const STAGE_CONCURRENCY: usize = 8;

/// What one run did. Resolution failures stay distinguishable from dates
/// that simply published nothing, even though both leave the archive
/// unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub entries_written: usize,
    pub resolve_failures: usize,
    pub fetch_failures: usize,
}

/// Drive the two bounded mapping stages over `dates` and hand each fetched
/// image to `write_entry` together with its 0-based position in the
/// flattened link stream. Tasks within a stage may complete in any order,
/// but results always surface in submission order, so positions are
/// gapless and match the date/link order exactly.
///
/// A failed resolution contributes zero links; a failed download is
/// skipped and consumes no position.
pub async fn run<R, RF, F, FF, W>(
    dates: impl Iterator<Item = NaiveDate>,
    resolve: R,
    fetch: F,
    mut write_entry: W,
) -> Result<RunSummary>
where
    R: Fn(NaiveDate) -> RF,
    RF: Future<Output = Option<Vec<String>>>,
    F: Fn(String) -> FF,
    FF: Future<Output = Option<Vec<u8>>>,
    W: FnMut(usize, Vec<u8>) -> Result<()>,
{
    let mut written = 0;
    let mut resolve_failures = 0;
    let mut fetch_failures = 0;

    {
        let links = stream::iter(dates)
            .map(|date| {
                let resolved = resolve(date);
                async move { (date, resolved.await) }
            })
            .buffered(STAGE_CONCURRENCY)
            .flat_map(|(date, links)| {
                let links = links.unwrap_or_else(|| {
                    warn!("Giving up on {} after repeated failures", date);
                    resolve_failures += 1;
                    Vec::new()
                });
                stream::iter(links)
            });

        let images = links.map(|url| fetch(url)).buffered(STAGE_CONCURRENCY);
        pin_mut!(images);

        while let Some(result) = images.next().await {
            match result {
                Some(bytes) => {
                    write_entry(written, bytes)?;
                    written += 1;
                }
                None => fetch_failures += 1,
            }
        }
    }

    Ok(RunSummary {
        entries_written: written,
        resolve_failures,
        fetch_failures,
    })
}

/// Run the whole append pipeline against the archive at `archive_path`.
///
/// With no explicit `start_date` the run resumes from the archive's own
/// metadata. An explicit start date still honors the stored entry index,
/// so numbering continues without gaps.
pub async fn archive_comics(
    start_date: Option<NaiveDate>,
    end_date: NaiveDate,
    archive_path: &Path,
) -> Result<RunSummary> {
    let mut archive = ComicArchive::open(archive_path)?;
    let mut resume = ResumeState::decode(archive.resume_comment());
    if let Some(date) = start_date {
        resume.start_date = date;
    }
    info!(
        "Getting image URLs for {} through {}",
        resume.start_date, end_date
    );

    let client = new_client()?;
    let next_index = resume.next_index;
    let summary = run(
        publication_dates(resume.start_date, end_date),
        |date| resolve_links(&client, date),
        |url| {
            let client = &client;
            async move { download_image(client, &url).await }
        },
        |position, bytes| archive.write_entry(&entry_name(next_index + position), &bytes),
    )
    .await?;

    if summary.entries_written > 0 {
        let last_index = next_index + summary.entries_written - 1;
        archive.set_resume_comment(&ResumeState::encode(end_date, last_index));
    } else {
        info!("No new comics.");
    }
    archive.finish()?;

    Ok(summary)
}
