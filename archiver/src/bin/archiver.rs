use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use girl_genius_archiver::{archive_comics, DEFAULT_ARCHIVE_NAME};

/// Mirror Girl Genius strips into a local CBZ archive, resuming from
/// wherever the previous run stopped
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First publication date to fetch (YYYY-MM-DD); defaults to resuming
    /// from the archive's own metadata
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Last publication date to fetch (YYYY-MM-DD); defaults to today
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// CBZ archive to append to
    #[arg(long, default_value = DEFAULT_ARCHIVE_NAME)]
    archive: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    // "Today" is computed per invocation, not baked in at startup.
    let end_date = cli.end_date.unwrap_or_else(|| Local::now().date_naive());

    match archive_comics(cli.start_date, end_date, &cli.archive).await {
        Ok(summary) => {
            println!(
                "{} new comics archived ({} dates unresolved, {} downloads failed)",
                summary.entries_written, summary.resolve_failures, summary.fetch_failures
            );
            Ok(())
        }
        Err(e) => {
            if let Some(io) = e.root_cause().downcast_ref::<std::io::Error>() {
                if io.kind() == ErrorKind::PermissionDenied {
                    eprintln!(
                        "Permission denied on {}; fix permissions and run again.",
                        cli.archive.display()
                    );
                }
            }
            Err(e)
        }
    }
}
