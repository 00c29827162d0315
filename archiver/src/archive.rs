use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Archive written into the working directory when no path is given.
pub const DEFAULT_ARCHIVE_NAME: &str = "girlgenius.cbz";

/// Archive entry name for a running index. Indices are strictly
/// increasing and gapless across the archive's lifetime.
pub fn entry_name(index: usize) -> String {
    format!("{:04}.jpg", index)
}

/// Append handle over the CBZ file. A run owns exactly one of these and
/// writes from a single place; worker tasks hand bytes back to the owner
/// instead of touching the archive themselves.
#[derive(Debug)]
pub struct ComicArchive {
    writer: ZipWriter<File>,
    comment: Vec<u8>,
}

impl ComicArchive {
    /// Open `path` for appending, creating a fresh archive when the file
    /// is missing or empty. Failures here are fatal for the run: a corrupt
    /// or unwritable archive is never retried.
    pub fn open(path: &Path) -> Result<Self> {
        let has_content = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
        if !has_content {
            let file = File::create(path)
                .with_context(|| format!("Failed to create archive {}", path.display()))?;
            return Ok(Self {
                writer: ZipWriter::new(file),
                comment: Vec::new(),
            });
        }

        let reader = File::open(path)
            .with_context(|| format!("Failed to open archive {}", path.display()))?;
        let comment = ZipArchive::new(reader)
            .with_context(|| {
                format!(
                    "Archive {} is unreadable; delete it manually before running again",
                    path.display()
                )
            })?
            .comment()
            .to_vec();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("Failed to open archive {} for appending", path.display()))?;
        let mut writer = ZipWriter::new_append(file)
            .with_context(|| format!("Failed to append to archive {}", path.display()))?;
        // Re-arm the existing comment so a run that writes nothing leaves
        // the metadata bytes untouched on finish.
        writer.set_raw_comment(comment.clone().into_boxed_slice());

        Ok(Self { writer, comment })
    }

    /// Raw resume metadata stored in the archive comment. Empty for a
    /// fresh archive.
    pub fn resume_comment(&self) -> &[u8] {
        &self.comment
    }

    /// Append one image entry. Strip images are already-compressed JPEGs,
    /// so entries are stored as-is.
    pub fn write_entry(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        self.writer
            .start_file(name, options)
            .with_context(|| format!("Failed to start archive entry {}", name))?;
        self.writer
            .write_all(bytes)
            .with_context(|| format!("Failed to write archive entry {}", name))?;
        Ok(())
    }

    /// Replace the resume metadata that `finish` writes out.
    pub fn set_resume_comment(&mut self, comment: &str) {
        self.writer.set_comment(comment);
    }

    /// Write the central directory and close the archive.
    pub fn finish(self) -> Result<()> {
        self.writer.finish().context("Failed to finalize archive")?;
        Ok(())
    }
}
