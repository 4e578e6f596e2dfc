//! Day lookup inside yearly `.tgz` archives
//!
//! A year archive holds either day files directly or monthly `.tgz`
//! archives, which are opened from their own extracted bytes. Only one
//! level of nesting is followed.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tar::Archive;

use crate::consts::{ARCHIVE_EXT, SKIP_MARKER};
use crate::core::ObservationDate;
use crate::error::AppError;

/// Entry-name patterns for one target day
#[derive(Debug, Clone)]
pub(super) struct DayTarget {
    year_month: String,
    file_name: String,
}

impl DayTarget {
    pub(super) fn new(date: &ObservationDate) -> Self {
        Self {
            year_month: date.year_month_key(),
            file_name: date.day_file_name(),
        }
    }

    fn is_day_file(&self, name: &str) -> bool {
        name.ends_with(&self.file_name)
    }

    fn is_month_archive(&self, name: &str) -> bool {
        name.contains(&self.year_month) && name.ends_with(ARCHIVE_EXT)
    }
}

/// Search the year archive at `path`. The file handle is dropped before returning.
pub(super) fn find_in_year_archive(
    path: &Path,
    target: &DayTarget,
) -> Result<Option<String>, AppError> {
    let to_error = |source: io::Error| AppError::Archive {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    let mut archive = Archive::new(GzDecoder::new(BufReader::new(file)));
    scan(&mut archive, target, true).map_err(to_error)
}

/// First non-empty match in archive order wins.
fn scan<R: Read>(
    archive: &mut Archive<R>,
    target: &DayTarget,
    allow_nested: bool,
) -> io::Result<Option<String>> {
    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        if name.contains(SKIP_MARKER) {
            log::trace!("Skipping companion file {}", name);
            continue;
        }

        let content = if target.is_day_file(&name) {
            let content = read_lossy(&mut entry)?;
            log::info!("Loaded content from archive entry {}", name);
            content
        } else if allow_nested && target.is_month_archive(&name) {
            log::info!("Detected nested archive {}", name);
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            let mut nested = Archive::new(GzDecoder::new(bytes.as_slice()));
            match scan(&mut nested, target, false)? {
                Some(content) => content,
                None => continue,
            }
        } else {
            continue;
        };

        // An empty note does not end the search
        if !content.is_empty() {
            return Ok(Some(content));
        }
    }
    Ok(None)
}

/// Invalid UTF-8 is replaced, never rejected
fn read_lossy<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
