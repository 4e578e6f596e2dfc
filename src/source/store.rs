//! On-disk observation store
//!
//! ```text
//! <root>/2019-06/2019-06-15.txt   loose day file, checked first
//! <root>/2019.tgz                 whole year, day files or monthly .tgz inside
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ObservationDate;
use crate::error::AppError;
use crate::source::ObservationSource;

use super::tarball::{DayTarget, find_in_year_archive};

/// Observation store rooted at a single directory
#[derive(Debug, Clone)]
pub(crate) struct ArchiveStore {
    root: PathBuf,
}

impl ArchiveStore {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    fn loose_path(&self, date: &ObservationDate) -> PathBuf {
        self.root
            .join(date.year_month_key())
            .join(date.day_file_name())
    }

    fn year_archive_path(&self, date: &ObservationDate) -> PathBuf {
        self.root.join(date.year_archive_name())
    }
}

impl ObservationSource for ArchiveStore {
    fn display_name(&self) -> &str {
        "observation store"
    }

    fn fetch(&self, date: &ObservationDate) -> Result<Option<String>, AppError> {
        log::info!(
            "Fetching content for {} (month {}, file {})",
            date.date(),
            date.year_month_key(),
            date.day_file_name()
        );

        // Not archived yet
        let loose = self.loose_path(date);
        if loose.is_file() {
            let content = fs::read_to_string(&loose).map_err(|source| AppError::ReadFile {
                path: loose.clone(),
                source,
            })?;
            log::info!("Loaded content directly from {}", loose.display());
            return Ok(Some(content).filter(|c| !c.is_empty()));
        }

        let archive = self.year_archive_path(date);
        if !archive.is_file() {
            log::debug!("No loose file and no archive at {}", archive.display());
            return Ok(None);
        }

        let found = find_in_year_archive(&archive, &DayTarget::new(date))?;
        if found.is_none() {
            log::debug!(
                "{} has no entry for {}",
                archive.display(),
                date.day_key()
            );
        }
        Ok(found)
    }
}
