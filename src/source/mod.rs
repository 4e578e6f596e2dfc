//! Observation storage abstraction
//!
//! The digest driver only sees the `ObservationSource` trait; the on-disk
//! layout of loose files and yearly archives lives in `store`.

pub(crate) mod store;
mod tarball;

use crate::core::ObservationDate;
use crate::error::AppError;

/// Anything that can look up the note written on a given day
pub(crate) trait ObservationSource {
    /// Display name for log output
    fn display_name(&self) -> &str;

    /// The observation recorded on `date`, or None when nothing was kept.
    /// Absence is not an error; only I/O faults are.
    fn fetch(&self, date: &ObservationDate) -> Result<Option<String>, AppError>;
}

pub(crate) use store::ArchiveStore;
