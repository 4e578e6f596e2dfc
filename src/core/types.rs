//! Core data types shared by the resolver and the digest driver

use chrono::{Datelike, Months, NaiveDate};

use crate::consts::{ARCHIVE_EXT, DATE_FORMAT, MONTH_FORMAT, TEXT_EXT};

/// A calendar day some whole number of years before "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ObservationDate {
    date: NaiveDate,
}

impl ObservationDate {
    pub(crate) fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Month and day are kept; Feb 29 falls back to Feb 28 in non-leap years.
    /// Returns None once the result leaves chrono's representable range.
    pub(crate) fn years_before(today: NaiveDate, years_ago: u32) -> Option<Self> {
        let months = years_ago.checked_mul(12)?;
        today.checked_sub_months(Months::new(months)).map(Self::new)
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.date
    }

    pub(crate) fn year(&self) -> i32 {
        self.date.year()
    }

    /// "2019-06"
    pub(crate) fn year_month_key(&self) -> String {
        self.date.format(MONTH_FORMAT).to_string()
    }

    /// "2019-06-15"
    pub(crate) fn day_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// "2019-06-15.txt"
    pub(crate) fn day_file_name(&self) -> String {
        format!("{}{TEXT_EXT}", self.day_key())
    }

    /// "2019.tgz"
    pub(crate) fn year_archive_name(&self) -> String {
        format!("{}{ARCHIVE_EXT}", self.year())
    }
}

/// Text body built from one section per resolved year, nearest year first
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Digest {
    text: String,
    years: Vec<i32>,
}

impl Digest {
    pub(crate) fn push_section(&mut self, year: i32, content: &str) {
        self.text.push_str(&format!("\n=== {year} ===\n\n{content}\n"));
        self.years.push(year);
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn years(&self) -> &[i32] {
        &self.years
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
