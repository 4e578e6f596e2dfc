use chrono::NaiveDate;

use crate::error::AppError;
use crate::source::ObservationSource;

use super::{Digest, ObservationDate, years_ago};

/// Walk back one year at a time from `today`, collecting observations until
/// the first year with nothing recorded.
pub(crate) fn build_digest(
    source: &dyn ObservationSource,
    today: NaiveDate,
) -> Result<Digest, AppError> {
    let mut digest = Digest::default();

    for n in years_ago() {
        let Some(date) = ObservationDate::years_before(today, n) else {
            break;
        };
        match source.fetch(&date)? {
            Some(content) => digest.push_section(date.year(), &content),
            None => {
                log::debug!("Nothing for {} years ago, stopping", n);
                break;
            }
        }
    }

    log::info!(
        "Digest covers {} year(s) from {}",
        digest.years().len(),
        source.display_name()
    );
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MemorySource {
        notes: HashMap<NaiveDate, String>,
        probed: RefCell<Vec<NaiveDate>>,
    }

    impl MemorySource {
        fn new(notes: &[(NaiveDate, &str)]) -> Self {
            Self {
                notes: notes
                    .iter()
                    .map(|(d, s)| (*d, s.to_string()))
                    .collect(),
                probed: RefCell::new(Vec::new()),
            }
        }
    }

    impl ObservationSource for MemorySource {
        fn display_name(&self) -> &str {
            "memory"
        }

        fn fetch(&self, date: &ObservationDate) -> Result<Option<String>, AppError> {
            self.probed.borrow_mut().push(date.date());
            Ok(self.notes.get(&date.date()).cloned())
        }
    }

    struct FailingSource;

    impl ObservationSource for FailingSource {
        fn display_name(&self) -> &str {
            "failing"
        }

        fn fetch(&self, _date: &ObservationDate) -> Result<Option<String>, AppError> {
            Err(AppError::Archive {
                path: "2023.tgz".into(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad gzip header"),
            })
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_year_digest_matches_expected_text() {
        let source = MemorySource::new(&[(ymd(2023, 6, 15), "Saw a heron.")]);
        let digest = build_digest(&source, ymd(2024, 6, 15)).unwrap();
        assert_eq!(digest.as_str(), "\n=== 2023 ===\n\nSaw a heron.\n");
        assert_eq!(
            *source.probed.borrow(),
            vec![ymd(2023, 6, 15), ymd(2022, 6, 15)]
        );
    }

    #[test]
    fn stops_at_first_missing_year() {
        let source = MemorySource::new(&[
            (ymd(2023, 6, 15), "one"),
            (ymd(2021, 6, 15), "three"),
        ]);
        let digest = build_digest(&source, ymd(2024, 6, 15)).unwrap();
        assert_eq!(digest.years(), &[2023]);
        assert!(!digest.as_str().contains("three"));
        assert_eq!(source.probed.borrow().len(), 2);
    }

    #[test]
    fn consecutive_years_nearest_first() {
        let source = MemorySource::new(&[
            (ymd(2023, 6, 15), "one"),
            (ymd(2022, 6, 15), "two"),
            (ymd(2021, 6, 15), "three"),
        ]);
        let digest = build_digest(&source, ymd(2024, 6, 15)).unwrap();
        assert_eq!(digest.years(), &[2023, 2022, 2021]);
        assert_eq!(
            digest.as_str(),
            "\n=== 2023 ===\n\none\n\n=== 2022 ===\n\ntwo\n\n=== 2021 ===\n\nthree\n"
        );
    }

    #[test]
    fn empty_when_last_year_missing() {
        let source = MemorySource::new(&[(ymd(2022, 6, 15), "two")]);
        let digest = build_digest(&source, ymd(2024, 6, 15)).unwrap();
        assert!(digest.is_empty());
        assert_eq!(digest.as_str(), "");
    }

    #[test]
    fn leap_day_probes_feb_28() {
        let source = MemorySource::new(&[(ymd(2023, 2, 28), "clamped")]);
        let digest = build_digest(&source, ymd(2024, 2, 29)).unwrap();
        assert_eq!(digest.years(), &[2023]);
    }

    #[test]
    fn source_error_is_fatal() {
        let err = build_digest(&FailingSource, ymd(2024, 6, 15)).unwrap_err();
        assert!(matches!(err, AppError::Archive { .. }));
    }
}
