/// Day key format used for observation file names: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Monthly bucket format: "2025-01"
pub(crate) const MONTH_FORMAT: &str = "%Y-%m";

/// Extension of loose observation files
pub(crate) const TEXT_EXT: &str = ".txt";

/// Extension of yearly and nested monthly archives (gzip'd tar)
pub(crate) const ARCHIVE_EXT: &str = ".tgz";

/// macOS AppleDouble companion files carry this fragment in their names
pub(crate) const SKIP_MARKER: &str = "._";

pub(crate) const MAIL_SUBJECT: &str = "Daily observations";
