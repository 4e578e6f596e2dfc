use chrono::NaiveDate;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{MailSettings, default_root};
use crate::core::{Digest, build_digest};
use crate::error::{AppError, MailError};
use crate::output::{Mailer, SmtpMailer, print_digest};
use crate::source::ArchiveStore;
use crate::utils::{Timezone, parse_date};

/// Everything a run needs, resolved once from CLI and config
#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub(crate) root: PathBuf,
    pub(crate) today: NaiveDate,
    pub(crate) debug: bool,
}

impl RunOptions {
    pub(crate) fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let today = match cli.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => Timezone::parse(cli.timezone.as_deref())?.today(),
        };
        Ok(Self {
            root: cli.root.clone().unwrap_or_else(default_root),
            today,
            debug: cli.debug,
        })
    }
}

pub(crate) fn run(options: &RunOptions) -> Result<(), AppError> {
    let store = ArchiveStore::new(&options.root);
    log::debug!(
        "Building digest for {} from {}",
        options.today,
        store.root().display()
    );

    let digest = build_digest(&store, options.today)?;
    deliver(&digest, options.debug, || {
        let settings = MailSettings::from_env()?;
        Ok(Box::new(SmtpMailer::new(settings)))
    })
}

/// Print in debug mode; otherwise connect and mail. `connect` is only
/// called on the mail path.
fn deliver<F>(digest: &Digest, debug: bool, connect: F) -> Result<(), AppError>
where
    F: FnOnce() -> Result<Box<dyn Mailer>, MailError>,
{
    if debug {
        print_digest(digest);
        return Ok(());
    }

    if digest.is_empty() {
        log::warn!("No observation for last year; sending an empty digest");
    }
    let mailer = connect()?;
    mailer.send(digest.as_str())?;
    Ok(())
}
