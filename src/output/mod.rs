//! Digest delivery: stdout in debug mode, SMTP otherwise

mod mail;

pub(crate) use mail::{Mailer, SmtpMailer};

use crate::core::Digest;

/// Debug-mode output, the digest followed by a newline
pub(crate) fn print_digest(digest: &Digest) {
    println!("{}", digest.as_str());
}
