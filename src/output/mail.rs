//! Plain-text digest mail over implicit-TLS SMTP

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::MailSettings;
use crate::consts::MAIL_SUBJECT;
use crate::error::MailError;

/// Delivers a finished digest body
pub(crate) trait Mailer {
    fn send(&self, body: &str) -> Result<(), MailError>;
}

/// Sends to the configured address, which is also the sender
pub(crate) struct SmtpMailer {
    settings: MailSettings,
}

impl SmtpMailer {
    pub(crate) fn new(settings: MailSettings) -> Self {
        Self { settings }
    }

    fn mailbox(&self) -> Result<Mailbox, MailError> {
        self.settings
            .address
            .parse()
            .map_err(|source| MailError::Address {
                input: self.settings.address.clone(),
                source,
            })
    }

    fn build_message(&self, body: &str) -> Result<Message, MailError> {
        let mailbox = self.mailbox()?;
        let message = Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(MAIL_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;
        Ok(message)
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, body: &str) -> Result<(), MailError> {
        let message = self.build_message(body)?;

        let transport = SmtpTransport::relay(&self.settings.host)?
            .port(self.settings.port)
            .credentials(Credentials::new(
                self.settings.username.clone(),
                self.settings.password.clone(),
            ))
            .build();

        log::info!(
            "Sending digest to {} via {}:{}",
            self.settings.address,
            self.settings.host,
            self.settings.port
        );
        let response = transport.send(&message)?;
        log::debug!("SMTP response code {}", response.code());
        Ok(())
    }
}
