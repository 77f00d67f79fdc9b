//! Transactional email — welcome message for new accounts.
//!
//! [`EmailService`] takes its sender identity and provider token from
//! [`Settings`] and hands rendered mail to a [`MailTransport`]. Without a
//! non-empty token the service stays disabled: sends fail with [`AppError::Email`]
//! instead of reaching the transport, so a missing optional integration
//! never stops the process.

pub mod templates;

use tracing::{error, info, warn};

use crate::config::Settings;
use crate::error::AppError;

/// Category tag attached to welcome messages.
pub const WELCOME_CATEGORY: &str = "welcome";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub email: String,
    pub name: String,
}

/// A fully rendered message ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub sender: Address,
    pub to: Vec<Address>,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub category: String,
}

/// Delivery backend. Implementations own the provider wire protocol.
pub trait MailTransport: Send + Sync {
    /// Deliver `mail` authenticated with `token`; returns the provider's
    /// response summary.
    fn send(&self, token: &str, mail: &Mail) -> Result<String, AppError>;
}

pub struct EmailService {
    api_token: Option<String>,
    sender: Address,
    transport: Box<dyn MailTransport>,
}

impl EmailService {
    pub fn new(settings: &Settings, transport: Box<dyn MailTransport>) -> Self {
        let api_token = settings.str("MAILTRAP_API_TOKEN").filter(|t| !t.is_empty()).map(str::to_string);
        if api_token.is_none() {
            warn!("MAILTRAP_API_TOKEN not set, email disabled");
        }
        let sender = Address {
            email: settings.str("MAILTRAP_SENDER_EMAIL").unwrap_or_default().to_string(),
            name: settings.str("MAILTRAP_SENDER_NAME").unwrap_or_default().to_string(),
        };
        Self { api_token, sender, transport }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_token.is_some()
    }

    pub fn sender(&self) -> &Address {
        &self.sender
    }

    /// Send the welcome email. `user_name` defaults to the title-cased local
    /// part of `user_email`.
    pub fn send_welcome_email(&self, user_email: &str, user_name: Option<&str>) -> Result<(), AppError> {
        let Some(token) = self.api_token.as_deref() else {
            error!(to = user_email, "cannot send email: MAILTRAP_API_TOKEN not configured");
            return Err(AppError::Email("MAILTRAP_API_TOKEN not configured".into()));
        };

        let user_name = match user_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => templates::name_from_email(user_email),
        };

        let mail = Mail {
            sender: self.sender.clone(),
            to: vec![Address { email: user_email.to_string(), name: user_name.clone() }],
            subject: templates::welcome_subject(),
            text: templates::welcome_text(&user_name),
            html: templates::welcome_html(&user_name),
            category: WELCOME_CATEGORY.to_string(),
        };

        match self.transport.send(token, &mail) {
            Ok(response) => {
                info!(to = user_email, %response, "welcome email sent");
                Ok(())
            }
            Err(e) => {
                error!(to = user_email, error = %e, "error sending welcome email");
                Err(e)
            }
        }
    }
}
