//! SendGrid notifier
//!
//! Sends HTML email through the SendGrid v3 `mail/send` API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::domain::ports::Notifier;
use crate::error::NotificationError;

pub const SENDGRID_API_URL: &str = "https://api.sendgrid.com";

/// Sender identity used in the `from` and `reply_to` fields
#[derive(Debug, Clone)]
pub struct Sender {
    pub address: String,
    pub name: String,
}

pub struct SendGridNotifier {
    http: Client,
    base_url: String,
    api_key: String,
    sender: Sender,
}

impl SendGridNotifier {
    pub fn new(api_key: String, sender: Sender) -> Self {
        Self::with_base_url(SENDGRID_API_URL.to_string(), api_key, sender)
    }

    pub fn with_base_url(base_url: String, api_key: String, sender: Sender) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            sender,
        }
    }

    fn api_url(&self) -> String {
        format!("{}/v3/mail/send", self.base_url)
    }
}

/// Request types for the SendGrid API
#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: EmailAddress<'a>,
    reply_to: EmailAddress<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<EmailAddress<'a>>,
}

#[derive(Serialize)]
struct EmailAddress<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

fn build_request<'a>(
    sender: &'a Sender,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
) -> MailSendRequest<'a> {
    MailSendRequest {
        personalizations: vec![Personalization {
            to: vec![EmailAddress {
                email: to,
                name: None,
            }],
        }],
        from: EmailAddress {
            email: &sender.address,
            name: Some(&sender.name),
        },
        reply_to: EmailAddress {
            email: &sender.address,
            name: None,
        },
        subject,
        content: vec![Content {
            content_type: "text/html",
            value: body,
        }],
    }
}

#[async_trait]
impl Notifier for SendGridNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        tracing::debug!(to, "Sending email via SendGrid");

        let response = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .json(&build_request(&self.sender, to, subject, body))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(to, "SendGrid accepted email");
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(NotificationError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
