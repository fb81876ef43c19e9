use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use chrono::Weekday;

use crate::adapters::park::calendar::DEFAULT_OPEN_DAYS;
use crate::adapters::payments::sandbox::DEFAULT_CHECKOUT_URL;
use crate::domain::entities::UserId;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Base URL the sandbox gateway builds checkout redirects from
    pub payment_checkout_url: String,
    /// SendGrid API key; confirmations are only logged when unset
    pub sendgrid_api_key: Option<String>,
    pub mail_from_address: String,
    pub mail_from_name: String,
    pub park_open_days: Vec<Weekday>,
    /// Registered buyers; `None` accepts everyone
    pub registered_users: Option<Vec<UserId>>,
    /// Directory with the static frontend, served with an `index.html` fallback
    pub frontend_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(p) => p.trim().parse().context("PORT must be a valid port number")?,
            None => 8080,
        };

        let park_open_days = match var("PARK_OPEN_DAYS") {
            Some(days) => parse_weekdays(&days)?,
            None => DEFAULT_OPEN_DAYS.to_vec(),
        };

        let registered_users = var("REGISTERED_USERS")
            .map(|users| parse_user_ids(&users))
            .transpose()?;

        Ok(Self {
            port,
            payment_checkout_url: var("PAYMENT_CHECKOUT_URL")
                .unwrap_or_else(|| DEFAULT_CHECKOUT_URL.to_string()),
            sendgrid_api_key: var("SENDGRID_API_KEY"),
            mail_from_address: var("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|| "tickets@ecoharmony.park".to_string()),
            mail_from_name: var("MAIL_FROM_NAME")
                .unwrap_or_else(|| "Parque EcoHarmony".to_string()),
            park_open_days,
            registered_users,
            frontend_dir: var("FRONTEND_DIR").map(PathBuf::from),
        })
    }

    /// Check if real email delivery is configured
    pub fn sendgrid_enabled(&self) -> bool {
        self.sendgrid_api_key.is_some()
    }
}

fn parse_weekdays(raw: &str) -> anyhow::Result<Vec<Weekday>> {
    let days = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Weekday>()
                .map_err(|_| anyhow!("PARK_OPEN_DAYS: unknown weekday '{}'", s))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if days.is_empty() {
        return Err(anyhow!("PARK_OPEN_DAYS must name at least one weekday"));
    }
    Ok(days)
}

fn parse_user_ids(raw: &str) -> anyhow::Result<Vec<UserId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<UserId>()
                .with_context(|| format!("REGISTERED_USERS: invalid user id '{}'", s))
        })
        .collect()
}
