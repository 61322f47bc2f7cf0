use crate::server::error::{config::ConfigError, AppError};

/// Landing rate (fpm) at or below which a PIREP is rejected outright.
const DEFAULT_AUTO_REJECT_LANDING_RATE: f64 = -700.0;

/// Webhook URLs per notification event. An unset URL disables that event.
#[derive(Clone, Default)]
pub struct WebhookConfig {
    pub takeoff: Option<String>,
    pub landing: Option<String>,
    pub rank_promote: Option<String>,
    pub award: Option<String>,
    pub error_log: Option<String>,
    pub moderation: Option<String>,
    pub finance: Option<String>,
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    /// Shared HMAC secret for PIREP signatures; `None` disables signature checks.
    pub app_key: Option<String>,
    /// Bearer secret for the cron routes; `None` disables them.
    pub cron_secret: Option<String>,
    pub auto_reject_landing_rate: f64,
    pub acars_require_token: bool,

    pub github_repo: Option<String>,
    pub github_token: Option<String>,

    pub webhooks: WebhookConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            app_key: optional("APP_KEY"),
            cron_secret: optional("CRON_SECRET"),
            auto_reject_landing_rate: parse_or(
                "AUTO_PIREP_REJECT_LANDING_RATE",
                DEFAULT_AUTO_REJECT_LANDING_RATE,
            )?,
            acars_require_token: parse_or("ACARS_REQUIRE_TOKEN", false)?,
            github_repo: optional("GITHUB_REPO"),
            github_token: optional("GITHUB_TOKEN"),
            webhooks: WebhookConfig {
                takeoff: optional("DISCORD_WEBHOOK_TAKEOFF"),
                landing: optional("DISCORD_WEBHOOK_LANDING"),
                rank_promote: optional("DISCORD_WEBHOOK_RANK_PROMOTE"),
                award: optional("DISCORD_WEBHOOK_AWARD"),
                error_log: optional("DISCORD_WEBHOOK_ERROR_LOG"),
                moderation: optional("DISCORD_MOD_WEBHOOK"),
                finance: optional("DISCORD_FINANCE_WEBHOOK"),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating blank values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
