//! Discord webhook notifications.
//!
//! `DiscordNotifier` posts one embed per operational event (takeoff, landing, promotion,
//! award, error log, moderation, finance) to the webhook configured for that event. A
//! missing webhook URL disables the event. Delivery failures are logged at warn level and
//! never returned to the caller, so a Discord outage cannot fail a flight submission.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::{
    all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, ExecuteWebhook, Timestamp, Webhook},
    http::Http,
};

use crate::server::{
    config::WebhookConfig,
    error::{internal::InternalError, AppError},
    model::flight::LandingGrade,
};

const WEBHOOK_USERNAME: &str = "Flightdeck Operations";
const FOOTER: &str = "Flightdeck Virtual Airline";

const COLOR_BLUE: u32 = 0x3498DB;
const COLOR_GREEN: u32 = 0x2ECC71;
const COLOR_YELLOW: u32 = 0xF1C40F;
const COLOR_ORANGE: u32 = 0xE67E22;
const COLOR_RED: u32 = 0xE74C3C;
const COLOR_GOLD: u32 = 0xD4AF37;

/// Operational events with their own webhook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscordEvent {
    Takeoff,
    Landing,
    RankPromote,
    Award,
    ErrorLog,
    Moderation,
    Finance,
}

impl DiscordEvent {
    fn label(self) -> &'static str {
        match self {
            Self::Takeoff => "takeoff",
            Self::Landing => "landing",
            Self::RankPromote => "rankPromote",
            Self::Award => "award",
            Self::ErrorLog => "errorLog",
            Self::Moderation => "moderation",
            Self::Finance => "finance",
        }
    }
}

/// Kinds of moderation alert, each with its own title and colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModerationAlert {
    Blacklist,
    SlewDetect,
    HardLanding,
}

impl ModerationAlert {
    fn title(self) -> &'static str {
        match self {
            Self::Blacklist => "Pilot Blacklisted",
            Self::SlewDetect => "Slew / Teleport Detected",
            Self::HardLanding => "Hard Landing Flagged",
        }
    }

    fn color(self) -> u32 {
        match self {
            Self::Blacklist => COLOR_RED,
            Self::SlewDetect => 0xFF6B35,
            Self::HardLanding => 0xF39C12,
        }
    }
}

/// A rendered embed waiting to be posted.
#[derive(Debug, Clone)]
pub struct Notice {
    pub author: String,
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<(String, String)>,
}

impl Notice {
    fn new(author: &str, title: String, description: String, color: u32) -> Self {
        Self {
            author: author.to_string(),
            title,
            description,
            color,
            fields: Vec::new(),
        }
    }

    fn field(mut self, name: &str, value: String) -> Self {
        self.fields.push((name.to_string(), value));
        self
    }

    /// Builds the serenity embed stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(CreateEmbed)` - Embed ready for posting
    /// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - Clock outside Discord's range
    fn into_embed(self) -> Result<CreateEmbed, AppError> {
        let now = chrono::Utc::now().timestamp();
        let timestamp = Timestamp::from_unix_timestamp(now).map_err(|e| {
            InternalError::InvalidDiscordTimestamp {
                timestamp: now,
                reason: e.to_string(),
            }
        })?;

        let mut embed = CreateEmbed::new()
            .author(CreateEmbedAuthor::new(self.author))
            .title(self.title)
            .description(self.description)
            .color(self.color)
            .footer(CreateEmbedFooter::new(FOOTER))
            .timestamp(timestamp);

        for (name, value) in self.fields {
            embed = embed.field(name, value, true);
        }

        Ok(embed)
    }
}

/// Posts operational events to Discord webhooks.
///
/// Cheap to clone; every clone shares the same HTTP client and webhook table.
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
    webhooks: Arc<WebhookConfig>,
}

impl DiscordNotifier {
    pub fn new(webhooks: WebhookConfig) -> Self {
        Self {
            http: Arc::new(Http::new("")),
            webhooks: Arc::new(webhooks),
        }
    }

    /// A notifier with every event disabled.
    pub fn disabled() -> Self {
        Self::new(WebhookConfig::default())
    }

    /// Webhook URL for an event. Awards fall back to the promotion webhook.
    fn url(&self, event: DiscordEvent) -> Option<&str> {
        let hooks = self.webhooks.as_ref();
        match event {
            DiscordEvent::Takeoff => hooks.takeoff.as_deref(),
            DiscordEvent::Landing => hooks.landing.as_deref(),
            DiscordEvent::RankPromote => hooks.rank_promote.as_deref(),
            DiscordEvent::Award => hooks.award.as_deref().or(hooks.rank_promote.as_deref()),
            DiscordEvent::ErrorLog => hooks.error_log.as_deref(),
            DiscordEvent::Moderation => hooks.moderation.as_deref(),
            DiscordEvent::Finance => hooks.finance.as_deref(),
        }
    }

    pub fn is_enabled(&self, event: DiscordEvent) -> bool {
        self.url(event).is_some()
    }

    /// Posts a notice for an event, logging and discarding any failure.
    pub async fn send(&self, event: DiscordEvent, notice: Notice) {
        let Some(url) = self.url(event) else {
            return;
        };

        if let Err(e) = self.post(url, notice).await {
            tracing::warn!("Discord [{}] webhook failed: {}", event.label(), e);
        }
    }

    async fn post(&self, url: &str, notice: Notice) -> Result<(), AppError> {
        let webhook = Webhook::from_url(self.http.as_ref(), url).await?;
        let message = ExecuteWebhook::new()
            .username(WEBHOOK_USERNAME)
            .embed(notice.into_embed()?);

        webhook.execute(self.http.as_ref(), false, message).await?;

        Ok(())
    }

    pub async fn takeoff(
        &self,
        pilot_name: &str,
        pilot_id: &str,
        callsign: &str,
        origin: &str,
        destination: &str,
        aircraft: &str,
    ) {
        let notice = Notice::new(
            "FLIGHT DEPARTED",
            format!("{} airborne from {}", callsign, origin),
            format!("> **{}** (`{}`) has departed.", pilot_name, pilot_id),
            COLOR_BLUE,
        )
        .field("Route", format!("`{}` to `{}`", origin, destination))
        .field("Aircraft", aircraft.to_string());

        self.send(DiscordEvent::Takeoff, notice).await;
    }

    pub async fn landing(
        &self,
        pilot_name: &str,
        pilot_id: &str,
        callsign: &str,
        destination: &str,
        landing_rate: f64,
        score: i32,
    ) {
        let grade = LandingGrade::from_rate(landing_rate);
        let color = match grade {
            LandingGrade::Butter | LandingGrade::Smooth => COLOR_GREEN,
            LandingGrade::Acceptable => COLOR_YELLOW,
            LandingGrade::Firm => COLOR_ORANGE,
            LandingGrade::Hard => COLOR_RED,
        };

        let notice = Notice::new(
            "FLIGHT ARRIVED",
            format!("{} landed at {}", callsign, destination),
            format!(
                "> **{}** (`{}`) has completed their flight.",
                pilot_name, pilot_id
            ),
            color,
        )
        .field("Landing Rate", format!("{} fpm", landing_rate.round()))
        .field("Grade", grade.as_str().to_string())
        .field("Flight Score", format!("{}/100", score));

        self.send(DiscordEvent::Landing, notice).await;
    }

    pub async fn rank_promotion(&self, pilot_name: &str, pilot_id: &str, rank: &str) {
        let notice = Notice::new(
            "RANK PROMOTION",
            format!("{} has been promoted!", pilot_name),
            format!(
                "> **{}** (`{}`) has earned a new rank.\n\n**New Rank:** {}",
                pilot_name, pilot_id, rank
            ),
            COLOR_GOLD,
        );

        self.send(DiscordEvent::RankPromote, notice).await;
    }

    /// Announces a completed tour or activity, or a new destination of the month.
    pub async fn award(&self, title: &str, description: String) {
        let notice = Notice::new("AWARD", title.to_string(), description, 0xEAB308);

        self.send(DiscordEvent::Award, notice).await;
    }

    pub async fn moderation(
        &self,
        alert: ModerationAlert,
        pilot_name: &str,
        pilot_id: &str,
        details: String,
    ) {
        let notice = Notice::new(
            "MODERATION ALERT",
            alert.title().to_string(),
            format!("> **Pilot:** {} (`{}`)\n\n{}", pilot_name, pilot_id, details),
            alert.color(),
        );

        self.send(DiscordEvent::Moderation, notice).await;
    }

    pub async fn error(&self, title: &str, message: &str, context: Option<&str>) {
        let mut notice = Notice::new(
            "SYSTEM ALERT",
            title.to_string(),
            format!("```\n{}\n```", message),
            COLOR_RED,
        );
        if let Some(context) = context {
            notice = notice.field("Context", context.to_string());
        }

        self.send(DiscordEvent::ErrorLog, notice).await;
    }

    /// Reports an airline ledger movement with the resulting vault balance.
    pub async fn finance(&self, title: &str, description: String, amount: i64, balance: i64) {
        let notice = Notice::new("AIRLINE VAULT", title.to_string(), description, COLOR_GOLD)
            .field("Amount", format!("`{} Cr`", amount))
            .field("Vault Balance", format!("`{} Cr`", balance));

        self.send(DiscordEvent::Finance, notice).await;
    }
}
