//! Administrative operations: economy configuration and the pilot blacklist.

pub mod code;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::{
    model::economy::GlobalConfigDto,
    server::{
        data::{config::ConfigRepository, pilot::PilotRepository},
        error::AppError,
        model::{economy::EconomyConfig, pilot::Pilot},
        service::discord::{DiscordNotifier, ModerationAlert},
    },
};

const DEFAULT_BLACKLIST_REASON: &str = "No reason provided";

/// Keys of the configuration object that admins may not overwrite.
const READ_ONLY_CONFIG_KEYS: [&str; 2] = ["updated_at", "updated_by"];

pub struct AdminService<'a> {
    pub db: &'a DatabaseConnection,
    pub notifier: &'a DiscordNotifier,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a DiscordNotifier) -> Self {
        Self { db, notifier }
    }

    pub async fn get_config(&self) -> Result<EconomyConfig, AppError> {
        Ok(ConfigRepository::new(self.db).get_or_create().await?)
    }

    /// Applies a partial configuration update.
    ///
    /// Only keys already present in the configuration are considered, and a value replaces
    /// the stored one only when it has the same JSON kind (number for number, boolean for
    /// boolean). Everything else in the patch is ignored.
    ///
    /// # Arguments
    /// - `patch` - JSON object with the fields to change
    /// - `updated_by` - Name of the admin making the change
    ///
    /// # Returns
    /// - `Ok(EconomyConfig)` - Stored configuration after the merge
    /// - `Err(AppError::BadRequest)` - Patch is not a JSON object
    pub async fn update_config(
        &self,
        patch: Value,
        updated_by: String,
    ) -> Result<EconomyConfig, AppError> {
        let config_repo = ConfigRepository::new(self.db);

        let Value::Object(patch) = patch else {
            return Err(AppError::BadRequest(
                "Configuration update must be a JSON object".to_string(),
            ));
        };

        let current = config_repo.get_or_create().await?;
        let mut merged = serde_json::to_value(current.into_dto())?;

        if let Value::Object(fields) = &mut merged {
            for (key, value) in patch {
                if READ_ONLY_CONFIG_KEYS.contains(&key.as_str()) {
                    continue;
                }
                let Some(existing) = fields.get_mut(&key) else {
                    continue;
                };
                if same_kind(existing, &value) {
                    *existing = value;
                }
            }
        }

        let dto: GlobalConfigDto = serde_json::from_value(merged)
            .map_err(|e| AppError::BadRequest(format!("Invalid configuration value: {}", e)))?;
        let config = config_repo
            .save(&EconomyConfig::from_dto(dto), Some(updated_by.clone()))
            .await?;

        tracing::info!("Economy configuration updated by {}", updated_by);

        Ok(config)
    }

    /// Gets blacklisted pilots, most recent first.
    pub async fn get_blacklist(&self) -> Result<Vec<Pilot>, AppError> {
        Ok(PilotRepository::new(self.db).get_blacklisted().await?)
    }

    /// Blacklists a pilot by callsign or email and posts a moderation alert.
    ///
    /// # Arguments
    /// - `identifier` - Pilot id or email address
    /// - `reason` - Reason shown to staff; defaults when blank
    /// - `admin` - The admin performing the action
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The blacklisted pilot
    /// - `Err(AppError::NotFound)` - No pilot matches the identifier
    /// - `Err(AppError::Conflict)` - Pilot already blacklisted
    /// - `Err(AppError::Forbidden)` - Target is an admin
    pub async fn blacklist(
        &self,
        identifier: &str,
        reason: Option<String>,
        admin: &Pilot,
    ) -> Result<Pilot, AppError> {
        let pilot_repo = PilotRepository::new(self.db);

        let Some(pilot) = pilot_repo.find_by_identifier(identifier).await? else {
            return Err(AppError::NotFound(format!(
                "No pilot found for '{}'",
                identifier.trim()
            )));
        };
        if pilot.is_blacklisted() {
            return Err(AppError::Conflict(format!(
                "{} is already blacklisted",
                pilot.pilot_id
            )));
        }
        if pilot.is_admin {
            return Err(AppError::Forbidden(
                "Admins cannot be blacklisted".to_string(),
            ));
        }

        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_BLACKLIST_REASON.to_string());

        let Some(pilot) = pilot_repo
            .blacklist(pilot.id, reason.clone(), admin.full_name())
            .await?
        else {
            return Err(AppError::NotFound(format!("Pilot {} not found", pilot.id)));
        };

        tracing::info!(
            "{} blacklisted by {}: {}",
            pilot.pilot_id,
            admin.pilot_id,
            reason
        );

        self.notifier
            .moderation(
                ModerationAlert::Blacklist,
                &pilot.full_name(),
                &pilot.pilot_id,
                format!("**Reason:** {}\n**By:** {}", reason, admin.full_name()),
            )
            .await;

        Ok(pilot)
    }

    /// Lifts a blacklist, leaving the pilot Inactive.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The restored pilot
    /// - `Err(AppError::NotFound)` - Unknown pilot
    /// - `Err(AppError::BadRequest)` - Pilot is not blacklisted
    pub async fn unblacklist(&self, id: i32) -> Result<Pilot, AppError> {
        let pilot_repo = PilotRepository::new(self.db);

        let Some(pilot) = pilot_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Pilot {} not found", id)));
        };
        if !pilot.is_blacklisted() {
            return Err(AppError::BadRequest(format!(
                "{} is not blacklisted",
                pilot.pilot_id
            )));
        }

        pilot_repo
            .unblacklist(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pilot {} not found", id)))
    }
}

fn same_kind(current: &Value, incoming: &Value) -> bool {
    matches!(
        (current, incoming),
        (Value::Number(_), Value::Number(_)) | (Value::Bool(_), Value::Bool(_))
    )
}
