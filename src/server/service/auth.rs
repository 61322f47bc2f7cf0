use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use rand::seq::IndexedRandom;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        data::{password_reset::PasswordResetRepository, pilot::PilotRepository},
        error::{auth::AuthError, AppError},
        model::{
            auth::PASSWORD_RESET_TTL_SECS,
            pilot::{CreatePilotParam, Pilot},
        },
        service::admin::code::AdminCodeService,
        util::{
            parse::{parse_icao, require_text},
            password::{hash_password, verify_password},
            token::{hash_token, random_hex},
        },
    },
};

/// Bases drawn from when a new pilot picks `RANDOM`.
const RANDOM_BASES: [&str; 3] = ["OSDI", "OJAI", "ORBI"];
const CALLSIGN_PREFIX: &str = "LVT";
const MIN_PASSWORD_LENGTH: usize = 8;
const RESET_TOKEN_LENGTH: usize = 64;

/// Portal account operations: registration, login and password management.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub admin_codes: &'a AdminCodeService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `admin_codes` - Holder of the one-time admin bootstrap code
    pub fn new(db: &'a DatabaseConnection, admin_codes: &'a AdminCodeService) -> Self {
        Self { db, admin_codes }
    }

    /// Registers a new pilot.
    ///
    /// Names are capitalised, the email lowercased and the callsign uppercased. The callsign
    /// doubles as the public pilot id and must be `LVT` followed by one to three letters or
    /// digits. A base of `RANDOM` picks one of the main hubs.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The created Cadet, Active at its home base
    /// - `Err(AppError::BadRequest)` - Missing field, malformed callsign or base, or the
    ///   email or callsign is already in use
    pub async fn register(&self, dto: RegisterDto) -> Result<Pilot, AppError> {
        let pilot_repo = PilotRepository::new(self.db);

        let first_name = capitalize(&require_text("First name", &dto.first_name)?);
        let last_name = capitalize(&require_text("Last name", &dto.last_name)?);
        let email = require_text("Email", &dto.email)?.to_lowercase();
        if dto.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let callsign = require_text("Callsign", &dto.callsign)?.to_uppercase();
        if !is_valid_callsign(&callsign) {
            return Err(AppError::BadRequest(
                "Callsign must start with LVT followed by 1-3 characters".to_string(),
            ));
        }

        let base = require_text("Base airport", &dto.base)?.to_uppercase();
        let home_base = if base == "RANDOM" {
            pick_random_base()
        } else {
            parse_icao(&base)?
        };

        if pilot_repo.email_exists(&email).await? {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }
        if pilot_repo.pilot_id_exists(&callsign).await? {
            return Err(AppError::BadRequest("Callsign already in use".to_string()));
        }

        let pilot = pilot_repo
            .create(CreatePilotParam {
                pilot_id: callsign,
                first_name,
                last_name,
                email,
                password_hash: hash_password(&dto.password)?,
                home_base,
            })
            .await?;

        tracing::info!("Registered pilot {}", pilot.pilot_id);

        Ok(pilot)
    }

    /// Authenticates a pilot by email and password.
    ///
    /// The first hardware id seen is bound to the account; later logins from another machine
    /// are refused. A valid admin bootstrap code promotes the pilot to admin.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The logged-in pilot, restored to Active when dormant
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::Blacklisted)` - Account suspended
    /// - `Err(AuthError::DeviceMismatch)` - Account bound to a different hardware id
    pub async fn login(&self, dto: LoginDto) -> Result<Pilot, AppError> {
        let pilot_repo = PilotRepository::new(self.db);

        if dto.email.trim().is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password are required".to_string(),
            ));
        }

        let Some(pilot) = pilot_repo.find_by_email(&dto.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password, &pilot.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if pilot.is_blacklisted() {
            return Err(AuthError::Blacklisted(pilot.pilot_id).into());
        }

        if let Some(hwid) = dto.hwid.filter(|h| !h.trim().is_empty()) {
            match &pilot.hwid {
                None => pilot_repo.bind_hwid(pilot.id, hwid).await?,
                Some(bound) if *bound != hwid => {
                    return Err(AuthError::DeviceMismatch(pilot.pilot_id).into());
                }
                Some(_) => {}
            }
        }

        if let Some(code) = dto.admin_code.as_deref() {
            if self.admin_codes.validate_and_consume(code).await {
                pilot_repo.set_admin(pilot.id, true).await?;
                tracing::info!("Granted admin to {} with bootstrap code", pilot.pilot_id);
            }
        }

        Ok(pilot_repo.record_login(&pilot).await?)
    }

    /// Changes a logged-in pilot's password after verifying the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::BadRequest)` - Current password wrong or new password too short
    /// - `Err(AuthError::PilotNotInDatabase)` - Pilot no longer exists
    pub async fn change_password(
        &self,
        pilot_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let pilot_repo = PilotRepository::new(self.db);

        let Some(pilot) = pilot_repo.find_by_id(pilot_id).await? else {
            return Err(AuthError::PilotNotInDatabase(pilot_id).into());
        };

        if !verify_password(current_password, &pilot.password_hash) {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }
        validate_new_password(new_password)?;

        pilot_repo
            .update_password(pilot.id, hash_password(new_password)?)
            .await?;

        Ok(())
    }

    /// Issues a one-hour, single-use password reset token when the email is registered.
    ///
    /// Unknown emails succeed silently so the response does not reveal which addresses
    /// exist. Only the token hash is stored.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Plain token issued for a known email
    /// - `Ok(None)` - No pilot with that email
    pub async fn forgot_password(&self, email: &str) -> Result<Option<String>, AppError> {
        let pilot_repo = PilotRepository::new(self.db);
        let reset_repo = PasswordResetRepository::new(self.db);

        let Some(pilot) = pilot_repo.find_by_email(email).await? else {
            return Ok(None);
        };

        let token = random_hex(RESET_TOKEN_LENGTH);
        reset_repo
            .create(
                hash_token(&token),
                pilot.id,
                Utc::now() + Duration::seconds(PASSWORD_RESET_TTL_SECS),
            )
            .await?;

        tracing::debug!("Password reset token for {}: {}", pilot.pilot_id, token);

        Ok(Some(token))
    }

    /// Sets a new password using a reset token and burns the token.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::BadRequest)` - Token unknown, used or expired, or password too short
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), AppError> {
        let pilot_repo = PilotRepository::new(self.db);
        let reset_repo = PasswordResetRepository::new(self.db);

        let invalid = || AppError::BadRequest("Invalid or expired reset token".to_string());

        let Some(reset) = reset_repo.find_by_hash(&hash_token(token.trim())).await? else {
            return Err(invalid());
        };
        if reset.used || reset.expires_at <= Utc::now() {
            return Err(invalid());
        }
        validate_new_password(password)?;

        if !reset_repo.mark_used(reset.id).await? {
            return Err(invalid());
        }
        pilot_repo
            .update_password(reset.pilot_id, hash_password(password)?)
            .await?;

        Ok(())
    }
}

fn validate_new_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "New password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `LVT` followed by one to three uppercase letters or digits.
fn is_valid_callsign(callsign: &str) -> bool {
    let Some(suffix) = callsign.strip_prefix(CALLSIGN_PREFIX) else {
        return false;
    };

    (1..=3).contains(&suffix.len())
        && suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

fn pick_random_base() -> String {
    RANDOM_BASES
        .choose(&mut rand::rng())
        .unwrap_or(&RANDOM_BASES[0])
        .to_string()
}
