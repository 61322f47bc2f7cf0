//! Typed wrapper over the portal session.
//!
//! Keeps the session key and value type in one place so handlers and guards can't disagree
//! on how the logged-in pilot is stored.

use tower_sessions::Session;

use crate::server::error::AppError;

pub(crate) const SESSION_AUTH_PILOT_ID: &str = "auth:pilot";

/// Authentication state of a portal session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference, e.g. for `AuthGuard`.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Stores the database id of the pilot who just logged in.
    ///
    /// The session id is cycled first so a pre-login id can't be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Pilot id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_pilot_id(&self, pilot_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_PILOT_ID, pilot_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in pilot's database id.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - A pilot is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_pilot_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_PILOT_ID).await?)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_pilot_id().await?.is_some())
    }

    /// Removes all session data and the session record.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
