//! One-time admin bootstrap code.
//!
//! When the database holds no admin pilot, startup generates a code and logs it. The first
//! login presenting the code within its 60 second lifetime is granted admin; the code is
//! consumed on success and discarded on expiry.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::server::util::token::random_alphanumeric;

const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);
const ADMIN_CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct BootstrapCode {
    code: String,
    expires_at: Instant,
}

impl BootstrapCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory holder of the current admin bootstrap code. Clones share the same code.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<BootstrapCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl: ADMIN_CODE_TTL,
        }
    }

    #[cfg(test)]
    fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a fresh 32 character code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The code to present at login
    pub async fn generate(&self) -> String {
        let code = random_alphanumeric(ADMIN_CODE_LENGTH);

        *self.code.write().await = Some(BootstrapCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        code
    }

    /// Checks a login's admin code and consumes it when it matches.
    ///
    /// An expired code is cleared and never matches. A wrong code leaves a live code in place.
    ///
    /// # Returns
    /// - `true` - Code matched and has been consumed
    /// - `false` - No live code or the input does not match
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut slot = self.code.write().await;

        let Some(stored) = slot.as_ref() else {
            return false;
        };

        if stored.is_expired() {
            *slot = None;
            return false;
        }

        if stored.code != input {
            return false;
        }

        *slot = None;
        true
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        matches!(self.code.read().await.as_ref(), Some(stored) if !stored.is_expired())
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
