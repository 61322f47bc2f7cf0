use thiserror::Error;

/// Conversions that should never fail with sane inputs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Unix timestamp outside the range Discord embeds accept
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp { timestamp: i64, reason: String },
}
