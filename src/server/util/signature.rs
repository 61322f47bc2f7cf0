//! HMAC signatures on PIREP submissions.
//!
//! The ACARS client signs `"{pilotId}:{landingRate}:{timestamp}"` with the shared
//! application key using HMAC-SHA256 and sends the lowercase hex digest.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Builds the signed message. Whole landing rates are rendered without a fraction.
fn message(pilot_id: &str, landing_rate: f64, timestamp: i64) -> String {
    format!("{}:{}:{}", pilot_id, landing_rate, timestamp)
}

/// Computes the hex signature the ACARS client sends for a PIREP.
#[cfg(test)]
pub fn sign_pirep(secret: &str, pilot_id: &str, landing_rate: f64, timestamp: i64) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(message(pilot_id, landing_rate, timestamp).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Checks a submitted hex signature in constant time.
pub fn verify_pirep(
    secret: &str,
    pilot_id: &str,
    landing_rate: f64,
    timestamp: i64,
    signature: &str,
) -> bool {
    let Ok(expected) = hex::decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(message(pilot_id, landing_rate, timestamp).as_bytes());
    mac.verify_slice(&expected).is_ok()
}
