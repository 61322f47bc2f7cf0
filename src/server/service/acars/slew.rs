//! In-process tracking of the last reported position of each flight, used to flag pilots
//! who slew or teleport their aircraft.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::server::util::geo::haversine_nm;

/// Distance covered faster than [`SLEW_WINDOW_SECS`] that counts as a slew.
pub const SLEW_DISTANCE_NM: f64 = 10.0;
pub const SLEW_WINDOW_SECS: i64 = 30;

#[derive(Debug, Clone, Copy)]
struct Fix {
    latitude: f64,
    longitude: f64,
    at: DateTime<Utc>,
}

/// A jump between two consecutive position reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlewDetection {
    pub distance_nm: f64,
    pub elapsed_secs: i64,
}

/// Last fix per (pilot, callsign). Clones share the same map.
#[derive(Clone, Default)]
pub struct SlewTracker {
    fixes: Arc<RwLock<HashMap<(i32, String), Fix>>>,
}

impl SlewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a position report and compares it with the previous one.
    ///
    /// # Arguments
    /// - `pilot_id` - Database id of the reporting pilot
    /// - `callsign` - Callsign of the flight
    /// - `latitude`, `longitude` - Reported position
    /// - `at` - Time of the report
    ///
    /// # Returns
    /// - `Some(SlewDetection)` - Moved more than 10 nm within 30 seconds of the previous fix
    /// - `None` - First report, or plausible movement
    pub async fn record(
        &self,
        pilot_id: i32,
        callsign: &str,
        latitude: f64,
        longitude: f64,
        at: DateTime<Utc>,
    ) -> Option<SlewDetection> {
        let fix = Fix {
            latitude,
            longitude,
            at,
        };

        let previous = self
            .fixes
            .write()
            .await
            .insert((pilot_id, callsign.to_string()), fix)?;

        let elapsed_secs = (at - previous.at).num_seconds();
        if !(0..SLEW_WINDOW_SECS).contains(&elapsed_secs) {
            return None;
        }

        let distance_nm = haversine_nm(previous.latitude, previous.longitude, latitude, longitude);
        (distance_nm > SLEW_DISTANCE_NM).then_some(SlewDetection {
            distance_nm,
            elapsed_secs,
        })
    }

    /// Forgets every flight of a pilot.
    pub async fn forget_pilot(&self, pilot_id: i32) {
        self.fixes.write().await.retain(|(id, _), _| *id != pilot_id);
    }

    /// Drops fixes older than the given age.
    ///
    /// # Returns
    /// - `usize` - Number of fixes removed
    pub async fn prune(&self, max_age: Duration) -> usize {
        let cutoff = Utc::now() - max_age;
        let mut fixes = self.fixes.write().await;
        let before = fixes.len();
        fixes.retain(|_, fix| fix.at >= cutoff);
        before - fixes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_fix_is_never_a_slew() {
        let tracker = SlewTracker::new();

        assert!(tracker.record(1, "LVT1", 31.7, 35.9, Utc::now()).await.is_none());
    }

    #[tokio::test]
    async fn flags_large_jump_inside_window() {
        let tracker = SlewTracker::new();
        let start = Utc::now();

        tracker.record(1, "LVT1", 31.7, 35.9, start).await;
        let detection = tracker
            .record(1, "LVT1", 32.0, 35.9, start + Duration::seconds(10))
            .await
            .unwrap();

        assert!(detection.distance_nm > 17.0);
        assert_eq!(detection.elapsed_secs, 10);
    }

    #[tokio::test]
    async fn ignores_slow_or_short_moves() {
        let tracker = SlewTracker::new();
        let start = Utc::now();

        tracker.record(1, "LVT1", 31.7, 35.9, start).await;
        // 18 nm over 45 seconds
        assert!(tracker
            .record(1, "LVT1", 32.0, 35.9, start + Duration::seconds(45))
            .await
            .is_none());
        // 3 nm over 5 seconds
        assert!(tracker
            .record(1, "LVT1", 32.05, 35.9, start + Duration::seconds(50))
            .await
            .is_none());
        // other callsign has its own history
        assert!(tracker
            .record(1, "LVT2", 10.0, 10.0, start + Duration::seconds(51))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn prunes_old_fixes() {
        let tracker = SlewTracker::new();

        tracker
            .record(1, "LVT1", 0.0, 0.0, Utc::now() - Duration::hours(2))
            .await;
        tracker.record(2, "LVT2", 0.0, 0.0, Utc::now()).await;

        assert_eq!(tracker.prune(Duration::hours(1)).await, 1);

        tracker.forget_pilot(2).await;
        assert!(tracker.fixes.read().await.is_empty());
    }
}
