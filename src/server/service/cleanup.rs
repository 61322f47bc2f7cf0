//! Periodic sweep of expired bookings, abandoned flights and expired credentials.

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::economy::CleanupResultDto,
    server::{
        data::{
            acars_token::AcarsTokenRepository, active_flight::ActiveFlightRepository,
            aircraft::AircraftRepository, bid::BidRepository,
            notification::NotificationRepository, password_reset::PasswordResetRepository,
            pending_auth::PendingAuthRepository,
        },
        error::AppError,
        model::{active_flight::ActiveFlight, notification::NOTIFICATION_RETENTION_DAYS},
        service::acars::slew::SlewTracker,
    },
};

/// Flights without a heartbeat for this long are considered abandoned.
pub const STALE_FLIGHT_MINUTES: i64 = 10;

pub struct CleanupService<'a> {
    pub db: &'a DatabaseConnection,
    pub slew: &'a SlewTracker,
}

impl<'a> CleanupService<'a> {
    pub fn new(db: &'a DatabaseConnection, slew: &'a SlewTracker) -> Self {
        Self { db, slew }
    }

    /// Runs every cleanup step once.
    ///
    /// # Returns
    /// - `Ok(CleanupResultDto)` - Number of records removed per category
    /// - `Err(AppError)` - Database error; steps already run stay applied
    pub async fn run(&self) -> Result<CleanupResultDto, AppError> {
        let now = Utc::now();

        let expired_bids = BidRepository::new(self.db)
            .delete_expired_active(now)
            .await?;

        let stale = ActiveFlightRepository::new(self.db)
            .stale(now - Duration::minutes(STALE_FLIGHT_MINUTES))
            .await?;
        let mut stale_flights = 0;
        for flight in stale {
            self.abandon(&flight).await?;
            stale_flights += 1;
        }
        self.slew
            .prune(Duration::minutes(STALE_FLIGHT_MINUTES))
            .await;

        let result = CleanupResultDto {
            expired_bids,
            stale_flights,
            expired_auth_codes: PendingAuthRepository::new(self.db)
                .delete_expired(now)
                .await?,
            expired_tokens: AcarsTokenRepository::new(self.db)
                .delete_expired(now)
                .await?,
            expired_password_resets: PasswordResetRepository::new(self.db)
                .delete_expired(now)
                .await?,
            old_notifications: NotificationRepository::new(self.db)
                .delete_older_than(now - Duration::days(NOTIFICATION_RETENTION_DAYS))
                .await?,
        };

        if result.expired_bids + result.stale_flights > 0 {
            tracing::info!(
                "Cleanup removed {} expired bids and {} stale flights",
                result.expired_bids,
                result.stale_flights
            );
        }

        Ok(result)
    }

    /// Drops an abandoned flight together with its bookings and returns its aircraft.
    async fn abandon(&self, flight: &ActiveFlight) -> Result<(), AppError> {
        BidRepository::new(self.db)
            .delete_open_for_pilot(flight.pilot_id)
            .await?;

        let aircraft_repo = AircraftRepository::new(self.db);
        match flight.aircraft_registration.as_deref() {
            Some(registration) => {
                aircraft_repo.release_if_in_flight(registration).await?;
            }
            None => {
                aircraft_repo
                    .release_type_at_if_in_flight(&flight.aircraft_type, &flight.departure_icao)
                    .await?;
            }
        }

        ActiveFlightRepository::new(self.db).delete(flight.id).await?;

        tracing::info!(
            "Removed stale flight {} of pilot {} (last update {})",
            flight.callsign,
            flight.pilot_id,
            flight.last_update
        );

        Ok(())
    }
}
