//! Live flight tracking for the ACARS client: pings, flight start and end, position
//! reports, VA traffic and pilot statistics.

pub mod slew;

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::acars::{
        ActiveBidSummaryDto, FlightRefDto, PilotStatsDto, PingDto, PingResponseDto, PositionDto,
        StartFlightDto,
    },
    server::{
        data::{
            active_flight::ActiveFlightRepository, aircraft::AircraftRepository,
            bid::BidRepository, flight::FlightRepository, pilot::PilotRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            active_flight::{ActiveFlight, CreateActiveFlightParam, TelemetryParam},
            bid::BidStatus,
            fleet::AircraftStatus,
            pilot::Pilot,
        },
        service::{
            discord::{DiscordNotifier, ModerationAlert},
            pilot::PilotService,
        },
        util::parse::require_text,
    },
};

use self::slew::SlewTracker;

/// Flights without a heartbeat for this long drop off the ACARS traffic list.
pub const TRAFFIC_WINDOW_MINUTES: i64 = 10;
const RECENT_FLIGHTS_LIMIT: u64 = 10;
const UNKNOWN_AIRPORT: &str = "????";
const UNKNOWN_AIRCRAFT: &str = "Unknown";
const TAKEOFF_PHASES: [&str; 2] = ["takeoff", "climb"];

pub struct AcarsService<'a> {
    pub db: &'a DatabaseConnection,
    pub notifier: &'a DiscordNotifier,
    pub slew: &'a SlewTracker,
}

impl<'a> AcarsService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        notifier: &'a DiscordNotifier,
        slew: &'a SlewTracker,
    ) -> Self {
        Self { db, notifier, slew }
    }

    /// Keeps the data link alive.
    ///
    /// Stamps the pilot's last activity and, when a callsign is given, the heartbeat of
    /// that flight.
    ///
    /// # Returns
    /// - `Ok(PingResponseDto)` - Link active with server and echoed client time
    /// - `Err(AppError::BadRequest)` - pilotId missing
    /// - `Err(AppError::NotFound)` - Unknown pilot
    pub async fn ping(&self, dto: PingDto) -> Result<PingResponseDto, AppError> {
        let pilot = PilotService::new(self.db)
            .find_for_acars(&dto.pilot_id)
            .await?;

        PilotRepository::new(self.db).touch_activity(pilot.id).await?;
        if let Some(callsign) = dto.callsign.as_deref().filter(|c| !c.trim().is_empty()) {
            ActiveFlightRepository::new(self.db)
                .heartbeat(pilot.id, &callsign.trim().to_uppercase())
                .await?;
        }

        Ok(PingResponseDto {
            success: true,
            data_link: "active".to_string(),
            server_time: Utc::now().timestamp_millis(),
            client_time: dto.timestamp,
        })
    }

    /// Starts tracking a flight.
    ///
    /// Any flights the pilot was still tracking are discarded. The matching Active bid (by
    /// callsign, else the latest) moves to InProgress and its aircraft to InFlight unless the
    /// aircraft is grounded or in maintenance.
    ///
    /// # Returns
    /// - `Ok(ActiveFlight)` - The new flight at the Preflight phase
    pub async fn start(&self, dto: StartFlightDto) -> Result<ActiveFlight, AppError> {
        let bid_repo = BidRepository::new(self.db);
        let flight_repo = ActiveFlightRepository::new(self.db);

        let pilot = PilotService::new(self.db)
            .find_for_acars(&dto.pilot_id)
            .await?;
        let callsign = require_text("Callsign", &dto.callsign)?.to_uppercase();

        flight_repo.delete_for_pilot(pilot.id).await?;
        self.slew.forget_pilot(pilot.id).await;

        let bid = match bid_repo
            .find_active_for_pilot(pilot.id, Some(&callsign))
            .await?
        {
            Some(bid) => Some(bid),
            None => bid_repo.find_active_for_pilot(pilot.id, None).await?,
        };

        let mut registration = None;
        if let Some(bid) = &bid {
            bid_repo.set_status(bid.id, BidStatus::InProgress).await?;

            if let Some(reg) = &bid.aircraft_registration {
                let aircraft_repo = AircraftRepository::new(self.db);
                if let Some(aircraft) = aircraft_repo.find_by_registration(reg).await? {
                    if !matches!(
                        aircraft.status,
                        AircraftStatus::Grounded | AircraftStatus::Maintenance
                    ) {
                        aircraft_repo
                            .set_status(aircraft.id, AircraftStatus::InFlight)
                            .await?;
                    }
                }
                registration = Some(reg.clone());
            }
        }

        let flight = flight_repo
            .create(CreateActiveFlightParam {
                pilot_id: pilot.id,
                pilot_name: pilot.full_name(),
                callsign,
                departure_icao: dto.departure_icao.trim().to_uppercase(),
                arrival_icao: dto.arrival_icao.trim().to_uppercase(),
                aircraft_type: dto.aircraft_type.trim().to_uppercase(),
                aircraft_registration: registration,
            })
            .await?;

        tracing::info!(
            "{} started {} {}-{}",
            pilot.pilot_id,
            flight.callsign,
            flight.departure_icao,
            flight.arrival_icao
        );

        Ok(flight)
    }

    /// Stores a position report.
    ///
    /// The flight is recreated from the pilot's open bid when it is no longer tracked. Jumps
    /// of more than 10 nm within 30 seconds raise a moderation alert, and the first report in
    /// a takeoff or climb phase announces the departure.
    ///
    /// # Returns
    /// - `Ok(ActiveFlight)` - The flight with the new telemetry
    /// - `Err(AppError::NotFound)` - Unknown pilot
    /// - `Err(AuthError::Blacklisted)` - Pilot is blacklisted
    pub async fn position(&self, dto: PositionDto) -> Result<ActiveFlight, AppError> {
        let flight_repo = ActiveFlightRepository::new(self.db);

        let pilot = PilotService::new(self.db)
            .find_for_acars(&dto.pilot_id)
            .await?;
        if pilot.is_blacklisted() {
            return Err(AuthError::Blacklisted(pilot.pilot_id).into());
        }
        let callsign = require_text("Callsign", &dto.callsign)?.to_uppercase();

        let flight = match flight_repo.find_by_callsign(pilot.id, &callsign).await? {
            Some(flight) => flight,
            None => self.recreate_flight(&pilot, &callsign).await?,
        };

        let phase = dto
            .phase
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| flight.phase.clone());
        let status = dto
            .status
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| phase.clone());

        if let Some(slew) = self
            .slew
            .record(pilot.id, &callsign, dto.latitude, dto.longitude, Utc::now())
            .await
        {
            tracing::warn!(
                "Slew detected for {} on {}: {:.1} nm in {} s",
                pilot.pilot_id,
                callsign,
                slew.distance_nm,
                slew.elapsed_secs
            );
            self.notifier
                .moderation(
                    ModerationAlert::SlewDetect,
                    &pilot.full_name(),
                    &pilot.pilot_id,
                    format!(
                        "**Flight:** {}\n**Jump:** {:.1} nm in {} s\n**Position:** {:.4}, {:.4}",
                        callsign, slew.distance_nm, slew.elapsed_secs, dto.latitude, dto.longitude
                    ),
                )
                .await;
        }

        let updated = flight_repo
            .update_telemetry(
                flight.id,
                TelemetryParam {
                    latitude: dto.latitude,
                    longitude: dto.longitude,
                    altitude: dto.altitude,
                    heading: dto.heading,
                    ground_speed: dto.ground_speed,
                    ias: dto.ias,
                    vertical_speed: dto.vertical_speed,
                    phase: phase.clone(),
                    status,
                    fuel: dto.fuel,
                    g_force: dto.g_force.unwrap_or(flight.g_force),
                    comfort_score: dto.comfort_score.unwrap_or(flight.comfort_score),
                },
            )
            .await?
            .unwrap_or(flight);

        if !updated.takeoff_notified && is_takeoff_phase(&phase) {
            flight_repo.mark_takeoff_notified(updated.id).await?;
            self.notifier
                .takeoff(
                    &pilot.full_name(),
                    &pilot.pilot_id,
                    &updated.callsign,
                    &updated.departure_icao,
                    &updated.arrival_icao,
                    &updated.aircraft_type,
                )
                .await;

            return Ok(ActiveFlight {
                takeoff_notified: true,
                ..updated
            });
        }

        Ok(updated)
    }

    /// Stops tracking a flight and releases its booking.
    ///
    /// Deletes the given callsign's flight, or all of the pilot's when no callsign is sent,
    /// then deletes the matching open bid and returns its aircraft from InFlight to
    /// Available. Unknown pilots are ignored.
    pub async fn end(&self, dto: FlightRefDto) -> Result<(), AppError> {
        let flight_repo = ActiveFlightRepository::new(self.db);
        let bid_repo = BidRepository::new(self.db);

        let Some(pilot) = PilotRepository::new(self.db)
            .find_by_identifier(&dto.pilot_id)
            .await?
        else {
            return Ok(());
        };

        let callsign = dto
            .callsign
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty());

        let bid = match &callsign {
            Some(callsign) => {
                flight_repo.delete_by_callsign(pilot.id, callsign).await?;
                bid_repo.find_open_by_callsign(pilot.id, callsign).await?
            }
            None => {
                flight_repo.delete_for_pilot(pilot.id).await?;
                bid_repo.find_open_for_pilot(pilot.id).await?
            }
        };
        self.slew.forget_pilot(pilot.id).await;

        if let Some(bid) = bid {
            if let Some(registration) = &bid.aircraft_registration {
                AircraftRepository::new(self.db)
                    .release_if_in_flight(registration)
                    .await?;
            }
            bid_repo.delete(bid.id).await?;
        }

        tracing::info!("{} ended their flight", pilot.pilot_id);

        Ok(())
    }

    /// Flights with a heartbeat in the last 10 minutes, most recent first.
    pub async fn traffic(&self) -> Result<Vec<ActiveFlight>, AppError> {
        let cutoff = Utc::now() - Duration::minutes(TRAFFIC_WINDOW_MINUTES);

        Ok(ActiveFlightRepository::new(self.db)
            .updated_since(cutoff)
            .await?)
    }

    /// Career summary shown in the ACARS client.
    ///
    /// # Returns
    /// - `Ok(PilotStatsDto)` - Pilot profile, last 10 flights, non-rejected flight count and
    ///   open bid
    /// - `Err(AppError::NotFound)` - Unknown pilot
    pub async fn pilot_stats(&self, identifier: &str) -> Result<PilotStatsDto, AppError> {
        let flight_repo = FlightRepository::new(self.db);

        let pilot = PilotService::new(self.db).find_for_acars(identifier).await?;

        let recent_flights = flight_repo
            .recent_for_pilot(pilot.id, RECENT_FLIGHTS_LIMIT)
            .await?
            .into_iter()
            .map(|f| f.into_recent_dto())
            .collect();
        let total_flights = flight_repo.count_non_rejected(pilot.id).await?;
        let active_bid = BidRepository::new(self.db)
            .find_open_for_pilot(pilot.id)
            .await?
            .map(|bid| ActiveBidSummaryDto {
                callsign: bid.callsign,
                departure_icao: bid.departure_icao,
                arrival_icao: bid.arrival_icao,
                aircraft_type: bid.aircraft_type,
                route: bid.route,
            });

        Ok(PilotStatsDto {
            pilot: pilot.to_acars_dto(),
            recent_flights,
            total_flights,
            active_bid,
        })
    }

    async fn recreate_flight(&self, pilot: &Pilot, callsign: &str) -> Result<ActiveFlight, AppError> {
        let bid = BidRepository::new(self.db)
            .find_open_for_pilot(pilot.id)
            .await?;

        let (departure_icao, arrival_icao, aircraft_type, aircraft_registration) = match bid {
            Some(bid) => (
                bid.departure_icao,
                bid.arrival_icao,
                bid.aircraft_type,
                bid.aircraft_registration,
            ),
            None => (
                UNKNOWN_AIRPORT.to_string(),
                UNKNOWN_AIRPORT.to_string(),
                UNKNOWN_AIRCRAFT.to_string(),
                None,
            ),
        };

        tracing::debug!("Recreating tracked flight {} for {}", callsign, pilot.pilot_id);

        Ok(ActiveFlightRepository::new(self.db)
            .create(CreateActiveFlightParam {
                pilot_id: pilot.id,
                pilot_name: pilot.full_name(),
                callsign: callsign.to_string(),
                departure_icao,
                arrival_icao,
                aircraft_type,
                aircraft_registration,
            })
            .await?)
    }
}

fn is_takeoff_phase(phase: &str) -> bool {
    TAKEOFF_PHASES.contains(&phase.trim().to_lowercase().as_str())
}
