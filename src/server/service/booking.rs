//! Flight reservations from the portal and from the ACARS client.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{acars::AcarsBidDto, bid::CreateBidDto},
    server::{
        data::{
            active_flight::ActiveFlightRepository, aircraft::AircraftRepository,
            bid::BidRepository, config::ConfigRepository,
        },
        error::AppError,
        model::{
            bid::{Bid, BidStatus, CreateBidParam},
            fleet::{Aircraft, AircraftStatus},
            pilot::Pilot,
        },
        util::parse::{parse_icao, require_text},
    },
};

/// Light aircraft types that may not be booked through the airline.
pub const VFR_TYPES: [&str; 10] = [
    "C172", "C152", "C150", "C182", "P28A", "PA28", "DR40", "C206", "PA18", "C208",
];

pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a flight from the portal.
    ///
    /// # Arguments
    /// - `pilot` - The booking pilot
    /// - `dto` - Route, aircraft and optional SimBrief details
    ///
    /// # Returns
    /// - `Ok(Bid)` - The Active bid, expiring in 24 hours
    /// - `Err(AppError::BadRequest)` - Pilot already has an open bid, invalid route, or the
    ///   aircraft is unavailable or elsewhere
    /// - `Err(AppError::Conflict)` - OFP or callsign already booked by an Active bid
    /// - `Err(AppError::Forbidden)` - VFR aircraft type
    /// - `Err(AppError::NotFound)` - Unknown registration
    pub async fn book(&self, pilot: &Pilot, dto: CreateBidDto) -> Result<Bid, AppError> {
        let bid_repo = BidRepository::new(self.db);

        if bid_repo.find_open_for_pilot(pilot.id).await?.is_some() {
            return Err(AppError::BadRequest(
                "You already have an active booking. Cancel it before booking another flight."
                    .to_string(),
            ));
        }

        let param = normalize(
            pilot,
            BookingFields {
                callsign: dto.callsign,
                flight_number: dto.flight_number,
                departure_icao: dto.departure_icao,
                arrival_icao: dto.arrival_icao,
                aircraft_type: dto.aircraft_type,
                aircraft_registration: dto.aircraft_registration,
            },
        )?;

        if is_vfr_type(&param.aircraft_type) {
            return Err(AppError::Forbidden(format!(
                "{} is a VFR type and cannot be booked",
                param.aircraft_type
            )));
        }

        if let Some(ofp) = dto.simbrief_ofp_id.as_deref().filter(|o| !o.is_empty()) {
            if bid_repo.active_ofp_exists(ofp).await? {
                return Err(AppError::Conflict(
                    "This SimBrief flight plan is already booked".to_string(),
                ));
            }
        }
        if bid_repo.active_callsign_exists(&param.callsign).await? {
            return Err(AppError::Conflict(format!(
                "Callsign {} is already booked",
                param.callsign
            )));
        }

        if let Some(registration) = &param.aircraft_registration {
            let aircraft = self.find_aircraft(registration).await?;
            if matches!(
                aircraft.status,
                AircraftStatus::Maintenance | AircraftStatus::InFlight | AircraftStatus::Grounded
            ) {
                return Err(AppError::BadRequest(format!(
                    "Aircraft {} is {}",
                    aircraft.registration,
                    aircraft.status.as_str()
                )));
            }
            self.check_location(&aircraft, &param.departure_icao).await?;
        }

        let bid = bid_repo
            .create(CreateBidParam {
                route: dto.route,
                estimated_flight_time: dto.estimated_flight_time,
                pax: dto.pax,
                cargo: dto.cargo,
                planned_fuel: dto.planned_fuel,
                rotation_speed: dto.rotation_speed,
                simbrief_ofp_id: dto.simbrief_ofp_id,
                activity_id: dto.activity_id,
                ..param
            })
            .await?;

        tracing::info!(
            "{} booked {} {}-{}",
            pilot.pilot_id,
            bid.callsign,
            bid.departure_icao,
            bid.arrival_icao
        );

        Ok(bid)
    }

    /// Latest Active or InProgress bid of a pilot.
    pub async fn current(&self, pilot_id: i32) -> Result<Option<Bid>, AppError> {
        Ok(BidRepository::new(self.db)
            .find_open_for_pilot(pilot_id)
            .await?)
    }

    /// Cancels a pilot's bookings.
    ///
    /// # Arguments
    /// - `pilot_id` - Owner of the bids
    /// - `bid_id` - A specific bid to cancel; every Active bid when `None`
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bids set to Cancelled
    /// - `Err(AppError::NotFound)` - The given bid does not exist or belongs to someone else
    pub async fn cancel(&self, pilot_id: i32, bid_id: Option<i32>) -> Result<u64, AppError> {
        let bid_repo = BidRepository::new(self.db);

        let Some(bid_id) = bid_id else {
            return Ok(bid_repo.cancel_active_for_pilot(pilot_id).await?);
        };

        let bid = bid_repo
            .find_by_id(bid_id)
            .await?
            .filter(|b| b.pilot_id == pilot_id)
            .ok_or_else(|| AppError::NotFound(format!("Bid {} not found", bid_id)))?;

        if !bid.status.is_open() {
            return Ok(0);
        }
        bid_repo.set_status(bid.id, BidStatus::Cancelled).await?;

        Ok(1)
    }

    /// Books a flight from the ACARS client, replacing any Active bid the pilot holds.
    ///
    /// A repair timer that has elapsed is cleared and the aircraft returned to service.
    /// Registrations missing from the fleet are booked without aircraft checks.
    ///
    /// # Returns
    /// - `Ok(Bid)` - The new Active bid
    /// - `Err(AppError::BadRequest)` - Invalid route, aircraft under repair, grounded or away
    ///   from the departure airport
    pub async fn acars_book(&self, pilot: &Pilot, dto: AcarsBidDto) -> Result<Bid, AppError> {
        let bid_repo = BidRepository::new(self.db);
        let aircraft_repo = AircraftRepository::new(self.db);

        let param = normalize(
            pilot,
            BookingFields {
                callsign: dto.callsign,
                flight_number: dto.flight_number,
                departure_icao: dto.departure_icao,
                arrival_icao: dto.arrival_icao,
                aircraft_type: dto.aircraft_type,
                aircraft_registration: dto.aircraft_registration,
            },
        )?;

        let replaced = bid_repo.delete_active_for_pilot(pilot.id).await?;
        if replaced > 0 {
            tracing::debug!("Replaced {} active bid(s) of {}", replaced, pilot.pilot_id);
        }

        let aircraft = match &param.aircraft_registration {
            Some(registration) => aircraft_repo.find_by_registration(registration).await?,
            None => None,
        };
        if let Some(aircraft) = aircraft {
            if let Some(until) = aircraft.repair_until {
                let remaining = until - Utc::now();
                if remaining.num_seconds() > 0 {
                    let hours = (remaining.num_minutes() as f64 / 60.0).ceil().max(1.0);
                    return Err(AppError::BadRequest(format!(
                        "Aircraft {} is under repair for another {} hour(s)",
                        aircraft.registration, hours
                    )));
                }
                aircraft_repo.clear_repair_timer(aircraft.id).await?;
            } else if aircraft.status == AircraftStatus::Grounded {
                return Err(AppError::BadRequest(format!(
                    "Aircraft {} is grounded: {}",
                    aircraft.registration,
                    aircraft
                        .grounded_reason
                        .as_deref()
                        .unwrap_or("awaiting maintenance")
                )));
            }

            self.check_location(&aircraft, &param.departure_icao).await?;
        }

        let bid = bid_repo
            .create(CreateBidParam {
                route: dto.route,
                estimated_flight_time: dto.estimated_flight_time,
                pax: dto.pax,
                cargo: dto.cargo,
                planned_fuel: dto.planned_fuel,
                rotation_speed: dto.rotation_speed,
                simbrief_ofp_id: dto.simbrief_ofp_id,
                activity_id: dto.activity_id,
                ..param
            })
            .await?;

        tracing::info!(
            "{} booked {} {}-{} from ACARS",
            pilot.pilot_id,
            bid.callsign,
            bid.departure_icao,
            bid.arrival_icao
        );

        Ok(bid)
    }

    /// Cancels every open bid from the ACARS client.
    ///
    /// Aircraft held InFlight by the bids are released, the bids deleted and the pilot's
    /// active flights removed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bids cancelled
    pub async fn acars_cancel(&self, pilot: &Pilot) -> Result<u64, AppError> {
        let bid_repo = BidRepository::new(self.db);
        let aircraft_repo = AircraftRepository::new(self.db);

        let bids = bid_repo.get_open_for_pilot(pilot.id).await?;
        for bid in &bids {
            if let Some(registration) = &bid.aircraft_registration {
                aircraft_repo.release_if_in_flight(registration).await?;
            }
        }

        let cancelled = bid_repo.delete_open_for_pilot(pilot.id).await?;
        ActiveFlightRepository::new(self.db)
            .delete_for_pilot(pilot.id)
            .await?;

        tracing::info!("{} cancelled {} bid(s) from ACARS", pilot.pilot_id, cancelled);

        Ok(cancelled)
    }

    async fn find_aircraft(&self, registration: &str) -> Result<Aircraft, AppError> {
        AircraftRepository::new(self.db)
            .find_by_registration(registration)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Aircraft {} not found", registration)))
    }

    /// Requires the aircraft to sit at the departure airport when the fleet is location based.
    async fn check_location(&self, aircraft: &Aircraft, departure: &str) -> Result<(), AppError> {
        let config = ConfigRepository::new(self.db).get_or_create().await?;

        if config.location_based_fleet && aircraft.current_location != departure {
            return Err(AppError::BadRequest(format!(
                "Aircraft {} is at {}, not {}",
                aircraft.registration, aircraft.current_location, departure
            )));
        }

        Ok(())
    }
}

/// Route and aircraft fields common to portal and ACARS bookings.
struct BookingFields {
    callsign: String,
    flight_number: Option<String>,
    departure_icao: String,
    arrival_icao: String,
    aircraft_type: String,
    aircraft_registration: Option<String>,
}

fn normalize(pilot: &Pilot, fields: BookingFields) -> Result<CreateBidParam, AppError> {
    let callsign = require_text("Callsign", &fields.callsign)?.to_uppercase();
    let flight_number = fields
        .flight_number
        .map(|f| f.trim().to_uppercase())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| callsign.clone());

    Ok(CreateBidParam {
        pilot_id: pilot.id,
        pilot_name: pilot.full_name(),
        flight_number,
        departure_icao: parse_icao(&fields.departure_icao)?,
        arrival_icao: parse_icao(&fields.arrival_icao)?,
        aircraft_type: require_text("Aircraft type", &fields.aircraft_type)?.to_uppercase(),
        aircraft_registration: fields
            .aircraft_registration
            .map(|r| r.trim().to_uppercase())
            .filter(|r| !r.is_empty()),
        callsign,
        ..Default::default()
    })
}

pub fn is_vfr_type(aircraft_type: &str) -> bool {
    let normalized = aircraft_type.trim().to_uppercase();
    VFR_TYPES.contains(&normalized.as_str())
}
