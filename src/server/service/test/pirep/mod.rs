use chrono::{Datelike, Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    model::pirep::PirepSubmissionDto,
    server::{
        data::{
            aircraft::AircraftRepository, bid::BidRepository, dotm::DotmRepository,
            event::EventRepository, finance::FinanceRepository, flight::FlightRepository,
            pilot::PilotRepository, tour::TourRepository,
        },
        error::{acars::AcarsError, auth::AuthError, AppError},
        model::{
            dotm::{month_name, UpsertDotmParam},
            economy::INITIAL_AIRLINE_BALANCE,
            fleet::AircraftStatus,
            flight::ApprovalStatus,
        },
        service::{
            discord::DiscordNotifier,
            pirep::{PirepPolicy, PirepService},
        },
        util::signature::sign_pirep,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod effects;
mod filing;

/// A 90 minute OJAI to OERK flight with a fixed load so the economy is deterministic.
fn submission(pilot_id: &str, callsign: &str, landing_rate: f64) -> PirepSubmissionDto {
    PirepSubmissionDto {
        pilot_id: pilot_id.to_string(),
        flight_number: Some(callsign.to_string()),
        callsign: callsign.to_string(),
        departure_icao: "OJAI".to_string(),
        arrival_icao: "OERK".to_string(),
        aircraft_type: "A320".to_string(),
        flight_time_minutes: 90,
        landing_rate,
        fuel_used: 5000.0,
        distance_nm: 500.0,
        pax: Some(100),
        cargo: Some(1000),
        score: Some(100),
        ..Default::default()
    }
}
