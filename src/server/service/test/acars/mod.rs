use chrono::{Duration, Utc};

use crate::{
    model::acars::{FlightRefDto, PingDto, PositionDto, StartFlightDto},
    server::{
        data::{
            active_flight::ActiveFlightRepository, aircraft::AircraftRepository,
            bid::BidRepository,
        },
        error::{auth::AuthError, AppError},
        model::{bid::BidStatus, fleet::AircraftStatus},
        service::{
            acars::{slew::SlewTracker, AcarsService},
            discord::DiscordNotifier,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod flight;
mod position;
mod stats;

fn position_dto(pilot_id: &str, callsign: &str, latitude: f64, phase: &str) -> PositionDto {
    PositionDto {
        pilot_id: pilot_id.to_string(),
        callsign: callsign.to_string(),
        latitude,
        longitude: 35.99,
        altitude: 12000.0,
        heading: 140.0,
        ground_speed: 280.0,
        ias: 250.0,
        vertical_speed: 1500.0,
        status: None,
        phase: Some(phase.to_string()),
        fuel: 8000.0,
        g_force: Some(1.1),
        comfort_score: None,
    }
}
