use chrono::{Duration, Utc};

use crate::{
    model::{acars::AcarsBidDto, bid::CreateBidDto},
    server::{
        data::{aircraft::AircraftRepository, bid::BidRepository},
        error::AppError,
        model::{bid::BidStatus, fleet::AircraftStatus, pilot::Pilot},
        service::booking::BookingService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod acars;
mod portal;

fn portal_dto(callsign: &str, registration: Option<&str>) -> CreateBidDto {
    CreateBidDto {
        callsign: callsign.to_string(),
        departure_icao: "ojai".to_string(),
        arrival_icao: "oerk".to_string(),
        aircraft_type: "a320".to_string(),
        aircraft_registration: registration.map(str::to_string),
        ..Default::default()
    }
}

fn acars_dto(pilot: &Pilot, registration: Option<&str>) -> AcarsBidDto {
    AcarsBidDto {
        pilot_id: pilot.pilot_id.clone(),
        callsign: format!("{}X", pilot.pilot_id),
        flight_number: None,
        departure_icao: "OJAI".to_string(),
        arrival_icao: "OERK".to_string(),
        aircraft_type: "A320".to_string(),
        aircraft_registration: registration.map(str::to_string),
        route: Some("DCT".to_string()),
        estimated_flight_time: Some(120),
        pax: Some(150),
        cargo: None,
        planned_fuel: Some(9000.0),
        rotation_speed: None,
        simbrief_ofp_id: None,
        activity_id: None,
    }
}
