use crate::{
    client::model::error::ApiError,
    model::{
        bid::{CancelBidDto, CancelBidResultDto, CurrentBidDto},
        content::{CurrentDotmDto, NotamDto},
        fleet::AircraftDto,
        pilot::LeaderboardDto,
        traffic::TrafficListDto,
    },
};

use super::helper::{get, parse_response, post, send_request, serialize_json};

pub async fn get_current_bid() -> Result<CurrentBidDto, ApiError> {
    let response = send_request(get("/api/flights/bid")).await?;
    parse_response(response).await
}

/// POST /api/flights/cancel
/// Cancel every active bid of the logged-in pilot
pub async fn cancel_bids() -> Result<CancelBidResultDto, ApiError> {
    let body = serialize_json(&CancelBidDto::default())?;
    let response = send_request(post("/api/flights/cancel").body(body)).await?;
    parse_response(response).await
}

pub async fn get_notams() -> Result<Vec<NotamDto>, ApiError> {
    let response = send_request(get("/api/notams")).await?;
    parse_response(response).await
}

pub async fn get_dotm() -> Result<CurrentDotmDto, ApiError> {
    let response = send_request(get("/api/dotm")).await?;
    parse_response(response).await
}

/// GET /api/leaderboard?type={kind}
pub async fn get_leaderboard(kind: &str) -> Result<LeaderboardDto, ApiError> {
    let url = format!("/api/leaderboard?type={}", kind);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_fleet() -> Result<Vec<AircraftDto>, ApiError> {
    let response = send_request(get("/api/fleet")).await?;
    parse_response(response).await
}

/// GET /api/portal/active-flights
/// Airline flights, plus network traffic when `global` is set
pub async fn get_active_flights(global: bool) -> Result<TrafficListDto, ApiError> {
    let url = format!("/api/portal/active-flights?global={}", global);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
