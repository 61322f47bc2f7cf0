use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, traffic::TrafficListDto},
    server::{error::AppError, service::traffic::TrafficService, state::AppState},
};

/// Tag for grouping live map endpoints in OpenAPI documentation
pub static TRAFFIC_TAG: &str = "traffic";

#[derive(Deserialize, Default)]
pub struct ActiveFlightsQuery {
    #[serde(default)]
    pub global: bool,
}

/// Airline flights for the live map.
///
/// Flights reporting within the last 5 minutes, one per callsign. With `global=true` IVAO
/// traffic is merged in; an airline flight hides the IVAO entry with the same callsign.
#[utoipa::path(
    get,
    path = "/api/portal/active-flights",
    tag = TRAFFIC_TAG,
    params(
        ("global" = Option<bool>, Query, description = "Include IVAO traffic")
    ),
    responses(
        (status = 200, description = "Active flights", body = TrafficListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn active_flights(
    State(state): State<AppState>,
    Query(query): Query<ActiveFlightsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let flights = TrafficService::new(&state.db, &state.http_client, &state.traffic)
        .active_flights(query.global)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TrafficListDto {
            count: flights.len(),
            flights,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/network/vatsim",
    tag = TRAFFIC_TAG,
    responses(
        (status = 200, description = "VATSIM pilots", body = TrafficListDto),
        (status = 500, description = "VATSIM unavailable and nothing cached", body = ErrorDto)
    ),
)]
pub async fn vatsim(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let flights = TrafficService::new(&state.db, &state.http_client, &state.traffic)
        .vatsim()
        .await?;

    Ok((
        StatusCode::OK,
        Json(TrafficListDto {
            count: flights.len(),
            flights,
        }),
    ))
}
