use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bid::{BidDto, CancelBidDto, CancelBidResultDto, CreateBidDto, CurrentBidDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a flight from the portal.
///
/// A pilot may hold one open bid at a time. Airports and callsign are uppercased and the bid
/// expires 24 hours after creation.
///
/// # Access Control
/// - Logged-in pilot
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session of the booking pilot
/// - `payload` - Route, aircraft and plan details
///
/// # Returns
/// - `201 Created` - The new bid
/// - `400 Bad Request` - Open bid exists, or the aircraft is unavailable or elsewhere
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - VFR aircraft type
/// - `404 Not Found` - Unknown aircraft registration
/// - `409 Conflict` - Callsign or SimBrief plan already booked by another pilot
#[utoipa::path(
    post,
    path = "/api/flights/book",
    tag = BOOKING_TAG,
    request_body = CreateBidDto,
    responses(
        (status = 201, description = "Bid created", body = BidDto),
        (status = 400, description = "Booking not allowed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Aircraft type not allowed", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 409, description = "Callsign or plan already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bid = BookingService::new(&state.db).book(&pilot, payload).await?;

    Ok((StatusCode::CREATED, Json(bid.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/flights/bid",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Current open bid, if any", body = CurrentBidDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn current_bid(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bid = BookingService::new(&state.db).current(pilot.id).await?;

    Ok((
        StatusCode::OK,
        Json(CurrentBidDto {
            bid: bid.map(|b| b.into_dto()),
        }),
    ))
}

/// Cancel one or all of the pilot's Active bids.
///
/// # Returns
/// - `200 OK` - Number of bids cancelled
/// - `404 Not Found` - The given bid is unknown or belongs to someone else
#[utoipa::path(
    post,
    path = "/api/flights/cancel",
    tag = BOOKING_TAG,
    request_body = CancelBidDto,
    responses(
        (status = 200, description = "Bids cancelled", body = CancelBidResultDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Bid not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CancelBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cancelled = BookingService::new(&state.db)
        .cancel(pilot.id, payload.bid_id)
        .await?;

    Ok((StatusCode::OK, Json(CancelBidResultDto { cancelled })))
}
