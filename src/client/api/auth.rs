use crate::{
    client::model::error::ApiError,
    model::{
        api::MessageDto,
        auth::{LoginDto, SessionDto},
        pilot::PilotDto,
    },
};

use super::helper::{get, parse_response, post, send_request, serialize_json};

/// GET /api/auth/me
/// Logged-in pilot, or None for anonymous visitors
pub async fn get_session() -> Result<Option<PilotDto>, ApiError> {
    let response = send_request(get("/api/auth/me")).await?;
    let session: SessionDto = parse_response(response).await?;

    Ok(session.user)
}

/// POST /api/auth/login
pub async fn login(email: String, password: String) -> Result<Option<PilotDto>, ApiError> {
    let body = serialize_json(&LoginDto {
        email,
        password,
        ..Default::default()
    })?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    let session: SessionDto = parse_response(response).await?;

    Ok(session.user)
}

pub async fn logout() -> Result<MessageDto, ApiError> {
    let response = send_request(get("/api/auth/logout")).await?;
    parse_response(response).await
}
