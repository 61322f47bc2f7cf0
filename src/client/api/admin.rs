use crate::{
    client::model::error::ApiError,
    model::{
        api::PageDto,
        pirep::{PirepDto, UpdatePirepDto},
    },
};

use super::helper::{get, parse_response, put, send_request, serialize_json};

/// GET /api/admin/pireps?status={status}&page={page}&limit={limit}
pub async fn get_pireps(status: &str, page: u64, limit: u64) -> Result<PageDto<PirepDto>, ApiError> {
    let url = format!(
        "/api/admin/pireps?status={}&page={}&limit={}",
        status, page, limit
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// PUT /api/admin/pireps/{id}
/// Approve or deny a PIREP, optionally leaving a comment for the pilot
pub async fn review_pirep(
    id: i32,
    status: &str,
    admin_comments: Option<String>,
) -> Result<PirepDto, ApiError> {
    let url = format!("/api/admin/pireps/{}", id);
    let body = serialize_json(&UpdatePirepDto {
        status: Some(status.to_string()),
        admin_comments,
        ..Default::default()
    })?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}
