use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{client::model::error::ApiError, model::api::ErrorDto};

/// Parse a JSON body on success, or the server's `ErrorDto` message on failure.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if !(200..300).contains(&status) {
        return Err(error_from(status, response).await);
    }

    response.json::<T>().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to parse response: {}", e),
    })
}

async fn error_from(status: u64, response: Response) -> ApiError {
    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string()),
    };

    ApiError { status, message }
}

/// GET with the session cookie attached
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

/// POST with the session cookie and a JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

pub fn serialize_json<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
