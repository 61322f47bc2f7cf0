use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        economy::{
            FinanceOverviewDto, PurchaseRequestDto, PurchaseResultDto, StoreItemDto,
            UpsertStoreItemDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::store::StoreItem,
        service::economy::EconomyService,
        state::AppState,
    },
};

/// Tag for grouping store and finance endpoints in OpenAPI documentation
pub static ECONOMY_TAG: &str = "economy";

fn to_dtos(items: Vec<StoreItem>) -> Vec<StoreItemDto> {
    items.into_iter().map(|item| item.into_dto()).collect()
}

#[utoipa::path(
    get,
    path = "/api/portal/store",
    tag = ECONOMY_TAG,
    responses(
        (status = 200, description = "Active store items", body = Vec<StoreItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn store(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = EconomyService::new(&state.db, &state.notifier)
        .store_items()
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(items))))
}

/// Buy a store item with the pilot's balance.
///
/// # Access Control
/// - Logged-in pilot
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session of the buying pilot
/// - `payload` - Item to buy
///
/// # Returns
/// - `200 OK` - Purchased item and remaining balance
/// - `400 Bad Request` - Out of stock or insufficient balance
/// - `404 Not Found` - Item missing or inactive
#[utoipa::path(
    post,
    path = "/api/portal/store/purchase",
    tag = ECONOMY_TAG,
    request_body = PurchaseRequestDto,
    responses(
        (status = 200, description = "Item purchased", body = PurchaseResultDto),
        (status = 400, description = "Purchase not possible", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn purchase(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PurchaseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let result = EconomyService::new(&state.db, &state.notifier)
        .purchase(&pilot, payload.item_id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/admin/finance",
    tag = ECONOMY_TAG,
    responses(
        (status = 200, description = "Airline balance, totals and recent ledger entries", body = FinanceOverviewDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn finance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let overview = EconomyService::new(&state.db, &state.notifier)
        .finance_overview()
        .await?;

    Ok((StatusCode::OK, Json(overview)))
}

#[utoipa::path(
    get,
    path = "/api/admin/store",
    tag = ECONOMY_TAG,
    responses(
        (status = 200, description = "All store items including inactive ones", body = Vec<StoreItemDto>),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all_store_items(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let items = EconomyService::new(&state.db, &state.notifier)
        .all_store_items()
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(items))))
}

#[utoipa::path(
    post,
    path = "/api/admin/store",
    tag = ECONOMY_TAG,
    request_body = UpsertStoreItemDto,
    responses(
        (status = 201, description = "Item created", body = StoreItemDto),
        (status = 400, description = "Invalid item", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_store_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertStoreItemDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let item = EconomyService::new(&state.db, &state.notifier)
        .create_store_item(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/store/{id}",
    tag = ECONOMY_TAG,
    params(
        ("id" = i32, Path, description = "Store item id")
    ),
    request_body = UpsertStoreItemDto,
    responses(
        (status = 200, description = "Item updated", body = StoreItemDto),
        (status = 400, description = "Invalid item", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_store_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertStoreItemDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let item = EconomyService::new(&state.db, &state.notifier)
        .update_store_item(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/store/{id}",
    tag = ECONOMY_TAG,
    params(
        ("id" = i32, Path, description = "Store item id")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_store_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    EconomyService::new(&state.db, &state.notifier)
        .delete_store_item(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
