use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;

use crate::auth::AuthUser;
use crate::error::AppError;
use crate::records::dto::{CreateRecordRequest, DeletedResponse, UpdateRecordRequest};
use crate::records::repo_types::PushupRecord;
use crate::records::services;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(list_records))
        .route("/records/:id", get(get_record))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/records", post(create_record))
        .route("/records/:id", put(update_record).delete(delete_record))
}

#[instrument(skip(state))]
pub async fn list_records(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<PushupRecord>>, AppError> {
    Ok(Json(services::list_records(&state, user_id).await?))
}

#[instrument(skip(state))]
pub async fn get_record(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<PushupRecord>, AppError> {
    Ok(Json(services::get_record(&state, user_id, id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_record(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<PushupRecord>), AppError> {
    let record = services::create_record(&state, user_id, payload.count).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[instrument(skip(state, payload))]
pub async fn update_record(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRecordRequest>,
) -> Result<Json<PushupRecord>, AppError> {
    let record = services::update_record(&state, user_id, id, payload.count).await?;
    Ok(Json(record))
}

#[instrument(skip(state))]
pub async fn delete_record(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, AppError> {
    services::delete_record(&state, user_id, id).await?;
    Ok(Json(DeletedResponse {
        message: "Record deleted successfully".into(),
    }))
}
