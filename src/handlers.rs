use axum::body::Bytes;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    AppState,
    error::ApiError,
    models::{Booking, BookingRequest, Class, NewClass},
};

#[utoipa::path(get, path = "/", tag = "health")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Class Booking API",
        "endpoints": {
            "POST /owner/classes": "Create a class",
            "GET /member/classes": "List available classes",
            "POST /member/bookings": "Book a class"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "health")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "health")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    post,
    path = "/owner/classes",
    request_body = NewClass,
    responses(
        (status = 200, description = "Class created", body = Class),
        (status = 400, description = "Missing or invalid class details, or start after end")
    ),
    tag = "owner"
)]
pub async fn create_class(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Class>, ApiError> {
    let new_class: NewClass = serde_json::from_slice(&body)?;
    let class = state.registry.create_class(new_class)?;
    Ok(Json(class))
}

#[utoipa::path(
    get,
    path = "/member/classes",
    responses(
        (status = 200, description = "All classes in creation order", body = [Class])
    ),
    tag = "member"
)]
pub async fn list_classes(State(state): State<AppState>) -> Json<Vec<Class>> {
    Json(state.registry.list_classes())
}

#[utoipa::path(
    post,
    path = "/member/bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking accepted", body = Booking),
        (status = 400, description = "Missing or invalid booking details, or date outside the class range"),
        (status = 404, description = "Class not found")
    ),
    tag = "member"
)]
pub async fn book_class(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: BookingRequest = serde_json::from_slice(&body)?;
    let booking = state.registry.book(request)?;
    Ok((StatusCode::CREATED, Json(booking)))
}
