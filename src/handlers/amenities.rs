use crate::error::{AppError, ErrorBody};
use crate::extractors::JsonBody;
use crate::handlers::parse_id;
use crate::models::{Amenity, AmenityPatch, EntityKind, NewAmenity};
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    post,
    path = "/api/v1/amenities",
    request_body = NewAmenity,
    responses(
        (status = 201, description = "Amenity created", body = Amenity),
        (status = 400, description = "Invalid input data", body = ErrorBody)
    ),
    tags = ["amenities"]
)]
pub async fn create_amenity(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewAmenity>,
) -> Result<impl IntoResponse, AppError> {
    Ok(created(state.facade.create_amenity(payload)?))
}

#[utoipa::path(
    get,
    path = "/api/v1/amenities",
    responses((status = 200, description = "All amenities", body = [Amenity])),
    tags = ["amenities"]
)]
pub async fn list_amenities(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.facade.list_amenities())
}

#[utoipa::path(
    get,
    path = "/api/v1/amenities/{id}",
    params(("id" = String, Path, description = "Amenity id")),
    responses(
        (status = 200, description = "Amenity details", body = Amenity),
        (status = 404, description = "Amenity not found", body = ErrorBody)
    ),
    tags = ["amenities"]
)]
pub async fn get_amenity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Amenity)?;
    Ok(ok(state.facade.get_amenity(id)?))
}

#[utoipa::path(
    put,
    path = "/api/v1/amenities/{id}",
    params(("id" = String, Path, description = "Amenity id")),
    request_body = AmenityPatch,
    responses(
        (status = 200, description = "Amenity updated", body = Amenity),
        (status = 400, description = "Invalid input data", body = ErrorBody),
        (status = 404, description = "Amenity not found", body = ErrorBody)
    ),
    tags = ["amenities"]
)]
pub async fn update_amenity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<AmenityPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Amenity)?;
    Ok(ok(state.facade.update_amenity(id, patch)?))
}
