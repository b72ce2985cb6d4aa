use crate::error::{AppError, ErrorBody};
use crate::extractors::JsonBody;
use crate::handlers::parse_id;
use crate::models::{Amenity, EntityKind, NewPlace, Place, PlaceDetails, PlacePatch, Review};
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    post,
    path = "/api/v1/places",
    request_body = NewPlace,
    responses(
        (status = 201, description = "Place created", body = Place),
        (status = 400, description = "Invalid input data", body = ErrorBody),
        (status = 404, description = "Owner not found", body = ErrorBody)
    ),
    tags = ["places"]
)]
pub async fn create_place(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewPlace>,
) -> Result<impl IntoResponse, AppError> {
    Ok(created(state.facade.create_place(payload)?))
}

#[utoipa::path(
    get,
    path = "/api/v1/places",
    responses((status = 200, description = "All places", body = [Place])),
    tags = ["places"]
)]
pub async fn list_places(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.facade.list_places())
}

#[utoipa::path(
    get,
    path = "/api/v1/places/{id}",
    params(("id" = String, Path, description = "Place id")),
    responses(
        (status = 200, description = "Place with owner, amenities and reviews", body = PlaceDetails),
        (status = 404, description = "Place not found", body = ErrorBody)
    ),
    tags = ["places"]
)]
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Place)?;
    Ok(ok(state.facade.place_details(id)?))
}

#[utoipa::path(
    put,
    path = "/api/v1/places/{id}",
    params(("id" = String, Path, description = "Place id")),
    request_body = PlacePatch,
    responses(
        (status = 200, description = "Place updated", body = Place),
        (status = 400, description = "Invalid input data", body = ErrorBody),
        (status = 404, description = "Place or owner not found", body = ErrorBody)
    ),
    tags = ["places"]
)]
pub async fn update_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<PlacePatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Place)?;
    Ok(ok(state.facade.update_place(id, patch)?))
}

#[utoipa::path(
    get,
    path = "/api/v1/places/{id}/reviews",
    params(("id" = String, Path, description = "Place id")),
    responses(
        (status = 200, description = "Reviews of the place", body = [Review]),
        (status = 404, description = "Place not found", body = ErrorBody)
    ),
    tags = ["places"]
)]
pub async fn place_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Place)?;
    Ok(ok(state.facade.reviews_for_place(id)?))
}

#[utoipa::path(
    get,
    path = "/api/v1/places/{id}/amenities",
    params(("id" = String, Path, description = "Place id")),
    responses(
        (status = 200, description = "Amenities of the place", body = [Amenity]),
        (status = 404, description = "Place not found", body = ErrorBody)
    ),
    tags = ["places"]
)]
pub async fn place_amenities(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Place)?;
    Ok(ok(state.facade.amenities_for_place(id)?))
}

#[utoipa::path(
    post,
    path = "/api/v1/places/{id}/amenities/{amenity_id}",
    params(
        ("id" = String, Path, description = "Place id"),
        ("amenity_id" = String, Path, description = "Amenity id")
    ),
    responses(
        (status = 200, description = "Amenity linked to the place", body = Place),
        (status = 404, description = "Place or amenity not found", body = ErrorBody)
    ),
    tags = ["places"]
)]
pub async fn add_place_amenity(
    State(state): State<AppState>,
    Path((id, amenity_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Place)?;
    let amenity_id = parse_id(&amenity_id, EntityKind::Amenity)?;
    Ok(ok(state.facade.add_amenity_to_place(id, amenity_id)?))
}
