use crate::error::{AppError, ErrorBody};
use crate::extractors::JsonBody;
use crate::handlers::parse_id;
use crate::models::{EntityKind, NewReview, Review, ReviewPatch};
use crate::response::{created, message, ok, MessageBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    request_body = NewReview,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Invalid input data", body = ErrorBody)
    ),
    tags = ["reviews"]
)]
pub async fn create_review(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewReview>,
) -> Result<impl IntoResponse, AppError> {
    Ok(created(state.facade.create_review(payload)?))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    responses((status = 200, description = "All reviews", body = [Review])),
    tags = ["reviews"]
)]
pub async fn list_reviews(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.facade.list_reviews())
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review details", body = Review),
        (status = 404, description = "Review not found", body = ErrorBody)
    ),
    tags = ["reviews"]
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Review)?;
    Ok(ok(state.facade.get_review(id)?))
}

#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review id")),
    request_body = ReviewPatch,
    responses(
        (status = 200, description = "Review updated", body = Review),
        (status = 400, description = "Invalid input data", body = ErrorBody),
        (status = 404, description = "Review not found", body = ErrorBody)
    ),
    tags = ["reviews"]
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ReviewPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Review)?;
    Ok(ok(state.facade.update_review(id, patch)?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = MessageBody),
        (status = 404, description = "Review not found", body = ErrorBody)
    ),
    tags = ["reviews"]
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::Review)?;
    state.facade.delete_review(id)?;
    Ok(message("Review deleted successfully"))
}
