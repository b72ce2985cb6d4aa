use crate::error::{AppError, ErrorBody};
use crate::extractors::JsonBody;
use crate::handlers::parse_id;
use crate::models::{EntityKind, NewUser, User, UserPatch};
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input data", body = ErrorBody)
    ),
    tags = ["users"]
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.facade.create_user(payload)?;
    Ok(created(user))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses((status = 200, description = "All users", body = [User])),
    tags = ["users"]
)]
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.facade.list_users())
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tags = ["users"]
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::User)?;
    Ok(ok(state.facade.get_user(id)?))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid input data", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tags = ["users"]
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UserPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, EntityKind::User)?;
    Ok(ok(state.facade.update_user(id, patch)?))
}
