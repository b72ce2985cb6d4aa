//! Resource routes for users, amenities, places and reviews. Mounted under /api/v1.

use crate::doc::ApiDoc;
use crate::handlers::amenities::{create_amenity, get_amenity, list_amenities, update_amenity};
use crate::handlers::places::{
    add_place_amenity, create_place, get_place, list_places, place_amenities, place_reviews,
    update_place,
};
use crate::handlers::reviews::{create_review, delete_review, get_review, list_reviews, update_review};
use crate::handlers::users::{create_user, get_user, list_users, update_user};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/:id", get(get_user).put(update_user))
        .route("/amenities", post(create_amenity).get(list_amenities))
        .route("/amenities/:id", get(get_amenity).put(update_amenity))
        .route("/places", post(create_place).get(list_places))
        .route("/places/:id", get(get_place).put(update_place))
        .route("/places/:id/reviews", get(place_reviews))
        .route("/places/:id/amenities", get(place_amenities))
        .route("/places/:id/amenities/:amenity_id", post(add_place_amenity))
        .route("/reviews", post(create_review).get(list_reviews))
        .route(
            "/reviews/:id",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
