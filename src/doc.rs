//! OpenAPI document for the REST API, served at /api/v1/openapi.json.

use crate::error::ErrorBody;
use crate::models::{
    Amenity, AmenityPatch, NewAmenity, NewPlace, NewReview, NewUser, Place, PlaceDetails,
    PlacePatch, Review, ReviewPatch, User, UserPatch,
};
use crate::response::MessageBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HBnB API",
        description = "CRUD over users, places, amenities and reviews."
    ),
    paths(
        crate::handlers::users::create_user,
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
        crate::handlers::amenities::create_amenity,
        crate::handlers::amenities::list_amenities,
        crate::handlers::amenities::get_amenity,
        crate::handlers::amenities::update_amenity,
        crate::handlers::places::create_place,
        crate::handlers::places::list_places,
        crate::handlers::places::get_place,
        crate::handlers::places::update_place,
        crate::handlers::places::place_reviews,
        crate::handlers::places::place_amenities,
        crate::handlers::places::add_place_amenity,
        crate::handlers::reviews::create_review,
        crate::handlers::reviews::list_reviews,
        crate::handlers::reviews::get_review,
        crate::handlers::reviews::update_review,
        crate::handlers::reviews::delete_review,
    ),
    components(schemas(
        User, NewUser, UserPatch,
        Amenity, NewAmenity, AmenityPatch,
        Place, NewPlace, PlacePatch, PlaceDetails,
        Review, NewReview, ReviewPatch,
        ErrorBody, MessageBody,
    )),
    tags(
        (name = "users", description = "User registration and profile updates"),
        (name = "amenities", description = "Amenity catalogue"),
        (name = "places", description = "Places and their owner, amenities and reviews"),
        (name = "reviews", description = "Reviews of places")
    )
)]
pub struct ApiDoc;
