//! End-to-end tests driving the full router in-process.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use hbnb::{app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const BODY_LIMIT: usize = 64 * 1024;

fn router() -> Router {
    app(AppState::default(), BODY_LIMIT)
}

async fn send(api: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = api.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post(api: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(api, Method::POST, uri, Some(body)).await
}

async fn put(api: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(api, Method::PUT, uri, Some(body)).await
}

async fn get(api: &Router, uri: &str) -> (StatusCode, Value) {
    send(api, Method::GET, uri, None).await
}

async fn create_owner(api: &Router, email: &str) -> String {
    let (status, user) = post(
        api,
        "/api/v1/users",
        json!({"first_name": "John", "last_name": "Doe", "email": email}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    user["id"].as_str().unwrap().to_string()
}

async fn create_place(api: &Router, owner_id: &str) -> String {
    let (status, place) = post(
        api,
        "/api/v1/places",
        json!({
            "title": "Cozy loft",
            "description": "Near the station",
            "price": 100.0,
            "latitude": 48.85,
            "longitude": 2.35,
            "owner_id": owner_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", place);
    place["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn user_lifecycle() {
    let api = router();
    let (status, user) = post(
        &api,
        "/api/v1/users",
        json!({"first_name": "John", "last_name": "Doe", "email": "john.doe@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["first_name"], "John");
    assert_eq!(user["email"], "john.doe@example.com");
    let id = user["id"].as_str().unwrap().to_string();

    let (status, body) = post(
        &api,
        "/api/v1/users",
        json!({"first_name": "John", "last_name": "Doe", "email": "john.doe@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");

    let (status, fetched) = get(&api, &format!("/api/v1/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, user);

    let (status, updated) = put(
        &api,
        &format!("/api/v1/users/{}", id),
        json!({"last_name": "Smith"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["last_name"], "Smith");
    assert_eq!(updated["first_name"], "John");

    let (status, all) = get(&api, "/api/v1/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn user_validation_errors() {
    let api = router();
    let (status, body) = post(
        &api,
        "/api/v1/users",
        json!({"first_name": "A".repeat(51), "last_name": "Doe", "email": "hello@gmail.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "First name and Last name must not exceed 50 characters"
    );

    let (status, body) = post(
        &api,
        "/api/v1/users",
        json!({"first_name": "A", "last_name": "Doe", "email": "hellogmailcom"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");

    let (status, body) = post(&api, "/api/v1/users", json!({"yes": "sir"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let api = router();
    let (status, body) = get(&api, "/api/v1/users/invalid_id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, _) = put(
        &api,
        "/api/v1/users/00000000-0000-4000-8000-000000000000",
        json!({"first_name": "Ghost"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn amenity_endpoints() {
    let api = router();
    let (status, wifi) = post(&api, "/api/v1/amenities", json!({"name": "WI-FI"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(wifi["name"], "WI-FI");
    let id = wifi["id"].as_str().unwrap().to_string();

    post(&api, "/api/v1/amenities", json!({"name": "hello"})).await;

    let (status, all) = get(&api, "/api/v1/amenities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0]["name"], "WI-FI");

    let (status, body) = get(&api, "/api/v1/amenities/invalid_id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Amenity not found");

    let (status, body) = put(
        &api,
        &format!("/api/v1/amenities/{}", id),
        json!({"name": "A".repeat(51)}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name must not exceed 50 characters");
    let (_, unchanged) = get(&api, &format!("/api/v1/amenities/{}", id)).await;
    assert_eq!(unchanged["name"], "WI-FI");

    let (status, renamed) = put(
        &api,
        &format!("/api/v1/amenities/{}", id),
        json!({"name": "Wiwi"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Wiwi");

    let (status, body) = post(&api, "/api/v1/amenities", json!({"name": "A".repeat(51)})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name must not exceed 50 characters");
}

#[tokio::test]
async fn place_owner_must_exist() {
    let api = router();
    let (status, body) = post(
        &api,
        "/api/v1/places",
        json!({
            "title": "Nowhere",
            "price": 10.0,
            "latitude": 0.0,
            "longitude": 0.0,
            "owner_id": "00000000-0000-4000-8000-000000000000"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Owner not found");

    let owner_id = create_owner(&api, "owner@example.com").await;
    let place_id = create_place(&api, &owner_id).await;

    let (status, details) = get(&api, &format!("/api/v1/places/{}", place_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["owner_id"], owner_id.as_str());
    assert_eq!(details["owner"]["id"], owner_id.as_str());
    assert_eq!(details["title"], "Cozy loft");
    assert_eq!(details["reviews"], json!([]));
    assert_eq!(details["amenities"], json!([]));
}

#[tokio::test]
async fn place_field_validation_and_update() {
    let api = router();
    let owner_id = create_owner(&api, "owner@example.com").await;

    let (status, body) = post(
        &api,
        "/api/v1/places",
        json!({
            "title": "Upside down",
            "price": -5.0,
            "latitude": 0.0,
            "longitude": 0.0,
            "owner_id": owner_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Price must be a non-negative number");

    let place_id = create_place(&api, &owner_id).await;
    let uri = format!("/api/v1/places/{}", place_id);

    let (status, _) = put(&api, &uri, json!({"longitude": 200.0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = put(
        &api,
        &uri,
        json!({"owner_id": "00000000-0000-4000-8000-000000000000"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Owner not found");

    let (status, updated) = put(&api, &uri, json!({"price": 150.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 150.0);
    assert_eq!(updated["longitude"], 2.35);

    let (status, places) = get(&api, "/api/v1/places").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(places.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn place_amenities_link() {
    let api = router();
    let owner_id = create_owner(&api, "owner@example.com").await;
    let place_id = create_place(&api, &owner_id).await;
    let (_, wifi) = post(&api, "/api/v1/amenities", json!({"name": "WI-FI"})).await;
    let wifi_id = wifi["id"].as_str().unwrap();

    let (status, place) = post(
        &api,
        &format!("/api/v1/places/{}/amenities/{}", place_id, wifi_id),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(place["amenity_ids"], json!([wifi_id]));

    let (status, amenities) = get(&api, &format!("/api/v1/places/{}/amenities", place_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(amenities[0]["name"], "WI-FI");

    let (status, body) = post(
        &api,
        &format!("/api/v1/places/{}/amenities/nope", place_id),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Amenity not found");
}

#[tokio::test]
async fn review_lifecycle() {
    let api = router();
    let user_id = create_owner(&api, "guest@example.com").await;
    let place_id = create_place(&api, &user_id).await;

    let (status, _) = post(
        &api,
        "/api/v1/reviews",
        json!({"text": "Too good", "rating": 6, "user_id": user_id, "place_id": place_id}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, review) = post(
        &api,
        "/api/v1/reviews",
        json!({"text": "Great stay", "rating": 5, "user_id": user_id, "place_id": place_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["rating"], 5);
    assert_eq!(review["place_id"], place_id.as_str());
    let review_uri = format!("/api/v1/reviews/{}", review["id"].as_str().unwrap());

    let (status, fetched) = get(&api, &review_uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, review);

    let (status, by_place) = get(&api, &format!("/api/v1/places/{}/reviews", place_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_place, json!([review]));

    let (status, updated) = put(&api, &review_uri, json!({"rating": 4})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["rating"], 4);
    assert_eq!(updated["text"], "Great stay");

    let (status, all) = get(&api, "/api/v1/reviews").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (status, body) = send(&api, Method::DELETE, &review_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Review deleted successfully");

    let (status, body) = get(&api, &review_uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Review not found");

    let (status, _) = send(&api, Method::DELETE, &review_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn review_with_unknown_references_is_rejected() {
    let api = router();
    let user_id = create_owner(&api, "guest@example.com").await;
    let (status, body) = post(
        &api,
        "/api/v1/reviews",
        json!({"text": "Hmm", "rating": 3, "user_id": user_id, "place_id": "missing"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "place_id does not reference an existing place");
}

#[tokio::test]
async fn place_reviews_for_unknown_place() {
    let api = router();
    let (status, body) = get(
        &api,
        "/api/v1/places/00000000-0000-4000-8000-000000000000/reviews",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Place not found");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let api = router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/amenities")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = api.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_and_openapi() {
    let api = router();
    let (status, body) = get(&api, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = get(&api, "/api/v1/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/v1/reviews/{id}"].is_object());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let api = app(AppState::default(), 64);
    let (status, body) = post(
        &api,
        "/api/v1/users",
        json!({"first_name": "A".repeat(200), "last_name": "Doe", "email": "big@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, all) = get(&api, "/api/v1/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([]));
}
