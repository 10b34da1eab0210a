/// Integration tests for the Holocron catalog API
///
/// Each test runs against a fresh in-memory database with the seed catalog
/// (three people, three planets, all with stars = NULL) and drives the
/// router end-to-end:
/// - user create/read/delete and uniqueness failures
/// - the transactional favorite-add flow and its stars increments
/// - favorite removal and the never-decrement asymmetry
/// - grouped per-user favorite listings

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, TestContext};
use holocron_shared::models::person::Person;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_create_and_list_users() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .post_json(
            "/user",
            json!({
                "name": "han",
                "email": "han@falcon.example",
                "password": "nevertellmetheodds",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "han");
    assert_eq!(body["email"], "han@falcon.example");
    // The password never appears in responses
    assert!(body.get("password").is_none());

    let response = ctx.get("/user").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_user_duplicate_email_is_rejected() {
    let ctx = TestContext::new().await.unwrap();
    create_test_user(&ctx, "han", "han@falcon.example").await;

    let response = ctx
        .post_json(
            "/user",
            json!({
                "name": "chewie",
                "email": "han@falcon.example",
                "password": "rrwwgg",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // No row was created
    let response = ctx.get("/user").await;
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_user_missing_body() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.post_empty("/user").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_empty_fields_rejected() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .post_json(
            "/user",
            json!({"name": "", "email": "a@b.example", "password": "x"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.get("/user/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_delete_user() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = create_test_user(&ctx, "lando", "lando@cloudcity.example").await;

    let response = ctx.delete(&format!("/user/{}", user_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User deleted");

    let response = ctx.get(&format!("/user/{}", user_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Second delete is a 404
    let response = ctx.delete(&format!("/user/{}", user_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_seeded_catalog() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.get("/people").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["name"], "Luke Skywalker");
    assert!(body[0]["stars"].is_null());

    let response = ctx.get("/planet").await;
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["name"], "Tatooine");

    let response = ctx.get("/people/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = ctx.get("/planet/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_planet_favorite_increments_stars() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = create_test_user(&ctx, "han", "han@falcon.example").await;

    // Never favorited: stars is NULL
    let body = body_json(ctx.get("/planet/1").await).await;
    assert!(body["stars"].is_null());

    // First favorite: NULL -> 1
    let response = ctx
        .post_json("/favorite/planet", json!({"planet_id": 1, "user_id": user_id}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let favorite = body_json(response).await;
    assert_eq!(favorite["planet_id"], 1);
    assert_eq!(favorite["user_id"], user_id);

    let body = body_json(ctx.get("/planet/1").await).await;
    assert_eq!(body["stars"], 1);

    // Second favorite: exactly +1
    let response = ctx
        .post_json("/favorite/planet", json!({"planet_id": 1, "user_id": user_id}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(ctx.get("/planet/1").await).await;
    assert_eq!(body["stars"], 2);
}

#[tokio::test]
async fn test_people_favorite_end_to_end() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = create_test_user(&ctx, "han", "han@falcon.example").await;
    assert_eq!(user_id, 1);

    let response = ctx
        .post_json("/favorite/people", json!({"people_id": 1, "user_id": 1}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body, json!({"id": 1, "people_id": 1, "user_id": 1}));

    let body = body_json(ctx.get("/people/1").await).await;
    assert_eq!(body["stars"], 1);

    // Same view through the model layer
    let person = Person::find_by_id(&ctx.db, 1).await.unwrap().unwrap();
    assert_eq!(person.stars, Some(1));
}

#[tokio::test]
async fn test_remove_favorite_not_found_mutates_nothing() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.delete("/favorite/planet/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(ctx.get("/planet/1").await).await;
    assert!(body["stars"].is_null());
}

#[tokio::test]
async fn test_add_remove_add_never_decrements() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = create_test_user(&ctx, "han", "han@falcon.example").await;

    ctx.post_json("/favorite/planet", json!({"planet_id": 2, "user_id": user_id}))
        .await;

    let response = ctx.delete("/favorite/planet/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Favorite deleted");

    // Removal left the counter alone
    let body = body_json(ctx.get("/planet/2").await).await;
    assert_eq!(body["stars"], 1);

    ctx.post_json("/favorite/planet", json!({"planet_id": 2, "user_id": user_id}))
        .await;

    // Stars counts favorites ever added: 2, not 1
    let body = body_json(ctx.get("/planet/2").await).await;
    assert_eq!(body["stars"], 2);
}

#[tokio::test]
async fn test_people_favorite_remove() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = create_test_user(&ctx, "han", "han@falcon.example").await;

    ctx.post_json("/favorite/people", json!({"people_id": 3, "user_id": user_id}))
        .await;

    let response = ctx.delete("/favorite/people/3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx.delete("/favorite/people/3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_favorite_unknown_planet_rolls_back() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = create_test_user(&ctx, "han", "han@falcon.example").await;

    let response = ctx
        .post_json("/favorite/planet", json!({"planet_id": 999, "user_id": user_id}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // No partial effects: the join record did not survive
    let body = body_json(ctx.get("/planet/favorites").await).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_favorite_missing_ids_rejected() {
    let ctx = TestContext::new().await.unwrap();

    // Field absent entirely
    let response = ctx
        .post_json("/favorite/planet", json!({"planet_id": 1}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Zero id is treated as missing
    let response = ctx
        .post_json("/favorite/planet", json!({"planet_id": 0, "user_id": 0}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_favorites_grouping() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = create_test_user(&ctx, "han", "han@falcon.example").await;
    let other_id = create_test_user(&ctx, "chewie", "chewie@falcon.example").await;

    ctx.post_json("/favorite/planet", json!({"planet_id": 1, "user_id": user_id}))
        .await;
    ctx.post_json("/favorite/people", json!({"people_id": 2, "user_id": user_id}))
        .await;
    ctx.post_json("/favorite/planet", json!({"planet_id": 3, "user_id": other_id}))
        .await;

    let response = ctx.get(&format!("/user/favorites/{}", user_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["favorite_planets"].as_array().unwrap().len(), 1);
    assert_eq!(body["favorite_planets"][0]["planet_id"], 1);
    assert_eq!(body["favorite_people"].as_array().unwrap().len(), 1);
    assert_eq!(body["favorite_people"][0]["people_id"], 2);

    // Unknown user: empty groups, still 200
    let body = body_json(ctx.get("/user/favorites/999").await).await;
    assert_eq!(body["favorite_planets"].as_array().unwrap().len(), 0);
    assert_eq!(body["favorite_people"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_planet_favorites() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = create_test_user(&ctx, "han", "han@falcon.example").await;

    ctx.post_json("/favorite/planet", json!({"planet_id": 1, "user_id": user_id}))
        .await;
    ctx.post_json("/favorite/planet", json!({"planet_id": 2, "user_id": user_id}))
        .await;

    let response = ctx.get("/planet/favorites").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
