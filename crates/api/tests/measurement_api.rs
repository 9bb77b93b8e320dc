//! HTTP-level integration tests for measurement units.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_measurement(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/measurements",
        serde_json::json!({ "name": "tbsp" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "tbsp");
    assert!(json["data"]["id"].is_i64());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_measurement_with_blank_name_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/measurements",
        serde_json::json!({ "name": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let listing = body_json(get(app.clone(), "/api/v1/measurements").await).await;
    assert!(listing["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_measurements_in_insertion_order(pool: PgPool) {
    let app = build_test_app(pool);

    for name in ["g", "ml", "cup"] {
        let response = post_json(
            app.clone(),
            "/api/v1/measurements",
            serde_json::json!({ "name": name }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app.clone(), "/api/v1/measurements").await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["g", "ml", "cup"]);
}
