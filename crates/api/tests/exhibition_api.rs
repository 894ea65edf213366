//! HTTP-level integration tests for exhibition CRUD.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_exhibition_crud_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/exhibitions",
        serde_json::json!({
            "name": "Spring Salon",
            "location": "Hall 3",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["location"], "Hall 3");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/exhibitions/{id}"),
        serde_json::json!({"location": "Hall 5"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Spring Salon");
    assert_eq!(updated["location"], "Hall 5");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/exhibitions").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/exhibitions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/exhibitions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
