//! HTTP-level integration tests for QR type CRUD and scan resolution.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use sqlx::PgPool;

async fn create_qr_type(pool: &PgPool, name: &str, table: &str, column: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/qr-types",
        serde_json::json!({
            "name": name,
            "target_table": table,
            "target_column": column,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn create_artwork(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/artworks",
        serde_json::json!({"name": name, "category": "oil"}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// QrType CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_qr_type_crud(pool: PgPool) {
    let id = create_qr_type(&pool, "artwork code", "artwork", "id").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/qr-types/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["target_table"], "artwork");
    assert_eq!(json["target_column"], "id");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/qr-types/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/qr-types/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Scan resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_scan_resolves_artwork_target(pool: PgPool) {
    let qr_type_id = create_qr_type(&pool, "artwork code", "artwork", "id").await;
    let artwork_id = create_artwork(&pool, "Sunrise").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/qrcode/{qr_type_id}and{artwork_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["qrType"]["id"].as_i64().unwrap(), qr_type_id);
    assert_eq!(json["qrType"]["target_table"], "artwork");
    assert_eq!(json["data"]["name"], "Sunrise");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_scan_of_missing_row_is_ok_with_null_data(pool: PgPool) {
    let qr_type_id = create_qr_type(&pool, "artwork code", "artwork", "id").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/qrcode/{qr_type_id}and99")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["qrType"]["id"].as_i64().unwrap(), qr_type_id);
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_scan_with_unknown_qr_type_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/qrcode/7and42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNKNOWN_QR_TYPE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_scan_key_is_400(pool: PgPool) {
    for key in ["notanumber", "7and", "and42", "7and42and9"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/qrcode/{key}")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "key {key}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_KEY", "key {key}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_scan_against_unregistered_table_is_500(pool: PgPool) {
    let qr_type_id = create_qr_type(&pool, "legacy code", "wechat_user", "id").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/qrcode/{qr_type_id}and1")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNRESOLVABLE_QR_TARGET");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_scan_resolves_exhibition_target(pool: PgPool) {
    let qr_type_id = create_qr_type(&pool, "exhibition code", "exhibition", "id").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/exhibitions",
        serde_json::json!({"name": "Spring Salon"}),
    )
    .await;
    let exhibition_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/qrcode/{qr_type_id}and{exhibition_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Spring Salon");
}
