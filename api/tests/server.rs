//! HTTP tests for the routes that do not touch company data.

mod common;

use axum::http::StatusCode;
use common::server;
use sea_orm::DatabaseConnection;

#[tokio::test]
async fn test_welcome() {
    let server = server(DatabaseConnection::Disconnected);

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Welcome");
}

#[tokio::test]
async fn test_liveness() {
    let server = server(DatabaseConnection::Disconnected);

    server.get("/health/live").await.assert_status_ok();
}

#[tokio::test]
async fn test_readiness_without_database() {
    let server = server(DatabaseConnection::Disconnected);

    let response = server.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_openapi_document_lists_company_routes() {
    let server = server(DatabaseConnection::Disconnected);

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let document = response.json::<serde_json::Value>();
    assert!(document["paths"]["/api"]["get"].is_object());
    assert!(document["paths"]["/api/countries"]["get"].is_object());
}
