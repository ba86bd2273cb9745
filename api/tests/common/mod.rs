#![allow(dead_code)]

use std::{collections::BTreeMap, sync::Arc};

use axum_test::TestServer;
use clap::Parser;
use companies_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use companies_core::{
    domain::common::services::Service,
    infrastructure::{company::PostgresCompanyRepository, health::PostgresHealthCheckRepository},
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};

pub type Row = BTreeMap<&'static str, Value>;

pub fn server(db: DatabaseConnection) -> TestServer {
    let args = Arc::new(Args::parse_from(["companies-api"]));
    let service = Service::new(
        PostgresCompanyRepository::new(db.clone(), "public".to_string()),
        PostgresHealthCheckRepository::new(db),
    );
    let app = router(AppState::new(args, service)).expect("router builds");

    TestServer::new(app).expect("test server starts")
}

/// A database answering the catalog query with `tables`, then each query in `results`.
pub fn database(tables: &[&str], results: Vec<Vec<Row>>) -> DatabaseConnection {
    let catalog = tables
        .iter()
        .map(|name| BTreeMap::from([("table_name", Value::from(*name))]))
        .collect::<Vec<_>>();

    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([catalog])
        .append_query_results(results)
        .into_connection()
}

pub fn company(id: i64, table_name: &str, name: &str, city: &str, country: &str) -> Row {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("table_name", Value::from(table_name)),
        ("name", Value::from(name)),
        ("city", Value::from(city)),
        ("country", Value::from(country)),
    ])
}
