use super::handlers::{
    get_companies::{__path_get_companies, get_companies},
    get_countries::{__path_get_countries, get_countries},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_companies, get_countries))]
pub struct CompanyApiDoc;

pub fn company_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api", state.args.server.root_path),
            get(get_companies),
        )
        .route(
            &format!("{}/api/countries", state.args.server.root_path),
            get(get_countries),
        )
}
