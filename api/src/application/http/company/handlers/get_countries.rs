use axum::extract::State;
use companies_core::domain::company::ports::CompanyService;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/countries",
    tag = "company",
    summary = "List countries",
    description = "Country codes that have a company table, in table name order.",
    responses(
        (status = 200, body = Vec<String>),
        (status = 500, body = ApiErrorResponse, description = "No country tables exist"),
        (status = 503, body = ApiErrorResponse, description = "Database unavailable"),
    )
)]
pub async fn get_countries(
    State(state): State<AppState>,
) -> Result<Response<Vec<String>>, ApiError> {
    let countries = state.service.list_countries().await.map_err(|e| {
        tracing::warn!("Failed to list countries: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(countries))
}
