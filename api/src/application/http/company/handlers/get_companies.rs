use axum::extract::State;
use companies_core::domain::company::{
    entities::CompanyRecord, ports::CompanyService, value_objects::GetCompaniesInput,
};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "company",
    summary = "Get companies",
    description = "Returns companies from every country table, or from a single one when \
        `filter[country]` is given. `name` and `city` filters match substrings, other filters \
        match exactly.",
    params(
        (
            "filter[country]" = Option<String>,
            Query,
            description = "Country code selecting a single country table, e.g. `NL`"
        ),
        ("filter[name]" = Option<String>, Query, description = "Substring of the company name"),
        ("filter[city]" = Option<String>, Query, description = "Substring of the city"),
        ("sort[id]" = Option<String>, Query, description = "`ASC` or `DESC`"),
        ("sort[name]" = Option<String>, Query, description = "`ASC` or `DESC`"),
        ("sort[city]" = Option<String>, Query, description = "`ASC` or `DESC`"),
        ("sort[country]" = Option<String>, Query, description = "`ASC` or `DESC`"),
    ),
    responses(
        (status = 200, body = Vec<CompanyRecord>),
        (
            status = 400,
            body = ApiErrorResponse,
            description = "Malformed query string, unknown field, or invalid sort direction"
        ),
        (status = 404, body = ApiErrorResponse, description = "No table for the requested country"),
        (status = 500, body = ApiErrorResponse, description = "No country tables exist"),
        (status = 503, body = ApiErrorResponse, description = "Database unavailable"),
    )
)]
pub async fn get_companies(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<Vec<CompanyRecord>>, ApiError> {
    let companies = state
        .service
        .get_companies(GetCompaniesInput::from(query_params))
        .await
        .map_err(|e| {
            tracing::warn!("Failed to get companies: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(companies))
}
