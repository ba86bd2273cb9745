use crate::application::http::{company::router::CompanyApiDoc, health::router::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Companies API"
    ),
    nest(
        (path = "/api", api = CompanyApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
