use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    company::ports::CompanyRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
};

impl<C, HC> HealthCheckService for Service<C, HC>
where
    C: CompanyRepository,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let latency_ms = self.health_check_repository.health().await?;

        Ok(DatabaseHealthStatus {
            healthy: true,
            latency_ms,
        })
    }
}
