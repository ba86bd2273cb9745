use crate::domain::{company::ports::CompanyRepository, health::ports::HealthCheckRepository};

#[derive(Clone)]
pub struct Service<C, HC>
where
    C: CompanyRepository,
    HC: HealthCheckRepository,
{
    pub(crate) company_repository: C,
    pub(crate) health_check_repository: HC,
}

impl<C, HC> Service<C, HC>
where
    C: CompanyRepository,
    HC: HealthCheckRepository,
{
    pub fn new(company_repository: C, health_check_repository: HC) -> Self {
        Self {
            company_repository,
            health_check_repository,
        }
    }
}
