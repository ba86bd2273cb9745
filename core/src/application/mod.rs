use crate::{
    domain::common::{CompaniesConfig, services::Service},
    infrastructure::{
        company::PostgresCompanyRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
    },
};

pub type CompaniesService = Service<PostgresCompanyRepository, PostgresHealthCheckRepository>;

pub async fn create_service(config: CompaniesConfig) -> Result<CompaniesService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let company_repository =
        PostgresCompanyRepository::new(postgres.get_db(), config.database.schema.clone());
    let health_check_repository = PostgresHealthCheckRepository::new(postgres.get_db());

    Ok(Service::new(company_repository, health_check_repository))
}
