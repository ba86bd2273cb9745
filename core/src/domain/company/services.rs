use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    company::{
        entities::{CompanyRecord, CountryTable},
        ports::{CompanyRepository, CompanyService},
        query::QueryComposer,
        schema::{SchemaResolver, TableSelection},
        value_objects::{
            FilterSpec, GetCompaniesInput, QueryAllCountriesInput, QueryOneCountryInput, SortSpec,
        },
    },
    health::ports::HealthCheckRepository,
};

/// Filter key that selects the country table instead of constraining rows.
pub const COUNTRY_FILTER: &str = "country";

impl<C, HC> Service<C, HC>
where
    C: CompanyRepository,
    HC: HealthCheckRepository,
{
    async fn fetch_from_table(
        &self,
        table: &CountryTable,
        filter: &FilterSpec,
        sort: &SortSpec,
    ) -> Result<Vec<CompanyRecord>, CoreError> {
        let plan = QueryComposer::compose_single_table(table, filter, sort)?;
        let companies = self.company_repository.fetch_companies(plan).await?;

        info!(
            table = %table,
            count = companies.len(),
            "fetched companies for one country"
        );
        Ok(companies)
    }

    async fn fetch_from_tables(
        &self,
        tables: &[CountryTable],
        filter: &FilterSpec,
        sort: &SortSpec,
    ) -> Result<Vec<CompanyRecord>, CoreError> {
        let plan = QueryComposer::compose_union(tables, filter, sort)?;
        let companies = self.company_repository.fetch_companies(plan).await?;

        info!(
            tables = tables.len(),
            count = companies.len(),
            "fetched companies for all countries"
        );
        Ok(companies)
    }
}

impl<C, HC> CompanyService for Service<C, HC>
where
    C: CompanyRepository,
    HC: HealthCheckRepository,
{
    async fn get_companies(
        &self,
        input: GetCompaniesInput,
    ) -> Result<Vec<CompanyRecord>, CoreError> {
        let GetCompaniesInput { mut filter, sort } = input;
        let country_code = filter.remove(COUNTRY_FILTER);

        let resolver = SchemaResolver::new(&self.company_repository);
        match resolver.resolve_table(country_code.as_deref()).await? {
            TableSelection::One(table) => self.fetch_from_table(&table, &filter, &sort).await,
            TableSelection::All(tables) => self.fetch_from_tables(&tables, &filter, &sort).await,
        }
    }

    async fn query_one_country(
        &self,
        input: QueryOneCountryInput,
    ) -> Result<Vec<CompanyRecord>, CoreError> {
        let resolver = SchemaResolver::new(&self.company_repository);
        let table = resolver.resolve_country(&input.country_code).await?;

        self.fetch_from_table(&table, &input.filter, &input.sort).await
    }

    async fn query_all_countries(
        &self,
        input: QueryAllCountriesInput,
    ) -> Result<Vec<CompanyRecord>, CoreError> {
        let resolver = SchemaResolver::new(&self.company_repository);
        let tables = resolver.list_country_tables().await?;

        self.fetch_from_tables(tables, &input.filter, &input.sort).await
    }

    async fn list_countries(&self) -> Result<Vec<String>, CoreError> {
        let resolver = SchemaResolver::new(&self.company_repository);
        let tables = resolver.list_country_tables().await?;

        Ok(tables
            .iter()
            .map(|table| table.country_code().to_string())
            .collect())
    }
}
