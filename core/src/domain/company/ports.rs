use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    company::{
        entities::CompanyRecord,
        query::QueryPlan,
        value_objects::{GetCompaniesInput, QueryAllCountriesInput, QueryOneCountryInput},
    },
};

pub trait CompanyService: Send + Sync {
    /// Dispatches on `filter[country]`: one country table when present, all of them otherwise.
    fn get_companies(
        &self,
        input: GetCompaniesInput,
    ) -> impl Future<Output = Result<Vec<CompanyRecord>, CoreError>> + Send;

    fn query_one_country(
        &self,
        input: QueryOneCountryInput,
    ) -> impl Future<Output = Result<Vec<CompanyRecord>, CoreError>> + Send;

    fn query_all_countries(
        &self,
        input: QueryAllCountriesInput,
    ) -> impl Future<Output = Result<Vec<CompanyRecord>, CoreError>> + Send;

    fn list_countries(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CompanyRepository: Send + Sync {
    /// Names of every catalog table starting with `company_`, ordered by name.
    fn list_country_tables(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn fetch_companies(
        &self,
        plan: QueryPlan,
    ) -> impl Future<Output = Result<Vec<CompanyRecord>, CoreError>> + Send;
}
