use tokio::sync::OnceCell;
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    company::{entities::CountryTable, ports::CompanyRepository},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSelection {
    One(CountryTable),
    All(Vec<CountryTable>),
}

/// Maps country codes to country tables.
///
/// The table list is read from the catalog at most once per resolver. A
/// resolver is meant to live for a single request, so catalog changes are
/// picked up by the next one.
pub struct SchemaResolver<'a, C>
where
    C: CompanyRepository,
{
    repository: &'a C,
    tables: OnceCell<Vec<CountryTable>>,
}

impl<'a, C> SchemaResolver<'a, C>
where
    C: CompanyRepository,
{
    pub fn new(repository: &'a C) -> Self {
        Self {
            repository,
            tables: OnceCell::new(),
        }
    }

    pub async fn list_country_tables(&self) -> Result<&[CountryTable], CoreError> {
        let tables = self
            .tables
            .get_or_try_init(|| async {
                let names = self.repository.list_country_tables().await?;
                let tables = names
                    .iter()
                    .filter_map(|name| {
                        let table = CountryTable::parse(name);
                        if table.is_none() {
                            warn!("Skipping country table with unsupported name: {}", name);
                        }
                        table
                    })
                    .collect::<Vec<_>>();
                Ok::<_, CoreError>(tables)
            })
            .await?;

        if tables.is_empty() {
            return Err(CoreError::EmptyTableSet);
        }

        Ok(tables)
    }

    /// Table holding `country_code`, which must be one of the discovered tables.
    pub async fn resolve_country(&self, country_code: &str) -> Result<CountryTable, CoreError> {
        let unknown = || CoreError::UnknownCountry(country_code.to_string());
        let wanted = CountryTable::for_country(country_code).ok_or_else(unknown)?;

        self.list_country_tables()
            .await?
            .iter()
            .find(|table| **table == wanted)
            .cloned()
            .ok_or_else(unknown)
    }

    pub async fn resolve_table(
        &self,
        country_code: Option<&str>,
    ) -> Result<TableSelection, CoreError> {
        match country_code {
            Some(code) => self.resolve_country(code).await.map(TableSelection::One),
            None => Ok(TableSelection::All(self.list_country_tables().await?.to_vec())),
        }
    }
}
