use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement, Value};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    company::{entities::CompanyRecord, ports::CompanyRepository, query::QueryPlan},
};

const COUNTRY_TABLES_SQL: &str = r#"
    SELECT table_name::text AS table_name
    FROM information_schema.tables
    WHERE table_schema = $1
      AND table_name LIKE 'company\_%'
    ORDER BY table_name
"#;

#[derive(Debug, Clone)]
pub struct PostgresCompanyRepository {
    pub db: DatabaseConnection,
    pub schema: String,
}

impl PostgresCompanyRepository {
    pub fn new(db: DatabaseConnection, schema: String) -> Self {
        Self { db, schema }
    }
}

impl CompanyRepository for PostgresCompanyRepository {
    async fn list_country_tables(&self) -> Result<Vec<String>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            COUNTRY_TABLES_SQL,
            [self.schema.clone().into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to list country tables: {}", e);
            CoreError::DataStore(e.to_string())
        })?;

        let tables = rows
            .iter()
            .map(|row| row.try_get::<String>("", "table_name"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to read country table name: {}", e);
                CoreError::DataStore(e.to_string())
            })?;

        debug!(schema = %self.schema, count = tables.len(), "listed country tables");
        Ok(tables)
    }

    async fn fetch_companies(&self, plan: QueryPlan) -> Result<Vec<CompanyRecord>, CoreError> {
        let (sql, values) = plan.into_parts();
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            values.into_iter().map(Value::from),
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to fetch companies: {}", e);
            CoreError::DataStore(e.to_string())
        })?;

        rows.iter()
            .map(CompanyRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to map company row: {}", e);
                CoreError::DataStore(e.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DbErr, MockDatabase, Transaction};

    use super::*;
    use crate::domain::company::{
        entities::CountryTable,
        query::QueryComposer,
        value_objects::{FilterSpec, SortSpec},
    };

    fn table_row(name: &str) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("table_name", Value::from(name))])
    }

    fn company_row(
        id: Value,
        table_name: &str,
        name: &str,
        city: Option<&str>,
    ) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("id", id),
            ("table_name", Value::from(table_name)),
            ("name", Value::from(name)),
            ("city", Value::from(city.map(str::to_string))),
            ("country", Value::from("NL")),
        ])
    }

    #[tokio::test]
    async fn test_list_country_tables_queries_configured_schema() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![table_row("company_nl"), table_row("company_us")]])
            .into_connection();
        let repository = PostgresCompanyRepository::new(db.clone(), "registry".to_string());

        let tables = repository.list_country_tables().await.unwrap();

        assert_eq!(tables, vec!["company_nl".to_string(), "company_us".to_string()]);
        drop(repository);
        assert_eq!(
            db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                COUNTRY_TABLES_SQL,
                ["registry".into()],
            )]
        );
    }

    #[tokio::test]
    async fn test_fetch_companies_binds_plan_values() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                company_row(Value::from(1i64), "company_nl", "Connell BV", Some("Utrecht")),
                company_row(Value::from(2i32), "company_nl", "O'Connell", None),
            ]])
            .into_connection();
        let repository = PostgresCompanyRepository::new(db.clone(), "public".to_string());

        let filter: FilterSpec = [("name", "Connell")].into_iter().collect();
        let plan = QueryComposer::compose_single_table(
            &CountryTable::parse("company_nl").unwrap(),
            &filter,
            &SortSpec::new(),
        )
        .unwrap();
        let sql = plan.sql().to_string();

        let companies = repository.fetch_companies(plan).await.unwrap();

        assert_eq!(
            companies,
            vec![
                CompanyRecord {
                    id: 1,
                    table_name: "company_nl".to_string(),
                    name: Some("Connell BV".to_string()),
                    city: Some("Utrecht".to_string()),
                    country: Some("NL".to_string()),
                },
                CompanyRecord {
                    id: 2,
                    table_name: "company_nl".to_string(),
                    name: Some("O'Connell".to_string()),
                    city: None,
                    country: Some("NL".to_string()),
                },
            ]
        );
        drop(repository);
        assert_eq!(
            db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                ["%Connell%".into()],
            )]
        );
    }

    #[tokio::test]
    async fn test_fetch_companies_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation does not exist".to_string())])
            .into_connection();
        let repository = PostgresCompanyRepository::new(db, "public".to_string());

        let plan = QueryComposer::compose_union(
            &[CountryTable::parse("company_nl").unwrap()],
            &FilterSpec::new(),
            &SortSpec::new(),
        )
        .unwrap();

        let result = repository.fetch_companies(plan).await;

        assert!(matches!(result, Err(CoreError::DataStore(_))));
    }
}
