//! Composition of parameterized company queries.
//!
//! Identifiers reach the SQL text only through [`CountryTable`] (validated
//! catalog names) and [`Attribute`] (a closed allowlist). Caller supplied
//! values are always bound as `$n` parameters.

use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    company::{
        entities::CountryTable,
        value_objects::{Attribute, FilterSpec, SortDirection, SortSpec},
    },
};

/// Alias of the derived table wrapping a union query.
const UNION_ALIAS: &str = "companies";

/// A query template together with its ordered bind values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    sql: String,
    values: Vec<String>,
}

impl QueryPlan {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.sql, self.values)
    }
}

/// Collects bind values and hands out their Postgres placeholders.
#[derive(Default)]
struct Binder {
    values: Vec<String>,
}

impl Binder {
    fn bind(&mut self, value: String) -> String {
        self.values.push(value);
        format!("${}", self.values.len())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryComposer;

impl QueryComposer {
    /// Query against a single country table.
    pub fn compose_single_table(
        table: &CountryTable,
        filter: &FilterSpec,
        sort: &SortSpec,
    ) -> Result<QueryPlan, CoreError> {
        let filters = Self::validate_filter(filter)?;
        let sorts = Self::validate_sort(sort)?;

        let mut binder = Binder::default();
        let mut sql = Self::select(table, &filters, &mut binder);

        let order_by = sorts
            .iter()
            .map(|(attribute, direction)| {
                format!("{} {}", Self::qualified(table, *attribute), direction.as_sql())
            })
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(" ORDER BY ");
        sql.push_str(&order_by);

        let plan = QueryPlan {
            sql,
            values: binder.values,
        };
        debug!(
            table = %table,
            binds = plan.values.len(),
            sql = %plan.sql,
            "composed single table query"
        );

        Ok(plan)
    }

    /// `UNION ALL` of every country table, sorted once over the combined rows.
    pub fn compose_union(
        tables: &[CountryTable],
        filter: &FilterSpec,
        sort: &SortSpec,
    ) -> Result<QueryPlan, CoreError> {
        if tables.is_empty() {
            return Err(CoreError::EmptyTableSet);
        }

        let filters = Self::validate_filter(filter)?;
        let sorts = Self::validate_sort(sort)?;

        let mut binder = Binder::default();
        let union = tables
            .iter()
            .map(|table| Self::select(table, &filters, &mut binder))
            .collect::<Vec<_>>()
            .join(" UNION ALL ");

        let order_by = sorts
            .iter()
            .map(|(attribute, direction)| format!("{} {}", attribute.column(), direction.as_sql()))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "SELECT id, table_name, name, city, country \
             FROM ({union}) AS {UNION_ALIAS} \
             ORDER BY {order_by}"
        );

        let plan = QueryPlan {
            sql,
            values: binder.values,
        };
        debug!(
            tables = tables.len(),
            binds = plan.values.len(),
            sql = %plan.sql,
            "composed union query"
        );

        Ok(plan)
    }

    /// Uniform projection of one country table joined to `company`, with its predicates.
    fn select(table: &CountryTable, filters: &[(Attribute, &str)], binder: &mut Binder) -> String {
        let mut sql = format!(
            "SELECT company.id, '{table}' AS table_name, \
             {table}.name, {table}.city, {table}.country \
             FROM company \
             INNER JOIN {table} ON company.data_table = '{table}' \
             AND company.data_unique_id = {table}.unique_id"
        );

        let predicates = filters
            .iter()
            .map(|(attribute, value)| {
                let column = Self::qualified(table, *attribute);
                if attribute.is_substring_match() {
                    let placeholder = binder.bind(format!("%{value}%"));
                    format!("{column} ILIKE {placeholder}")
                } else {
                    let placeholder = binder.bind(value.to_string());
                    format!("{column} = {placeholder}")
                }
            })
            .collect::<Vec<_>>();

        if !predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }

        sql
    }

    fn qualified(table: &CountryTable, attribute: Attribute) -> String {
        match attribute {
            Attribute::Id => "company.id".to_string(),
            _ => format!("{table}.{}", attribute.column()),
        }
    }

    fn validate_filter(filter: &FilterSpec) -> Result<Vec<(Attribute, &str)>, CoreError> {
        filter
            .iter()
            .map(|(field, value)| {
                let attribute = field.parse::<Attribute>()?;
                if !attribute.is_filterable() {
                    return Err(CoreError::UnknownField(field.to_string()));
                }
                Ok((attribute, value))
            })
            .collect()
    }

    /// Parsed sort terms, with `id ASC` appended as a tie-breaker unless `id` is already sorted on.
    fn validate_sort(sort: &SortSpec) -> Result<Vec<(Attribute, SortDirection)>, CoreError> {
        let mut sorts = sort
            .iter()
            .map(|(column, direction)| {
                let attribute = column.parse::<Attribute>()?;
                let direction = direction.parse::<SortDirection>().map_err(|_| {
                    CoreError::InvalidSortDirection {
                        column: column.to_string(),
                        direction: direction.to_string(),
                    }
                })?;
                Ok((attribute, direction))
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        if !sorts.iter().any(|(attribute, _)| *attribute == Attribute::Id) {
            sorts.push((Attribute::Id, SortDirection::Asc));
        }

        Ok(sorts)
    }
}
