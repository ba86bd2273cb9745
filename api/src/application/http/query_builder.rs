//! Conversion of parsed query parameters into the core's filter and sort specs
//!
//! Field names are passed through untouched; the core rejects anything
//! outside its attribute allowlist when it composes the query.

use companies_core::domain::company::value_objects::{FilterSpec, GetCompaniesInput, SortSpec};

use super::query_params::{FilterParams, QueryParams, SortParams};

/// Helper to convert filter params to a filter spec; a repeated field keeps its last value
pub fn filter_spec(filter: &FilterParams) -> FilterSpec {
    filter
        .conditions
        .iter()
        .map(|cond| (cond.field.clone(), cond.value.clone()))
        .collect()
}

/// Helper to convert sort params to a sort spec
pub fn sort_spec(sort: &SortParams) -> SortSpec {
    sort.sorts
        .iter()
        .map(|spec| (spec.field.clone(), spec.direction.clone()))
        .collect()
}

impl From<QueryParams> for GetCompaniesInput {
    fn from(params: QueryParams) -> Self {
        Self {
            filter: filter_spec(&params.filter),
            sort: sort_spec(&params.sort),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::http::query_params::{FilterCondition, SortSpec as SortParam};

    #[test]
    fn test_repeated_filter_keeps_last_value() {
        let filter = FilterParams {
            conditions: vec![
                FilterCondition {
                    field: "city".to_string(),
                    value: "Delft".to_string(),
                },
                FilterCondition {
                    field: "city".to_string(),
                    value: "Leiden".to_string(),
                },
            ],
        };

        let spec = filter_spec(&filter);

        assert_eq!(spec.len(), 1);
        assert_eq!(spec.get("city"), Some("Leiden"));
    }

    #[test]
    fn test_into_get_companies_input() {
        let params = QueryParams {
            filter: FilterParams {
                conditions: vec![FilterCondition {
                    field: "country".to_string(),
                    value: "NL".to_string(),
                }],
            },
            sort: SortParams {
                sorts: vec![SortParam {
                    field: "city".to_string(),
                    direction: "ASC".to_string(),
                }],
            },
        };

        let input = GetCompaniesInput::from(params);

        assert_eq!(input.filter.get("country"), Some("NL"));
        assert_eq!(input.sort.iter().collect::<Vec<_>>(), vec![("city", "ASC")]);
    }
}
