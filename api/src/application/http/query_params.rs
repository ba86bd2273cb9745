use tracing::debug;

/// Filter condition for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub value: String,
}

/// Parsed filter parameters, in query string order
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Sort specification for a single field.
///
/// The direction is kept verbatim; it is validated when the query is composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: String,
}

/// Parsed sort parameters, in query string order
#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    pub fn new() -> Self {
        Self { sorts: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Parse sort string like "field1,-field2,field3"
    pub fn from_string(s: &str) -> Self {
        let mut sorts = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some(stripped) = part.strip_prefix('-') {
                sorts.push(SortSpec {
                    field: stripped.to_string(),
                    direction: "DESC".to_string(),
                });
            } else {
                sorts.push(SortSpec {
                    field: part.to_string(),
                    direction: "ASC".to_string(),
                });
            }
        }
        Self { sorts }
    }
}

/// Combined query parameters (filter, sort)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub sort: SortParams,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from decoded query string pairs, keeping their order
    /// Handles formats like:
    /// - filter[field]=value
    /// - sort[field]=ASC or sort[field]=DESC
    /// - sort=field,-field
    ///
    /// Any other key is ignored.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let mut filter = FilterParams::new();
        let mut sort = SortParams::new();

        for (key, value) in pairs {
            if let Some(field) = bracketed(key, "filter") {
                filter.conditions.push(FilterCondition {
                    field: field.to_string(),
                    value: value.clone(),
                });
            } else if let Some(field) = bracketed(key, "sort") {
                sort.sorts.push(SortSpec {
                    field: field.to_string(),
                    direction: value.clone(),
                });
            } else if key == "sort" {
                sort.sorts.extend(SortParams::from_string(value).sorts);
            } else {
                debug!("Ignoring query parameter: {}", key);
            }
        }

        Self { filter, sort }
    }
}

/// `name` out of `prefix[name]`; nested or empty brackets are not accepted.
fn bracketed<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let field = key.strip_prefix(prefix)?.strip_prefix('[')?.strip_suffix(']')?;
    if field.is_empty() || field.contains(['[', ']']) {
        return None;
    }
    Some(field)
}
