use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name prefix shared by every country table.
pub const COUNTRY_TABLE_PREFIX: &str = "company_";

static COUNTRY_TABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^company_[a-z][a-z0-9_]*$").expect("valid table name pattern"));

/// A company row joined with the attributes of its country table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompanyRecord {
    pub id: i64,
    /// Country table the attributes were read from.
    pub table_name: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// A physical `company_<code>` table discovered in the catalog.
///
/// Only names that are plain lowercase identifiers are accepted, so a
/// `CountryTable` can be placed into SQL text as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryTable(String);

impl CountryTable {
    pub fn parse(name: &str) -> Option<Self> {
        COUNTRY_TABLE_NAME
            .is_match(name)
            .then(|| Self(name.to_string()))
    }

    /// Table for a caller supplied country code, e.g. `NL` -> `company_nl`.
    pub fn for_country(code: &str) -> Option<Self> {
        Self::parse(&format!("{COUNTRY_TABLE_PREFIX}{}", code.trim().to_lowercase()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[COUNTRY_TABLE_PREFIX.len()..]
    }
}

impl fmt::Display for CountryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_country_tables() {
        let table = CountryTable::parse("company_nl").unwrap();
        assert_eq!(table.name(), "company_nl");
        assert_eq!(table.country_code(), "nl");
    }

    #[test]
    fn test_parse_rejects_unsafe_names() {
        assert!(CountryTable::parse("company").is_none());
        assert!(CountryTable::parse("company_").is_none());
        assert!(CountryTable::parse("company_NL").is_none());
        assert!(CountryTable::parse("company_nl; DROP TABLE company").is_none());
        assert!(CountryTable::parse("companyx_nl").is_none());
    }

    #[test]
    fn test_for_country_lowercases_code() {
        let table = CountryTable::for_country("NL").unwrap();
        assert_eq!(table.name(), "company_nl");
        assert!(CountryTable::for_country("n'l").is_none());
    }
}
