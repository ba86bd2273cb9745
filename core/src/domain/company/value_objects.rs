use std::str::FromStr;

use crate::domain::common::entities::app_errors::CoreError;

/// Attributes that may be named by a filter or sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Id,
    Name,
    City,
    Country,
}

impl Attribute {
    pub fn column(&self) -> &'static str {
        match self {
            Attribute::Id => "id",
            Attribute::Name => "name",
            Attribute::City => "city",
            Attribute::Country => "country",
        }
    }

    /// `id` lives on the `company` table and can only be sorted on.
    pub fn is_filterable(&self) -> bool {
        !matches!(self, Attribute::Id)
    }

    /// Free-text attributes are matched as substrings, everything else exactly.
    pub fn is_substring_match(&self) -> bool {
        matches!(self, Attribute::Name | Attribute::City)
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Attribute::Id),
            "name" => Ok(Attribute::Name),
            "city" => Ok(Attribute::City),
            "country" => Ok(Attribute::Country),
            _ => Err(CoreError::UnknownField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Caller supplied `field -> value` pairs, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    fields: Vec<(String, String)>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field`, replacing an earlier value for the same field in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        let index = self.fields.iter().position(|(f, _)| f == field)?;
        Some(self.fields.remove(index).1)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(f, v)| (f.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterSpec {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut spec = Self::new();
        for (field, value) in iter {
            spec.insert(field, value);
        }
        spec
    }
}

/// Caller supplied `column -> direction` pairs, in the order they were given.
///
/// Directions are kept as received and only interpreted when a query is composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    columns: Vec<(String, String)>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, direction: impl Into<String>) {
        let column = column.into();
        let direction = direction.into();
        match self.columns.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = direction,
            None => self.columns.push((column, direction)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(c, d)| (c.as_str(), d.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SortSpec {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut spec = Self::new();
        for (column, direction) in iter {
            spec.insert(column, direction);
        }
        spec
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetCompaniesInput {
    pub filter: FilterSpec,
    pub sort: SortSpec,
}

#[derive(Debug, Clone)]
pub struct QueryOneCountryInput {
    pub country_code: String,
    pub filter: FilterSpec,
    pub sort: SortSpec,
}

#[derive(Debug, Clone, Default)]
pub struct QueryAllCountriesInput {
    pub filter: FilterSpec,
    pub sort: SortSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_allowlist() {
        assert_eq!("city".parse::<Attribute>(), Ok(Attribute::City));
        assert_eq!(
            "unique_id".parse::<Attribute>(),
            Err(CoreError::UnknownField("unique_id".to_string()))
        );
        assert!(!Attribute::Id.is_filterable());
        assert!(Attribute::Name.is_substring_match());
        assert!(!Attribute::Country.is_substring_match());
    }

    #[test]
    fn test_sort_direction_is_case_insensitive() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!(" Desc ".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("ASC; DROP TABLE company".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_filter_insert_replaces_in_place() {
        let mut filter: FilterSpec = [("name", "Acme"), ("city", "Utrecht")]
            .into_iter()
            .collect();
        filter.insert("name", "Connell");

        let fields: Vec<_> = filter.iter().collect();
        assert_eq!(fields, vec![("name", "Connell"), ("city", "Utrecht")]);
    }

    #[test]
    fn test_filter_remove() {
        let mut filter: FilterSpec = [("country", "NL"), ("name", "Acme")]
            .into_iter()
            .collect();
        assert_eq!(filter.remove("country"), Some("NL".to_string()));
        assert_eq!(filter.remove("country"), None);
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get("name"), Some("Acme"));
    }
}
