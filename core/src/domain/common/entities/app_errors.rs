use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid sort direction '{direction}' for column '{column}'")]
    InvalidSortDirection { column: String, direction: String },

    #[error("No company table for country '{0}'")]
    UnknownCountry(String),

    #[error("No country tables found")]
    EmptyTableSet,

    #[error("Data store error: {0}")]
    DataStore(String),
}
