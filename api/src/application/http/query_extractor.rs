use axum::{extract::FromRequestParts, http::request::Parts};

use super::{query_params::QueryParams, server::api_entities::api_error::ApiError};

/// Extractor for `filter[...]` and `sort[...]` query parameters
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     QueryParamsExtractor(query_params): QueryParamsExtractor,
/// ) -> Result<Response, ApiError> {
///     // Use query_params.filter, query_params.sort
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        validate_query_string(query_string).map_err(|e| {
            tracing::warn!("Rejected malformed query string: {}", e);
            ApiError::BadRequest(format!("Malformed query string: {}", e))
        })?;

        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query_string).map_err(|e| {
                tracing::warn!("Rejected malformed query string: {}", e);
                ApiError::BadRequest(format!("Malformed query string: {}", e))
            })?;

        Ok(QueryParamsExtractor(QueryParams::from_query_pairs(&pairs)))
    }
}

/// Rejects broken `%XX` escapes and escapes that do not decode to UTF-8.
///
/// `serde_urlencoded` accepts both silently, keeping the escape verbatim or
/// substituting U+FFFD.
fn validate_query_string(query: &str) -> Result<(), String> {
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let bytes = pair.as_bytes();
        let mut start = 0;
        while let Some(offset) = bytes[start..].iter().position(|b| *b == b'%') {
            let at = start + offset;
            let well_formed = bytes
                .get(at + 1..at + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(format!("invalid percent escape in '{}'", pair));
            }
            start = at + 3;
        }

        urlencoding::decode(pair).map_err(|_| format!("'{}' is not valid UTF-8", pair))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_encoded_query() {
        assert!(validate_query_string("").is_ok());
        assert!(validate_query_string("filter%5Bname%5D=Caf%C3%A9+Noir&sort=-city").is_ok());
        assert!(validate_query_string("filter[city]=%27s-Hertogenbosch&&").is_ok());
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        assert!(validate_query_string("filter[name]=%FF").is_err());
        assert!(validate_query_string("filter[name]=%FF%FE").is_err());
    }

    #[test]
    fn test_rejects_broken_escapes() {
        assert!(validate_query_string("filter[name]=%ZZ").is_err());
        assert!(validate_query_string("filter[name]=abc%4").is_err());
        assert!(validate_query_string("%").is_err());
    }
}
