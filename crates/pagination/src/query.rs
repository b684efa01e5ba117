//! Common list-endpoint query parameters.

use std::collections::BTreeMap;

use tracing::warn;
use url::form_urlencoded;

use crate::error::PaginationError;
use crate::page::Page;

/// Query parameters understood by list endpoints.
///
/// Well-known keys are lifted into fields; anything else is kept in
/// [`RequestQueryParams::extra`].
///
/// # Examples
///
/// ```
/// use pagination::RequestQueryParams;
///
/// let params = RequestQueryParams::parse("?order=name&limit=10&offset=20&tag=new")
///     .expect("valid query");
/// assert_eq!(params.order.as_deref(), Some("name"));
/// assert_eq!(params.page().limit(), Some(10));
/// assert_eq!(params.get("tag"), Some("new"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestQueryParams {
    /// Sort expression.
    pub order: Option<String>,
    /// Filter expression.
    pub filter: Option<String>,
    /// Free-text search.
    pub query: Option<String>,
    /// Index of the first requested entity.
    pub offset: Option<usize>,
    /// Maximum number of requested entities.
    pub limit: Option<usize>,
    /// API key supplied as the `apiKey` parameter.
    pub api_key: Option<String>,
    /// Parameters without a dedicated field.
    pub extra: BTreeMap<String, String>,
}

impl RequestQueryParams {
    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored. When a key repeats, the last value wins.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidQueryParameter`] when `offset` or
    /// `limit` is not a non-negative integer.
    pub fn parse(query: &str) -> Result<Self, PaginationError> {
        let encoded = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(encoded.as_bytes()).try_fold(
            Self::default(),
            |mut params, (key, value)| {
                params.assign(&key, value.into_owned())?;
                Ok(params)
            },
        )
    }

    /// Value of a parameter without a dedicated field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.extra.get(name).map(String::as_str)
    }

    /// The requested window as a [`Page`] with no count.
    #[must_use]
    pub const fn page(&self) -> Page {
        Page::window(self.limit, self.offset)
    }

    fn assign(&mut self, key: &str, value: String) -> Result<(), PaginationError> {
        match key {
            "order" => self.order = Some(value),
            "filter" => self.filter = Some(value),
            "query" => self.query = Some(value),
            "apiKey" => self.api_key = Some(value),
            "offset" => self.offset = Some(parse_index("offset", &value)?),
            "limit" => self.limit = Some(parse_index("limit", &value)?),
            other => {
                self.extra.insert(other.to_owned(), value);
            }
        }
        Ok(())
    }
}

fn parse_index(name: &'static str, value: &str) -> Result<usize, PaginationError> {
    value.trim().parse::<usize>().map_err(|err| {
        warn!(field = name, value, error = %err, "rejecting query parameter");
        PaginationError::InvalidQueryParameter {
            name,
            value: value.to_owned(),
        }
    })
}
