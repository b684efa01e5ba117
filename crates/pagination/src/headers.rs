//! HTTP header names shared by services, and the pagination headers derived
//! from an [`crate::EntityList`].

/// Name of the service answering the request.
pub const X_SERVICE_NAME: &str = "x-service-name";
/// Version of the service answering the request.
pub const X_SERVICE_VERSION: &str = "x-service-version";
/// Deployment environment of the service.
pub const X_SERVICE_ENV: &str = "x-service-env";
/// Correlation identifier for the request.
pub const X_REQUEST_ID: &str = "x-request-id";
/// Size of the whole logical collection behind a page.
pub const X_TOTAL_COUNT: &str = "x-total-count";
/// Page size used to produce a page.
pub const X_LIMIT: &str = "x-limit";
/// Index of the first entity in a page.
pub const X_OFFSET: &str = "x-offset";
/// Standard content disposition header.
pub const CONTENT_DISPOSITION: &str = "content-disposition";
/// Standard authorization header.
pub const AUTHORIZATION: &str = "authorization";
/// Technology banner header.
pub const X_POWERED_BY: &str = "x-powered-by";

/// Ordered `(name, value)` pairs describing a page.
///
/// The total count is always present; limit and offset only when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationHeaders {
    pairs: Vec<(&'static str, String)>,
}

impl PaginationHeaders {
    pub(crate) fn new(count: usize, limit: Option<usize>, offset: Option<usize>) -> Self {
        let mut pairs = vec![(X_TOTAL_COUNT, count.to_string())];
        if let Some(value) = limit {
            pairs.push((X_LIMIT, value.to_string()));
        }
        if let Some(value) = offset {
            pairs.push((X_OFFSET, value.to_string()));
        }
        Self { pairs }
    }

    /// Value of the header called `name`, if emitted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over the header pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Number of emitted headers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false`; the total count is always emitted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
