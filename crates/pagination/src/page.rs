//! Pagination metadata supplied alongside a page of entities.

use tracing::debug;

/// How zero-valued pagination fields are interpreted.
///
/// Older callers passed `0` to mean "not supplied". `Legacy` keeps that
/// reading: a zero count falls back to the page length and a zero limit or
/// offset is dropped. `Strict` stores whatever was supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ZeroHandling {
    /// Only an absent field is treated as unset.
    #[default]
    Strict,
    /// A zero-valued field is treated as unset.
    Legacy,
}

/// Requested total count, page size, and page start.
///
/// # Examples
///
/// ```
/// use pagination::Page;
///
/// let page = Page::new().with_count(25).with_limit(10).with_offset(5);
/// assert_eq!(page.count(), Some(25));
/// assert_eq!(page.limit(), Some(10));
/// assert_eq!(page.offset(), Some(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Page {
    count: Option<usize>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Page {
    /// A page with no metadata.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: None,
            limit: None,
            offset: None,
        }
    }

    /// Set the size of the whole logical collection.
    #[must_use]
    pub const fn with_count(self, count: usize) -> Self {
        Self {
            count: Some(count),
            ..self
        }
    }

    /// Set the maximum number of entities returned at once.
    #[must_use]
    pub const fn with_limit(self, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    /// Set the index of the first entity in the page.
    #[must_use]
    pub const fn with_offset(self, offset: usize) -> Self {
        Self {
            offset: Some(offset),
            ..self
        }
    }

    /// Total count, if supplied.
    #[must_use]
    pub const fn count(&self) -> Option<usize> {
        self.count
    }

    /// Page size, if supplied.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Page start, if supplied.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub(crate) const fn window(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self {
            count: None,
            limit,
            offset,
        }
    }

    pub(crate) fn normalised(self, zero_handling: ZeroHandling) -> Self {
        match zero_handling {
            ZeroHandling::Strict => self,
            ZeroHandling::Legacy => Self {
                count: drop_zero("count", self.count),
                limit: drop_zero("limit", self.limit),
                offset: drop_zero("offset", self.offset),
            },
        }
    }
}

fn drop_zero(field: &'static str, value: Option<usize>) -> Option<usize> {
    match value {
        Some(0) => {
            debug!(field, "legacy zero handling treats 0 as unset");
            None
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn new_page_is_blank() {
        assert_eq!(Page::new(), Page::default());
        assert_eq!(Page::new().count(), None);
    }

    #[test]
    fn strict_handling_keeps_zeroes() {
        let page = Page::new().with_count(0).with_limit(0).with_offset(0);
        assert_eq!(page.normalised(ZeroHandling::Strict), page);
    }

    #[rstest]
    #[case(Page::new().with_count(0), Page::new())]
    #[case(Page::new().with_limit(0).with_offset(3), Page::new().with_offset(3))]
    #[case(Page::new().with_count(9).with_offset(0), Page::new().with_count(9))]
    fn legacy_handling_drops_zeroes(#[case] input: Page, #[case] expected: Page) {
        assert_eq!(input.normalised(ZeroHandling::Legacy), expected);
    }

    #[test]
    fn default_handling_is_strict() {
        assert_eq!(ZeroHandling::default(), ZeroHandling::Strict);
    }
}
