//! A page of entities together with the size of the collection it came from.

use crate::error::PaginationError;
use crate::headers::PaginationHeaders;
use crate::page::{Page, ZeroHandling};

/// An ordered page of entities plus pagination metadata.
///
/// `count` is the size of the whole logical collection and may exceed the
/// number of entities held. `limit` and `offset` are carried as supplied and
/// are not checked against `count`.
///
/// The list owns its entities; [`EntityList::into_entities`] hands them back.
///
/// # Examples
///
/// ```
/// use pagination::{EntityList, Page};
///
/// let list = EntityList::paged(vec![1, 2, 3], Page::new().with_count(25).with_limit(10).with_offset(5));
/// assert_eq!(list.entities(), &[1, 2, 3]);
/// assert_eq!(list.count(), 25);
/// assert_eq!(list.limit(), Some(10));
/// assert_eq!(list.offset(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityList<E> {
    entities: Vec<E>,
    count: usize,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl<E> EntityList<E> {
    /// An empty list with a count of zero and no limit or offset.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entities: Vec::new(),
            count: 0,
            limit: None,
            offset: None,
        }
    }

    /// A list covering the whole collection: `count` is the number of
    /// entities.
    #[must_use]
    pub fn of(entities: Vec<E>) -> Self {
        Self::paged(entities, Page::new())
    }

    /// A list with explicit pagination metadata.
    ///
    /// A missing count defaults to the number of entities.
    #[must_use]
    pub fn paged(entities: Vec<E>, page: Page) -> Self {
        Self::paged_with(entities, page, ZeroHandling::default())
    }

    /// Like [`EntityList::paged`], with an explicit policy for zero-valued
    /// metadata.
    #[must_use]
    pub fn paged_with(entities: Vec<E>, page: Page, zero_handling: ZeroHandling) -> Self {
        let normalised = page.normalised(zero_handling);
        let length = entities.len();
        Self {
            entities,
            count: normalised.count().unwrap_or(length),
            limit: normalised.limit(),
            offset: normalised.offset(),
        }
    }

    /// Builds a list from a sequence that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::MissingEntities`] when `entities` is `None`;
    /// use [`EntityList::empty`] for an empty page instead.
    pub fn try_of(entities: Option<Vec<E>>, page: Page) -> Result<Self, PaginationError> {
        entities
            .map(|present| Self::paged(present, page))
            .ok_or(PaginationError::MissingEntities)
    }

    /// The entities in this page.
    #[must_use]
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    /// Size of the whole logical collection.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Maximum number of entities returned at once, if known.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Index of the first entity in this page, if known.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Headers an HTTP layer attaches to a response carrying this page.
    #[must_use]
    pub fn headers(&self) -> PaginationHeaders {
        PaginationHeaders::new(self.count, self.limit, self.offset)
    }

    /// Gives the entities back, discarding the metadata.
    #[must_use]
    pub fn into_entities(self) -> Vec<E> {
        self.entities
    }
}

impl<E> Default for EntityList<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> From<Vec<E>> for EntityList<E> {
    fn from(entities: Vec<E>) -> Self {
        Self::of(entities)
    }
}

#[cfg(test)]
mod tests {
    //! Construction defaults and zero-handling behaviour.

    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use rstest::{fixture, rstest};

    use super::*;
    use crate::headers::{X_LIMIT, X_OFFSET, X_TOTAL_COUNT};

    #[fixture]
    fn collection() -> Vec<i32> {
        vec![1, 2, 3, 4, 5, 6]
    }

    #[rstest]
    fn of_counts_entities(collection: Vec<i32>) {
        let list = EntityList::of(collection.clone());
        assert_eq!(list.entities(), collection.as_slice());
        assert_eq!(list.count(), collection.len());
        assert_eq!(list.limit(), None);
        assert_eq!(list.offset(), None);
    }

    #[rstest]
    fn paged_keeps_total_count(collection: Vec<i32>) {
        let list = EntityList::paged(collection.clone(), Page::new().with_count(23));
        assert_eq!(list.entities(), collection.as_slice());
        assert_eq!(list.count(), 23);
        assert_eq!(list.limit(), None);
        assert_eq!(list.offset(), None);
    }

    #[test]
    fn paged_carries_limit_and_offset_verbatim() {
        let page = Page::new().with_count(25).with_limit(10).with_offset(5);
        let list = EntityList::paged(vec![1, 2, 3], page);
        assert_eq!(list.entities(), &[1, 2, 3]);
        assert_eq!((list.count(), list.limit(), list.offset()), (25, Some(10), Some(5)));
    }

    #[test]
    fn metadata_is_not_validated_against_length() {
        let page = Page::new().with_count(2).with_offset(40);
        let list = EntityList::paged(vec!['a', 'b', 'c'], page);
        assert_eq!(list.count(), 2);
        assert_eq!(list.offset(), Some(40));
    }

    #[test]
    fn empty_has_no_entities() {
        let list = EntityList::<String>::empty();
        assert!(list.entities().is_empty());
        assert_eq!(list.count(), 0);
        assert_eq!(list, EntityList::default());
    }

    #[test]
    fn try_of_rejects_missing_entities() {
        let result = EntityList::<i32>::try_of(None, Page::new().with_count(3));
        assert_eq!(result, Err(PaginationError::MissingEntities));
    }

    #[rstest]
    fn try_of_accepts_present_entities(collection: Vec<i32>) {
        let list = EntityList::try_of(Some(collection), Page::new()).expect("entities given");
        assert_eq!(list.count(), 6);
    }

    #[rstest]
    #[case(ZeroHandling::Strict, 0, Some(0), Some(0))]
    #[case(ZeroHandling::Legacy, 3, None, None)]
    fn zero_metadata_follows_policy(
        #[case] zero_handling: ZeroHandling,
        #[case] count: usize,
        #[case] limit: Option<usize>,
        #[case] offset: Option<usize>,
    ) {
        let page = Page::new().with_count(0).with_limit(0).with_offset(0);
        let list = EntityList::paged_with(vec![7, 8, 9], page, zero_handling);
        assert_eq!((list.count(), list.limit(), list.offset()), (count, limit, offset));
    }

    #[test]
    fn headers_reflect_metadata() {
        let page = Page::new().with_count(25).with_limit(10);
        let headers = EntityList::paged(vec![1, 2], page).headers();
        assert_eq!(headers.get(X_TOTAL_COUNT), Some("25"));
        assert_eq!(headers.get(X_LIMIT), Some("10"));
        assert_eq!(headers.get(X_OFFSET), None);
    }

    #[rstest]
    fn into_entities_returns_sequence(collection: Vec<i32>) {
        let list = EntityList::from(collection.clone());
        assert_eq!(list.into_entities(), collection);
    }
}
