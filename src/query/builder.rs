//! Fluent query builder combining filter, order, pagination, expansion and search.

use crate::query::{Filter, FilterValue, OrderBy};

/// Largest page the API returns for a list request.
pub const MAX_LIMIT: u32 = 1000;

/// Largest page when `expand` is used; the API caps expanded lists at 100 rows.
pub const MAX_EXPANDED_LIMIT: u32 = 100;

/// Query parameters for list and read requests.
///
/// # Example
///
/// ```rust
/// use moysklad_api::query::{Filter, OrderBy, QueryBuilder};
///
/// let query = QueryBuilder::new()
///     .filter(Filter::new().eq("archived", false).like("name", "chair"))
///     .order_by(OrderBy::new().asc("name"))
///     .expand(["productFolder", "uom"])
///     .limit(50)
///     .offset(100);
///
/// assert_eq!(
///     query.to_params(),
///     vec![
///         ("filter".to_string(), "archived=false;name~chair".to_string()),
///         ("order".to_string(), "name,asc".to_string()),
///         ("expand".to_string(), "productFolder,uom".to_string()),
///         ("limit".to_string(), "50".to_string()),
///         ("offset".to_string(), "100".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryBuilder {
    filter: Filter,
    order_by: OrderBy,
    expand: Vec<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    search: Option<String>,
    extra: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the conditions of `filter`.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter.extend(filter);
        self
    }

    /// Adds one `field=value` condition.
    #[must_use]
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filter = self.filter.eq(field, value);
        self
    }

    /// Returns the accumulated filter.
    #[must_use]
    pub const fn filters(&self) -> &Filter {
        &self.filter
    }

    /// Returns the accumulated filter for in-place edits.
    pub fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }

    /// Adds the clauses of `order`.
    #[must_use]
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by.extend(order);
        self
    }

    /// Sets the page size, clamped to [`MAX_LIMIT`].
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        if limit > MAX_LIMIT {
            tracing::debug!(limit, max = MAX_LIMIT, "clamping query limit");
        }
        self.limit = Some(limit.min(MAX_LIMIT));
        self
    }

    /// Sets the number of rows to skip.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds fields to expand inline in the response.
    #[must_use]
    pub fn expand<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Sets the full-text search string.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Adds an arbitrary parameter, such as `stockMode` or `groupBy`.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Returns the configured limit.
    #[must_use]
    pub const fn get_limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the configured offset.
    #[must_use]
    pub const fn get_offset(&self) -> Option<u32> {
        self.offset
    }

    /// Returns `true` when no parameter would be emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_params().is_empty()
    }

    /// Renders the query as ordered `(key, value)` pairs.
    ///
    /// Keys appear in the order `filter`, `order`, `expand`, `limit`,
    /// `offset`, `search`, then extra parameters. Unset parts are omitted.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if !self.filter.is_empty() {
            params.extend(self.filter.to_params());
        }
        params.extend(self.order_by.to_params());

        if !self.expand.is_empty() {
            params.push(("expand".to_string(), self.expand.join(",")));
        }

        let limit = if self.expand.is_empty() {
            self.limit
        } else {
            self.limit.map(|l| l.min(MAX_EXPANDED_LIMIT))
        };
        if let Some(limit) = limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search".to_string(), search.clone()));
        }

        params.extend(self.extra.iter().cloned());
        params
    }

    /// Renders the query as a percent-encoded query string without `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_params()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_params() {
        let query = QueryBuilder::new();
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_limit_is_clamped() {
        let query = QueryBuilder::new().limit(5000);
        assert_eq!(query.get_limit(), Some(MAX_LIMIT));
    }

    #[test]
    fn test_expanded_limit_is_capped_at_hundred() {
        let query = QueryBuilder::new().expand(["agent"]).limit(500);
        assert!(query
            .to_params()
            .contains(&("limit".to_string(), "100".to_string())));
    }

    #[test]
    fn test_search_and_extra_params_come_last() {
        let query = QueryBuilder::new()
            .search("red chair")
            .param("stockMode", "positiveOnly");
        assert_eq!(
            query.to_params(),
            vec![
                ("search".to_string(), "red chair".to_string()),
                ("stockMode".to_string(), "positiveOnly".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_calls_accumulate() {
        let mut query = QueryBuilder::new()
            .filter(Filter::new().eq("archived", false))
            .filter_eq("agent.id", "abc");
        query.filter_mut().push("name", crate::query::FilterOperator::Like, "x");

        assert_eq!(
            query.filters().to_string(),
            "archived=false;agent.id=abc;name~x"
        );
    }

    #[test]
    fn test_query_string_is_percent_encoded() {
        let query = QueryBuilder::new()
            .filter(Filter::new().eq("name", "a b"))
            .limit(10);
        assert_eq!(query.to_query_string(), "filter=name%3Da%20b&limit=10");
    }
}
