//! Query building for list and read requests.
//!
//! - [`Filter`]: `field<op>value` conditions joined with `;`
//! - [`OrderBy`]: `field,asc|desc` clauses joined with `;`
//! - [`QueryBuilder`]: combines both with `expand`, `limit`, `offset` and `search`
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::query::{Filter, OrderBy, QueryBuilder};
//!
//! let query = QueryBuilder::new()
//!     .filter(Filter::new().eq("archived", false))
//!     .order_by(OrderBy::new().desc("updated"))
//!     .limit(10);
//!
//! assert_eq!(
//!     query.to_query_string(),
//!     "filter=archived%3Dfalse&order=updated%2Cdesc&limit=10"
//! );
//! ```

mod builder;
mod filter;
mod order;

pub use builder::{QueryBuilder, MAX_EXPANDED_LIMIT, MAX_LIMIT};
pub use filter::{Filter, FilterCondition, FilterOperator, FilterValue, FILTER_DATETIME_FORMAT};
pub use order::{OrderBy, SortDirection};
