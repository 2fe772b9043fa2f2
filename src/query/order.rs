//! Sort clauses for list requests.

use std::fmt;

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns `asc` or `desc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of sort clauses, rendered as `field,dir;field,dir`.
///
/// # Example
///
/// ```rust
/// use moysklad_api::query::OrderBy;
///
/// let order = OrderBy::new().asc("name").desc("updated");
/// assert_eq!(order.to_string(), "name,asc;updated,desc");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderBy {
    clauses: Vec<(String, SortDirection)>,
}

impl OrderBy {
    /// Creates an empty ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause.
    #[must_use]
    pub fn add(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.clauses.push((field.into(), direction));
        self
    }

    /// Adds an ascending clause.
    #[must_use]
    pub fn asc(self, field: impl Into<String>) -> Self {
        self.add(field, SortDirection::Asc)
    }

    /// Adds a descending clause.
    #[must_use]
    pub fn desc(self, field: impl Into<String>) -> Self {
        self.add(field, SortDirection::Desc)
    }

    /// Appends every clause of `other`.
    pub fn extend(&mut self, other: Self) {
        self.clauses.extend(other.clauses);
    }

    /// Returns `true` if no clause was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns `[("order", "...")]`, or nothing when empty.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        if self.is_empty() {
            return Vec::new();
        }
        vec![("order".to_string(), self.to_string())]
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, direction)) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{field},{direction}")?;
        }
        Ok(())
    }
}
