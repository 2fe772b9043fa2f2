//! Filter conditions for list requests.
//!
//! Conditions are rendered as `field<op>value` and joined with `;` into the
//! `filter` query parameter: `archived=false;name~chair`.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Timestamp layout the API expects in filters.
pub const FILTER_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Comparison operator of a filter condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `=`
    Eq,
    /// `!=`
    Neq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `~` (substring match)
    Like,
    /// `!~` (substring does not match)
    NotLike,
    /// `~=` (prefix match)
    StartsWith,
    /// `=~` (suffix match)
    EndsWith,
}

impl FilterOperator {
    /// Returns the operator as it appears in the query string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Like => "~",
            Self::NotLike => "!~",
            Self::StartsWith => "~=",
            Self::EndsWith => "=~",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value on the right-hand side of a filter condition.
///
/// Booleans render as `true`/`false`, timestamps as `YYYY-MM-DD HH:MM:SS`,
/// lists as comma-separated values.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    /// Text, including ids and hrefs.
    Text(String),
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Timestamp without zone.
    DateTime(NaiveDateTime),
    /// Several values, joined with `,`.
    List(Vec<FilterValue>),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::DateTime(dt) => write!(f, "{}", dt.format(FILTER_DATETIME_FORMAT)),
            Self::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<NaiveDateTime> for FilterValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        Self::DateTime(value.and_hms_opt(0, 0, 0).unwrap_or_default())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FilterValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.naive_local())
    }
}

impl<T: Into<Self>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// One `field<op>value` condition.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterCondition {
    /// Field name, possibly a nested path such as `agent.id`.
    pub field: String,
    /// Comparison operator.
    pub operator: FilterOperator,
    /// Right-hand side.
    pub value: FilterValue,
}

impl fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.operator, self.value)
    }
}

/// Ordered list of filter conditions.
///
/// # Example
///
/// ```rust
/// use moysklad_api::query::Filter;
///
/// let filter = Filter::new()
///     .eq("archived", false)
///     .like("name", "chair")
///     .gte("salePrices.value", 1000);
///
/// assert_eq!(filter.to_string(), "archived=false;name~chair;salePrices.value>=1000");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<FilterCondition>,
}

impl Filter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a condition with an explicit operator.
    #[must_use]
    pub fn add(
        mut self,
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        self.push(field, operator, value);
        self
    }

    /// Adds a condition in place.
    pub fn push(
        &mut self,
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) {
        self.conditions.push(FilterCondition {
            field: field.into(),
            operator,
            value: value.into(),
        });
    }

    /// `field=value`
    #[must_use]
    pub fn eq(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::Eq, value)
    }

    /// `field!=value`
    #[must_use]
    pub fn neq(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::Neq, value)
    }

    /// `field>value`
    #[must_use]
    pub fn gt(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::Gt, value)
    }

    /// `field<value`
    #[must_use]
    pub fn lt(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::Lt, value)
    }

    /// `field>=value`
    #[must_use]
    pub fn gte(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::Gte, value)
    }

    /// `field<=value`
    #[must_use]
    pub fn lte(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::Lte, value)
    }

    /// `field~value`
    #[must_use]
    pub fn like(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::Like, value)
    }

    /// `field!~value`
    #[must_use]
    pub fn not_like(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::NotLike, value)
    }

    /// `field~=value`
    #[must_use]
    pub fn starts_with(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::StartsWith, value)
    }

    /// `field=~value`
    #[must_use]
    pub fn ends_with(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.add(field, FilterOperator::EndsWith, value)
    }

    /// Appends every condition of `other`.
    pub fn extend(&mut self, other: Self) {
        self.conditions.extend(other.conditions);
    }

    /// Returns the conditions in insertion order.
    #[must_use]
    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    /// Returns `true` if no condition was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Returns `[("filter", "...")]`; the value is empty for an empty filter.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        vec![("filter".to_string(), self.to_string())]
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_every_operator_renders() {
        let filter = Filter::new()
            .eq("a", 1)
            .neq("b", 2)
            .gt("c", 3)
            .lt("d", 4)
            .gte("e", 5)
            .lte("f", 6)
            .like("g", "x")
            .not_like("h", "y")
            .starts_with("i", "pre")
            .ends_with("j", "suf");

        assert_eq!(
            filter.to_string(),
            "a=1;b!=2;c>3;d<4;e>=5;f<=6;g~x;h!~y;i~=pre;j=~suf"
        );
    }

    #[test]
    fn test_bool_is_lowercase() {
        let filter = Filter::new().eq("archived", true).eq("shared", false);
        assert_eq!(filter.to_string(), "archived=true;shared=false");
    }

    #[test]
    fn test_datetime_uses_api_layout() {
        let moment = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let filter = Filter::new().gte("updated", moment);
        assert_eq!(filter.to_string(), "updated>=2024-03-15 09:05:00");
    }

    #[test]
    fn test_list_is_comma_joined() {
        let filter = Filter::new().eq("code", vec!["A1", "B2", "C3"]);
        assert_eq!(filter.to_string(), "code=A1,B2,C3");
    }

    #[test]
    fn test_empty_filter_still_yields_param() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert_eq!(
            filter.to_params(),
            vec![("filter".to_string(), String::new())]
        );
    }

    #[test]
    fn test_push_and_extend() {
        let mut filter = Filter::new();
        filter.push("name", FilterOperator::Like, "chair");
        filter.extend(Filter::new().eq("archived", false));
        assert_eq!(filter.conditions().len(), 2);
        assert_eq!(filter.to_string(), "name~chair;archived=false");
    }
}
