//! Ordering types and the total-order comparator.
//!
//! [`compare`] is the single rule book for ordering table values:
//!
//! 1. two absent values are equal;
//! 2. an absent value sorts after any defined value, in both directions;
//! 3. numbers compare numerically;
//! 4. timestamps compare by instant;
//! 5. booleans order `false` before `true`;
//! 6. strings collate with [`collate`];
//! 7. anything else is stringified and collated.
//!
//! Direction only reverses rules 3 to 7.
//!
//! Rule 7 is not transitive over a whole column, so [`sorted_indices`]
//! replaces it with a grouping by kind.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::collate::collate;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing a [`Dir`] from an unknown string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort direction '{0}', expected 'asc' or 'desc'")]
pub struct ParseDirError(pub String);

impl FromStr for Dir {
    type Err = ParseDirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            _ => Err(ParseDirError(s.to_string())),
        }
    }
}

/// A single ordering clause specifying a field and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ascending ordering for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    /// Creates a new descending ordering for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Creates a new ordering with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Compares two values according to this ordering.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        compare(a, b, self.dir)
    }
}

/// Compares two values in ascending order.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    compare(a, b, Dir::Asc)
}

/// Compares two values in the given direction.
///
/// Absent values (`None`, NaN) sort last whatever the direction.
///
/// ```
/// use std::cmp::Ordering;
/// use cellgrid_order::{compare, Dir, Value};
///
/// let five = Value::from(5i64);
/// assert_eq!(compare(&Value::None, &five, Dir::Asc), Ordering::Greater);
/// assert_eq!(compare(&Value::None, &five, Dir::Desc), Ordering::Greater);
/// assert_eq!(compare(&Value::from(10i64), &five, Dir::Desc), Ordering::Less);
/// ```
pub fn compare(a: &Value<'_>, b: &Value<'_>, dir: Dir) -> Ordering {
    match (a.is_absent(), b.is_absent()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => dir.apply(compare_present(a, b)),
    }
}

fn compare_present(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.compare(*y).unwrap_or(Ordering::Equal),
        (Value::Timestamp(x), Value::Timestamp(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => collate(x, y),
        _ => collate(&a.to_text(), &b.to_text()),
    }
}

/// Compares two items using a list of ordering clauses.
///
/// Uses the first clause as the primary sort key, the second to break ties,
/// and so on. If all clauses compare equal, returns `Equal`.
pub fn compare_by_orderings<T, F>(a: &T, b: &T, orderings: &[OrderBy], accessor: &F) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    for order_by in orderings {
        let val_a = accessor(a, &order_by.field);
        let val_b = accessor(b, &order_by.field);

        let ordering = order_by.compare(&val_a, &val_b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Returns the indices of `items` in sorted order.
///
/// The sort is stable: items that compare equal keep their relative order.
/// Within one kind of value the natural rule applies, so numbers stay
/// numeric even next to a stray string. Across kinds, values are grouped
/// numbers, timestamps, booleans, then strings (reversed for descending),
/// which keeps the order transitive over the whole column.
///
/// ```
/// use cellgrid_order::{sorted_indices, Dir, Value};
///
/// let scores = [Some(10i64), None, Some(5)];
/// let order = sorted_indices(&scores, Dir::Asc, |s| s.map(Value::from).unwrap_or(Value::None));
/// assert_eq!(order, vec![2, 0, 1]);
/// ```
pub fn sorted_indices<T, F>(items: &[T], dir: Dir, accessor: F) -> Vec<usize>
where
    for<'a> F: Fn(&'a T) -> Value<'a>,
{
    let values: Vec<Value<'_>> = items.iter().map(&accessor).collect();

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| compare_in_column(&values[a], &values[b], dir));
    order
}

/// Sorts `items` in place with the same rules as [`sorted_indices`].
pub fn sort_by_value<T, F>(items: &mut Vec<T>, dir: Dir, accessor: F)
where
    for<'a> F: Fn(&'a T) -> Value<'a>,
{
    let order = sorted_indices(items.as_slice(), dir, accessor);
    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(order.into_iter().filter_map(|i| slots[i].take()));
}

fn compare_in_column(a: &Value<'_>, b: &Value<'_>, dir: Dir) -> Ordering {
    match (a.kind(), b.kind()) {
        (Some(x), Some(y)) if x != y => dir.apply(x.rank().cmp(&y.rank())),
        _ => compare(a, b, dir),
    }
}
