//! Runtime value types for field comparison.
//!
//! The [`Value`] enum is what the comparator sees of a field: a string, a
//! number, a timestamp, a boolean, or nothing at all.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// Runtime value for comparison, borrowed from the source row where possible.
///
/// # Example
///
/// ```
/// use cellgrid_order::{Value, Number};
///
/// struct Member {
///     name: String,
///     score: Option<u32>,
/// }
///
/// fn accessor<'a>(member: &'a Member, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::from(member.name.as_str()),
///         "score" => member.score.map(Value::from).unwrap_or(Value::None),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value.
    String(Cow<'a, str>),
    /// Numeric value.
    Number(Number),
    /// Timestamp value (milliseconds since Unix epoch).
    Timestamp(Timestamp),
    /// Boolean value.
    Bool(bool),
    /// Field not present or null.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if the value counts as absent for ordering.
    ///
    /// `None` and NaN are both absent: neither has a position among
    /// defined values, so both sort last.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::None => true,
            Value::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Timestamp` value.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Value::Timestamp(_))
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the timestamp value, if present.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string form used when values of different kinds meet.
    ///
    /// `None` stringifies to the empty string.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_ref()),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Timestamp(t) => Cow::Owned(t.to_string()),
            Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Value::None => Cow::Borrowed(""),
        }
    }

    /// Converts into a value that owns its string data.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Number(n) => Value::Number(n),
            Value::Timestamp(t) => Value::Timestamp(t),
            Value::Bool(b) => Value::Bool(b),
            Value::None => Value::None,
        }
    }

    /// Coarse kind of a present value; `None` for absent values.
    pub(crate) fn kind(&self) -> Option<Kind> {
        if self.is_absent() {
            return None;
        }
        match self {
            Value::String(_) => Some(Kind::String),
            Value::Number(_) => Some(Kind::Number),
            Value::Timestamp(_) => Some(Kind::Timestamp),
            Value::Bool(_) => Some(Kind::Bool),
            Value::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    String,
    Number,
    Timestamp,
    Bool,
}

impl Kind {
    /// Position of the kind when a column mixes kinds.
    pub(crate) fn rank(self) -> u8 {
        match self {
            Kind::Number => 0,
            Kind::Timestamp => 1,
            Kind::Bool => 2,
            Kind::String => 3,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'static> {
    fn from(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }
}

impl From<bool> for Value<'static> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Timestamp> for Value<'static> {
    fn from(t: Timestamp) -> Self {
        Value::Timestamp(t)
    }
}

impl From<Number> for Value<'static> {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

/// Numeric value supporting all common numeric types.
///
/// Integers keep their exact value; comparisons between signed, unsigned
/// and floating point numbers are exact rather than going through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Returns `true` for a floating point NaN.
    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(n) if n.is_nan())
    }

    /// Returns the sign of the number: -1, 0 or 1. NaN reports 0.
    pub fn signum(self) -> i8 {
        match self {
            Number::I64(n) => n.signum() as i8,
            Number::U64(0) => 0,
            Number::U64(_) => 1,
            Number::F64(n) if n > 0.0 => 1,
            Number::F64(n) if n < 0.0 => -1,
            Number::F64(_) => 0,
        }
    }

    /// Absolute value. `i64::MIN` becomes its `u64` magnitude.
    pub fn abs(self) -> Number {
        match self {
            Number::I64(n) => Number::U64(n.unsigned_abs()),
            Number::U64(n) => Number::U64(n),
            Number::F64(n) => Number::F64(n.abs()),
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` only when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            (Number::I64(a), Number::U64(b)) => Some((a as i128).cmp(&(b as i128))),
            (Number::U64(a), Number::I64(b)) => Some((a as i128).cmp(&(b as i128))),
            (Number::I64(a), Number::F64(b)) => cmp_int_float(a as i128, b),
            (Number::U64(a), Number::F64(b)) => cmp_int_float(a as i128, b),
            (Number::F64(_), _) => other.compare(self).map(Ordering::reverse),
        }
    }
}

fn cmp_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // Saturating cast keeps infinities on the correct side of every integer.
    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal if float.is_finite() => 0.0f64.partial_cmp(&(float - whole)),
        other => Some(other),
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident, $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$source> for Value<'static> {
                fn from(n: $source) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(I64, i64: i8, i16, i32, i64, isize);
number_from!(U64, u64: u8, u16, u32, u64, usize);
number_from!(F64, f64: f32, f64);

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// ```
/// use cellgrid_order::Timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Timestamp::from(Utc.with_ymd_and_hms(2024, 1, 29, 0, 0, 0).unwrap());
/// assert_eq!(ts.to_string(), "2024-01-29T00:00:00.000Z");
/// assert!(Timestamp(1000) < Timestamp(2000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the timestamp as seconds since Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0.div_euclid(1000)
    }

    /// Converts to a UTC date-time, if the instant is representable.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Timestamp(dt.timestamp_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_checks() {
        assert!(Value::from("test").is_string());
        assert!(Value::from(42i64).is_number());
        assert!(Value::Timestamp(Timestamp(0)).is_timestamp());
        assert!(Value::Bool(true).is_bool());
        assert!(Value::None.is_none());
    }

    #[test]
    fn nan_is_absent() {
        assert!(Value::from(f64::NAN).is_absent());
        assert!(Value::None.is_absent());
        assert!(!Value::from(0.0f64).is_absent());
        assert!(!Value::from("").is_absent());
    }

    #[test]
    fn value_extractors() {
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::from(42i64).as_number(), Some(Number::I64(42)));
        assert_eq!(
            Value::Timestamp(Timestamp(1000)).as_timestamp(),
            Some(Timestamp(1000))
        );
        assert_eq!(Value::Bool(true).as_bool(), Some(true));

        assert_eq!(Value::from("test").as_number(), None);
        assert_eq!(Value::from(1i64).as_str(), None);
    }

    #[test]
    fn value_to_text() {
        assert_eq!(Value::from(10i64).to_text(), "10");
        assert_eq!(Value::from(2.5f64).to_text(), "2.5");
        assert_eq!(Value::from(5.0f64).to_text(), "5");
        assert_eq!(Value::Bool(false).to_text(), "false");
        assert_eq!(Value::None.to_text(), "");
        assert_eq!(
            Value::Timestamp(Timestamp(0)).to_text(),
            "1970-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn number_comparisons_same_type() {
        assert_eq!(
            Number::I64(5).compare(Number::I64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::U64(10).compare(Number::U64(5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::F64(5.0).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(
            Number::I64(-1).compare(Number::U64(0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::I64(5).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Number::U64(10).compare(Number::F64(5.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::F64(-2.5).compare(Number::I64(-2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::I64(i64::MAX).compare(Number::F64(f64::INFINITY)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::F64(f64::NEG_INFINITY).compare(Number::I64(i64::MIN)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn large_integers_compare_exactly_against_floats() {
        let big = 1i64 << 53;
        assert_eq!(
            Number::I64(big + 1).compare(Number::F64(big as f64)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn number_nan_comparison() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
        assert_eq!(Number::I64(1).compare(Number::F64(f64::NAN)), None);
    }

    #[test]
    fn number_sign_and_abs() {
        assert_eq!(Number::I64(-3).signum(), -1);
        assert_eq!(Number::U64(0).signum(), 0);
        assert_eq!(Number::F64(0.5).signum(), 1);
        assert_eq!(Number::I64(-3).abs(), Number::U64(3));
        assert_eq!(Number::I64(i64::MIN).abs(), Number::U64(1 << 63));
        assert_eq!(Number::F64(-1.5).abs(), Number::F64(1.5));
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Number::from(42i32), Number::I64(42));
        assert_eq!(Number::from(42u32), Number::U64(42));
        assert_eq!(Number::from(42.5f64), Number::F64(42.5));
    }

    #[test]
    fn timestamp_conversions() {
        assert_eq!(Timestamp::from_secs(1).as_millis(), 1000);
        assert_eq!(Timestamp::from_millis(5000).as_secs(), 5);
        assert_eq!(Timestamp::from_millis(-1).as_secs(), -1);
    }

    #[test]
    fn timestamp_from_chrono() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 29, 12, 0, 0).unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(ts.to_datetime(), Some(dt));
    }
}
