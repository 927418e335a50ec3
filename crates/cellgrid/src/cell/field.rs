//! Raw field values and their promotion into cells.

use cellgrid_order::{Number, Timestamp, Value};
use chrono::{DateTime, TimeZone};

use super::value::{number_serde, CellValue, TextValue};

/// A raw scalar read from a record.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Timestamp(Timestamp),
    /// Structured JSON that is neither a scalar nor a tagged cell.
    Other(serde_json::Value),
}

impl Scalar {
    /// Promotes the scalar into a text value. Timestamps and structured
    /// values are stringified.
    pub fn into_text(self) -> TextValue {
        match self {
            Scalar::Null => TextValue::Null,
            Scalar::Bool(b) => TextValue::Bool(b),
            Scalar::Number(n) => TextValue::Number(n),
            Scalar::String(s) => TextValue::String(s),
            Scalar::Timestamp(ts) => TextValue::String(ts.to_string()),
            Scalar::Other(json) => match json {
                serde_json::Value::Null => TextValue::Null,
                serde_json::Value::Bool(b) => TextValue::Bool(b),
                serde_json::Value::Number(n) => TextValue::Number(number_serde::from_json(&n)),
                serde_json::Value::String(s) => TextValue::String(s),
                structured => TextValue::String(structured.to_string()),
            },
        }
    }
}

/// One field of a record: a raw scalar or a pre-built cell.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Raw(Scalar),
    Cell(CellValue),
}

impl FieldValue {
    pub const NULL: FieldValue = FieldValue::Raw(Scalar::Null);

    /// Reads a JSON value as a field.
    ///
    /// Objects carrying a `type` key are decoded as cells. Anything that
    /// fails to decode stays raw and is stringified at render time.
    ///
    /// ```rust
    /// use cellgrid::{CellValue, FieldValue, Scalar};
    /// use serde_json::json;
    ///
    /// assert_eq!(
    ///     FieldValue::from_json(json!({"type": "change", "value": -3})),
    ///     FieldValue::Cell(CellValue::change(-3)),
    /// );
    /// assert_eq!(FieldValue::from_json(json!("Acme")), FieldValue::from("Acme"));
    /// assert!(matches!(
    ///     FieldValue::from_json(json!({"type": "sparkline"})),
    ///     FieldValue::Raw(Scalar::Other(_)),
    /// ));
    /// ```
    pub fn from_json(value: serde_json::Value) -> FieldValue {
        match value {
            serde_json::Value::Null => FieldValue::NULL,
            serde_json::Value::Bool(b) => Scalar::Bool(b).into(),
            serde_json::Value::Number(n) => Scalar::Number(number_serde::from_json(&n)).into(),
            serde_json::Value::String(s) => Scalar::String(s).into(),
            serde_json::Value::Object(map) if map.contains_key("type") => {
                let object = serde_json::Value::Object(map);
                match serde_json::from_value::<CellValue>(object.clone()) {
                    Ok(cell) => FieldValue::Cell(cell),
                    Err(e) => {
                        log::trace!("object is not a cell value, stringifying: {}", e);
                        Scalar::Other(object).into()
                    }
                }
            }
            other => Scalar::Other(other).into(),
        }
    }

    /// Promotes this field into a cell. See [`normalize`].
    pub fn normalize(self) -> CellValue {
        normalize(self)
    }

    /// The comparator value this field sorts by.
    ///
    /// Cells sort by their underlying value: text by its scalar, tags and
    /// indicators by their label, trends and changes by their number. Empty
    /// indicators and nulls are absent and sort last.
    pub fn sort_value(&self) -> Value<'_> {
        match self {
            FieldValue::Raw(scalar) => scalar_sort_value(scalar),
            FieldValue::Cell(cell) => match cell {
                CellValue::Text { value, .. } => text_sort_value(value),
                CellValue::Tag { value, .. } => Value::from(value.as_str()),
                CellValue::Trend { value, .. } | CellValue::Change { value, .. } => {
                    Value::from(*value)
                }
                CellValue::Indicator { value, .. } => match value.as_deref() {
                    Some(s) if !s.trim().is_empty() => Value::from(s),
                    _ => Value::None,
                },
                CellValue::Custom { value, .. } => json_sort_value(value),
            },
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Raw(Scalar::Null))
    }
}

/// Promotes a field into a [`CellValue`].
///
/// A cell is returned unchanged. Strings, numbers, booleans and null become
/// text cells holding the same value; timestamps and structured values become
/// text cells holding their string form. Never fails and is idempotent.
///
/// ```rust
/// use cellgrid::{normalize, CellValue, FieldValue};
///
/// assert_eq!(normalize(FieldValue::from(42)), CellValue::text(42));
/// let cell = CellValue::change(-3);
/// assert_eq!(normalize(FieldValue::from(cell.clone())), cell);
/// ```
pub fn normalize(field: FieldValue) -> CellValue {
    match field {
        FieldValue::Cell(cell) => cell,
        FieldValue::Raw(scalar) => CellValue::Text {
            value: scalar.into_text(),
            align: None,
        },
    }
}

fn scalar_sort_value(scalar: &Scalar) -> Value<'_> {
    match scalar {
        Scalar::Null => Value::None,
        Scalar::Bool(b) => Value::Bool(*b),
        Scalar::Number(n) => Value::Number(*n),
        Scalar::String(s) => Value::from(s.as_str()),
        Scalar::Timestamp(ts) => Value::Timestamp(*ts),
        Scalar::Other(json) => json_sort_value(json),
    }
}

fn text_sort_value(text: &TextValue) -> Value<'_> {
    match text {
        TextValue::Null => Value::None,
        TextValue::Bool(b) => Value::Bool(*b),
        TextValue::Number(n) => Value::Number(*n),
        TextValue::String(s) => Value::from(s.as_str()),
    }
}

fn json_sort_value(json: &serde_json::Value) -> Value<'_> {
    match json {
        serde_json::Value::Null => Value::None,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(number_serde::from_json(n)),
        serde_json::Value::String(s) => Value::from(s.as_str()),
        structured => Value::from(structured.to_string()),
    }
}

impl From<Scalar> for FieldValue {
    fn from(scalar: Scalar) -> Self {
        FieldValue::Raw(scalar)
    }
}

impl From<CellValue> for FieldValue {
    fn from(cell: CellValue) -> Self {
        FieldValue::Cell(cell)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::from_json(value)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string()).into()
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Scalar::String(s).into()
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Scalar::Bool(b).into()
    }
}

impl From<Number> for FieldValue {
    fn from(n: Number) -> Self {
        Scalar::Number(n).into()
    }
}

impl From<Timestamp> for FieldValue {
    fn from(ts: Timestamp) -> Self {
        Scalar::Timestamp(ts).into()
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FieldValue {
    fn from(dt: DateTime<Tz>) -> Self {
        Scalar::Timestamp(Timestamp::from(dt)).into()
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::NULL)
    }
}

macro_rules! field_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(n: $t) -> Self {
                    Scalar::Number(n.into()).into()
                }
            }
        )*
    };
}

field_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
