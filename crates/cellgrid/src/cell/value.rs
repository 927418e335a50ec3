//! The cell-value tagged union.

use std::fmt;
use std::sync::Arc;

use cellgrid_order::Number;
use serde::{Deserialize, Serialize};

use crate::rendered::Rendered;
use crate::types::Align;

/// Render callback carried by [`CellValue::Custom`].
pub type RenderFn = Arc<dyn Fn(&serde_json::Value) -> Rendered + Send + Sync>;

/// Display semantics of one cell.
///
/// Data-only variants (de)serialize as JSON objects with a `type`
/// discriminator:
///
/// ```rust
/// use cellgrid::{CellValue, TagVariant};
///
/// let cell: CellValue =
///     serde_json::from_str(r#"{"type": "tag", "value": "Paid", "variant": "success"}"#).unwrap();
/// assert_eq!(cell, CellValue::tag("Paid", TagVariant::Success));
/// ```
///
/// `Custom` carries a callable and is never (de)serialized.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CellValue {
    /// Plain text, number, boolean or empty.
    Text {
        value: TextValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<Align>,
    },
    /// A badge-like label.
    Tag {
        value: String,
        #[serde(default)]
        variant: TagVariant,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<Align>,
    },
    /// A number with an explicit up/down arrow.
    Trend {
        #[serde(with = "number_serde")]
        value: Number,
        trend: Trend,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<Align>,
    },
    /// A signed delta; glyph and style follow the sign.
    Change {
        #[serde(with = "number_serde")]
        value: Number,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<Align>,
    },
    /// A category dot with a label; empty means "None".
    Indicator {
        #[serde(default)]
        value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<Align>,
    },
    /// Caller-rendered content.
    #[serde(skip)]
    Custom {
        value: serde_json::Value,
        render: RenderFn,
        align: Option<Align>,
    },
}

impl CellValue {
    pub fn text(value: impl Into<TextValue>) -> Self {
        CellValue::Text {
            value: value.into(),
            align: None,
        }
    }

    pub fn tag(value: impl Into<String>, variant: TagVariant) -> Self {
        CellValue::Tag {
            value: value.into(),
            variant,
            align: None,
        }
    }

    pub fn trend(value: impl Into<Number>, trend: Trend) -> Self {
        CellValue::Trend {
            value: value.into(),
            trend,
            align: None,
        }
    }

    pub fn change(value: impl Into<Number>) -> Self {
        CellValue::Change {
            value: value.into(),
            align: None,
        }
    }

    pub fn indicator<S: Into<String>>(value: Option<S>) -> Self {
        CellValue::Indicator {
            value: value.map(Into::into),
            align: None,
        }
    }

    /// A cell rendered by `render`, which receives `value` on every render.
    pub fn custom<F>(value: serde_json::Value, render: F) -> Self
    where
        F: Fn(&serde_json::Value) -> Rendered + Send + Sync + 'static,
    {
        CellValue::Custom {
            value,
            render: Arc::new(render),
            align: None,
        }
    }

    /// Sets the cell-level alignment, which overrides the column's.
    pub fn with_align(mut self, new: Align) -> Self {
        match &mut self {
            CellValue::Text { align, .. }
            | CellValue::Tag { align, .. }
            | CellValue::Trend { align, .. }
            | CellValue::Change { align, .. }
            | CellValue::Indicator { align, .. }
            | CellValue::Custom { align, .. } => *align = Some(new),
        }
        self
    }

    pub fn align(&self) -> Option<Align> {
        match self {
            CellValue::Text { align, .. }
            | CellValue::Tag { align, .. }
            | CellValue::Trend { align, .. }
            | CellValue::Change { align, .. }
            | CellValue::Indicator { align, .. }
            | CellValue::Custom { align, .. } => *align,
        }
    }

    /// The `type` discriminator of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Text { .. } => "text",
            CellValue::Tag { .. } => "tag",
            CellValue::Trend { .. } => "trend",
            CellValue::Change { .. } => "change",
            CellValue::Indicator { .. } => "indicator",
            CellValue::Custom { .. } => "custom",
        }
    }
}

impl fmt::Debug for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text { value, align } => f
                .debug_struct("Text")
                .field("value", value)
                .field("align", align)
                .finish(),
            CellValue::Tag {
                value,
                variant,
                align,
            } => f
                .debug_struct("Tag")
                .field("value", value)
                .field("variant", variant)
                .field("align", align)
                .finish(),
            CellValue::Trend {
                value,
                trend,
                align,
            } => f
                .debug_struct("Trend")
                .field("value", value)
                .field("trend", trend)
                .field("align", align)
                .finish(),
            CellValue::Change { value, align } => f
                .debug_struct("Change")
                .field("value", value)
                .field("align", align)
                .finish(),
            CellValue::Indicator { value, align } => f
                .debug_struct("Indicator")
                .field("value", value)
                .field("align", align)
                .finish(),
            CellValue::Custom { value, align, .. } => f
                .debug_struct("Custom")
                .field("value", value)
                .field("render", &"<fn>")
                .field("align", align)
                .finish(),
        }
    }
}

/// Custom cells are equal when they hold the same value and share the same
/// render function.
impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                CellValue::Text { value: a, align: x },
                CellValue::Text { value: b, align: y },
            ) => a == b && x == y,
            (
                CellValue::Tag {
                    value: a,
                    variant: va,
                    align: x,
                },
                CellValue::Tag {
                    value: b,
                    variant: vb,
                    align: y,
                },
            ) => a == b && va == vb && x == y,
            (
                CellValue::Trend {
                    value: a,
                    trend: ta,
                    align: x,
                },
                CellValue::Trend {
                    value: b,
                    trend: tb,
                    align: y,
                },
            ) => a == b && ta == tb && x == y,
            (
                CellValue::Change { value: a, align: x },
                CellValue::Change { value: b, align: y },
            ) => a == b && x == y,
            (
                CellValue::Indicator { value: a, align: x },
                CellValue::Indicator { value: b, align: y },
            ) => a == b && x == y,
            (
                CellValue::Custom {
                    value: a,
                    render: ra,
                    align: x,
                },
                CellValue::Custom {
                    value: b,
                    render: rb,
                    align: y,
                },
            ) => a == b && Arc::ptr_eq(ra, rb) && x == y,
            _ => false,
        }
    }
}

/// The value inside a text cell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum TextValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl fmt::Display for TextValue {
    /// Null displays as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextValue::Null => Ok(()),
            TextValue::Bool(b) => write!(f, "{b}"),
            TextValue::Number(n) => write!(f, "{n}"),
            TextValue::String(s) => f.write_str(s),
        }
    }
}

impl TryFrom<serde_json::Value> for TextValue {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(TextValue::Null),
            serde_json::Value::Bool(b) => Ok(TextValue::Bool(b)),
            serde_json::Value::Number(n) => Ok(TextValue::Number(number_serde::from_json(&n))),
            serde_json::Value::String(s) => Ok(TextValue::String(s)),
            other => Err(format!("text value must be a scalar, got {other}")),
        }
    }
}

impl From<TextValue> for serde_json::Value {
    fn from(value: TextValue) -> Self {
        match value {
            TextValue::Null => serde_json::Value::Null,
            TextValue::Bool(b) => serde_json::Value::Bool(b),
            TextValue::Number(n) => number_serde::to_json(n),
            TextValue::String(s) => serde_json::Value::String(s),
        }
    }
}

impl From<&str> for TextValue {
    fn from(s: &str) -> Self {
        TextValue::String(s.to_string())
    }
}

impl From<String> for TextValue {
    fn from(s: String) -> Self {
        TextValue::String(s)
    }
}

impl From<bool> for TextValue {
    fn from(b: bool) -> Self {
        TextValue::Bool(b)
    }
}

impl From<Number> for TextValue {
    fn from(n: Number) -> Self {
        TextValue::Number(n)
    }
}

macro_rules! text_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TextValue {
                fn from(n: $t) -> Self {
                    TextValue::Number(n.into())
                }
            }
        )*
    };
}

text_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Visual variant of a tag cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl TagVariant {
    /// Theme style name used for this variant.
    pub fn style_name(self) -> &'static str {
        match self {
            TagVariant::Default => "tag.default",
            TagVariant::Primary => "tag.primary",
            TagVariant::Success => "tag.success",
            TagVariant::Warning => "tag.warning",
            TagVariant::Danger => "tag.danger",
            TagVariant::Info => "tag.info",
        }
    }
}

/// Direction of a trend cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// JSON form of [`Number`]: integers stay integers, non-finite floats become `null`.
pub(crate) mod number_serde {
    use cellgrid_order::Number;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn from_json(n: &serde_json::Number) -> Number {
        if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }

    pub fn to_json(n: Number) -> serde_json::Value {
        match n {
            Number::I64(i) => i.into(),
            Number::U64(u) => u.into(),
            Number::F64(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }

    pub fn serialize<S: Serializer>(n: &Number, serializer: S) -> Result<S::Ok, S::Error> {
        to_json(*n).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => Ok(from_json(&n)),
            other => Err(D::Error::custom(format!("expected a number, got {other}"))),
        }
    }
}
