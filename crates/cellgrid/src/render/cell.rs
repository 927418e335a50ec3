//! Per-variant cell rendering.
//!
//! | variant     | output                         | style                      |
//! |-------------|--------------------------------|----------------------------|
//! | `text`      | value, null as empty           | none (inherits the row's)  |
//! | `tag`       | label                          | `tag.<variant>`            |
//! | `trend`     | `↑ 12` / `↓ 12`                | `trend.up` / `trend.down`  |
//! | `change`    | `▲ 3`, `▼ 3`, or `-` for zero   | `change.increase` / `change.decrease` / `change.neutral` |
//! | `indicator` | `● High`, `● None`             | `indicator.<category>` on the dot |
//! | `custom`    | whatever the render fn returns | its own                    |

use crate::cell::{CellValue, Trend};
use crate::rendered::Rendered;
use crate::types::Align;

pub const TREND_UP: &str = "↑";
pub const TREND_DOWN: &str = "↓";
pub const CHANGE_UP: &str = "▲";
pub const CHANGE_DOWN: &str = "▼";
pub const CHANGE_NONE: &str = "-";
pub const INDICATOR_DOT: &str = "●";
pub const INDICATOR_NONE: &str = "None";

/// A rendered cell and the alignment it should be laid out with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellOutput {
    pub content: Rendered,
    pub align: Align,
}

/// Renders one cell. The cell's own alignment wins over `column_align`.
pub fn render_cell(cell: &CellValue, column_align: Option<Align>) -> CellOutput {
    let align = cell.align().or(column_align).unwrap_or_default();
    let content = match cell {
        CellValue::Text { value, .. } => Rendered::from(value.to_string()),
        CellValue::Tag { value, variant, .. } => {
            Rendered::styled(value.as_str(), variant.style_name())
        }
        CellValue::Trend { value, trend, .. } => {
            let (glyph, style) = match trend {
                Trend::Up => (TREND_UP, "trend.up"),
                Trend::Down => (TREND_DOWN, "trend.down"),
            };
            Rendered::styled(format!("{glyph} {value}"), style)
        }
        CellValue::Change { value, .. } => match value.signum() {
            1 => Rendered::styled(format!("{CHANGE_UP} {}", value.abs()), "change.increase"),
            -1 => Rendered::styled(format!("{CHANGE_DOWN} {}", value.abs()), "change.decrease"),
            _ => Rendered::styled(CHANGE_NONE, "change.neutral"),
        },
        CellValue::Indicator { value, .. } => render_indicator(value.as_deref()),
        CellValue::Custom { value, render, .. } => render(value),
    };
    CellOutput { content, align }
}

/// Known indicator categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorCategory {
    High,
    Medium,
    Low,
    Active,
    Inactive,
}

impl IndicatorCategory {
    /// Case-insensitive lookup; unknown names give `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(IndicatorCategory::High),
            "medium" => Some(IndicatorCategory::Medium),
            "low" => Some(IndicatorCategory::Low),
            "active" => Some(IndicatorCategory::Active),
            "inactive" => Some(IndicatorCategory::Inactive),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IndicatorCategory::High => "High",
            IndicatorCategory::Medium => "Medium",
            IndicatorCategory::Low => "Low",
            IndicatorCategory::Active => "Active",
            IndicatorCategory::Inactive => "Inactive",
        }
    }

    pub fn style_name(self) -> &'static str {
        match self {
            IndicatorCategory::High => "indicator.high",
            IndicatorCategory::Medium => "indicator.medium",
            IndicatorCategory::Low => "indicator.low",
            IndicatorCategory::Active => "indicator.active",
            IndicatorCategory::Inactive => "indicator.inactive",
        }
    }
}

fn render_indicator(value: Option<&str>) -> Rendered {
    let (style, label) = match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => ("indicator.none", INDICATOR_NONE.to_string()),
        Some(raw) => match IndicatorCategory::parse(raw) {
            Some(category) => (category.style_name(), category.label().to_string()),
            None => ("indicator.none", raw.to_string()),
        },
    };
    Rendered::styled(INDICATOR_DOT, style).plain(format!(" {label}"))
}
