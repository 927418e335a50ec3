//! YAML stylesheet parsing.
//!
//! Each top-level key names a style. Its value is one of:
//!
//! - a mapping of attributes: `{ fg: cyan, bg: "#202020", bold: true }`
//! - a shorthand string of attributes and at most one color: `"yellow italic"`
//! - a single word naming another style, which makes it an alias: `muted`

use std::collections::HashMap;

use console::Style;
use serde_yaml::{Mapping, Value};

use super::color::ColorDef;
use super::theme::StyleValue;
use crate::error::GridError;

const ATTRIBUTES: [&str; 8] = [
    "bold",
    "dim",
    "italic",
    "underline",
    "blink",
    "reverse",
    "hidden",
    "strikethrough",
];

pub(crate) fn parse_stylesheet(yaml: &str) -> Result<HashMap<String, StyleValue>, GridError> {
    let root: Value = serde_yaml::from_str(yaml)?;
    let entries = match root {
        Value::Null => return Ok(HashMap::new()),
        Value::Mapping(entries) => entries,
        _ => {
            return Err(GridError::invalid_style(
                "<root>",
                "stylesheet must be a mapping of style names",
            ))
        }
    };

    let mut styles = HashMap::with_capacity(entries.len());
    for (key, value) in &entries {
        let name = key
            .as_str()
            .ok_or_else(|| GridError::invalid_style(&format!("{:?}", key), "style names must be strings"))?;
        styles.insert(name.to_string(), parse_definition(name, value)?);
    }
    Ok(styles)
}

fn parse_definition(name: &str, value: &Value) -> Result<StyleValue, GridError> {
    match value {
        Value::String(s) if is_likely_alias(s) => Ok(StyleValue::Alias(s.trim().to_string())),
        Value::String(s) => parse_shorthand(name, s).map(StyleValue::Concrete),
        Value::Mapping(map) => parse_mapping(name, map).map(StyleValue::Concrete),
        _ => Err(GridError::invalid_style(
            name,
            "expected a mapping, shorthand string or alias",
        )),
    }
}

/// A single word that is neither a color nor an attribute names another style.
fn is_likely_alias(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() || s.split_whitespace().count() > 1 || s.starts_with('#') {
        return false;
    }
    let lower = s.to_lowercase();
    !ATTRIBUTES.contains(&lower.as_str()) && ColorDef::parse_string(&lower).is_err()
}

fn parse_shorthand(name: &str, s: &str) -> Result<Style, GridError> {
    let mut style = Style::new();
    let mut has_color = false;
    let mut empty = true;

    for part in s.split_whitespace() {
        empty = false;
        let lower = part.to_lowercase();
        if ATTRIBUTES.contains(&lower.as_str()) {
            style = apply_attribute(style, &lower);
            continue;
        }
        if has_color {
            return Err(GridError::invalid_style(
                name,
                format!("multiple colors in shorthand, got '{}'", part),
            ));
        }
        let color = ColorDef::parse_string(part).map_err(|message| GridError::InvalidColor {
            style: name.to_string(),
            value: part.to_string(),
            message,
        })?;
        style = style.fg(color.to_console_color());
        has_color = true;
    }

    if empty {
        return Err(GridError::invalid_style(name, "empty shorthand"));
    }
    Ok(style)
}

fn parse_mapping(name: &str, map: &Mapping) -> Result<Style, GridError> {
    let mut style = Style::new();
    for (key, value) in map {
        let key = key
            .as_str()
            .ok_or_else(|| GridError::invalid_style(name, "attribute names must be strings"))?;
        match key {
            "fg" | "bg" => {
                let color = ColorDef::parse_value(value).map_err(|message| {
                    GridError::InvalidColor {
                        style: name.to_string(),
                        value: yaml_to_string(value),
                        message,
                    }
                })?;
                let color = color.to_console_color();
                style = if key == "fg" {
                    style.fg(color)
                } else {
                    style.bg(color)
                };
            }
            attr if ATTRIBUTES.contains(&attr) => {
                let on = value.as_bool().ok_or_else(|| {
                    GridError::invalid_style(name, format!("'{}' must be a boolean", attr))
                })?;
                if on {
                    style = apply_attribute(style, attr);
                }
            }
            other => {
                return Err(GridError::invalid_style(
                    name,
                    format!("unknown attribute '{}'", other),
                ))
            }
        }
    }
    Ok(style)
}

fn apply_attribute(style: Style, attr: &str) -> Style {
    match attr {
        "bold" => style.bold(),
        "dim" => style.dim(),
        "italic" => style.italic(),
        "underline" => style.underlined(),
        "blink" => style.blink(),
        "reverse" => style.reverse(),
        "hidden" => style.hidden(),
        "strikethrough" => style.strikethrough(),
        _ => style,
    }
}

fn yaml_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
