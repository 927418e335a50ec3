//! Color values in theme stylesheets.
//!
//! - Named colors: `red`, `green`, `blue`, ... (the 8 ANSI colors, plus
//!   `gray`/`grey`)
//! - Bright variants: `bright_red`, `bright_green`, ...
//! - 256-color palette: `0` through `255`
//! - RGB hex: `"#ff6b35"` or `"#fff"`
//!
//! ```rust
//! use cellgrid::ColorDef;
//!
//! let hex = ColorDef::parse_string("#ff6b35").unwrap();
//! assert_eq!(hex, ColorDef::Rgb(255, 107, 53));
//! let palette = ColorDef::parse_value(&serde_yaml::Value::Number(208.into())).unwrap();
//! assert_eq!(palette, ColorDef::Color256(208));
//! ```

use console::Color;

/// A parsed color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    Named(Color),
    Color256(u8),
    /// True color, rendered through the nearest 256-color palette entry.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a color from a YAML string or palette index.
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::String(s) => Self::parse_string(s),
            serde_yaml::Value::Number(n) => {
                let index = n
                    .as_u64()
                    .ok_or_else(|| format!("Invalid color palette index: {}", n))?;
                u8::try_from(index)
                    .map(ColorDef::Color256)
                    .map_err(|_| format!("Color palette index {} out of range (0-255)", index))
            }
            _ => Err(format!("Invalid color value: {:?}", value)),
        }
    }

    /// Parses a named color, bright variant or hex code.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        match s.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex),
            None => Self::parse_named(s),
        }
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        let invalid = || format!("Invalid hex: {}", hex);
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        if !hex.is_ascii() {
            return Err(invalid());
        }
        match hex.len() {
            3 => Ok(ColorDef::Rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(ColorDef::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        let lower = name.to_lowercase();
        if let Some(base) = lower.strip_prefix("bright_") {
            return Self::parse_bright(base);
        }
        let color = match lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" | "gray" | "grey" => Color::White,
            _ => return Err(format!("Unknown color name: {}", name)),
        };
        Ok(ColorDef::Named(color))
    }

    // Bright colors are palette entries 8-15.
    fn parse_bright(base: &str) -> Result<Self, String> {
        let index = match base {
            "black" => 8,
            "red" => 9,
            "green" => 10,
            "yellow" => 11,
            "blue" => 12,
            "magenta" => 13,
            "cyan" => 14,
            "white" => 15,
            _ => return Err(format!("Unknown bright color: bright_{}", base)),
        };
        Ok(ColorDef::Color256(index))
    }

    pub fn to_console_color(&self) -> Color {
        match self {
            ColorDef::Named(c) => *c,
            ColorDef::Color256(n) => Color::Color256(*n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((*r, *g, *b))),
        }
    }
}

/// Maps an RGB triplet to the closest xterm 256-color index.
fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn named_colors() {
        assert_eq!(
            ColorDef::parse_string("red").unwrap(),
            ColorDef::Named(Color::Red)
        );
        assert_eq!(
            ColorDef::parse_string("Cyan").unwrap(),
            ColorDef::Named(Color::Cyan)
        );
        assert_eq!(
            ColorDef::parse_string("grey").unwrap(),
            ColorDef::Named(Color::White)
        );
        assert!(ColorDef::parse_string("purple").is_err());
    }

    #[test]
    fn bright_colors() {
        assert_eq!(
            ColorDef::parse_string("bright_red").unwrap(),
            ColorDef::Color256(9)
        );
        assert_eq!(
            ColorDef::parse_string("bright_white").unwrap(),
            ColorDef::Color256(15)
        );
        assert!(ColorDef::parse_string("bright_purple").is_err());
    }

    #[test]
    fn hex_colors() {
        assert_eq!(
            ColorDef::parse_string("#FF6B35").unwrap(),
            ColorDef::Rgb(255, 107, 53)
        );
        assert_eq!(
            ColorDef::parse_string("#f80").unwrap(),
            ColorDef::Rgb(255, 136, 0)
        );
        assert!(ColorDef::parse_string("#ff00").is_err());
        assert!(ColorDef::parse_string("#gggggg").is_err());
        assert!(ColorDef::parse_string("#ééé").is_err());
    }

    #[test]
    fn palette_index() {
        assert_eq!(
            ColorDef::parse_value(&Value::Number(208.into())).unwrap(),
            ColorDef::Color256(208)
        );
        assert!(ColorDef::parse_value(&Value::Number(256.into())).is_err());
    }

    #[test]
    fn other_yaml_values_are_rejected() {
        let seq = Value::Sequence(vec![Value::Number(255.into())]);
        assert!(ColorDef::parse_value(&seq).is_err());
        assert!(ColorDef::parse_value(&Value::Bool(true)).is_err());
    }

    #[test]
    fn console_conversion() {
        assert_eq!(
            ColorDef::Named(Color::Red).to_console_color(),
            Color::Red
        );
        assert_eq!(ColorDef::Rgb(0, 0, 0).to_console_color(), Color::Color256(16));
        assert_eq!(
            ColorDef::Rgb(255, 0, 0).to_console_color(),
            Color::Color256(196)
        );
    }
}
