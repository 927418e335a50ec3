//! Presentational configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::types::BorderStyle;

/// Heights, messages, styles and borders of a table.
///
/// Every field has a default, so a YAML file only lists what it changes:
///
/// ```rust
/// use cellgrid::{BorderStyle, TableLayout};
///
/// let layout = TableLayout::from_yaml("
/// border: rounded
/// row_height: 2
/// empty_message: Nothing to show
/// ").unwrap();
/// assert_eq!(layout.border, BorderStyle::Rounded);
/// assert_eq!(layout.header_height, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableLayout {
    /// Total width to fill. `None` sizes columns to their content.
    pub width: Option<usize>,
    pub header_height: usize,
    pub row_height: usize,
    pub total_row_height: usize,
    pub empty_message: String,
    pub empty_height: usize,
    /// Style of header text.
    pub header_style: String,
    /// Style of body text not styled by its cell or row.
    pub body_style: Option<String>,
    pub border: BorderStyle,
    /// Spaces between columns when there is no border.
    pub column_gap: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        TableLayout {
            width: None,
            header_height: 1,
            row_height: 1,
            total_row_height: 1,
            empty_message: "No data".to_string(),
            empty_height: 3,
            header_style: "header".to_string(),
            body_style: None,
            border: BorderStyle::None,
            column_gap: 2,
        }
    }
}

impl TableLayout {
    pub fn from_yaml(yaml: &str) -> Result<Self, GridError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading table layout from {}", path.display());
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(TableLayout::from_yaml("{}").unwrap(), TableLayout::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = TableLayout::from_yaml("row_hieght: 2").unwrap_err();
        assert!(matches!(err, GridError::Yaml(_)));
    }

    #[test]
    fn full_document() {
        let layout = TableLayout::from_yaml(
            r#"
width: 60
header_height: 2
total_row_height: 2
empty_height: 1
header_style: accent
body_style: muted
border: ascii
column_gap: 3
"#,
        )
        .unwrap();
        assert_eq!(layout.width, Some(60));
        assert_eq!(layout.header_height, 2);
        assert_eq!(layout.body_style.as_deref(), Some("muted"));
        assert_eq!(layout.border, BorderStyle::Ascii);
        assert_eq!(layout.column_gap, 3);
        assert_eq!(layout.empty_message, "No data");
    }
}
