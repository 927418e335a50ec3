//! Column definitions.

use cellgrid_order::Dir;

use crate::rendered::Rendered;
use crate::types::{Align, Width};

/// Metadata for one column: which field it reads and how its header looks.
///
/// ```rust
/// use cellgrid::{Align, HeaderConfig, Width};
/// use cellgrid_order::Dir;
///
/// let header = HeaderConfig::new("revenue".to_string(), "Revenue")
///     .sortable()
///     .align(Align::Right)
///     .width(Width::Fixed(12))
///     .default_direction(Dir::Desc)
///     .tooltip("Net of refunds");
/// assert!(header.sortable);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderConfig<K = String> {
    /// Field this column reads. Unique within a header set.
    pub key: K,
    pub label: Rendered,
    pub width: Option<Width>,
    pub align: Option<Align>,
    pub sortable: bool,
    pub tooltip: Option<String>,
    pub icon: Option<Rendered>,
    /// Direction used when sorting by this column starts.
    pub default_direction: Option<Dir>,
}

impl<K> HeaderConfig<K> {
    pub fn new(key: K, label: impl Into<Rendered>) -> Self {
        HeaderConfig {
            key,
            label: label.into(),
            width: None,
            align: None,
            sortable: false,
            tooltip: None,
            icon: None,
            default_direction: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<Rendered>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn default_direction(mut self, dir: Dir) -> Self {
        self.default_direction = Some(dir);
        self
    }
}
