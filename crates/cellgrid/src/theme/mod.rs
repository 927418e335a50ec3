//! Themes: named styles applied to rendered spans.
//!
//! Rendering only attaches style *names* such as `tag.danger` or
//! `row.hover`. A [`Theme`] maps those names to [`console::Style`]s when a
//! table is turned into terminal text. Styles can be built in code or
//! loaded from YAML:
//!
//! ```yaml
//! header:
//!   fg: cyan
//!   bold: true
//! tag.danger: "bright_red bold"   # shorthand
//! row.total: header               # alias
//! ```

mod color;
mod parse;
#[allow(clippy::module_inception)]
mod theme;

pub use color::ColorDef;
pub use theme::{StyleValue, Theme};
