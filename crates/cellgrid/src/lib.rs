//! # cellgrid - Headless Tables for the Terminal
//!
//! `cellgrid` turns rows of loosely typed data into sortable, selectable
//! tables with typed cells and styled terminal output.
//!
//! ## Core Concepts
//!
//! - [`CellValue`]: a typed cell (text, tag, trend, change, indicator or a
//!   custom renderer). Raw field values are promoted with [`normalize`].
//! - [`Record`]: anything a row can be read from. JSON objects and string
//!   maps work out of the box.
//! - [`HeaderConfig`]: one column, with its label, width and sortability.
//! - [`DataTable`]: sort and selection state across renders, either owned
//!   by the table or mirrored from the caller.
//! - [`TableView`]: the result of a render, printable plain or through a
//!   [`Theme`].
//! - [`sort_records`]: reorders data the way the comparator in
//!   [`cellgrid_order`] defines, with absent values always last.
//!
//! ## Quick Start
//!
//! ```rust
//! use cellgrid::{sort_records, CellValue, DataTable, FieldValue, HeaderConfig, TableProps};
//! use cellgrid::{Align, Theme};
//! use std::collections::BTreeMap;
//!
//! fn row(name: &str, delta: i64) -> BTreeMap<String, FieldValue> {
//!     let mut row = BTreeMap::new();
//!     row.insert("name".to_string(), FieldValue::from(name));
//!     row.insert("delta".to_string(), CellValue::change(delta).into());
//!     row
//! }
//!
//! let headers = vec![
//!     HeaderConfig::new("name".to_string(), "Name").sortable(),
//!     HeaderConfig::new("delta".to_string(), "Delta").sortable().align(Align::Right),
//! ];
//! let mut data = vec![row("Acme", -3), row("Globex", 0), row("Initech", 12)];
//!
//! let mut table = DataTable::new();
//! let mut props = TableProps::new(&headers, &data);
//! table.click_header(&mut props, &"delta".to_string());
//! drop(props);
//!
//! sort_records(&mut data, table.sort());
//! let view = table.render(&TableProps::new(&headers, &data));
//!
//! assert_eq!(
//!     view.to_plain(),
//!     "Name     Delta ▴\n\
//!      Acme         ▼ 3\n\
//!      Globex         -\n\
//!      Initech     ▲ 12"
//! );
//! println!("{}", view.to_text(&Theme::default()));
//! ```
//!
//! ## Styling
//!
//! Rendering attaches style names (`header`, `tag.danger`, `row.hover`, ...)
//! and a [`Theme`] resolves them to terminal styles. [`Theme::default`]
//! styles every name the renderer emits; themes can be layered with
//! [`Theme::merge`] and loaded from YAML with [`Theme::from_file`].
//! Heights, borders and the empty-state message live in [`TableLayout`].

mod cell;
mod controller;
mod error;
mod header;
mod layout;
mod record;
mod render;
mod rendered;
mod sort;
mod theme;
mod types;
mod util;

pub use cell::{normalize, CellValue, FieldValue, RenderFn, Scalar, TagVariant, TextValue, Trend};
pub use controller::{Controller, Selection, SortState};
pub use error::GridError;
pub use header::HeaderConfig;
pub use layout::TableLayout;
pub use record::Record;
pub use render::{
    layout_lines, render_cell, resolve_widths, BodyView, CellOutput, CheckState, DataTable,
    HeaderView, IndicatorCategory, RowClassFn, RowClickCallback, RowView, SelectCallback,
    SortCallback, TableProps, TableView, CHANGE_DOWN, CHANGE_NONE, CHANGE_UP, INDICATOR_DOT,
    INDICATOR_NONE, SORT_ASC, SORT_DESC, TOOLTIP_MARKER, TREND_DOWN, TREND_UP,
};
pub use rendered::{Rendered, Span};
pub use sort::{sort_records, sorted_record_indices};
pub use theme::{ColorDef, StyleValue, Theme};
pub use types::{Align, BorderStyle, Width};
pub use util::{display_width, pad, truncate_to_width};

pub use cellgrid_order::{Dir, Number, Timestamp};
