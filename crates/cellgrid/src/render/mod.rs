//! Rendering: cells, the table component, and text layout.

mod cell;
mod table;
mod text;

pub use cell::{
    render_cell, CellOutput, IndicatorCategory, CHANGE_DOWN, CHANGE_NONE, CHANGE_UP,
    INDICATOR_DOT, INDICATOR_NONE, TREND_DOWN, TREND_UP,
};
pub use table::{
    BodyView, CheckState, DataTable, HeaderView, RowClassFn, RowClickCallback, RowView,
    SelectCallback, SortCallback, TableProps, TableView, SORT_ASC, SORT_DESC, TOOLTIP_MARKER,
};
pub use text::{layout_lines, resolve_widths};
