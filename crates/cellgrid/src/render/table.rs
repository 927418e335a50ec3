//! The table component and its per-render props.
//!
//! [`DataTable`] is the long-lived part: it owns the uncontrolled sort and
//! selection state plus the hovered row. Everything else arrives fresh on
//! each render through [`TableProps`]. Rendering produces a [`TableView`],
//! a plain description of what to draw that the text layout turns into
//! terminal lines.
//!
//! The table never reorders rows. Clicking a sortable header only updates
//! the sort state and reports it through `on_sort`; the caller reorders the
//! data (see [`sort_records`](crate::sort_records)) or fetches a sorted page.

use std::fmt::Debug;

use cellgrid_order::Dir;

use crate::cell::normalize;
use crate::controller::{Controller, Selection, SortState};
use crate::header::HeaderConfig;
use crate::layout::TableLayout;
use crate::record::Record;
use crate::rendered::Rendered;
use crate::types::{Align, Width};

use super::cell::{render_cell, CellOutput};

pub const SORT_ASC: &str = "▴";
pub const SORT_DESC: &str = "▾";
pub const TOOLTIP_MARKER: &str = "ⓘ";

pub type SortCallback<'a, K> = Box<dyn FnMut(&K, Dir) + 'a>;
pub type SelectCallback<'a> = Box<dyn FnMut(&[usize]) + 'a>;
pub type RowClickCallback<'a, R> = Box<dyn FnMut(usize, &R) + 'a>;
pub type RowClassFn<'a, R> = Box<dyn Fn(usize, &R) -> Option<String> + 'a>;

/// Everything a render needs from the caller.
///
/// ```rust
/// use cellgrid::{HeaderConfig, TableProps};
/// use serde_json::json;
///
/// let headers = vec![HeaderConfig::new("name".to_string(), "Name").sortable()];
/// let data = vec![json!({"name": "Acme"})];
/// let mut sorted_by = None;
///
/// let props = TableProps::new(&headers, &data)
///     .selectable(true)
///     .on_sort(|key, dir| sorted_by = Some((key.clone(), dir)));
/// # drop(props);
/// ```
pub struct TableProps<'a, R: Record> {
    pub headers: &'a [HeaderConfig<R::Key>],
    pub data: &'a [R],
    /// Caller-owned sort; `None` leaves sort state to the table.
    pub sort: Option<SortState<R::Key>>,
    /// Caller-owned selection; `None` leaves selection to the table.
    pub selected_rows: Option<&'a [usize]>,
    /// Adds the leading checkbox column.
    pub selectable: bool,
    /// Direction a column starts in when it has no default of its own.
    pub default_direction: Dir,
    /// Index of the row drawn as the total row.
    pub total_row: Option<usize>,
    pub layout: Option<&'a TableLayout>,
    pub row_class: Option<RowClassFn<'a, R>>,
    pub on_sort: Option<SortCallback<'a, R::Key>>,
    pub on_select_rows: Option<SelectCallback<'a>>,
    pub on_row_click: Option<RowClickCallback<'a, R>>,
}

impl<'a, R: Record> TableProps<'a, R> {
    pub fn new(headers: &'a [HeaderConfig<R::Key>], data: &'a [R]) -> Self {
        TableProps {
            headers,
            data,
            sort: None,
            selected_rows: None,
            selectable: false,
            default_direction: Dir::Asc,
            total_row: None,
            layout: None,
            row_class: None,
            on_sort: None,
            on_select_rows: None,
            on_row_click: None,
        }
    }

    pub fn sort(mut self, sort: SortState<R::Key>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn selected_rows(mut self, rows: &'a [usize]) -> Self {
        self.selected_rows = Some(rows);
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn default_direction(mut self, dir: Dir) -> Self {
        self.default_direction = dir;
        self
    }

    pub fn total_row(mut self, index: usize) -> Self {
        self.total_row = Some(index);
        self
    }

    pub fn layout(mut self, layout: &'a TableLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn row_class(mut self, f: impl Fn(usize, &R) -> Option<String> + 'a) -> Self {
        self.row_class = Some(Box::new(f));
        self
    }

    pub fn on_sort(mut self, f: impl FnMut(&R::Key, Dir) + 'a) -> Self {
        self.on_sort = Some(Box::new(f));
        self
    }

    pub fn on_select_rows(mut self, f: impl FnMut(&[usize]) + 'a) -> Self {
        self.on_select_rows = Some(Box::new(f));
        self
    }

    pub fn on_row_click(mut self, f: impl FnMut(usize, &R) + 'a) -> Self {
        self.on_row_click = Some(Box::new(f));
        self
    }
}

/// State of a checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    /// Some but not all rows selected; header only.
    Indeterminate,
}

impl CheckState {
    pub fn glyph(self) -> &'static str {
        match self {
            CheckState::Checked => "[x]",
            CheckState::Unchecked => "[ ]",
            CheckState::Indeterminate => "[-]",
        }
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// One rendered header cell.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderView {
    pub label: Rendered,
    pub icon: Option<Rendered>,
    pub tooltip: Option<String>,
    pub sortable: bool,
    /// Set only on the active sort column.
    pub sorted: Option<Dir>,
    pub width: Width,
    pub align: Align,
}

impl HeaderView {
    /// Icon, label, tooltip marker and sort glyph, space separated.
    pub fn content(&self) -> Rendered {
        let mut out = Rendered::new();
        if let Some(icon) = &self.icon {
            out.append(icon.clone());
            out = out.plain(" ");
        }
        out.append(self.label.clone());
        if self.tooltip.is_some() {
            out = out.plain(" ").with_styled(TOOLTIP_MARKER, "tooltip");
        }
        if let Some(dir) = self.sorted {
            let glyph = match dir {
                Dir::Asc => SORT_ASC,
                Dir::Desc => SORT_DESC,
            };
            out = out.plain(" ").with_styled(glyph, "sort.indicator");
        }
        out
    }
}

/// One rendered body row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    /// Position in the data slice.
    pub index: usize,
    pub cells: Vec<CellOutput>,
    /// Checkbox state; `None` without a checkbox column or on the total row.
    pub checkbox: Option<CheckState>,
    pub selected: bool,
    pub hovered: bool,
    pub total: bool,
    pub class: Option<String>,
    pub height: usize,
}

impl RowView {
    /// Style given to the row's unstyled text.
    pub fn style<'a>(&'a self, layout: &'a TableLayout) -> Option<&'a str> {
        if self.total {
            Some("row.total")
        } else if let Some(class) = &self.class {
            Some(class.as_str())
        } else if self.selected {
            Some("row.selected")
        } else if self.hovered {
            Some("row.hover")
        } else {
            layout.body_style.as_deref()
        }
    }
}

/// The body: rows, or the empty state.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyView {
    Rows(Vec<RowView>),
    Empty { message: String, height: usize },
}

/// A fully rendered table, ready for text layout.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    /// Header checkbox; `None` without a checkbox column.
    pub checkbox: Option<CheckState>,
    pub headers: Vec<HeaderView>,
    pub body: BodyView,
    pub layout: TableLayout,
}

impl TableView {
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            BodyView::Rows(rows) => rows,
            BodyView::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, BodyView::Empty { .. })
    }
}

/// A persistent table component.
///
/// ```rust
/// use cellgrid::{DataTable, HeaderConfig, TableProps};
/// use serde_json::json;
///
/// let headers = vec![HeaderConfig::new("score".to_string(), "Score").sortable()];
/// let data = vec![json!({"score": 10}), json!({"score": null}), json!({"score": 5})];
///
/// let mut table = DataTable::new();
/// let mut props = TableProps::new(&headers, &data);
/// table.click_header(&mut props, &"score".to_string());
///
/// let text = table.render(&props).to_plain();
/// assert!(text.starts_with("Score ▴"));
/// ```
#[derive(Clone, Debug)]
pub struct DataTable<K> {
    controller: Controller<K>,
    hovered: Option<usize>,
}

impl<K: Clone + PartialEq + Debug> Default for DataTable<K> {
    fn default() -> Self {
        DataTable::new()
    }
}

impl<K: Clone + PartialEq + Debug> DataTable<K> {
    pub fn new() -> Self {
        DataTable {
            controller: Controller::new(),
            hovered: None,
        }
    }

    /// Starts sorted, for uncontrolled tables with an initial sort.
    pub fn with_sort(sort: SortState<K>) -> Self {
        DataTable {
            controller: Controller::with_sort(sort),
            hovered: None,
        }
    }

    pub fn controller(&self) -> &Controller<K> {
        &self.controller
    }

    pub fn sort(&self) -> &SortState<K> {
        self.controller.sort()
    }

    pub fn selection(&self) -> &Selection {
        self.controller.selection()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    fn sync<R: Record<Key = K>>(&mut self, props: &TableProps<'_, R>) {
        self.controller.sync_sort(props.sort.as_ref());
        self.controller.sync_selection(props.selected_rows);
    }

    /// Toggles sort on a sortable header and reports the new state.
    ///
    /// Returns `false`, doing nothing, for unknown or non-sortable headers.
    pub fn click_header<R: Record<Key = K>>(
        &mut self,
        props: &mut TableProps<'_, R>,
        key: &K,
    ) -> bool {
        self.sync(props);
        let headers = props.headers;
        let Some(header) = headers.iter().find(|h| &h.key == key && h.sortable) else {
            log::trace!("ignoring click on non-sortable header {:?}", key);
            return false;
        };
        let default = header.default_direction.unwrap_or(props.default_direction);
        let direction = self.controller.toggle_sort(key, default).direction;
        if let Some(on_sort) = props.on_sort.as_mut() {
            on_sort(key, direction);
        }
        true
    }

    /// Header checkbox: select every row or none.
    pub fn check_all<R: Record<Key = K>>(&mut self, props: &mut TableProps<'_, R>, checked: bool) {
        self.sync(props);
        let rows = self
            .controller
            .toggle_select_all(checked, props.data.len())
            .to_vec();
        if let Some(on_select) = props.on_select_rows.as_mut() {
            on_select(&rows);
        }
    }

    /// Row checkbox.
    pub fn check_row<R: Record<Key = K>>(
        &mut self,
        props: &mut TableProps<'_, R>,
        index: usize,
        checked: bool,
    ) {
        self.sync(props);
        let rows = self.controller.toggle_row(index, checked).to_vec();
        if let Some(on_select) = props.on_select_rows.as_mut() {
            on_select(&rows);
        }
    }

    /// Reports a click on the row at `index`. Out-of-range clicks are ignored.
    pub fn click_row<R: Record<Key = K>>(&mut self, props: &mut TableProps<'_, R>, index: usize) {
        let data = props.data;
        if let (Some(record), Some(on_click)) = (data.get(index), props.on_row_click.as_mut()) {
            on_click(index, record);
        }
    }

    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    /// Clears the uncontrolled selection, e.g. after the data changed.
    pub fn reset_selection(&mut self) {
        self.controller.clear_selection();
    }

    pub fn render<R: Record<Key = K>>(&mut self, props: &TableProps<'_, R>) -> TableView {
        self.sync(props);
        let layout = props.layout.cloned().unwrap_or_default();
        let len = props.data.len();

        let checkbox = props.selectable.then(|| {
            if self.controller.all_selected(len) {
                CheckState::Checked
            } else if self.controller.some_selected(len) {
                CheckState::Indeterminate
            } else {
                CheckState::Unchecked
            }
        });

        let sort = self.controller.sort();
        let headers = props
            .headers
            .iter()
            .map(|h| HeaderView {
                label: h.label.clone(),
                icon: h.icon.clone(),
                tooltip: h.tooltip.clone(),
                sortable: h.sortable,
                sorted: if h.sortable {
                    sort.direction_of(&h.key)
                } else {
                    None
                },
                width: h.width.clone().unwrap_or_default(),
                align: h.align.unwrap_or_default(),
            })
            .collect();

        let body = if props.data.is_empty() {
            BodyView::Empty {
                message: layout.empty_message.clone(),
                height: layout.empty_height.max(1),
            }
        } else {
            let selection = self.controller.selection();
            let rows = props
                .data
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let total = props.total_row == Some(index);
                    let selected = selection.contains(index);
                    RowView {
                        index,
                        cells: props
                            .headers
                            .iter()
                            .map(|h| render_cell(&normalize(record.field(&h.key)), h.align))
                            .collect(),
                        checkbox: (props.selectable && !total).then_some(selected.into()),
                        selected,
                        hovered: self.hovered == Some(index),
                        total,
                        class: props.row_class.as_ref().and_then(|f| f(index, record)),
                        height: if total {
                            layout.total_row_height
                        } else {
                            layout.row_height
                        }
                        .max(1),
                    }
                })
                .collect();
            BodyView::Rows(rows)
        };

        TableView {
            checkbox,
            headers,
            body,
            layout,
        }
    }
}
