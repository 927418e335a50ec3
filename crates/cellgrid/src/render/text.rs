//! Terminal text layout for a [`TableView`].
//!
//! Column widths are resolved from each column's [`Width`] and the widest
//! content in it, then every cell is truncated or padded to its column.
//! Lines are built as [`Rendered`] spans first and only turned into strings
//! at the end, either plain or through a [`Theme`].

use crate::layout::TableLayout;
use crate::rendered::Rendered;
use crate::theme::Theme;
use crate::types::{Align, BorderChars, Width};

use super::table::{BodyView, RowView, TableView};

const CHECKBOX_WIDTH: usize = 3;

/// Resolves the width of each column.
///
/// `content` holds the widest content of each column. With a `total_width`,
/// fill and fraction columns share what fixed and bounded columns leave
/// over; without a flexible column the rightmost bounded column takes the
/// rest. Without a `total_width` every column is sized to its content.
pub fn resolve_widths(
    specs: &[Width],
    content: &[usize],
    total_width: Option<usize>,
    overhead: usize,
) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::with_capacity(specs.len());
    let mut flex: Vec<(usize, usize)> = Vec::new(); // (index, weight)
    let mut used = 0;

    for (i, spec) in specs.iter().enumerate() {
        let data_w = content.get(i).copied().unwrap_or(0);
        let width = match spec {
            Width::Fixed(w) => *w,
            Width::Bounded { min, max } => data_w
                .max(min.unwrap_or(0))
                .min(max.unwrap_or(usize::MAX)),
            Width::Fill | Width::Fraction(_) if total_width.is_none() => data_w,
            Width::Fill => {
                flex.push((i, 1));
                0
            }
            Width::Fraction(n) => {
                flex.push((i, *n));
                0
            }
        };
        used += width;
        widths.push(width);
    }

    let Some(total_width) = total_width else {
        return widths;
    };
    let remaining = total_width.saturating_sub(overhead).saturating_sub(used);

    if !flex.is_empty() {
        let total_weight: usize = flex.iter().map(|(_, w)| w).sum();
        if total_weight > 0 {
            let mut left = remaining;
            for (n, (idx, weight)) in flex.iter().enumerate() {
                // last flexible column absorbs rounding
                let width = if n == flex.len() - 1 {
                    left
                } else {
                    let share = remaining * weight / total_weight;
                    left = left.saturating_sub(share);
                    share
                };
                widths[*idx] = width;
            }
        }
    } else if remaining > 0 {
        if let Some(idx) = specs
            .iter()
            .rposition(|w| matches!(w, Width::Bounded { .. }))
        {
            widths[idx] += remaining;
        }
    }

    widths
}

struct Grid<'a> {
    widths: Vec<usize>,
    chars: Option<BorderChars>,
    layout: &'a TableLayout,
}

impl Grid<'_> {
    fn separator_width(&self) -> usize {
        match self.chars {
            Some(_) => 3,
            None => self.layout.column_gap,
        }
    }

    fn overhead(&self, columns: usize) -> usize {
        let edges = if self.chars.is_some() { 4 } else { 0 };
        edges + self.separator_width() * columns.saturating_sub(1)
    }

    /// Width between the outer edges.
    fn interior(&self) -> usize {
        self.widths.iter().sum::<usize>()
            + self.separator_width() * self.widths.len().saturating_sub(1)
    }

    /// Joins cells that are already fitted to their columns.
    fn line(&self, cells: Vec<Rendered>) -> Rendered {
        let mut line = Rendered::new();
        match self.chars {
            Some(c) => {
                let bar = c.vertical.to_string();
                line = line.with_styled(bar.as_str(), "border").plain(" ");
                for (i, cell) in cells.into_iter().enumerate() {
                    if i > 0 {
                        line = line.plain(" ").with_styled(bar.as_str(), "border").plain(" ");
                    }
                    line.append(cell);
                }
                line.plain(" ").with_styled(bar, "border")
            }
            None => {
                let gap = " ".repeat(self.layout.column_gap);
                for (i, cell) in cells.into_iter().enumerate() {
                    if i > 0 {
                        line = line.plain(gap.as_str());
                    }
                    line.append(cell);
                }
                line
            }
        }
    }

    /// A horizontal rule; `None` when borderless.
    fn rule(&self, pick: impl Fn(&BorderChars) -> (char, char, char)) -> Option<Rendered> {
        let c = self.chars?;
        let (left, joint, right) = pick(&c);
        let mut text = String::new();
        text.push(left);
        let segments: Vec<usize> = if self.widths.is_empty() {
            vec![self.interior()]
        } else {
            self.widths.clone()
        };
        for (i, w) in segments.iter().enumerate() {
            if i > 0 {
                text.push(joint);
            }
            text.extend(std::iter::repeat(c.horizontal).take(w + 2));
        }
        text.push(right);
        Some(Rendered::styled(text, "border"))
    }

    /// A line spanning the whole interior, for the empty state.
    fn full_width(&self, content: Rendered) -> Rendered {
        let content = content.fit(self.interior(), Align::Center);
        match self.chars {
            Some(c) => {
                let bar = c.vertical.to_string();
                let mut line = Rendered::styled(bar.as_str(), "border").plain(" ");
                line.append(content);
                line.plain(" ").with_styled(bar, "border")
            }
            None => content,
        }
    }
}

/// Lays out a table view as styled lines.
pub fn layout_lines(view: &TableView) -> Vec<Rendered> {
    let layout = &view.layout;
    let has_checkbox = view.checkbox.is_some();

    let header_contents: Vec<Rendered> = view.headers.iter().map(|h| h.content()).collect();

    let mut specs: Vec<Width> = Vec::new();
    let mut content: Vec<usize> = Vec::new();
    if has_checkbox {
        specs.push(Width::Fixed(CHECKBOX_WIDTH));
        content.push(CHECKBOX_WIDTH);
    }
    for (i, header) in view.headers.iter().enumerate() {
        let widest_cell = view
            .rows()
            .iter()
            .filter_map(|row| row.cells.get(i))
            .map(|cell| cell.content.width())
            .max()
            .unwrap_or(0);
        specs.push(header.width.clone());
        content.push(header_contents[i].width().max(widest_cell));
    }

    let mut grid = Grid {
        widths: Vec::new(),
        chars: layout.border.chars(),
        layout,
    };
    let overhead = grid.overhead(specs.len());
    grid.widths = resolve_widths(&specs, &content, layout.width, overhead);

    if let BodyView::Empty { message, .. } = &view.body {
        let needed = crate::util::display_width(message);
        let interior = grid.interior();
        if layout.width.is_none() && interior < needed {
            if let Some(last) = grid.widths.last_mut() {
                *last += needed - interior;
            }
        }
    }

    let mut lines = Vec::new();
    lines.extend(grid.rule(|c| (c.top_left, c.top_t, c.top_right)));

    // header
    let header_style = Some(layout.header_style.as_str());
    let mut header_cells = Vec::new();
    let mut col = 0;
    if let Some(state) = view.checkbox {
        header_cells.push(Rendered::styled(state.glyph(), "checkbox"));
        col += 1;
    }
    for (header, label) in view.headers.iter().zip(header_contents) {
        header_cells.push(
            label
                .fit(grid.widths[col], header.align)
                .with_base_style(header_style),
        );
        col += 1;
    }
    push_block(&mut lines, &grid, header_cells, layout.header_height, header_style);
    lines.extend(grid.rule(|c| (c.left_t, c.cross, c.right_t)));

    // body
    match &view.body {
        BodyView::Empty { message, height } => {
            let height = (*height).max(1);
            let top = (height - 1) / 2;
            for n in 0..height {
                let content = if n == top {
                    Rendered::styled(message.as_str(), "empty")
                } else {
                    Rendered::new()
                };
                lines.push(grid.full_width(content));
            }
        }
        BodyView::Rows(rows) => {
            for (i, row) in rows.iter().enumerate() {
                if row.total && i > 0 {
                    lines.extend(grid.rule(|c| (c.left_t, c.cross, c.right_t)));
                }
                let cells = row_cells(&grid, row, has_checkbox);
                push_block(&mut lines, &grid, cells, row.height, row.style(layout));
            }
        }
    }

    lines.extend(grid.rule(|c| (c.bottom_left, c.bottom_t, c.bottom_right)));
    lines
}

fn row_cells(grid: &Grid<'_>, row: &RowView, has_checkbox: bool) -> Vec<Rendered> {
    let style = row.style(grid.layout);
    let mut cells = Vec::with_capacity(grid.widths.len());
    let mut col = 0;
    if has_checkbox {
        let checkbox = match row.checkbox {
            Some(state) => Rendered::styled(state.glyph(), "checkbox"),
            None => Rendered::new(),
        };
        cells.push(checkbox.fit(CHECKBOX_WIDTH, Align::Left).with_base_style(style));
        col += 1;
    }
    for cell in &row.cells {
        let width = grid.widths.get(col).copied().unwrap_or(0);
        cells.push(cell.content.fit(width, cell.align).with_base_style(style));
        col += 1;
    }
    cells
}

/// Pushes `height` lines with `cells` on the middle one and blanks around it.
fn push_block(
    lines: &mut Vec<Rendered>,
    grid: &Grid<'_>,
    cells: Vec<Rendered>,
    height: usize,
    style: Option<&str>,
) {
    let height = height.max(1);
    let top = (height - 1) / 2;
    let mut content = Some(cells);
    for n in 0..height {
        let line_cells = if n == top {
            content.take().unwrap_or_default()
        } else {
            grid.widths
                .iter()
                .map(|w| Rendered::new().fit(*w, Align::Left).with_base_style(style))
                .collect()
        };
        lines.push(grid.line(line_cells));
    }
}

impl TableView {
    /// The table as styled lines with unresolved style names.
    pub fn lines(&self) -> Vec<Rendered> {
        layout_lines(self)
    }

    /// The table as terminal text, styled by `theme`.
    pub fn to_text(&self, theme: &Theme) -> String {
        self.lines()
            .iter()
            .map(|line| theme.render(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The table as unstyled text, trailing spaces trimmed.
    pub fn to_plain(&self) -> String {
        self.lines()
            .iter()
            .map(|line| line.plain_text().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
