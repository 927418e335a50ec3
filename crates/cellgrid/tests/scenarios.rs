//! End-to-end table scenarios: sorting, cell rendering, selection,
//! controlled state and configuration files.

use std::cell::RefCell;

use cellgrid::{
    sort_records, CheckState, DataTable, Dir, GridError, HeaderConfig, SortState, TableLayout,
    TableProps, TableView, Theme,
};
use serde_json::{json, Value};

fn key(s: &str) -> String {
    s.to_string()
}

fn score_headers() -> Vec<HeaderConfig> {
    vec![
        HeaderConfig::new(key("name"), "Name").sortable(),
        HeaderConfig::new(key("score"), "Score").sortable(),
    ]
}

fn score_data() -> Vec<Value> {
    vec![
        json!({"name": "Ana", "score": 10}),
        json!({"name": "Bo", "score": null}),
        json!({"name": "Cy", "score": 5}),
    ]
}

fn names(view: &TableView) -> Vec<String> {
    view.rows()
        .iter()
        .map(|row| row.cells[0].content.plain_text())
        .collect()
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn clicking_score_sorts_nulls_last_both_ways() {
    let headers = score_headers();
    let mut data = score_data();
    let mut table = DataTable::new();

    table.click_header(&mut TableProps::new(&headers, &data), &key("score"));
    assert_eq!(table.sort(), &SortState::new(key("score"), Dir::Asc));
    sort_records(&mut data, table.sort());
    let view = table.render(&TableProps::new(&headers, &data));
    assert_eq!(names(&view), ["Cy", "Ana", "Bo"]);
    assert_eq!(view.headers[1].sorted, Some(Dir::Asc));

    table.click_header(&mut TableProps::new(&headers, &data), &key("score"));
    sort_records(&mut data, table.sort());
    let view = table.render(&TableProps::new(&headers, &data));
    assert_eq!(names(&view), ["Ana", "Cy", "Bo"]);
    assert_eq!(view.headers[1].sorted, Some(Dir::Desc));
}

#[test]
fn header_default_direction_wins_over_table_default() {
    let headers = vec![
        HeaderConfig::new(key("name"), "Name").sortable(),
        HeaderConfig::new(key("score"), "Score")
            .sortable()
            .default_direction(Dir::Desc),
    ];
    let data = score_data();
    let mut table = DataTable::new();
    let mut props = TableProps::new(&headers, &data).default_direction(Dir::Asc);

    table.click_header(&mut props, &key("score"));
    assert_eq!(table.sort().direction, Dir::Desc);
    table.click_header(&mut props, &key("name"));
    assert_eq!(table.sort().direction, Dir::Asc);
}

// ============================================================================
// Cells
// ============================================================================

#[test]
fn json_cells_render_by_variant() {
    let headers = vec![
        HeaderConfig::new(key("name"), "Name"),
        HeaderConfig::new(key("delta"), "Delta"),
        HeaderConfig::new(key("risk"), "Risk"),
    ];
    let data = vec![
        json!({
            "name": "Acme",
            "delta": {"type": "change", "value": -3},
            "risk": {"type": "indicator", "value": null},
        }),
        json!({
            "name": "Globex",
            "delta": {"type": "change", "value": 0},
            "risk": {"type": "indicator", "value": "high"},
        }),
    ];
    let view = DataTable::new().render(&TableProps::new(&headers, &data));
    let rows = view.rows();

    assert_eq!(
        rows[0].cells[1].content.to_markup(),
        "[change.decrease]▼ 3[/change.decrease]"
    );
    assert_eq!(rows[0].cells[2].content.plain_text(), "● None");
    assert_eq!(rows[1].cells[1].content.plain_text(), "-");
    assert_eq!(
        rows[1].cells[2].content.to_markup(),
        "[indicator.high]●[/indicator.high] High"
    );
}

#[test]
fn raw_values_become_text() {
    let headers = vec![
        HeaderConfig::new(key("flag"), "Flag"),
        HeaderConfig::new(key("missing"), "Missing"),
    ];
    let data = vec![json!({"flag": true})];
    let view = DataTable::new().render(&TableProps::new(&headers, &data));
    assert_eq!(view.rows()[0].cells[0].content.plain_text(), "true");
    assert!(view.rows()[0].cells[1].content.is_empty());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn select_all_and_partial_selection() {
    let headers = score_headers();
    let data = score_data();
    let reported = RefCell::new(Vec::new());
    let mut table = DataTable::new();
    let mut props = TableProps::new(&headers, &data)
        .selectable(true)
        .on_select_rows(|rows| reported.borrow_mut().push(rows.to_vec()));

    table.check_all(&mut props, true);
    let view = table.render(&props);
    assert_eq!(view.checkbox, Some(CheckState::Checked));
    assert!(view.rows().iter().all(|r| r.selected));

    table.check_row(&mut props, 1, false);
    let view = table.render(&props);
    assert_eq!(view.checkbox, Some(CheckState::Indeterminate));
    assert_eq!(view.rows()[1].checkbox, Some(CheckState::Unchecked));

    table.check_all(&mut props, false);
    let view = table.render(&props);
    assert_eq!(view.checkbox, Some(CheckState::Unchecked));
    drop(props);

    assert_eq!(
        reported.into_inner(),
        vec![vec![0, 1, 2], vec![0, 2], vec![]]
    );
}

#[test]
fn empty_table_is_never_all_selected() {
    let headers = score_headers();
    let data: Vec<Value> = Vec::new();
    let mut table = DataTable::new();
    let mut props = TableProps::new(&headers, &data).selectable(true);
    table.check_all(&mut props, true);
    let view = table.render(&props);
    assert_eq!(view.checkbox, Some(CheckState::Unchecked));
    assert!(view.is_empty());
}

#[test]
fn reset_selection_after_data_change() {
    let headers = score_headers();
    let data = score_data();
    let mut table = DataTable::new();
    let mut props = TableProps::new(&headers, &data).selectable(true);
    table.check_row(&mut props, 2, true);
    assert_eq!(table.selection().to_vec(), vec![2]);

    table.reset_selection();
    assert!(table.selection().is_empty());
}

// ============================================================================
// Controlled state
// ============================================================================

#[test]
fn controlled_sort_is_mirrored_when_it_changes() {
    let headers = score_headers();
    let data = score_data();
    let reported = RefCell::new(Vec::new());
    let mut table = DataTable::new();

    let mut props = TableProps::new(&headers, &data)
        .sort(SortState::new(key("score"), Dir::Asc))
        .on_sort(|k, d| reported.borrow_mut().push((k.clone(), d)));
    assert_eq!(table.render(&props).headers[1].sorted, Some(Dir::Asc));

    table.click_header(&mut props, &key("score"));
    drop(props);
    assert_eq!(reported.into_inner(), vec![(key("score"), Dir::Desc)]);

    let props = TableProps::new(&headers, &data).sort(SortState::new(key("name"), Dir::Desc));
    let view = table.render(&props);
    assert_eq!(view.headers[0].sorted, Some(Dir::Desc));
    assert_eq!(view.headers[1].sorted, None);
}

#[test]
fn controlled_selection_is_mirrored() {
    let headers = score_headers();
    let data = score_data();
    let mut table = DataTable::new();
    let selected = [1usize];
    let props = TableProps::new(&headers, &data)
        .selectable(true)
        .selected_rows(&selected);

    let view = table.render(&props);
    assert_eq!(view.checkbox, Some(CheckState::Indeterminate));
    let flags: Vec<bool> = view.rows().iter().map(|r| r.selected).collect();
    assert_eq!(flags, [false, true, false]);
}

// ============================================================================
// Rows
// ============================================================================

#[test]
fn row_click_hover_and_class() {
    let headers = score_headers();
    let data = score_data();
    let clicked = RefCell::new(Vec::new());
    let mut table = DataTable::new();
    let mut props = TableProps::new(&headers, &data)
        .row_class(|_, record: &Value| record["score"].is_null().then(|| "row.missing".to_string()))
        .on_row_click(|i, record: &Value| clicked.borrow_mut().push((i, record["name"].clone())));

    table.click_row(&mut props, 1);
    table.click_row(&mut props, 9);
    table.hover(Some(0));
    let view = table.render(&props);
    let layout = TableLayout::default();

    assert!(view.rows()[0].hovered);
    assert_eq!(view.rows()[0].style(&layout), Some("row.hover"));
    assert_eq!(view.rows()[1].style(&layout), Some("row.missing"));
    assert_eq!(view.rows()[2].style(&layout), None);
    drop(props);
    assert_eq!(clicked.into_inner(), vec![(1, json!("Bo"))]);
}

#[test]
fn total_row_has_no_checkbox() {
    let headers = score_headers();
    let data = vec![
        json!({"name": "Ana", "score": 10}),
        json!({"name": "Cy", "score": 5}),
        json!({"name": "Total", "score": 15}),
    ];
    let mut table = DataTable::new();
    let props = TableProps::new(&headers, &data)
        .selectable(true)
        .total_row(2);
    let view = table.render(&props);
    let total = &view.rows()[2];

    assert!(total.total);
    assert_eq!(total.checkbox, None);
    assert_eq!(total.style(&view.layout), Some("row.total"));
    assert_eq!(
        view.to_plain(),
        "[ ]  Name   Score\n[ ]  Ana    10\n[ ]  Cy     5\n     Total  15"
    );
}

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn layout_from_file_drives_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.yaml");
    std::fs::write(&path, "empty_message: Nothing here\nempty_height: 1\n").unwrap();
    let layout = TableLayout::from_file(&path).unwrap();

    let headers = vec![HeaderConfig::new(key("name"), "Name")];
    let data: Vec<Value> = Vec::new();
    let view = DataTable::new().render(&TableProps::new(&headers, &data).layout(&layout));
    assert_eq!(view.to_plain(), "Name\nNothing here");
}

#[test]
fn missing_layout_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TableLayout::from_file(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, GridError::Io { .. }));
}

#[test]
fn theme_file_layers_over_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brand.yaml");
    std::fs::write(
        &path,
        "accent:\n  fg: \"#ff6b35\"\n  bold: true\nheader: accent\ntag.danger: bright_red bold\n",
    )
    .unwrap();

    let brand = Theme::from_file(&path).unwrap();
    assert_eq!(brand.name(), Some("brand"));
    assert!(brand.get("header").is_some());

    let theme = Theme::default().merge(brand);
    assert!(theme.get("header").is_some());
    assert!(theme.get("row.hover").is_some());

    let headers = score_headers();
    let data = score_data();
    let view = DataTable::new().render(&TableProps::new(&headers, &data));
    let text = view.to_text(&theme);
    let stripped: Vec<String> = console::strip_ansi_codes(&text)
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();
    assert_eq!(stripped.join("\n"), view.to_plain());
}

#[test]
fn bad_theme_color_names_the_style() {
    let err = Theme::from_yaml("tag.info:\n  fg: chartreuse\n").unwrap_err();
    match err {
        GridError::InvalidColor { style, value, .. } => {
            assert_eq!(style, "tag.info");
            assert_eq!(value, "chartreuse");
        }
        other => panic!("unexpected error: {other}"),
    }
}
