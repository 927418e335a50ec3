//! Sorting records by a [`SortState`].
//!
//! The table never reorders data itself. When `on_sort` fires, the caller
//! either sorts locally with these helpers or fetches a sorted page.

use cellgrid_order::sorted_indices;

use crate::cell::FieldValue;
use crate::controller::SortState;
use crate::record::Record;

/// Display order of `data` under `sort`.
///
/// Without a sort key the order is unchanged. Otherwise records are ordered
/// by the key's field, stable, with absent values last in both directions.
///
/// ```rust
/// use cellgrid::{sorted_record_indices, SortState};
/// use cellgrid_order::Dir;
/// use serde_json::json;
///
/// let rows = vec![json!({"score": 10}), json!({"score": null}), json!({"score": 5})];
/// let asc = SortState::new("score".to_string(), Dir::Asc);
/// assert_eq!(sorted_record_indices(&rows, &asc), vec![2, 0, 1]);
/// ```
pub fn sorted_record_indices<R: Record>(data: &[R], sort: &SortState<R::Key>) -> Vec<usize> {
    let Some(key) = sort.key.as_ref() else {
        return (0..data.len()).collect();
    };
    let fields: Vec<FieldValue> = data.iter().map(|record| record.field(key)).collect();
    log::trace!(
        "sorting {} records by {:?} {}",
        data.len(),
        key,
        sort.direction
    );
    sorted_indices(&fields, sort.direction, FieldValue::sort_value)
}

/// Reorders `data` in place. See [`sorted_record_indices`].
pub fn sort_records<R: Record>(data: &mut Vec<R>, sort: &SortState<R::Key>) {
    let order = sorted_record_indices(data.as_slice(), sort);
    let mut slots: Vec<Option<R>> = data.drain(..).map(Some).collect();
    data.extend(order.into_iter().filter_map(|i| slots[i].take()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use cellgrid_order::Dir;
    use serde_json::{json, Value};
    use std::collections::BTreeMap;

    fn scores(rows: &[Value]) -> Vec<Value> {
        rows.iter().map(|r| r["score"].clone()).collect()
    }

    fn sample() -> Vec<Value> {
        vec![
            json!({"name": "a", "score": 10}),
            json!({"name": "b", "score": null}),
            json!({"name": "c", "score": 5}),
        ]
    }

    #[test]
    fn ascending_puts_null_last() {
        let mut rows = sample();
        sort_records(&mut rows, &SortState::new("score".to_string(), Dir::Asc));
        assert_eq!(scores(&rows), vec![json!(5), json!(10), Value::Null]);
    }

    #[test]
    fn descending_keeps_null_last() {
        let mut rows = sample();
        sort_records(&mut rows, &SortState::new("score".to_string(), Dir::Desc));
        assert_eq!(scores(&rows), vec![json!(10), json!(5), Value::Null]);
    }

    #[test]
    fn no_key_keeps_order() {
        let rows = sample();
        assert_eq!(
            sorted_record_indices(&rows, &SortState::unsorted()),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn missing_field_is_absent() {
        let rows = vec![json!({"x": 1}), json!({"score": 2})];
        let order = sorted_record_indices(&rows, &SortState::new("score".to_string(), Dir::Asc));
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn cells_sort_by_underlying_value() {
        let rows: Vec<BTreeMap<String, FieldValue>> = [-3i64, 7, 0]
            .into_iter()
            .map(|n| {
                let mut row = BTreeMap::new();
                row.insert("delta".to_string(), FieldValue::from(CellValue::change(n)));
                row
            })
            .collect();
        let order = sorted_record_indices(&rows, &SortState::new("delta".to_string(), Dir::Desc));
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn strings_collate_case_insensitively() {
        let rows = vec![json!({"n": "beta"}), json!({"n": "Alpha"}), json!({"n": "alpha2"})];
        let order = sorted_record_indices(&rows, &SortState::new("n".to_string(), Dir::Asc));
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn placeholder_string_keeps_numbers_numeric() {
        let mut rows = vec![
            json!({"s": 9}),
            json!({"s": 10}),
            json!({"s": "n/a"}),
            json!({"s": 100}),
        ];
        sort_records(&mut rows, &SortState::new("s".to_string(), Dir::Asc));
        let values: Vec<Value> = rows.iter().map(|r| r["s"].clone()).collect();
        assert_eq!(values, vec![json!(9), json!(10), json!(100), json!("n/a")]);
    }

    #[test]
    fn ties_are_stable() {
        let rows = vec![
            json!({"k": 1, "id": 0}),
            json!({"k": 1, "id": 1}),
            json!({"k": 0, "id": 2}),
        ];
        let order = sorted_record_indices(&rows, &SortState::new("k".to_string(), Dir::Desc));
        assert_eq!(order, vec![0, 1, 2]);
    }
}
