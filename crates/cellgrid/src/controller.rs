//! Sort and selection state.
//!
//! [`Controller`] holds the current sort column/direction and the set of
//! selected row indices. Its transitions are pure: they never look at the
//! data, never reorder anything, and never fail.
//!
//! # Controlled state
//!
//! A caller can own either piece of state. Passing `Some` to
//! [`sync_sort`](Controller::sync_sort) or
//! [`sync_selection`](Controller::sync_selection) makes the controller
//! mirror the caller's value whenever that value changes. Between changes
//! the controller keeps applying its own transitions, so a caller that
//! ignores `on_sort` still sees the toggle until it sends a new value.

use std::collections::BTreeSet;
use std::fmt::Debug;

use cellgrid_order::Dir;

/// Current sort column and direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState<K> {
    /// `None` until a column is sorted.
    pub key: Option<K>,
    pub direction: Dir,
}

impl<K> SortState<K> {
    pub fn new(key: K, direction: Dir) -> Self {
        SortState {
            key: Some(key),
            direction,
        }
    }

    pub fn unsorted() -> Self {
        SortState {
            key: None,
            direction: Dir::Asc,
        }
    }

    /// Direction of `key` if it is the active sort column.
    pub fn direction_of(&self, key: &K) -> Option<Dir>
    where
        K: PartialEq,
    {
        match &self.key {
            Some(active) if active == key => Some(self.direction),
            _ => None,
        }
    }
}

/// Selected row positions in the current data slice.
///
/// Indices are not validated against the data and are not remapped when the
/// data changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    rows: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.rows.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.rows.insert(index)
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.rows.remove(&index)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Selection {
            rows: iter.into_iter().collect(),
        }
    }
}

impl From<&[usize]> for Selection {
    fn from(rows: &[usize]) -> Self {
        rows.iter().copied().collect()
    }
}

/// Sort and selection state machine.
///
/// ```rust
/// use cellgrid::{Controller, SortState};
/// use cellgrid_order::Dir;
///
/// let mut ctl = Controller::new();
/// ctl.toggle_sort(&"score", Dir::Asc);
/// ctl.toggle_sort(&"score", Dir::Asc);
/// assert_eq!(ctl.sort(), &SortState::new("score", Dir::Desc));
///
/// ctl.toggle_select_all(true, 3);
/// assert!(ctl.all_selected(3));
/// ctl.toggle_row(1, false);
/// assert!(ctl.some_selected(3));
/// ```
#[derive(Clone, Debug)]
pub struct Controller<K> {
    sort: SortState<K>,
    selection: Selection,
    external_sort: Option<SortState<K>>,
    external_selection: Option<Selection>,
}

impl<K> Default for Controller<K> {
    fn default() -> Self {
        Controller {
            sort: SortState::unsorted(),
            selection: Selection::new(),
            external_sort: None,
            external_selection: None,
        }
    }
}

impl<K: Clone + PartialEq + Debug> Controller<K> {
    pub fn new() -> Self {
        Controller::default()
    }

    /// Starts with the given sort instead of unsorted.
    pub fn with_sort(sort: SortState<K>) -> Self {
        Controller {
            sort,
            ..Controller::default()
        }
    }

    pub fn sort(&self) -> &SortState<K> {
        &self.sort
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Sorts by `key`: the active column flips direction, any other column
    /// becomes active with `default_direction`.
    pub fn toggle_sort(&mut self, key: &K, default_direction: Dir) -> &SortState<K> {
        let direction = match self.sort.direction_of(key) {
            Some(current) => current.flip(),
            None => default_direction,
        };
        self.sort = SortState {
            key: Some(key.clone()),
            direction,
        };
        log::debug!("sort set to {:?} {}", key, direction);
        &self.sort
    }

    /// Selects every index below `len`, or clears the selection.
    pub fn toggle_select_all(&mut self, checked: bool, len: usize) -> &Selection {
        if checked {
            self.selection = (0..len).collect();
        } else {
            self.selection.clear();
        }
        log::debug!(
            "select all {}: {} rows selected",
            checked,
            self.selection.len()
        );
        &self.selection
    }

    /// Adds or removes one index. No bounds check.
    pub fn toggle_row(&mut self, index: usize, checked: bool) -> &Selection {
        if checked {
            self.selection.insert(index);
        } else {
            self.selection.remove(index);
        }
        log::debug!("row {} checked: {}", index, checked);
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// True when every one of `len` rows is selected and `len > 0`.
    pub fn all_selected(&self, len: usize) -> bool {
        len > 0 && self.selection.len() == len
    }

    /// True when some but not all rows are selected.
    pub fn some_selected(&self, len: usize) -> bool {
        !self.selection.is_empty() && !self.all_selected(len)
    }

    /// Mirrors a caller-owned sort when it differs from the last one seen.
    pub fn sync_sort(&mut self, external: Option<&SortState<K>>) {
        let Some(external) = external else {
            self.external_sort = None;
            return;
        };
        if self.external_sort.as_ref() != Some(external) {
            log::debug!("adopting controlled sort {:?}", external);
            self.sort = external.clone();
            self.external_sort = Some(external.clone());
        }
    }

    /// Mirrors a caller-owned selection when it differs from the last one seen.
    pub fn sync_selection(&mut self, external: Option<&[usize]>) {
        let Some(external) = external else {
            self.external_selection = None;
            return;
        };
        let external = Selection::from(external);
        if self.external_selection.as_ref() != Some(&external) {
            log::debug!("adopting controlled selection of {} rows", external.len());
            self.selection = external.clone();
            self.external_selection = Some(external);
        }
    }
}
