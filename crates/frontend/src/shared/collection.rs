//! Generic machinery shared by the three management screens: sort order,
//! pagination window and in-flight fetch invalidation.

use std::cmp::Ordering;

use leptos::prelude::*;

/// Per-field natural ordering of a list row.
pub trait SortByField {
    fn compare_by(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_by_field<T: SortByField>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort marker shown in a column header.
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// View state of one remote collection screen: the currently visible page
/// window plus sort and pagination bookkeeping. The fetched collection
/// itself lives in a separate signal and is pushed through [`rebuild`]
/// after every fetch, sort toggle or page change.
///
/// [`rebuild`]: ListState::rebuild
#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl<T: SortByField + Clone> ListState<T> {
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            sort_field: sort_field.to_string(),
            sort_ascending: true,
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }

    /// Re-derive the visible window from the full (already filtered)
    /// collection: sort, recalculate pagination, clamp the page, slice.
    pub fn rebuild(&mut self, mut data: Vec<T>) {
        sort_by_field(&mut data, &self.sort_field, self.sort_ascending);
        self.total_count = data.len();
        self.total_pages = if self.total_count == 0 {
            1
        } else {
            (self.total_count + self.page_size - 1) / self.page_size
        };
        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(data.len());
        self.items = data.get(start..end).unwrap_or(&[]).to_vec();
    }

    /// Clicking the current sort column flips direction; any other column
    /// becomes the ascending sort field.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

/// Fetch generation counter owned by one screen. Every fetch captures the
/// generation it was started under; a response whose generation is no
/// longer current is discarded, so a refresh or an unmount can never be
/// overwritten by a stale in-flight response.
#[derive(Clone, Copy)]
pub struct FetchSeq(StoredValue<u64>);

impl FetchSeq {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    /// Start a new fetch: invalidates everything in flight and returns
    /// the new current generation.
    pub fn begin(&self) -> u64 {
        self.0.update_value(|v| *v += 1);
        self.0.get_value()
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.0.get_value() == seq
    }

    /// Discard all in-flight fetches (called from `on_cleanup`).
    pub fn invalidate(&self) {
        self.0.update_value(|v| *v += 1);
    }
}

impl Default for FetchSeq {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        when: Option<String>,
    }

    impl SortByField for Row {
        fn compare_by(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "when" => self
                    .when
                    .as_deref()
                    .unwrap_or("")
                    .cmp(other.when.as_deref().unwrap_or("")),
                _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            }
        }
    }

    fn row(name: &str, when: Option<&str>) -> Row {
        Row {
            name: name.into(),
            when: when.map(Into::into),
        }
    }

    #[test]
    fn empty_collection_renders_zero_rows() {
        let mut state = ListState::new("name", 10);
        state.rebuild(Vec::<Row>::new());
        assert!(state.items.is_empty());
        assert_eq!(state.total_count, 0);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn sorts_case_insensitively_and_pages() {
        let mut state = ListState::new("name", 2);
        state.rebuild(vec![
            row("zoé", None),
            row("Alice", None),
            row("bernard", None),
        ]);
        assert_eq!(state.total_count, 3);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].name, "Alice");
        assert_eq!(state.items[1].name, "bernard");

        state.page = 1;
        state.rebuild(vec![
            row("zoé", None),
            row("Alice", None),
            row("bernard", None),
        ]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "zoé");
    }

    #[test]
    fn chronological_sort_on_iso_dates() {
        let mut state = ListState::new("when", 10);
        state.sort_ascending = false;
        state.rebuild(vec![
            row("a", Some("2025-01-03")),
            row("b", Some("2026-07-21")),
            row("c", None),
        ]);
        assert_eq!(state.items[0].name, "b");
        assert_eq!(state.items[2].name, "c");
    }

    #[test]
    fn page_is_clamped_when_collection_shrinks() {
        let mut state = ListState::new("name", 2);
        state.page = 4;
        state.rebuild(vec![row("a", None), row("b", None), row("c", None)]);
        assert_eq!(state.page, 1);
        assert_eq!(state.items[0].name, "c");
    }

    #[test]
    fn toggle_sort_flips_then_switches() {
        let mut state = ListState::<Row>::new("name", 10);
        state.toggle_sort("name");
        assert!(!state.sort_ascending);
        state.toggle_sort("when");
        assert_eq!(state.sort_field, "when");
        assert!(state.sort_ascending);
    }

    #[test]
    fn sort_indicator_marks_active_column() {
        assert_eq!(sort_indicator("name", "name", true), " ▲");
        assert_eq!(sort_indicator("name", "name", false), " ▼");
        assert_eq!(sort_indicator("name", "when", true), " ⇅");
    }
}
