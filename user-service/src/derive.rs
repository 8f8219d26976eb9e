// Derived Views
// Filter-then-sort pipeline over the live user list, memoized per stage

use crate::collate;
use crate::models::User;
use crate::state::ViewState;

use std::sync::Arc;
use tracing::debug;

/// Keep users whose country contains `search`, ignoring case.
///
/// An absent or empty search passes the list through untouched (same `Arc`).
pub fn filter_by_country(users: &Arc<Vec<User>>, search: Option<&str>) -> Arc<Vec<User>> {
    match search {
        Some(text) if !text.is_empty() => {
            let needle = text.to_lowercase();
            Arc::new(
                users
                    .iter()
                    .filter(|u| u.country().to_lowercase().contains(&needle))
                    .cloned()
                    .collect(),
            )
        }
        _ => Arc::clone(users),
    }
}

/// Stable ascending sort by country on a fresh copy
pub fn sort_by_country(users: &[User]) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| collate::compare(a.country(), b.country()));
    sorted
}

/// Filter, then optionally sort. Never touches `state.users`.
pub fn derive_view(state: &ViewState) -> Arc<Vec<User>> {
    let filtered = filter_by_country(&state.users, state.search.as_deref());
    if state.sort_by_country {
        Arc::new(sort_by_country(&filtered))
    } else {
        filtered
    }
}

#[derive(Debug)]
struct FilterMemo {
    users: Arc<Vec<User>>,
    search: Option<String>,
    output: Arc<Vec<User>>,
}

#[derive(Debug)]
struct SortMemo {
    input: Arc<Vec<User>>,
    sort_by_country: bool,
    output: Arc<Vec<User>>,
}

/// Memo for [`derive_view`].
///
/// The filter stage reruns only when the live list identity or the search
/// text changes; the sort stage only when the filter output or the sort flag
/// changes. Toggling color never recomputes anything.
#[derive(Debug, Default)]
pub struct ViewCache {
    filter: Option<FilterMemo>,
    sort: Option<SortMemo>,
    filter_runs: usize,
    sort_runs: usize,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&mut self, state: &ViewState) -> Arc<Vec<User>> {
        let filtered = self.filtered(state);
        self.sorted(filtered, state.sort_by_country)
    }

    fn filtered(&mut self, state: &ViewState) -> Arc<Vec<User>> {
        if let Some(memo) = &self.filter {
            if Arc::ptr_eq(&memo.users, &state.users) && memo.search == state.search {
                return Arc::clone(&memo.output);
            }
        }

        debug!(search = ?state.search, "Filtering users by country");
        self.filter_runs += 1;
        let output = filter_by_country(&state.users, state.search.as_deref());
        self.filter = Some(FilterMemo {
            users: Arc::clone(&state.users),
            search: state.search.clone(),
            output: Arc::clone(&output),
        });
        output
    }

    fn sorted(&mut self, input: Arc<Vec<User>>, sort: bool) -> Arc<Vec<User>> {
        if let Some(memo) = &self.sort {
            if Arc::ptr_eq(&memo.input, &input) && memo.sort_by_country == sort {
                return Arc::clone(&memo.output);
            }
        }

        debug!(sort_by_country = sort, "Sorting users");
        self.sort_runs += 1;
        let output = if sort {
            Arc::new(sort_by_country(&input))
        } else {
            Arc::clone(&input)
        };
        self.sort = Some(SortMemo {
            input,
            sort_by_country: sort,
            output: Arc::clone(&output),
        });
        output
    }

    /// How many times each stage has actually run: (filter, sort)
    pub fn runs(&self) -> (usize, usize) {
        (self.filter_runs, self.sort_runs)
    }
}
