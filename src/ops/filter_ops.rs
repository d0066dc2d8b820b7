use crate::model::filter::{FilterCategory, FilterState};
use crate::model::list::TaskList;

/// One filter-selection control and whether it is the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControl {
    pub category: FilterCategory,
    pub active: bool,
}

/// Make `category` the current filter and update every view's visibility.
#[tracing::instrument(skip(state, list), fields(tasks = list.len()))]
pub fn apply_filter(state: &mut FilterState, category: FilterCategory, list: &mut TaskList) {
    state.set(category);
    reapply_filter(state, list);
}

/// Re-evaluate visibility of every view under the current filter.
///
/// Must run after anything that adds tasks or changes a completion flag.
pub fn reapply_filter(state: &FilterState, list: &mut TaskList) {
    let category = state.current();
    let mut hidden = 0usize;
    for view in list.iter_mut() {
        let hide = !category.admits(view.is_completed());
        view.set_hidden(hide);
        if hide {
            hidden += 1;
        }
    }
    tracing::trace!(filter = %category, hidden, "filter applied");
}

/// The filter controls in tab order, exactly one marked active
pub fn filter_controls(state: &FilterState) -> [FilterControl; 3] {
    FilterCategory::ALL.map(|category| FilterControl {
        category,
        active: category == state.current(),
    })
}
