use crate::model::view::TaskView;

/// The rendered task list, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    views: Vec<TaskView>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TaskView> {
        self.views.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TaskView> {
        self.views.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskView> {
        self.views.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TaskView> {
        self.views.iter_mut()
    }

    /// Append a view, returning its index
    pub fn push(&mut self, view: TaskView) -> usize {
        self.views.push(view);
        self.views.len() - 1
    }

    /// Remove the view at `index`. Panics if out of range.
    pub fn remove(&mut self, index: usize) -> TaskView {
        self.views.remove(index)
    }

    /// Substitute the view at `index`, returning the old one. Panics if out of range.
    pub fn replace(&mut self, index: usize, view: TaskView) -> TaskView {
        std::mem::replace(&mut self.views[index], view)
    }

    /// Indices of the views the active filter leaves visible
    pub fn visible_indices(&self) -> Vec<usize> {
        self.views
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_hidden())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.views.iter().filter(|v| v.is_completed()).count()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskView;
    type IntoIter = std::slice::Iter<'a, TaskView>;

    fn into_iter(self) -> Self::IntoIter {
        self.views.iter()
    }
}
