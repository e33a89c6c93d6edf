//! Derived, read-only view of the todo list.

use crate::types::{Filter, Todo, TodoState};
use serde::Serialize;

/// Summary counts over the unfiltered collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoCounts {
    /// Every todo
    pub total: usize,
    /// Todos not yet completed
    pub active: usize,
    /// Completed todos
    pub completed: usize,
}

/// Todos matching the active filter, in collection order
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoView<'a> {
    /// Filter the items were selected with
    pub filter: Filter,
    /// Matching todos
    pub items: Vec<&'a Todo>,
    /// Counts over all todos, regardless of filter
    pub counts: TodoCounts,
}

impl TodoView<'_> {
    /// Returns true when no todo matches the filter
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TodoState {
    /// Summary counts over every todo
    #[must_use]
    pub fn counts(&self) -> TodoCounts {
        let completed = self.completed_count();
        TodoCounts {
            total: self.count(),
            active: self.count() - completed,
            completed,
        }
    }

    /// Todos matching the current filter plus summary counts
    #[must_use]
    pub fn derived_view(&self) -> TodoView<'_> {
        TodoView {
            filter: self.filter,
            items: self
                .todos
                .iter()
                .filter(|todo| self.filter.matches(todo))
                .collect(),
            counts: self.counts(),
        }
    }
}
