//! Sample todos loaded at startup.

use crate::types::{Todo, TodoAction, TodoId};
use chrono::{DateTime, Utc};

/// Text and completed flag of each sample todo, in display order
pub const SAMPLE_TODOS: [(&str, bool); 3] = [
    ("Learn React hooks ( useState, useEffect )", true),
    ("Build a TODO app", false),
    ("Master Tailwind CSS", false),
];

/// Returns `TodoAdded` events for the sample todos, ids starting at 1
///
/// Sending these to a fresh store leaves `next_id` at 4 and emits no
/// notifications.
#[must_use]
pub fn sample_todos(now: DateTime<Utc>) -> Vec<TodoAction> {
    (1..)
        .zip(SAMPLE_TODOS)
        .map(|(id, (text, completed))| {
            let mut todo = Todo::new(TodoId::new(id), text.to_string(), now);
            todo.completed = completed;
            TodoAction::TodoAdded { todo }
        })
        .collect()
}
