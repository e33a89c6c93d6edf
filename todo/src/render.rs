//! Plain-text rendering of the todo list.

use crate::time_format::format_relative_time;
use crate::types::{Filter, TodoState};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Shown when no todo matches the filter
pub const EMPTY_PLACEHOLDER: &str = "No todos found. Add one above!";

/// Renders counts, filter tabs and the filtered list
///
/// Creation times are converted into the zone of `now` before formatting.
#[must_use]
pub fn render<Tz>(state: &TodoState, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let view = state.derived_view();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Total: {}  Active: {}  Completed: {}",
        view.counts.total, view.counts.active, view.counts.completed
    );

    let tabs: Vec<String> = Filter::ALL
        .iter()
        .map(|&filter| {
            if filter == view.filter {
                format!("[{filter}]")
            } else {
                filter.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "Filter: {}", tabs.join(" "));

    if !state.draft.is_empty() {
        let _ = writeln!(out, "Draft: {}", state.draft);
    }

    if view.is_empty() {
        let _ = writeln!(out, "  {EMPTY_PLACEHOLDER}");
        return out;
    }

    for todo in view.items {
        let mark = if todo.completed { 'x' } else { ' ' };
        let created = todo.created_at.with_timezone(&now.timezone());
        let when = format_relative_time(&created, now);

        match state.editing.as_ref().filter(|s| s.id == todo.id) {
            Some(session) => {
                let _ = writeln!(
                    out,
                    "  [{mark}] #{} (editing) {}  ({when})",
                    todo.id, session.buffer
                );
            },
            None => {
                let _ = writeln!(out, "  [{mark}] #{} {}  ({when})", todo.id, todo.text);
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EditSession, Todo, TodoId};
    use chrono::{Duration, Utc};
    use tasklane_testing::test_epoch;

    #[test]
    fn empty_list_shows_placeholder() {
        let out = render(&TodoState::new(), &test_epoch());
        assert!(out.starts_with("Total: 0  Active: 0  Completed: 0\n"));
        assert!(out.contains("Filter: [all] active completed"));
        assert!(out.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn lists_filtered_items_with_times() {
        let mut state = TodoState::new();
        let mut done = Todo::new(TodoId::new(1), "Read".to_string(), test_epoch());
        done.completed = true;
        state.todos.push(done);
        state
            .todos
            .push(Todo::new(TodoId::new(2), "Write".to_string(), test_epoch()));
        state.filter = Filter::Active;

        let now: DateTime<Utc> = test_epoch() + Duration::days(1);
        let out = render(&state, &now);

        assert!(out.contains("Total: 2  Active: 1  Completed: 1"));
        assert!(out.contains("Filter: all [active] completed"));
        assert!(out.contains("  [ ] #2 Write  (Yesterday at 12:00 AM)"));
        assert!(!out.contains("Read"));
    }

    #[test]
    fn shows_edit_buffer_and_draft() {
        let mut state = TodoState::new();
        state
            .todos
            .push(Todo::new(TodoId::new(1), "Read".to_string(), test_epoch()));
        state.editing = Some(EditSession {
            id: TodoId::new(1),
            buffer: "Read more".to_string(),
        });
        state.draft = "Next".to_string();

        let out = render(&state, &test_epoch());
        assert!(out.contains("Draft: Next"));
        assert!(out.contains("#1 (editing) Read more"));
    }
}
