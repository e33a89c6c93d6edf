//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of todo items plus the transient
//! input state around it: the draft for the next todo, the edit session for
//! a todo being renamed, and the filter applied to the displayed list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasklane_macros::Action;
use thiserror::Error;

/// Unique identifier for a todo item
///
/// Ids are handed out in increasing order and never reused, even after the
/// todo they named has been deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// The first id handed out in a session
    pub const FIRST: Self = Self(1);

    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id following this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Trimmed, non-empty description
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new, not yet completed todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }
}

/// Which todos the derived view shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every todo
    #[default]
    All,
    /// Todos not yet completed
    Active,
    /// Completed todos
    Completed,
}

impl Filter {
    /// Every filter, in display order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns whether `todo` belongs in a view with this filter
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }

    /// Lowercase name, as typed by the user
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter `{0}`; expected all|active|completed")]
pub struct ParseFilterError(pub String);

impl std::str::FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// The todo currently being renamed and its uncommitted text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    /// Todo being edited
    pub id: TodoId,
    /// Uncommitted text, kept verbatim until commit
    pub buffer: String,
}

/// State of the todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos in insertion order
    pub todos: Vec<Todo>,
    /// Text typed for the next todo
    pub draft: String,
    /// Active edit session, if any
    pub editing: Option<EditSession>,
    /// Filter applied to the derived view
    pub filter: Filter,
    /// Id the next added todo receives
    pub next_id: TodoId,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            draft: String::new(),
            editing: None,
            filter: Filter::All,
            next_id: TodoId::FIRST,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns the number of todos not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Returns a mutable todo by ID
    pub fn get_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns true if `id` is the target of the active edit session
    #[must_use]
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing.as_ref().is_some_and(|session| session.id == id)
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions representing commands and events for todos
///
/// Commands come from the user and may be declined. Events record a change
/// to the collection and are always applied; the reducer emits them for
/// accepted commands, and the bootstrap seed sends them directly.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: Replace the draft text
    #[command]
    SetDraft {
        /// New draft text, kept verbatim
        text: String,
    },

    /// Command: Add the current draft as a todo
    #[command]
    SubmitDraft,

    /// Command: Add a todo
    #[command]
    AddTodo {
        /// Raw text; trimmed before use
        text: String,
    },

    /// Command: Delete a todo
    #[command]
    DeleteTodo {
        /// Todo to delete
        id: TodoId,
    },

    /// Command: Flip a todo's completed flag
    #[command]
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Command: Start renaming a todo
    #[command]
    BeginEdit {
        /// Todo to rename
        id: TodoId,
    },

    /// Command: Replace the edit buffer
    #[command]
    UpdateEditBuffer {
        /// New buffer text, kept verbatim
        text: String,
    },

    /// Command: Apply the edit buffer to the todo being edited
    #[command]
    CommitEdit,

    /// Command: Drop the edit session
    #[command]
    CancelEdit,

    /// Command: Change the view filter
    #[command]
    SetFilter {
        /// New filter
        filter: Filter,
    },

    // ========== Events ==========
    /// Event: Todo was added
    #[event]
    TodoAdded {
        /// The new todo
        todo: Todo,
    },

    /// Event: Todo was deleted
    #[event]
    TodoDeleted {
        /// Todo identifier
        id: TodoId,
    },

    /// Event: Todo completion changed
    #[event]
    TodoToggled {
        /// Todo identifier
        id: TodoId,
        /// Completed flag after the change
        completed: bool,
    },

    /// Event: Todo text changed
    #[event]
    TodoRenamed {
        /// Todo identifier
        id: TodoId,
        /// New trimmed text
        text: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use tasklane_testing::test_epoch;

    #[test]
    fn todo_id_display_and_parse() {
        let id = TodoId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<TodoId>().unwrap(), id);
        assert_eq!(" #42 ".parse::<TodoId>().unwrap(), id);
        assert!("forty".parse::<TodoId>().is_err());
    }

    #[test]
    fn todo_new_is_active() {
        let todo = Todo::new(TodoId::new(1), "Test todo".to_string(), test_epoch());

        assert_eq!(todo.id, TodoId::new(1));
        assert_eq!(todo.text, "Test todo");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, test_epoch());
    }

    #[test]
    fn filter_parse_and_matches() {
        assert_eq!("Active".parse::<Filter>().unwrap(), Filter::Active);
        assert_eq!(" completed ".parse::<Filter>().unwrap(), Filter::Completed);
        let err = "done".parse::<Filter>().unwrap_err();
        assert!(err.to_string().contains("expected all|active|completed"));

        let mut todo = Todo::new(TodoId::new(1), "x".to_string(), test_epoch());
        assert!(Filter::All.matches(&todo));
        assert!(Filter::Active.matches(&todo));
        assert!(!Filter::Completed.matches(&todo));

        todo.completed = true;
        assert!(Filter::All.matches(&todo));
        assert!(!Filter::Active.matches(&todo));
        assert!(Filter::Completed.matches(&todo));
    }

    #[test]
    fn filter_serializes_lowercase() {
        let json = serde_json::to_value(Filter::Completed).unwrap();
        assert_eq!(json, "completed");
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn todo_state_counts() {
        let mut state = TodoState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.next_id, TodoId::FIRST);

        state
            .todos
            .push(Todo::new(TodoId::new(1), "Todo 1".to_string(), test_epoch()));
        let mut done = Todo::new(TodoId::new(2), "Todo 2".to_string(), test_epoch());
        done.completed = true;
        state.todos.push(done);

        assert_eq!(state.count(), 2);
        assert_eq!(state.active_count(), 1);
        assert_eq!(state.completed_count(), 1);
        assert!(state.exists(TodoId::new(2)));
        assert!(!state.exists(TodoId::new(3)));
    }

    #[test]
    fn todo_action_roles() {
        let command = TodoAction::AddTodo {
            text: "Test".to_string(),
        };
        assert!(command.is_command());
        assert!(!command.is_event());

        let event = TodoAction::TodoDeleted { id: TodoId::new(1) };
        assert!(event.is_event());
        assert_eq!(event.event_type(), "TodoDeleted.v1");
        assert_eq!(event.name(), "TodoDeleted");
    }
}
