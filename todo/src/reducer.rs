//! Reducer logic for the todo list.
//!
//! Validate commands, produce events, and apply events to update state.
//! Every failed validation is a silent no-op: the command is logged at
//! debug level and the state is left untouched.

use crate::notify::{Notifier, TODO_ADDED, TODO_DELETED, TODO_UPDATED};
use crate::types::{EditSession, Todo, TodoAction, TodoId, TodoState};
use std::sync::Arc;
use tasklane_core::{effect::Effect, environment::Clock, reducer::Reducer, smallvec, SmallVec};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Receives success messages
    pub notifier: Arc<dyn Notifier>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, notifier: Arc<dyn Notifier>) -> Self {
        Self { clock, notifier }
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an event to state, returning whether it changed anything
    ///
    /// Events that would break a state invariant are refused: a `TodoAdded`
    /// must carry an id at or past `next_id` with trimmed, non-empty text, and
    /// a `TodoRenamed` must carry trimmed, non-empty text.
    fn apply_event(state: &mut TodoState, event: TodoAction) -> bool {
        match event {
            TodoAction::TodoAdded { todo } => {
                if todo.id < state.next_id || state.exists(todo.id) {
                    tracing::warn!(id = %todo.id, next_id = %state.next_id, "Refusing TodoAdded: id already handed out");
                    return false;
                }
                if !is_valid_text(&todo.text) {
                    tracing::warn!(id = %todo.id, "Refusing TodoAdded: text is blank or untrimmed");
                    return false;
                }
                state.next_id = todo.id.next();
                state.todos.push(todo);
                true
            },
            TodoAction::TodoDeleted { id } => {
                let before = state.todos.len();
                state.todos.retain(|t| t.id != id);
                if state.is_editing(id) {
                    state.editing = None;
                }
                state.todos.len() != before
            },
            TodoAction::TodoToggled { id, completed } => state.get_mut(id).is_some_and(|todo| {
                todo.completed = completed;
                true
            }),
            TodoAction::TodoRenamed { id, text } => {
                if !is_valid_text(&text) {
                    tracing::warn!(%id, "Refusing TodoRenamed: text is blank or untrimmed");
                    return false;
                }
                state.get_mut(id).is_some_and(|todo| {
                    todo.text = text;
                    true
                })
            },
            // Commands are not applied to state
            TodoAction::SetDraft { .. }
            | TodoAction::SubmitDraft
            | TodoAction::AddTodo { .. }
            | TodoAction::DeleteTodo { .. }
            | TodoAction::ToggleTodo { .. }
            | TodoAction::BeginEdit { .. }
            | TodoAction::UpdateEditBuffer { .. }
            | TodoAction::CommitEdit
            | TodoAction::CancelEdit
            | TodoAction::SetFilter { .. } => false,
        }
    }

    fn notify(env: &TodoEnvironment, message: &'static str) -> Effect<TodoAction> {
        let notifier = Arc::clone(&env.notifier);
        Effect::fire_and_forget(move || notifier.success(message))
    }

    fn declined(command: &'static str, reason: &'static str) -> SmallVec<[Effect<TodoAction>; 4]> {
        tracing::debug!(command, reason, "Command declined");
        SmallVec::new()
    }

    fn not_found(command: &'static str, id: TodoId) -> SmallVec<[Effect<TodoAction>; 4]> {
        tracing::debug!(command, %id, "Command declined: todo not found");
        SmallVec::new()
    }
}

fn is_valid_text(text: &str) -> bool {
    !text.is_empty() && text.trim() == text
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per command; splitting hides the state machine
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            TodoAction::SetDraft { text } => {
                state.draft = text;
                SmallVec::new()
            },

            TodoAction::SubmitDraft => smallvec![Effect::send(TodoAction::AddTodo {
                text: state.draft.clone(),
            })],

            TodoAction::AddTodo { text } => {
                let text = text.trim();
                if text.is_empty() {
                    return Self::declined("AddTodo", "text is empty");
                }

                let todo = Todo::new(state.next_id, text.to_string(), env.clock.now());
                if !Self::apply_event(state, TodoAction::TodoAdded { todo }) {
                    return Self::declined("AddTodo", "no id left to hand out");
                }
                state.draft.clear();

                smallvec![Self::notify(env, TODO_ADDED)]
            },

            TodoAction::DeleteTodo { id } => {
                if !state.exists(id) {
                    return Self::not_found("DeleteTodo", id);
                }

                Self::apply_event(state, TodoAction::TodoDeleted { id });

                smallvec![Self::notify(env, TODO_DELETED)]
            },

            TodoAction::ToggleTodo { id } => {
                let Some(todo) = state.get(id) else {
                    return Self::not_found("ToggleTodo", id);
                };

                let completed = !todo.completed;
                Self::apply_event(state, TodoAction::TodoToggled { id, completed });

                SmallVec::new()
            },

            TodoAction::BeginEdit { id } => {
                let Some(todo) = state.get(id) else {
                    return Self::not_found("BeginEdit", id);
                };

                let session = EditSession {
                    id,
                    buffer: todo.text.clone(),
                };
                if let Some(previous) = state.editing.replace(session).filter(|s| s.id != id) {
                    tracing::debug!(
                        discarded = %previous.id,
                        started = %id,
                        "Discarding uncommitted edit session"
                    );
                }

                SmallVec::new()
            },

            TodoAction::UpdateEditBuffer { text } => {
                let Some(session) = state.editing.as_mut() else {
                    return Self::declined("UpdateEditBuffer", "no edit session");
                };

                session.buffer = text;
                SmallVec::new()
            },

            TodoAction::CommitEdit => {
                let Some(session) = state.editing.take() else {
                    return Self::declined("CommitEdit", "no edit session");
                };

                let text = session.buffer.trim();
                if text.is_empty() {
                    return Self::declined("CommitEdit", "buffer is empty");
                }
                if !state.exists(session.id) {
                    return Self::not_found("CommitEdit", session.id);
                }

                Self::apply_event(
                    state,
                    TodoAction::TodoRenamed {
                        id: session.id,
                        text: text.to_string(),
                    },
                );

                smallvec![Self::notify(env, TODO_UPDATED)]
            },

            TodoAction::CancelEdit => {
                state.editing = None;
                SmallVec::new()
            },

            TodoAction::SetFilter { filter } => {
                state.filter = filter;
                SmallVec::new()
            },

            // ========== Events ==========
            TodoAction::TodoAdded { .. }
            | TodoAction::TodoDeleted { .. }
            | TodoAction::TodoToggled { .. }
            | TodoAction::TodoRenamed { .. } => {
                // Sent directly by the bootstrap seed or a replay
                let name = action.name();
                if !Self::apply_event(state, action) {
                    tracing::debug!(event = name, "Event left state unchanged");
                }
                SmallVec::new()
            },
        }
    }
}
