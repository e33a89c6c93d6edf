//! Single-session todo list built on the Tasklane store.
//!
//! A user adds, edits, completes, deletes and filters short text items. All
//! state lives in memory for the lifetime of the process:
//!
//! - Commands are validated by [`TodoReducer`]; declined commands are silent
//!   no-ops
//! - Accepted commands become events that are applied to [`TodoState`]
//! - Success notifications are effects run by the store through a [`Notifier`]
//! - [`TodoState::derived_view`] computes the filtered list and counts on read
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use tasklane_core::environment::SystemClock;
//! use tasklane_runtime::Store;
//! use todo::{Filter, SilentNotifier, TodoAction, TodoEnvironment, TodoReducer, TodoState};
//!
//! # fn main() -> Result<(), tasklane_runtime::StoreError> {
//! let env = TodoEnvironment::new(Arc::new(SystemClock), Arc::new(SilentNotifier));
//! let mut store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!
//! store.send(TodoAction::AddTodo { text: "  Buy milk ".to_string() })?;
//! store.send(TodoAction::AddTodo { text: "   ".to_string() })?;
//! store.send(TodoAction::SetFilter { filter: Filter::Active })?;
//!
//! let texts = store.state(|s| {
//!     s.derived_view()
//!         .items
//!         .iter()
//!         .map(|t| t.text.clone())
//!         .collect::<Vec<_>>()
//! });
//! assert_eq!(texts, vec!["Buy milk"]);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod notify;
pub mod reducer;
pub mod render;
pub mod seed;
pub mod time_format;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use command::{Command, CommandError};
pub use config::Config;
pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier, SilentNotifier};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use time_format::format_relative_time;
pub use types::{EditSession, Filter, Todo, TodoAction, TodoId, TodoState};
pub use view::{TodoCounts, TodoView};

/// The todo store: state, reducer and environment wired together
pub type TodoStore = tasklane_runtime::Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;
