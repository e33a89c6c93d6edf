//! Invariants that hold over arbitrary action sequences.

#![allow(clippy::unwrap_used)] // Test code

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use tasklane_testing::{test_clock, test_epoch};
use todo::{
    Filter, SilentNotifier, Todo, TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState, TodoStore,
};

fn any_filter() -> impl Strategy<Value = Filter> {
    prop_oneof![Just(Filter::All), Just(Filter::Active), Just(Filter::Completed)]
}

// Small id range so commands usually hit existing todos
fn any_id() -> impl Strategy<Value = TodoId> {
    (1_u64..8).prop_map(TodoId::new)
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("   ".to_string()), "[ a-z]{1,12}"]
}

fn any_command() -> impl Strategy<Value = TodoAction> {
    prop_oneof![
        any_text().prop_map(|text| TodoAction::SetDraft { text }),
        Just(TodoAction::SubmitDraft),
        any_text().prop_map(|text| TodoAction::AddTodo { text }),
        any_id().prop_map(|id| TodoAction::DeleteTodo { id }),
        any_id().prop_map(|id| TodoAction::ToggleTodo { id }),
        any_id().prop_map(|id| TodoAction::BeginEdit { id }),
        any_text().prop_map(|text| TodoAction::UpdateEditBuffer { text }),
        Just(TodoAction::CommitEdit),
        Just(TodoAction::CancelEdit),
        any_filter().prop_map(|filter| TodoAction::SetFilter { filter }),
    ]
}

// Events sent straight to the store, as a replay would
fn any_event() -> impl Strategy<Value = TodoAction> {
    prop_oneof![
        (any_id(), any_text()).prop_map(|(id, text)| TodoAction::TodoAdded {
            todo: Todo::new(id, text, test_epoch()),
        }),
        (any_id(), any_text()).prop_map(|(id, text)| TodoAction::TodoRenamed { id, text }),
        any_id().prop_map(|id| TodoAction::TodoDeleted { id }),
    ]
}

fn any_action() -> impl Strategy<Value = TodoAction> {
    prop_oneof![4 => any_command(), 1 => any_event()]
}

fn new_store() -> TodoStore {
    let env = TodoEnvironment::new(Arc::new(test_clock()), Arc::new(SilentNotifier));
    TodoStore::new(TodoState::new(), TodoReducer::new(), env)
}

fn run(commands: Vec<TodoAction>) -> TodoStore {
    let mut store = new_store();
    for command in commands {
        store.send(command).unwrap();
    }
    store
}

proptest! {
    #[test]
    fn counts_always_add_up(commands in proptest::collection::vec(any_action(), 0..60)) {
        let store = run(commands);
        let counts = store.state(TodoState::counts);
        prop_assert_eq!(counts.active + counts.completed, counts.total);
    }

    #[test]
    fn ids_stay_unique_and_below_next_id(commands in proptest::collection::vec(any_action(), 0..60)) {
        let store = run(commands);
        store.state(|s| {
            let ids: HashSet<TodoId> = s.todos.iter().map(|t| t.id).collect();
            assert_eq!(ids.len(), s.todos.len());
            assert!(s.todos.iter().all(|t| t.id < s.next_id));
        });
    }

    #[test]
    fn texts_are_trimmed_and_non_empty(commands in proptest::collection::vec(any_action(), 0..60)) {
        let store = run(commands);
        store.state(|s| {
            for todo in &s.todos {
                assert!(!todo.text.is_empty());
                assert_eq!(todo.text.trim(), todo.text);
            }
        });
    }

    #[test]
    fn edit_session_targets_an_existing_todo(commands in proptest::collection::vec(any_action(), 0..60)) {
        let store = run(commands);
        store.state(|s| {
            if let Some(session) = &s.editing {
                assert!(s.exists(session.id));
            }
        });
    }

    #[test]
    fn toggle_twice_is_identity(
        commands in proptest::collection::vec(any_action(), 0..40),
        id in any_id(),
    ) {
        let mut store = run(commands);
        let before = store.state(Clone::clone);

        store.send(TodoAction::ToggleTodo { id }).unwrap();
        store.send(TodoAction::ToggleTodo { id }).unwrap();

        prop_assert_eq!(store.state(Clone::clone), before);
    }

    #[test]
    fn blank_add_changes_nothing(
        commands in proptest::collection::vec(any_action(), 0..40),
        blank in "[ \t]{0,6}",
    ) {
        let mut store = run(commands);
        let before = store.state(Clone::clone);

        store.send(TodoAction::AddTodo { text: blank }).unwrap();

        prop_assert_eq!(store.state(Clone::clone), before);
    }

    #[test]
    fn filter_view_is_a_subsequence(
        commands in proptest::collection::vec(any_action(), 0..60),
    ) {
        let store = run(commands);
        store.state(|s| {
            let view = s.derived_view();
            let positions: Vec<usize> = view
                .items
                .iter()
                .map(|item| s.todos.iter().position(|t| t.id == item.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert!(view.items.iter().all(|t| s.filter.matches(t)));
        });
    }
}
