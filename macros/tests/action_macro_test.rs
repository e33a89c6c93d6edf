//! Tests for #[derive(Action)] macro

use tasklane_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum NoteAction {
    #[command]
    Write { text: String },

    #[command]
    Clear,

    #[command]
    Pin(u64),

    #[event]
    Written { id: u64, text: String },

    #[event]
    Cleared,

    #[event]
    Pinned(u64),

    Redraw,
}

#[test]
fn test_is_command() {
    let action = NoteAction::Write {
        text: "Test".to_string(),
    };
    assert!(action.is_command());
    assert!(!action.is_event());
}

#[test]
fn test_is_event() {
    let action = NoteAction::Written {
        id: 1,
        text: "Test".to_string(),
    };
    assert!(!action.is_command());
    assert!(action.is_event());
}

#[test]
fn test_event_type() {
    assert_eq!(NoteAction::Cleared.event_type(), "Cleared.v1");
    assert_eq!(NoteAction::Pinned(4).event_type(), "Pinned.v1");
    // Commands don't have event types
    assert_eq!(NoteAction::Clear.event_type(), "unknown");
}

#[test]
fn test_untagged_variant_is_neither() {
    let action = NoteAction::Redraw;
    assert!(!action.is_command());
    assert!(!action.is_event());
    assert_eq!(action.event_type(), "unknown");
}

#[test]
fn test_name_covers_every_shape() {
    let cases = [
        (NoteAction::Write { text: String::new() }, "Write"),
        (NoteAction::Clear, "Clear"),
        (NoteAction::Pin(1), "Pin"),
        (NoteAction::Written { id: 1, text: String::new() }, "Written"),
        (NoteAction::Redraw, "Redraw"),
    ];

    for (action, expected) in cases {
        assert_eq!(action.name(), expected);
    }
}

#[test]
fn test_all_commands_identified() {
    let commands = vec![
        NoteAction::Write {
            text: "Test".to_string(),
        },
        NoteAction::Clear,
        NoteAction::Pin(7),
    ];

    for cmd in commands {
        assert!(cmd.is_command(), "Expected command: {cmd:?}");
        assert!(!cmd.is_event(), "Should not be event: {cmd:?}");
    }
}
