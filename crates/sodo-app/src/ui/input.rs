use eframe::egui::{Event, InputState, Key};
use sodo_core::Direction;

use crate::action::{Action, ActionRequestQueue, AppAction, FlowAction, GridAction};

struct Trigger {
    key: Key,
    command: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool) -> Self {
        Self { key, command }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: FlowAction) -> Self {
        Self {
            trigger: Trigger::new(key, true),
            action: Action::Flow(action),
        }
    }

    const fn plain(key: Key, action: GridAction) -> Self {
        Self {
            trigger: Trigger::new(key, false),
            action: Action::App(AppAction::Grid(action)),
        }
    }
}

const SHORTCUTS: [Shortcut; 10] = [
    Shortcut::command(Key::N, FlowAction::NewGame),
    Shortcut::command(Key::H, FlowAction::RequestHint),
    Shortcut::command(Key::Enter, FlowAction::Check),
    Shortcut::plain(Key::ArrowUp, GridAction::MoveFocus(Direction::Up)),
    Shortcut::plain(Key::ArrowDown, GridAction::MoveFocus(Direction::Down)),
    Shortcut::plain(Key::ArrowLeft, GridAction::MoveFocus(Direction::Left)),
    Shortcut::plain(Key::ArrowRight, GridAction::MoveFocus(Direction::Right)),
    Shortcut::plain(Key::Escape, GridAction::ClearFocus),
    Shortcut::plain(Key::Backspace, GridAction::Backspace),
    Shortcut::plain(Key::Delete, GridAction::Delete),
];

/// Turns this frame's keyboard input into actions.
///
/// Every text event is one keystroke for the focused cell; pastes keep their
/// whole text so they can be sanitized as a unit.
pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.trigger.key) && i.modifiers.command == shortcut.trigger.command
        {
            action_queue.request(shortcut.action);
        }
    }

    for event in &i.events {
        match event {
            Event::Text(text) if !i.modifiers.command => {
                action_queue.request(GridAction::EnterText(text.clone()).into());
            }
            Event::Paste(text) => {
                action_queue.request(GridAction::Paste(text.clone()).into());
            }
            _ => {}
        }
    }
}
