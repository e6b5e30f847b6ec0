use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps key presses to dashboard actions.
///
/// Modal bindings are consulted instead of the regular table while an
/// alert is open.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
    modal_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );
        register(
            Action::ToggleTheme,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::FocusNext,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        register(
            Action::FocusPrevious,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(
            Action::FocusPrevious,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            false,
        );
        register(
            Action::Submit,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Action::WeatherHere,
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::OpenMap,
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::PreviousCategory,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NextCategory,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            true,
        );
        register(
            Action::ClearInput,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            true,
        );

        let modal_bindings = vec![
            (
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                Action::Dismiss,
            ),
            (
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                Action::Dismiss,
            ),
            (
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                Action::Quit,
            ),
        ];
        display_bindings.insert(Action::Dismiss, modal_bindings[0].0);

        Self {
            display_bindings,
            input_bindings,
            modal_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        Self::lookup(&self.input_bindings, key)
    }

    pub fn find_modal_action(&self, key: KeyEvent) -> Option<Action> {
        Self::lookup(&self.modal_bindings, key)
    }

    fn lookup(bindings: &[(KeyEvent, Action)], key: KeyEvent) -> Option<Action> {
        bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}
