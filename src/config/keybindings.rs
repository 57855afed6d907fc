//! Keyboard bindings configuration.
//!
//! Bindings map normalized key events to [`KeyAction`]s. Defaults can be
//! overridden from the `[keybindings]` config table, which maps key strings
//! such as `"ctrl+k"` or `"i"` to action names such as `"next_tab"`.

use crate::config::ConfigError;
use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Bind `key` to `action`, replacing any existing binding for that key.
    pub fn insert(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(normalize(key), action);
    }

    /// First key bound to `action`, rendered as a key string (for hints).
    ///
    /// Picks the shortest string so hints stay compact and stable.
    pub fn key_for(&self, action: KeyAction) -> Option<String> {
        self.bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| key_event_to_string(k))
            .filter(|s| !s.is_empty())
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }

    /// Apply `key string -> action name` overrides on top of these bindings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyBinding`] for an unparsable key or an
    /// unknown action name. No overrides are applied in that case.
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut parsed = Vec::with_capacity(overrides.len());
        for (key, action_name) in overrides {
            let event = parse_key(key).ok_or_else(|| ConfigError::InvalidKeyBinding {
                key: key.clone(),
                reason: "unrecognized key".to_string(),
            })?;
            let action =
                KeyAction::from_name(action_name).ok_or_else(|| ConfigError::InvalidKeyBinding {
                    key: key.clone(),
                    reason: format!("unknown action '{action_name}'"),
                })?;
            parsed.push((event, action));
        }
        for (event, action) in parsed {
            self.insert(event, action);
        }
        Ok(self)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Collection navigation
        bindings.insert(key(KeyCode::Up), KeyAction::MoveUp);
        bindings.insert(key(KeyCode::Char('k')), KeyAction::MoveUp);
        bindings.insert(key(KeyCode::Down), KeyAction::MoveDown);
        bindings.insert(key(KeyCode::Char('j')), KeyAction::MoveDown);

        // Focus switching
        bindings.insert(key(KeyCode::Tab), KeyAction::FocusNext);
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::FocusPrevious,
        );
        bindings.insert(key(KeyCode::Char('n')), KeyAction::PaneFocusNext);
        bindings.insert(key(KeyCode::Char('e')), KeyAction::PaneFocusPrevious);

        // Tab navigation
        bindings.insert(key(KeyCode::Char('i')), KeyAction::NextTab);
        bindings.insert(key(KeyCode::Char('m')), KeyAction::PreviousTab);

        // New request dialog
        bindings.insert(ctrl('n'), KeyAction::NewRequest);
        bindings.insert(ctrl('k'), KeyAction::CreateRequest);
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT),
            KeyAction::CreateRequest,
        );
        bindings.insert(key(KeyCode::Esc), KeyAction::Cancel);

        // Application
        bindings.insert(key(KeyCode::Char('q')), KeyAction::Quit);
        bindings.insert(ctrl('c'), KeyAction::Quit);

        bindings
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Strip event kind/state and the implicit SHIFT on characters.
///
/// Terminals report `G` as `Char('G')` with SHIFT; the case already
/// carries that information.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

/// Parse a key string like `"ctrl+k"`, `"alt+enter"`, `"i"` or `"esc"`.
pub fn parse_key(s: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = s.split('+').collect();
    // "ctrl++" binds the plus key
    if s.ends_with("++") {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }
    let (name, mods) = parts.split_last()?;

    for m in mods {
        match m.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match name.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    let n = name.strip_prefix('f').or_else(|| name.strip_prefix('F'))?;
                    KeyCode::F(n.parse().ok()?)
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Render a key event as a key string (inverse of [`parse_key`]).
pub fn key_event_to_string(key: &KeyEvent) -> String {
    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        parts.push("shift".to_string());
    }

    let name = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => return String::new(),
    };

    parts.push(name);
    parts.join("+")
}
