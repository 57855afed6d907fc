//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Collection navigation
    /// Move the collection selection up. Default: k/↑
    MoveUp,
    /// Move the collection selection down. Default: j/↓
    MoveDown,

    // Focus navigation
    /// Move focus to the next region. Default: Tab
    FocusNext,
    /// Move focus to the previous region. Default: Shift+Tab
    FocusPrevious,
    /// Move focus to the next region, only inside the request pane. Default: n
    PaneFocusNext,
    /// Move focus to the previous region, only inside the request pane. Default: e
    PaneFocusPrevious,

    // Tab navigation
    /// Select the next request tab, only while the tab strip is focused. Default: i
    NextTab,
    /// Select the previous request tab, only while the tab strip is focused. Default: m
    PreviousTab,

    // New request dialog
    /// Open the new request dialog. Default: Ctrl+n
    NewRequest,
    /// Confirm the dialog and create the request. Default: Ctrl+k/Alt+Enter
    CreateRequest,
    /// Dismiss the dialog without a result. Default: Esc
    Cancel,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Parse an action name as written in the `[keybindings]` config table.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "move_up" => Some(Self::MoveUp),
            "move_down" => Some(Self::MoveDown),
            "focus_next" => Some(Self::FocusNext),
            "focus_previous" => Some(Self::FocusPrevious),
            "pane_focus_next" => Some(Self::PaneFocusNext),
            "pane_focus_previous" => Some(Self::PaneFocusPrevious),
            "next_tab" => Some(Self::NextTab),
            "previous_tab" => Some(Self::PreviousTab),
            "new_request" => Some(Self::NewRequest),
            "create_request" => Some(Self::CreateRequest),
            "cancel" => Some(Self::Cancel),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Short description shown in the footer.
    pub fn description(self) -> &'static str {
        match self {
            Self::MoveUp => "Up",
            Self::MoveDown => "Down",
            Self::FocusNext => "Focus next",
            Self::FocusPrevious => "Focus previous",
            Self::PaneFocusNext => "Next in pane",
            Self::PaneFocusPrevious => "Previous in pane",
            Self::NextTab => "Next tab",
            Self::PreviousTab => "Previous tab",
            Self::NewRequest => "New request",
            Self::CreateRequest => "Create",
            Self::Cancel => "Cancel",
            Self::Quit => "Quit",
        }
    }
}
