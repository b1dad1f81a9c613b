//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Selection movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    JumpToTop,
    JumpToBottom,
    PageUp,
    PageDown,

    // Folder navigation
    Open,
    NavigateUp,
    NavigateHome,
    /// Jump to a breadcrumb segment (0 is the root).
    JumpToSegment(usize),

    // Entry actions
    ActionMenu,
    Upload,

    // UI toggles
    ToggleView,
    ToggleFocus,
    ToggleHelp,
    ToggleTheme,
    Search,

    // Other
    Cancel,
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            // Esc clears the search filter, notices, or closes overlays
            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Movement - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::MoveLeft,
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::MoveRight,

            // Movement - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,
            (KeyCode::Left, _) => KeyAction::MoveLeft,
            (KeyCode::Right, _) => KeyAction::MoveRight,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Page navigation
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::PageDown,

            // Folder navigation
            (KeyCode::Enter, _) => KeyAction::Open,
            (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::Open,
            (KeyCode::Backspace, _) => KeyAction::NavigateUp,
            (KeyCode::Char('-'), KeyModifiers::NONE) => KeyAction::NavigateUp,
            (KeyCode::Char('~'), _) => KeyAction::NavigateHome,
            (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
                KeyAction::JumpToSegment(c as usize - '1' as usize)
            }

            // Entry actions
            (KeyCode::Char('m'), KeyModifiers::NONE) => KeyAction::ActionMenu,
            (KeyCode::Char('.'), KeyModifiers::NONE) => KeyAction::ActionMenu,
            (KeyCode::Char('u'), KeyModifiers::NONE) => KeyAction::Upload,
            (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::Upload,

            // UI toggles
            (KeyCode::Char('v'), KeyModifiers::NONE) => KeyAction::ToggleView,
            (KeyCode::Tab, _) => KeyAction::ToggleFocus,
            (KeyCode::BackTab, _) => KeyAction::ToggleFocus,
            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,
            (KeyCode::Char('/'), KeyModifiers::NONE) => KeyAction::Search,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Movement",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move up/down" },
                KeyBinding { keys: "h/l ←/→", description: "Move left/right (grid)" },
                KeyBinding { keys: "g/G", description: "Jump to first/last" },
                KeyBinding { keys: "Ctrl-u/d", description: "Page up/down" },
            ],
        },
        HelpSection {
            title: "Folders",
            bindings: vec![
                KeyBinding { keys: "Enter/o", description: "Open folder or file" },
                KeyBinding { keys: "Backspace/-", description: "Parent folder" },
                KeyBinding { keys: "~", description: "Back to the drive root" },
                KeyBinding { keys: "1-9", description: "Jump to breadcrumb" },
            ],
        },
        HelpSection {
            title: "Files",
            bindings: vec![
                KeyBinding { keys: "m/.", description: "Actions for selection" },
                KeyBinding { keys: "u/n", description: "Upload / New" },
                KeyBinding { keys: "/", description: "Search this folder" },
                KeyBinding { keys: "Esc", description: "Clear search" },
            ],
        },
        HelpSection {
            title: "Display",
            bindings: vec![
                KeyBinding { keys: "v", description: "Toggle grid/list" },
                KeyBinding { keys: "Tab", description: "Focus sidebar/files" },
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_maps_to_segment() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('1'))),
            KeyAction::JumpToSegment(0)
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('3'))),
            KeyAction::JumpToSegment(2)
        );
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('0'))), KeyAction::None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Enter)), KeyAction::Open);
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Backspace)),
            KeyAction::NavigateUp
        );
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::ForceQuit
        );
    }

    #[test]
    fn test_help_sections_not_empty() {
        let sections = get_help_sections();
        assert_eq!(sections.len(), 4);
        assert!(sections.iter().all(|s| !s.bindings.is_empty()));
    }
}
