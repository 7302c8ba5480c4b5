//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings in the user table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Open the create panel
    AddUser,
    /// Open the update panel for the selected user
    UpdateUser,
    /// Delete the selected user (after confirmation)
    DeleteUser,
    /// Re-fetch the listing
    Refresh,
    /// Select next user
    NextUser,
    /// Select previous user
    PrevUser,
    /// Quit application
    Quit,
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("a".to_string(), Action::AddUser);
        bindings.insert("u".to_string(), Action::UpdateUser);
        bindings.insert("Enter".to_string(), Action::UpdateUser);
        bindings.insert("d".to_string(), Action::DeleteUser);
        bindings.insert("Delete".to_string(), Action::DeleteUser);
        bindings.insert("r".to_string(), Action::Refresh);
        bindings.insert("j".to_string(), Action::NextUser);
        bindings.insert("Down".to_string(), Action::NextUser);
        bindings.insert("k".to_string(), Action::PrevUser);
        bindings.insert("Up".to_string(), Action::PrevUser);
        bindings.insert("q".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "u/Enter" or "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Prefer single chars over multi-char keys
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            b_simple.cmp(&a_simple).then_with(|| a.cmp(b))
        });
        keys.join("/")
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::AddUser, "add"),
            (Action::UpdateUser, "update"),
            (Action::DeleteUser, "delete"),
            (Action::Refresh, "refresh"),
            (Action::Quit, "quit"),
        ];

        hints
            .iter()
            .filter_map(|(action, label)| {
                let keys = self.format_keys(*action);
                let key = keys.split('/').next().filter(|k| !k.is_empty())?;
                Some(format!("[{key}]{label}"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
