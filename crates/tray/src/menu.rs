//! Static context menu for the tray icon.

use crate::bridge::TrayMethod;

/// Actions that can be triggered from the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrayAction {
    /// Toggle the history window.
    ShowHistory,
    /// Clear the stored history.
    ClearHistory,
    /// Quit the application.
    Exit,
}

impl TrayAction {
    pub const ALL: [TrayAction; 3] = [
        TrayAction::ShowHistory,
        TrayAction::ClearHistory,
        TrayAction::Exit,
    ];

    /// Stable id the native menu reports back on selection.
    pub fn menu_id(self) -> &'static str {
        match self {
            TrayAction::ShowHistory => "show_history",
            TrayAction::ClearHistory => "clear_history",
            TrayAction::Exit => "exit",
        }
    }

    /// Resolves a native menu id back to its action.
    pub fn from_menu_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.menu_id() == id)
    }

    /// UI engine method this action forwards to, if any.
    ///
    /// `Exit` is handled by the host process and never crosses the channel.
    pub fn method(self) -> Option<TrayMethod> {
        match self {
            TrayAction::ShowHistory => Some(TrayMethod::ToggleWindow),
            TrayAction::ClearHistory => Some(TrayMethod::ClearHistory),
            TrayAction::Exit => None,
        }
    }
}

/// Display text for the menu entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLabels {
    pub show_history: String,
    pub clear_history: String,
    pub exit: String,
}

impl Default for MenuLabels {
    fn default() -> Self {
        Self {
            show_history: "履歴を表示".into(),
            clear_history: "履歴をクリア".into(),
            exit: "終了".into(),
        }
    }
}

impl MenuLabels {
    fn label_for(&self, action: TrayAction) -> &str {
        match action {
            TrayAction::ShowHistory => &self.show_history,
            TrayAction::ClearHistory => &self.clear_history,
            TrayAction::Exit => &self.exit,
        }
    }
}

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item { label: String, action: TrayAction },
    Separator,
}

impl MenuEntry {
    fn item(labels: &MenuLabels, action: TrayAction) -> Self {
        MenuEntry::Item {
            label: labels.label_for(action).to_string(),
            action,
        }
    }

    /// Action bound to this entry; separators have none.
    pub fn action(&self) -> Option<TrayAction> {
        match self {
            MenuEntry::Item { action, .. } => Some(*action),
            MenuEntry::Separator => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Item { label, .. } => Some(label),
            MenuEntry::Separator => None,
        }
    }
}

/// Context menu shown on secondary click. The entry order never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    entries: Vec<MenuEntry>,
}

impl ContextMenu {
    /// Builds the menu: show history, clear history, separator, exit.
    pub fn build(labels: &MenuLabels) -> Self {
        Self {
            entries: vec![
                MenuEntry::item(labels, TrayAction::ShowHistory),
                MenuEntry::item(labels, TrayAction::ClearHistory),
                MenuEntry::Separator,
                MenuEntry::item(labels, TrayAction::Exit),
            ],
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Looks up the action for a selected entry id, ignoring ids that do not
    /// belong to this menu.
    pub fn action_for_id(&self, id: &str) -> Option<TrayAction> {
        let action = TrayAction::from_menu_id(id)?;
        self.entries
            .iter()
            .any(|entry| entry.action() == Some(action))
            .then_some(action)
    }
}
