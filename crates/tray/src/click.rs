//! Click events on the tray icon and how they are routed.

/// Mouse button that triggered a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left click.
    Primary,
    /// Right click or control-click.
    Secondary,
    /// Middle or any extra button.
    Other,
}

/// Pointer location in physical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// A button press on the tray icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub position: Option<PointerPosition>,
}

impl ClickEvent {
    pub fn new(button: MouseButton) -> Self {
        Self {
            button,
            position: None,
        }
    }

    pub fn at(button: MouseButton, x: f64, y: f64) -> Self {
        Self {
            button,
            position: Some(PointerPosition { x, y }),
        }
    }
}

/// What the disambiguator decided to do with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No identifiable event, or a button the tray does not react to.
    Ignored,
    /// The context menu was handed to the presenter.
    MenuPresented,
    /// `toggleWindow` was sent to the UI engine.
    ToggleSent,
}

/// Routing decision for a click, before any side effect runs.
pub(crate) fn route(event: Option<&ClickEvent>) -> ClickOutcome {
    match event.map(|e| e.button) {
        Some(MouseButton::Secondary) => ClickOutcome::MenuPresented,
        Some(MouseButton::Primary) => ClickOutcome::ToggleSent,
        Some(MouseButton::Other) | None => ClickOutcome::Ignored,
    }
}
