//! Tauri implementations of the tray controller seams.

use clipstack_tray::{
    ClickEvent, ContextMenu, MenuPresenter, MessageBridge, MessageChannel, MouseButton,
    PointerPosition, ProcessControl, TrayMessage, TrayMethod,
};
use tauri::tray::{MouseButton as TauriButton, MouseButtonState, TrayIconEvent};
use tauri::{AppHandle, Emitter, Manager, PhysicalPosition, Runtime};

/// Label of the webview window hosting the UI engine.
pub const MAIN_WINDOW_LABEL: &str = "main";

/// Sends tray messages to the main webview as Tauri events.
pub struct WebviewBridge<R: Runtime> {
    app: AppHandle<R>,
    label: String,
    event: String,
}

impl<R: Runtime> WebviewBridge<R> {
    /// Attaches to the main webview. Returns `None` if the UI engine's
    /// window does not exist.
    pub fn attach(app: &AppHandle<R>, channel: &MessageChannel) -> Option<Self> {
        let window = app.get_webview_window(MAIN_WINDOW_LABEL)?;
        Some(Self {
            app: app.clone(),
            label: window.label().to_string(),
            event: channel.event_name(),
        })
    }
}

impl<R: Runtime> MessageBridge for WebviewBridge<R> {
    fn send(&self, method: TrayMethod) {
        tracing::debug!(
            target_window = %self.label,
            event = %self.event,
            method = method.as_str(),
            "sending tray message"
        );
        if let Err(e) = self
            .app
            .emit_to(self.label.as_str(), &self.event, TrayMessage { method })
        {
            tracing::debug!(method = method.as_str(), "tray message dropped: {e}");
        }
    }
}

/// Menu presenter for a tray whose menu is attached natively.
///
/// The menu is bound to the tray icon with left-click presentation turned
/// off, so the OS itself pops it up at the pointer on a secondary press.
pub struct NativeMenuPresenter;

impl MenuPresenter for NativeMenuPresenter {
    fn present(&self, menu: &ContextMenu, anchor: Option<PointerPosition>) {
        tracing::debug!(
            entries = menu.entries().len(),
            x = anchor.map(|p| p.x),
            y = anchor.map(|p| p.y),
            "context menu presented by the status bar"
        );
    }
}

/// Terminates the app through its handle.
pub struct AppExit<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> AppExit<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> ProcessControl for AppExit<R> {
    fn terminate(&self) {
        self.app.exit(0);
    }
}

/// Converts a tray icon event into a click. Only button presses count;
/// releases, hover and double-click notifications yield `None`.
pub fn click_from_tray_event(event: &TrayIconEvent) -> Option<ClickEvent> {
    match event {
        TrayIconEvent::Click {
            button,
            button_state,
            position,
            ..
        } => click_from_parts(*button, *button_state, *position),
        _ => None,
    }
}

fn click_from_parts(
    button: TauriButton,
    state: MouseButtonState,
    position: PhysicalPosition<f64>,
) -> Option<ClickEvent> {
    if !matches!(state, MouseButtonState::Down) {
        return None;
    }
    let button = match button {
        TauriButton::Left => MouseButton::Primary,
        TauriButton::Right => MouseButton::Secondary,
        _ => MouseButton::Other,
    };
    Some(ClickEvent::at(button, position.x, position.y))
}
