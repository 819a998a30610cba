//! Window and process lifecycle policy.

use clipstack_tray::should_terminate_after_last_window_closed;
use tauri::{AppHandle, RunEvent, Runtime, Window, WindowEvent};

use crate::host::MAIN_WINDOW_LABEL;

/// Closing the main window hides it, keeping the webview attached to the
/// tray channel.
pub fn on_window_event<R: Runtime>(window: &Window<R>, event: &WindowEvent) {
    if let WindowEvent::CloseRequested { api, .. } = event {
        if window.label() == MAIN_WINDOW_LABEL {
            api.prevent_close();
            if let Err(e) = window.hide() {
                tracing::warn!("failed to hide main window: {e}");
            }
        }
    }
}

/// Keeps the process alive when the last window goes away. Explicit exits
/// carry a code and pass through.
pub fn on_run_event<R: Runtime>(_app: &AppHandle<R>, event: RunEvent) {
    if let RunEvent::ExitRequested { code, api, .. } = &event {
        if should_prevent_exit(*code) {
            tracing::debug!("last window closed, staying resident in the status bar");
            api.prevent_exit();
        }
    }
}

/// An exit request without a code comes from the last window closing; one
/// with a code is an explicit exit and is never blocked.
fn should_prevent_exit(code: Option<i32>) -> bool {
    code.is_none() && !should_terminate_after_last_window_closed()
}
