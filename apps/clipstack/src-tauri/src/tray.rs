use std::sync::Arc;

use clipstack_tray::{ContextMenu, TrayConfig, TrayController};
use tauri::image::Image;
use tauri::menu::{Menu, MenuBuilder};
use tauri::tray::TrayIconBuilder;
use tauri::{Manager, Runtime};

use crate::host::{self, AppExit, NativeMenuPresenter, WebviewBridge};

pub const TRAY_ID: &str = "clipstack-tray";

/// Creates the status-bar icon. Called once from the setup hook.
///
/// If the main webview is missing the app keeps running without a tray.
pub fn setup_tray(app: &tauri::App) -> anyhow::Result<()> {
    let handle = app.handle();

    let config = match app.path().resource_dir() {
        Ok(dir) => TrayConfig::with_resource_dir(&dir),
        Err(e) => {
            tracing::warn!("resource directory unavailable, tray icon has no image: {e}");
            TrayConfig::default()
        }
    };

    let bridge = WebviewBridge::attach(handle, &config.channel);
    let parts = match TrayController::initialize(
        &config,
        bridge,
        NativeMenuPresenter,
        AppExit::new(handle.clone()),
    ) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::info!("tray icon skipped: {e}");
            return Ok(());
        }
    };

    let menu = native_menu(app, parts.controller.menu())?;
    let controller = Arc::new(parts.controller);

    let mut builder = TrayIconBuilder::with_id(TRAY_ID)
        .tooltip(&parts.tooltip)
        .menu(&menu)
        .show_menu_on_left_click(false);

    if let Some(icon) = parts.icon {
        builder = builder
            .icon(Image::new_owned(icon.rgba, icon.width, icon.height))
            .icon_as_template(icon.template);
    }

    let on_menu = controller.clone();
    builder
        .on_menu_event(move |_app, event| {
            on_menu.handle_menu_selection(event.id().as_ref());
        })
        .on_tray_icon_event(move |_tray, event| {
            let click = host::click_from_tray_event(&event);
            controller.handle_click(click.as_ref());
        })
        .build(app)?;

    tracing::info!("tray icon ready");
    Ok(())
}

/// Mirrors the controller's menu model as a native menu, using each
/// action's id so selections map back without a lookup table.
fn native_menu<R: Runtime, M: Manager<R>>(
    manager: &M,
    menu: &ContextMenu,
) -> tauri::Result<Menu<R>> {
    let mut builder = MenuBuilder::new(manager);
    for entry in menu.entries() {
        builder = match (entry.action(), entry.label()) {
            (Some(action), Some(label)) => builder.text(action.menu_id(), label),
            _ => builder.separator(),
        };
    }
    builder.build()
}
