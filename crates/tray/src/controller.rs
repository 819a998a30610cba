//! Tray controller: startup sequence, click routing and action handlers.
//!
//! The controller is independent of the GUI backend. The host supplies three
//! seams:
//! - [`MessageBridge`] to reach the UI engine
//! - [`MenuPresenter`] to ask the OS to show the context menu
//! - [`ProcessControl`] to terminate the process
//!
//! The controller holds no mutable state. It is built once in the host's
//! startup hook and shared with the host's event callbacks.

use std::path::PathBuf;

use crate::bridge::{MessageBridge, MessageChannel, TrayMethod};
use crate::click::{self, ClickEvent, ClickOutcome, PointerPosition};
use crate::icon::{ICON_EDGE, IconLoader, TrayImage};
use crate::menu::{ContextMenu, MenuLabels, TrayAction};

/// Configuration for the tray controller.
#[derive(Debug, Clone)]
pub struct TrayConfig {
    /// Channel shared with the UI engine.
    pub channel: MessageChannel,
    /// Menu entry labels.
    pub labels: MenuLabels,
    /// Tooltip shown when hovering the icon.
    pub tooltip: String,
    /// Ordered icon candidates.
    pub icon_candidates: Vec<PathBuf>,
    /// Icon edge length in logical units.
    pub icon_edge: u32,
    /// Render the icon as a template image.
    pub template_icon: bool,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            channel: MessageChannel::default(),
            labels: MenuLabels::default(),
            tooltip: "ClipStack".into(),
            icon_candidates: Vec::new(),
            icon_edge: ICON_EDGE,
            template_icon: true,
        }
    }
}

impl TrayConfig {
    /// Default configuration with icon candidates under `resource_dir`.
    pub fn with_resource_dir(resource_dir: &std::path::Path) -> Self {
        Self {
            icon_candidates: IconLoader::for_resource_dir(resource_dir)
                .candidates()
                .to_vec(),
            ..Self::default()
        }
    }

    fn icon_loader(&self) -> IconLoader {
        IconLoader::new(self.icon_candidates.clone())
            .with_edge(self.icon_edge)
            .with_template(self.template_icon)
    }
}

/// Presents the context menu on behalf of the controller.
pub trait MenuPresenter: Send + Sync {
    /// Shows `menu` anchored to the tray icon, at `anchor` when known.
    fn present(&self, menu: &ContextMenu, anchor: Option<PointerPosition>);
}

/// Process-level operations.
pub trait ProcessControl: Send + Sync {
    /// Terminates the process immediately. No confirmation, no message to
    /// the UI engine.
    fn terminate(&self);
}

/// Startup failures. The host treats every variant as "run without a tray".
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("UI engine binding surface is not available")]
    EngineUnavailable,
}

/// Everything the host needs to create the tray icon.
pub struct TrayParts<B, P, X> {
    pub controller: TrayController<B, P, X>,
    pub icon: Option<TrayImage>,
    pub tooltip: String,
}

/// Whether the app should exit once its last window closes. The tray keeps
/// the process alive, so never.
pub fn should_terminate_after_last_window_closed() -> bool {
    false
}

/// Routes tray clicks and menu selections.
pub struct TrayController<B, P, X> {
    bridge: B,
    presenter: P,
    process: X,
    menu: ContextMenu,
}

impl<B, P, X> TrayController<B, P, X>
where
    B: MessageBridge,
    P: MenuPresenter,
    X: ProcessControl,
{
    /// Runs the startup sequence: attach the bridge, load the icon, build
    /// the menu.
    ///
    /// `bridge` is `None` when the UI engine never became available; the
    /// tray is skipped in that case.
    pub fn initialize(
        config: &TrayConfig,
        bridge: Option<B>,
        presenter: P,
        process: X,
    ) -> Result<TrayParts<B, P, X>, InitError> {
        let bridge = bridge.ok_or(InitError::EngineUnavailable)?;
        let icon = config.icon_loader().load();
        let menu = ContextMenu::build(&config.labels);

        tracing::debug!(
            channel = config.channel.name(),
            has_icon = icon.is_some(),
            "tray controller initialized"
        );

        Ok(TrayParts {
            controller: Self::new(bridge, presenter, process, menu),
            icon,
            tooltip: config.tooltip.clone(),
        })
    }

    pub fn new(bridge: B, presenter: P, process: X, menu: ContextMenu) -> Self {
        Self {
            bridge,
            presenter,
            process,
            menu,
        }
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    /// Handles a press on the tray icon.
    ///
    /// Secondary presses present the context menu, primary presses toggle
    /// the window. Anything else, including a missing event, is ignored.
    pub fn handle_click(&self, event: Option<&ClickEvent>) -> ClickOutcome {
        let outcome = click::route(event);
        match outcome {
            ClickOutcome::MenuPresented => {
                let anchor = event.and_then(|e| e.position);
                self.presenter.present(&self.menu, anchor);
            }
            ClickOutcome::ToggleSent => self.bridge.send(TrayMethod::ToggleWindow),
            ClickOutcome::Ignored => {}
        }
        tracing::trace!(?outcome, "tray click handled");
        outcome
    }

    /// Handles a native menu selection by entry id.
    pub fn handle_menu_selection(&self, id: &str) -> Option<TrayAction> {
        let Some(action) = self.menu.action_for_id(id) else {
            tracing::debug!(id, "ignoring unknown tray menu id");
            return None;
        };
        self.perform(action);
        Some(action)
    }

    /// Runs one action handler.
    pub fn perform(&self, action: TrayAction) {
        match action.method() {
            Some(method) => self.bridge.send(method),
            None => {
                tracing::info!(?action, "exit requested from tray");
                self.process.terminate();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::click::MouseButton;
    use crate::testing::{Harness, RecordingBridge, RecordingPresenter, RecordingProcess};

    #[test]
    fn primary_click_sends_toggle_once() {
        let h = Harness::new();
        let outcome = h
            .controller
            .handle_click(Some(&ClickEvent::new(MouseButton::Primary)));

        assert_eq!(outcome, ClickOutcome::ToggleSent);
        assert_eq!(h.sent(), vec![TrayMethod::ToggleWindow]);
        assert!(h.presented().is_empty());
        assert_eq!(h.terminations(), 0);
    }

    #[test]
    fn secondary_click_presents_menu_without_sending() {
        let h = Harness::new();
        let outcome = h
            .controller
            .handle_click(Some(&ClickEvent::at(MouseButton::Secondary, 640.0, 8.0)));

        assert_eq!(outcome, ClickOutcome::MenuPresented);
        assert!(h.sent().is_empty());
        assert_eq!(
            h.presented(),
            vec![Some(PointerPosition { x: 640.0, y: 8.0 })]
        );
    }

    #[test]
    fn missing_or_unknown_click_does_nothing() {
        let h = Harness::new();
        assert_eq!(h.controller.handle_click(None), ClickOutcome::Ignored);
        assert_eq!(
            h.controller
                .handle_click(Some(&ClickEvent::new(MouseButton::Other))),
            ClickOutcome::Ignored
        );
        assert!(h.sent().is_empty());
        assert!(h.presented().is_empty());
    }

    #[test]
    fn menu_actions_forward_to_bridge() {
        let h = Harness::new();
        h.controller.perform(TrayAction::ShowHistory);
        h.controller.perform(TrayAction::ClearHistory);
        h.controller.perform(TrayAction::ShowHistory);

        assert_eq!(
            h.sent(),
            vec![
                TrayMethod::ToggleWindow,
                TrayMethod::ClearHistory,
                TrayMethod::ToggleWindow,
            ]
        );
        assert_eq!(h.terminations(), 0);
    }

    #[test]
    fn perform_sends_each_action_method() {
        for action in TrayAction::ALL {
            let h = Harness::new();
            h.controller.perform(action);

            let expected: Vec<_> = action.method().into_iter().collect();
            assert_eq!(h.sent(), expected, "{action:?}");
            assert_eq!(h.terminations(), usize::from(action.method().is_none()));
        }
    }

    #[test]
    fn exit_terminates_without_messaging() {
        let h = Harness::new();
        h.controller.perform(TrayAction::Exit);
        assert_eq!(h.terminations(), 1);
        assert!(h.sent().is_empty());
    }

    #[test]
    fn exit_does_not_wait_on_prior_sends() {
        let h = Harness::new();
        h.controller.perform(TrayAction::ClearHistory);
        h.controller.perform(TrayAction::Exit);
        assert_eq!(h.terminations(), 1);

        let fresh = Harness::new();
        fresh.controller.perform(TrayAction::Exit);
        assert_eq!(fresh.terminations(), 1);
    }

    #[test]
    fn menu_selection_by_id() {
        let h = Harness::new();
        assert_eq!(
            h.controller.handle_menu_selection("clear_history"),
            Some(TrayAction::ClearHistory)
        );
        assert_eq!(h.controller.handle_menu_selection("bogus"), None);
        assert_eq!(h.sent(), vec![TrayMethod::ClearHistory]);
    }

    #[test]
    fn right_click_then_clear_history_scenario() {
        let h = Harness::new();
        h.controller
            .handle_click(Some(&ClickEvent::at(MouseButton::Secondary, 100.0, 0.0)));
        assert_eq!(h.presented().len(), 1);

        h.controller.handle_menu_selection("clear_history");

        assert_eq!(h.sent(), vec![TrayMethod::ClearHistory]);
        assert!(!h.sent().contains(&TrayMethod::ToggleWindow));
    }

    #[test]
    fn only_closed_set_reaches_bridge() {
        let h = Harness::new();
        let clicks = [
            None,
            Some(ClickEvent::new(MouseButton::Primary)),
            Some(ClickEvent::new(MouseButton::Secondary)),
            Some(ClickEvent::new(MouseButton::Other)),
        ];
        for click in &clicks {
            h.controller.handle_click(click.as_ref());
        }
        for action in TrayAction::ALL {
            h.controller.perform(action);
        }
        for entry in h.controller.menu().entries() {
            if let Some(action) = entry.action() {
                h.controller.handle_menu_selection(action.menu_id());
            }
        }

        let allowed: HashSet<&str> = ["toggleWindow", "clearHistory"].into();
        let sent = h.sent();
        assert!(!sent.is_empty());
        assert!(sent.iter().all(|m| allowed.contains(m.as_str())));
    }

    #[test]
    fn initialize_without_engine_is_skipped() {
        let result = TrayController::initialize(
            &TrayConfig::default(),
            None::<RecordingBridge>,
            RecordingPresenter::default(),
            RecordingProcess::default(),
        );
        assert!(matches!(result, Err(InitError::EngineUnavailable)));
    }

    #[test]
    fn missing_icon_still_toggles_window() {
        let tmp = tempfile::tempdir().unwrap();
        let config = TrayConfig::with_resource_dir(tmp.path());
        let bridge = RecordingBridge::default();
        let log = bridge.log();

        let parts = TrayController::initialize(
            &config,
            Some(bridge),
            RecordingPresenter::default(),
            RecordingProcess::default(),
        )
        .unwrap();
        assert!(parts.icon.is_none());
        assert_eq!(parts.tooltip, "ClipStack");

        parts
            .controller
            .handle_click(Some(&ClickEvent::new(MouseButton::Primary)));
        assert_eq!(*log.lock().unwrap(), vec![TrayMethod::ToggleWindow]);
    }

    #[test]
    fn initialize_builds_fixed_menu_and_loads_icon() {
        let tmp = tempfile::tempdir().unwrap();
        let asset = tmp.path().join(crate::icon::ASSET_ICON);
        std::fs::create_dir_all(asset.parent().unwrap()).unwrap();
        image::RgbaImage::from_pixel(64, 64, image::Rgba([0, 0, 0, 255]))
            .save(&asset)
            .unwrap();

        let parts = TrayController::initialize(
            &TrayConfig::with_resource_dir(tmp.path()),
            Some(RecordingBridge::default()),
            RecordingPresenter::default(),
            RecordingProcess::default(),
        )
        .unwrap();

        let icon = parts.icon.unwrap();
        assert_eq!(icon.edge, ICON_EDGE);
        assert_eq!(icon.width, ICON_EDGE * crate::icon::ICON_SCALE);
        assert_eq!(icon.width, icon.height);
        assert!(icon.template);
        assert_eq!(
            parts.controller.menu(),
            &ContextMenu::build(&MenuLabels::default())
        );
    }

    #[test]
    fn close_policy_never_terminates() {
        for _ in 0..3 {
            assert!(!should_terminate_after_last_window_closed());
        }
    }
}
