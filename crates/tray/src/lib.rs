//! Status-bar icon controller for ClipStack.
//!
//! Owns the tray icon's behavior: which image it shows, what its context
//! menu contains, how left and right clicks are told apart, and which
//! messages are forwarded to the UI engine.
//!
//! The UI engine is reached through a single named channel:
//! - [`TrayMethod::ToggleWindow`]: primary click, or "show history" in the menu
//! - [`TrayMethod::ClearHistory`]: "clear history" in the menu
//!
//! "Exit" never crosses the channel; it terminates the process directly.
//!
//! # Platform notes
//! - The crate has no GUI backend dependency. The host implements
//!   [`MessageBridge`], [`MenuPresenter`] and [`ProcessControl`].
//! - All entry points are expected to run on the host's event thread.

mod bridge;
mod click;
mod controller;
mod icon;
mod menu;

#[cfg(test)]
mod testing;

pub use bridge::{
    CHANNEL_NAME, ChannelBridge, MessageBridge, MessageChannel, TrayMessage, TrayMethod,
};
pub use click::{ClickEvent, ClickOutcome, MouseButton, PointerPosition};
pub use controller::{
    InitError, MenuPresenter, ProcessControl, TrayConfig, TrayController, TrayParts,
    should_terminate_after_last_window_closed,
};
pub use icon::{ASSET_ICON, ICON_EDGE, ICON_SCALE, IconError, IconLoader, NATIVE_ICON, TrayImage};
pub use menu::{ContextMenu, MenuEntry, MenuLabels, TrayAction};
