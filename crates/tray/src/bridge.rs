//! Outbound message channel to the UI engine.
//!
//! The tray never talks to the UI directly. Every user intent that the UI
//! engine owns (toggling the main window, clearing the history) is sent as a
//! method name over a single named channel. Sends are fire-and-forget: no
//! arguments, no reply, no delivery confirmation.

use std::sync::mpsc;

use serde::Serialize;

/// Identifier of the tray channel shared with the UI engine.
///
/// The frontend subscribes to [`MessageChannel::event_name`] of this value
/// (`apps/clipstack/dist/index.html`); change both together.
pub const CHANNEL_NAME: &str = "com.clipstack.tray";

/// Methods the tray may invoke on the UI engine.
///
/// This is the whole protocol surface; the transport underneath accepts any
/// string but nothing outside this enum can reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrayMethod {
    /// Show the main window if hidden, hide it otherwise.
    ToggleWindow,
    /// Drop every stored history entry.
    ClearHistory,
}

impl TrayMethod {
    pub const ALL: [TrayMethod; 2] = [TrayMethod::ToggleWindow, TrayMethod::ClearHistory];

    /// Wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            TrayMethod::ToggleWindow => "toggleWindow",
            TrayMethod::ClearHistory => "clearHistory",
        }
    }
}

impl std::fmt::Display for TrayMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload delivered to the UI engine for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrayMessage {
    pub method: TrayMethod,
}

/// A named, unidirectional channel to the UI engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageChannel {
    name: String,
}

impl Default for MessageChannel {
    fn default() -> Self {
        Self::new(CHANNEL_NAME)
    }
}

impl MessageChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Event name used on the webview transport.
    ///
    /// Webview event names only allow alphanumerics and `-`, `/`, `:`, `_`,
    /// so dots in the channel name are carried as colons.
    pub fn event_name(&self) -> String {
        self.name.replace('.', ":")
    }
}

/// Sending side of the tray channel.
///
/// Implementations must return immediately and must swallow delivery
/// failures: a receiver that is not attached yet is not an error.
pub trait MessageBridge: Send + Sync {
    fn send(&self, method: TrayMethod);
}

/// In-process bridge backed by a standard channel.
///
/// Useful for hosts that pump the UI engine from their own loop. Sends after
/// the receiver is dropped are discarded.
pub struct ChannelBridge {
    channel: MessageChannel,
    tx: mpsc::Sender<TrayMessage>,
}

impl ChannelBridge {
    /// Creates a bridge and the receiver the UI side should drain.
    pub fn new(channel: MessageChannel) -> (Self, mpsc::Receiver<TrayMessage>) {
        let (tx, rx) = mpsc::channel();
        (Self { channel, tx }, rx)
    }

    pub fn channel(&self) -> &MessageChannel {
        &self.channel
    }
}

impl MessageBridge for ChannelBridge {
    fn send(&self, method: TrayMethod) {
        tracing::debug!(
            channel = self.channel.name(),
            method = method.as_str(),
            "sending tray message"
        );
        if self.tx.send(TrayMessage { method }).is_err() {
            tracing::debug!(method = method.as_str(), "no receiver attached, message dropped");
        }
    }
}
