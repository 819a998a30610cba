//! Recording fakes for the controller seams.

use std::sync::{Arc, Mutex};

use crate::bridge::{MessageBridge, TrayMethod};
use crate::click::PointerPosition;
use crate::controller::{MenuPresenter, ProcessControl, TrayController};
use crate::menu::{ContextMenu, MenuLabels};

#[derive(Default)]
pub struct RecordingBridge {
    sent: Arc<Mutex<Vec<TrayMethod>>>,
}

impl RecordingBridge {
    pub fn log(&self) -> Arc<Mutex<Vec<TrayMethod>>> {
        self.sent.clone()
    }
}

impl MessageBridge for RecordingBridge {
    fn send(&self, method: TrayMethod) {
        self.sent.lock().unwrap().push(method);
    }
}

#[derive(Default)]
pub struct RecordingPresenter {
    anchors: Arc<Mutex<Vec<Option<PointerPosition>>>>,
}

impl MenuPresenter for RecordingPresenter {
    fn present(&self, _menu: &ContextMenu, anchor: Option<PointerPosition>) {
        self.anchors.lock().unwrap().push(anchor);
    }
}

#[derive(Default)]
pub struct RecordingProcess {
    terminations: Arc<Mutex<usize>>,
}

impl ProcessControl for RecordingProcess {
    fn terminate(&self) {
        *self.terminations.lock().unwrap() += 1;
    }
}

/// A controller wired to recording fakes, with handles to inspect them.
pub struct Harness {
    pub controller: TrayController<RecordingBridge, RecordingPresenter, RecordingProcess>,
    sent: Arc<Mutex<Vec<TrayMethod>>>,
    anchors: Arc<Mutex<Vec<Option<PointerPosition>>>>,
    terminations: Arc<Mutex<usize>>,
}

impl Harness {
    pub fn new() -> Self {
        let bridge = RecordingBridge::default();
        let presenter = RecordingPresenter::default();
        let process = RecordingProcess::default();
        let sent = bridge.sent.clone();
        let anchors = presenter.anchors.clone();
        let terminations = process.terminations.clone();

        Self {
            controller: TrayController::new(
                bridge,
                presenter,
                process,
                ContextMenu::build(&MenuLabels::default()),
            ),
            sent,
            anchors,
            terminations,
        }
    }

    pub fn sent(&self) -> Vec<TrayMethod> {
        self.sent.lock().unwrap().clone()
    }

    pub fn presented(&self) -> Vec<Option<PointerPosition>> {
        self.anchors.lock().unwrap().clone()
    }

    pub fn terminations(&self) -> usize {
        *self.terminations.lock().unwrap()
    }
}
