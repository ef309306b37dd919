use std::collections::VecDeque;

use heatmap_core::scene::SceneCommand;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Commands queued by widgets this frame, applied in order before painting.
    pub pending: VecDeque<SceneCommand>,

    /// A scene load is in flight on the worker.
    pub loading: bool,

    /// Slider position mirrored from the scene each frame.
    pub hour_slider: u8,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn push(&mut self, command: SceneCommand) {
        self.pending.push_back(command);
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
