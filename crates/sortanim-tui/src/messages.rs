//! TUI message types (Elm Messages).

use crossbeam_channel::Sender;

use sortanim_core::{RenderFrame, RunOutcome};

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A frame to draw. `ack` is signalled once it is on screen.
    Frame {
        frame: RenderFrame,
        ack: Sender<()>,
    },
    /// A run ended.
    Outcome(RunOutcome),
    /// Log message.
    Log(String),
    /// Error message.
    Error(String),
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Tick event for periodic updates.
    Tick,
    /// Quit the application.
    Quit,
}
