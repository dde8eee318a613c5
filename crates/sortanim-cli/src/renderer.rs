//! Line-per-frame console renderer.

use std::io::{self, Write};

use parking_lot::Mutex;
use tracing::warn;

use sortanim_core::{Acknowledgment, RenderFrame, Renderer};

use crate::output::format_frame;
use crate::ui::is_color_disabled;

/// Prints each frame as one line and acknowledges once it is written.
pub struct ConsoleRenderer<W: Write + Send> {
    out: Mutex<W>,
    color: bool,
}

impl ConsoleRenderer<io::Stdout> {
    /// Renderer on stdout, colored unless `NO_COLOR` is set.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), !is_color_disabled())
    }
}

impl<W: Write + Send> ConsoleRenderer<W> {
    #[must_use]
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    /// Consume the renderer and return its writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> Renderer for ConsoleRenderer<W> {
    fn render(&self, frame: RenderFrame) -> Acknowledgment {
        let line = format_frame(&frame, self.color);
        let mut out = self.out.lock();
        match writeln!(out, "{line}").and_then(|()| out.flush()) {
            Ok(()) => Acknowledgment::Drawn,
            Err(e) => {
                warn!(error = %e, "console output failed");
                Acknowledgment::Lost
            }
        }
    }
}
