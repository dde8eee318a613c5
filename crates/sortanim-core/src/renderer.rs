//! The rendering surface seam.
//!
//! The core only ever emits indices into the sequence; mapping an index to
//! whatever visual element displays it is the renderer's business.

use crossbeam_channel::Receiver;

use crate::step::RenderFrame;

/// How a renderer acknowledges a frame.
#[derive(Debug)]
pub enum Acknowledgment {
    /// The frame was drawn before `render` returned.
    Drawn,
    /// The frame will be drawn later; a message (or disconnect) on the
    /// receiver signals it. A disconnect counts as an interruption.
    Pending(Receiver<()>),
    /// The render side is gone and will never draw the frame.
    Lost,
}

/// Rendering surface driven by the step synchronizer.
///
/// `render` is called once per hand-off, from the computation thread. It must
/// display the frame's values and highlight before acknowledging.
pub trait Renderer: Send + Sync {
    /// Deliver a frame.
    fn render(&self, frame: RenderFrame) -> Acknowledgment;
}

/// Renderer that draws nothing and acknowledges immediately.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, _frame: RenderFrame) -> Acknowledgment {
        Acknowledgment::Drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_renderer_acknowledges() {
        let ack = NullRenderer.render(RenderFrame::refresh(0, vec![1]));
        assert!(matches!(ack, Acknowledgment::Drawn));
    }
}
