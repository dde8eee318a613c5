//! # sortanim-cli
//!
//! Console rendering, run summaries, step trace, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod renderer;
pub mod trace;
pub mod ui;

pub use presenter::CliOutcomePresenter;
pub use renderer::ConsoleRenderer;
pub use trace::TraceObserver;
