//! # sortanim-orchestration
//!
//! Animation session, back-to-back runs, and outcome presentation.

pub mod interfaces;
pub mod orchestrator;
pub mod session;

pub use interfaces::{OutcomePresenter, RunReport};
pub use orchestrator::{all_completed, execute_runs};
pub use session::{AnimationSession, RunHandle};
