//! # sortanim-tui
//!
//! Interactive quicksort animation using ratatui with Elm architecture.

pub mod bridge;
pub mod footer;
pub mod grid;
pub mod header;
pub mod input;
pub mod intro;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod styles;

pub use bridge::{outcome_forwarder, TuiOutcomePresenter, TuiRenderer};
pub use input::InputError;
pub use keymap::{KeyAction, Screen};
pub use messages::TuiMessage;
pub use model::TuiApp;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use sortanim_core::{EngineOptions, Pacing, StepObserver};
use sortanim_orchestration::AnimationSession;

/// Wire a session to a TUI renderer and return the app driving it.
///
/// `seed` makes generated sequences reproducible.
#[must_use]
pub fn build_app(
    pacing: Pacing,
    options: EngineOptions,
    seed: Option<u64>,
    observers: Vec<Arc<dyn StepObserver>>,
) -> TuiApp {
    let (tx, rx) = crossbeam_channel::unbounded();
    let session = AnimationSession::new(Arc::new(TuiRenderer::new(tx.clone())), pacing, options);
    session.on_outcome(outcome_forwarder(tx.clone()));
    for observer in observers {
        session.register_observer(observer);
    }
    let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    TuiApp::new(session, tx, rx, rng)
}
