//! The animation session.
//!
//! A session owns the number sequence and the sort direction between runs.
//! Starting a run moves the sequence onto a dedicated computation thread;
//! when the run ends the sequence comes back, the session becomes idle
//! again, and only then are the outcome callbacks invoked.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use parking_lot::{Mutex, MutexGuard, RwLock};
use tracing::{error, info, warn};

use sortanim_core::{
    CancellationToken, Direction, EngineOptions, NumberSequence, Pacing, Renderer, RunOutcome,
    SortEngine, SortError, StepObserver, StepSubject, StepSynchronizer,
};

use crate::interfaces::RunReport;

type OutcomeCallback = Arc<dyn Fn(RunOutcome) + Send + Sync>;

/// Runs animated sorts one at a time against a single renderer.
///
/// Cloning is cheap; clones share the same session.
#[derive(Clone)]
pub struct AnimationSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    renderer: Arc<dyn Renderer>,
    pacing: Pacing,
    options: EngineOptions,
    observers: Arc<StepSubject>,
    callbacks: RwLock<Vec<OutcomeCallback>>,
    state: Mutex<SessionState>,
    runs: AtomicU64,
}

struct SessionState {
    /// Direction of the next run.
    direction: Direction,
    /// `None` while a run holds the sequence, or before anything is loaded.
    sequence: Option<NumberSequence>,
    /// Token of the active run.
    active: Option<CancellationToken>,
}

impl AnimationSession {
    /// Create an idle session. The first run sorts descending.
    #[must_use]
    pub fn new(renderer: Arc<dyn Renderer>, pacing: Pacing, options: EngineOptions) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                renderer,
                pacing: pacing.normalize(),
                options,
                observers: Arc::new(StepSubject::new()),
                callbacks: RwLock::new(Vec::new()),
                state: Mutex::new(SessionState {
                    direction: Direction::default(),
                    sequence: None,
                    active: None,
                }),
                runs: AtomicU64::new(0),
            }),
        }
    }

    /// Replace the retained sequence. Rejected while a run is active.
    pub fn load(&self, sequence: NumberSequence) -> Result<(), SortError> {
        let mut state = self.inner.state.lock();
        if state.active.is_some() {
            warn!("load rejected: a run is already active");
            return Err(SortError::RunActive);
        }
        state.sequence = Some(sequence);
        Ok(())
    }

    /// Start sorting `sequence` in the session's current direction.
    ///
    /// Returns `SortError::RunActive` without touching the active run if one
    /// is in progress.
    pub fn start(&self, sequence: NumberSequence) -> Result<RunHandle, SortError> {
        let state = self.inner.state.lock();
        if state.active.is_some() {
            warn!("start rejected: a run is already active");
            return Err(SortError::RunActive);
        }
        self.spawn_run(state, sequence)
    }

    /// Start sorting the retained sequence again.
    pub fn start_current(&self) -> Result<RunHandle, SortError> {
        let mut state = self.inner.state.lock();
        if state.active.is_some() {
            warn!("start rejected: a run is already active");
            return Err(SortError::RunActive);
        }
        let sequence = state.sequence.take().ok_or(SortError::NoSequence)?;
        self.spawn_run(state, sequence)
    }

    fn spawn_run(
        &self,
        mut state: MutexGuard<'_, SessionState>,
        sequence: NumberSequence,
    ) -> Result<RunHandle, SortError> {
        let cancel = CancellationToken::new();
        let direction = state.direction;
        state.sequence = None;
        state.active = Some(cancel.clone());
        drop(state);

        let run = self.inner.runs.fetch_add(1, Ordering::Relaxed) + 1;
        let backup = sequence.snapshot();
        let inner = Arc::clone(&self.inner);
        let token = cancel.clone();
        let spawned = thread::Builder::new()
            .name(format!("sortanim-run-{run}"))
            .spawn(move || inner.execute(run, sequence, direction, &token));

        match spawned {
            Ok(handle) => Ok(RunHandle {
                run,
                cancel,
                handle,
            }),
            Err(e) => {
                let mut state = self.inner.state.lock();
                state.active = None;
                state.sequence = Some(NumberSequence::new(backup));
                drop(state);
                error!(run, error = %e, "failed to spawn run thread");
                Err(SortError::Interrupted(format!("failed to spawn run thread: {e}")))
            }
        }
    }

    /// Request cancellation of the active run. No-op when idle.
    pub fn cancel(&self) {
        if let Some(token) = &self.inner.state.lock().active {
            if !token.is_cancelled() {
                info!("Cancellation requested");
            }
            token.cancel();
        }
    }

    /// Invoke `callback` once at the end of every subsequent run.
    pub fn on_outcome<F>(&self, callback: F)
    where
        F: Fn(RunOutcome) + Send + Sync + 'static,
    {
        self.inner.callbacks.write().push(Arc::new(callback));
    }

    /// Report acknowledged steps of every subsequent run to `observer`.
    pub fn register_observer(&self, observer: Arc<dyn StepObserver>) {
        self.inner.observers.register(observer);
    }

    /// Direction the next run will sort in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.inner.state.lock().direction
    }

    /// Whether a run is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.state.lock().active.is_some()
    }

    /// Values of the retained sequence; `None` while a run holds it or
    /// before anything was loaded.
    #[must_use]
    pub fn snapshot(&self) -> Option<Vec<i32>> {
        self.inner
            .state
            .lock()
            .sequence
            .as_ref()
            .map(NumberSequence::snapshot)
    }
}

impl fmt::Debug for AnimationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("AnimationSession")
            .field("direction", &state.direction)
            .field("active", &state.active.is_some())
            .field("runs", &self.inner.runs.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl SessionInner {
    fn execute(
        &self,
        run: u64,
        mut sequence: NumberSequence,
        direction: Direction,
        cancel: &CancellationToken,
    ) -> RunReport {
        let started = Instant::now();
        let mut sync = StepSynchronizer::new(Arc::clone(&self.renderer), cancel.clone(), self.pacing)
            .with_observers(Arc::clone(&self.observers), run);

        // A panicking renderer or observer must not leave the session locked.
        // Exchanges are applied whole, so the sequence is still a permutation.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            SortEngine::new(&mut sync, direction, self.options).run(&mut sequence)
        }));
        let outcome = match result {
            Ok(Ok(())) => RunOutcome::Completed(direction),
            Ok(Err(e)) if e.is_halt() => {
                info!(run, reason = %e, "Sort halted");
                RunOutcome::Cancelled
            }
            Ok(Err(e)) => {
                error!(run, error = %e, "Sort failed");
                RunOutcome::Cancelled
            }
            Err(payload) => {
                error!(run, panic = panic_message(payload.as_ref()), "Sort thread panicked");
                RunOutcome::Cancelled
            }
        };

        let report = RunReport {
            run,
            outcome,
            frames: sync.frames(),
            values: sequence.snapshot(),
            duration: started.elapsed(),
        };

        {
            let mut state = self.state.lock();
            if outcome.is_completed() {
                state.direction = direction.toggled();
            }
            state.sequence = Some(sequence);
            state.active = None;
        }
        info!(run, %outcome, frames = report.frames, "Sort finished");

        let callbacks = self.callbacks.read().clone();
        for callback in &callbacks {
            callback(outcome);
        }
        report
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Handle to a started run.
///
/// Dropping the handle detaches the run; it still finishes and reports
/// through the session's callbacks.
pub struct RunHandle {
    run: u64,
    cancel: CancellationToken,
    handle: JoinHandle<RunReport>,
}

impl RunHandle {
    /// Session-unique id of this run, starting at 1.
    #[must_use]
    pub fn run_id(&self) -> u64 {
        self.run
    }

    /// Request cancellation of this run.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the computation thread has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the run to end and return its report.
    ///
    /// A panic inside the run is reported as `Cancelled`.
    ///
    /// # Panics
    ///
    /// Re-raises a panic that escaped the computation thread, such as one
    /// from an outcome callback.
    #[must_use]
    pub fn join(self) -> RunReport {
        match self.handle.join() {
            Ok(report) => report,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Wait for the run to end and return its outcome.
    #[must_use]
    pub fn wait(self) -> RunOutcome {
        self.join().outcome
    }
}

impl fmt::Debug for RunHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunHandle")
            .field("run", &self.run)
            .field("finished", &self.handle.is_finished())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use sortanim_core::observers::ChannelObserver;
    use sortanim_core::{Acknowledgment, NullRenderer, RenderFrame, Step};

    fn instant_session() -> AnimationSession {
        AnimationSession::new(
            Arc::new(NullRenderer),
            Pacing::instant(),
            EngineOptions::default(),
        )
    }

    fn slow_session() -> AnimationSession {
        AnimationSession::new(
            Arc::new(NullRenderer),
            Pacing::from_step_delay(Duration::from_secs(5)),
            EngineOptions::default(),
        )
    }

    #[test]
    fn alternates_direction_between_runs() {
        let session = instant_session();
        assert_eq!(session.direction(), Direction::Descending);

        let outcome = session
            .start(NumberSequence::new(vec![42, 7, 15, 500, 3]))
            .unwrap()
            .wait();
        assert_eq!(outcome, RunOutcome::Completed(Direction::Descending));
        assert_eq!(session.snapshot(), Some(vec![500, 42, 15, 7, 3]));
        assert_eq!(session.direction(), Direction::Ascending);

        let outcome = session.start_current().unwrap().wait();
        assert_eq!(outcome, RunOutcome::Completed(Direction::Ascending));
        assert_eq!(session.snapshot(), Some(vec![3, 7, 15, 42, 500]));
        assert_eq!(session.direction(), Direction::Descending);
    }

    #[test]
    fn report_carries_values_and_run_ids() {
        let session = instant_session();
        let first = session.start(NumberSequence::new(vec![2, 1])).unwrap().join();
        let second = session.start_current().unwrap().join();
        assert_eq!(first.run, 1);
        assert_eq!(second.run, 2);
        assert_eq!(first.values, vec![2, 1]);
        assert_eq!(second.values, vec![1, 2]);
        assert!(second.frames > 0);
    }

    #[test]
    fn second_start_is_rejected_while_active() {
        let session = slow_session();
        let original = vec![9, 4, 7, 1, 8];
        let handle = session.start(NumberSequence::new(original.clone())).unwrap();

        assert!(session.is_active());
        assert_eq!(
            session.start(NumberSequence::new(vec![1])).unwrap_err(),
            SortError::RunActive
        );
        assert_eq!(session.start_current().unwrap_err(), SortError::RunActive);
        assert_eq!(
            session.load(NumberSequence::new(vec![1])),
            Err(SortError::RunActive)
        );
        assert_eq!(session.snapshot(), None);
        assert!(!handle.is_finished());

        session.cancel();
        let report = handle.join();
        assert_eq!(report.outcome, RunOutcome::Cancelled);
        let mut sorted = report.values.clone();
        sorted.sort_unstable();
        let mut expected = original;
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn cancel_keeps_direction() {
        let session = slow_session();
        let handle = session.start(NumberSequence::new(vec![3, 1, 2])).unwrap();
        handle.cancel();
        assert_eq!(handle.wait(), RunOutcome::Cancelled);
        assert!(!session.is_active());
        assert_eq!(session.direction(), Direction::Descending);
        assert!(session.snapshot().is_some());
    }

    #[test]
    fn cancel_when_idle_is_noop() {
        let session = instant_session();
        session.cancel();
        session.cancel();
        assert!(!session.is_active());
        let outcome = session.start(NumberSequence::new(vec![1, 2])).unwrap().wait();
        assert!(outcome.is_completed());
    }

    #[test]
    fn start_current_without_sequence() {
        let session = instant_session();
        assert_eq!(session.start_current().unwrap_err(), SortError::NoSequence);
        session.load(NumberSequence::new(vec![5, 6])).unwrap();
        assert_eq!(session.snapshot(), Some(vec![5, 6]));
        assert!(session.start_current().unwrap().wait().is_completed());
    }

    #[test]
    fn callbacks_run_once_after_release() {
        let session = instant_session();
        let (tx, rx) = crossbeam_channel::unbounded();
        let observed = session.clone();
        session.on_outcome(move |outcome| {
            let _ = tx.send((outcome, observed.is_active(), observed.snapshot()));
        });

        session.start(NumberSequence::new(vec![1, 3, 2])).unwrap().wait();

        let calls: Vec<_> = rx.try_iter().collect();
        assert_eq!(calls.len(), 1);
        let (outcome, active, snapshot) = &calls[0];
        assert_eq!(*outcome, RunOutcome::Completed(Direction::Descending));
        assert!(!active);
        assert_eq!(snapshot.as_deref(), Some(&[3, 2, 1][..]));
    }

    #[test]
    fn callback_may_start_next_run() {
        let session = instant_session();
        let (tx, rx) = crossbeam_channel::unbounded();
        let chained = session.clone();
        session.on_outcome(move |outcome| {
            if outcome == RunOutcome::Completed(Direction::Descending) {
                let _ = tx.send(chained.start_current().map(RunHandle::wait));
            }
        });

        session.start(NumberSequence::new(vec![4, 8, 6])).unwrap().wait();
        let next = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(next, Ok(RunOutcome::Completed(Direction::Ascending)));
    }

    /// Panics on the `nth` frame it is handed, then draws normally.
    struct PanicOnFrame {
        nth: u64,
        seen: AtomicU64,
    }

    impl Renderer for PanicOnFrame {
        fn render(&self, frame: RenderFrame) -> Acknowledgment {
            if self.seen.fetch_add(1, Ordering::Relaxed) + 1 == self.nth {
                panic!("renderer failed at frame {}", frame.seq);
            }
            Acknowledgment::Drawn
        }
    }

    #[test]
    fn renderer_panic_releases_session() {
        let session = AnimationSession::new(
            Arc::new(PanicOnFrame {
                nth: 2,
                seen: AtomicU64::new(0),
            }),
            Pacing::instant(),
            EngineOptions::default(),
        );
        let (tx, rx) = crossbeam_channel::unbounded();
        session.on_outcome(move |outcome| {
            let _ = tx.send(outcome);
        });

        let report = session.start(NumberSequence::new(vec![3, 1, 2])).unwrap().join();
        assert_eq!(report.outcome, RunOutcome::Cancelled);
        let mut values = report.values.clone();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);

        assert!(!session.is_active());
        assert_eq!(session.direction(), Direction::Descending);
        assert_eq!(session.snapshot(), Some(report.values));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![RunOutcome::Cancelled]);

        let outcome = session.start_current().unwrap().wait();
        assert_eq!(outcome, RunOutcome::Completed(Direction::Descending));
        assert_eq!(session.snapshot(), Some(vec![3, 2, 1]));
    }

    #[test]
    fn observers_receive_run_tagged_steps() {
        let session = instant_session();
        let (tx, rx) = crossbeam_channel::unbounded();
        session.register_observer(Arc::new(ChannelObserver::new(tx)));

        session.start(NumberSequence::new(vec![10, 50, 30])).unwrap().wait();

        let events: Vec<_> = rx.try_iter().collect();
        assert!(events.iter().all(|e| e.run == 1));
        assert_eq!(
            events.last().map(|e| e.step),
            Some(Step::Done {
                order: Direction::Descending
            })
        );
    }

    #[test]
    fn debug_output() {
        let session = instant_session();
        let text = format!("{session:?}");
        assert!(text.contains("AnimationSession"));
        assert!(text.contains("Descending"));
    }
}
