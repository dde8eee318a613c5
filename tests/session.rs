//! Session-level integration tests: alternation, observers, cancellation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use sortanim_core::observers::ChannelObserver;
use sortanim_core::{
    Direction, EngineOptions, NumberSequence, Pacing, RunOutcome, Step, StepEvent,
};
use sortanim_orchestration::{execute_runs, AnimationSession, OutcomePresenter, RunReport};
use sortanim_tests::RecordingRenderer;

/// Discards every report.
struct Silent;

impl OutcomePresenter for Silent {
    fn present_run(&self, _report: &RunReport) {}
    fn present_error(&self, _error: &str) {}
}

fn session(renderer: Arc<RecordingRenderer>, pacing: Pacing) -> AnimationSession {
    AnimationSession::new(renderer, pacing, EngineOptions::default())
}

#[test]
fn repeated_runs_alternate_and_record_frames() {
    let renderer = Arc::new(RecordingRenderer::new());
    let session = session(renderer.clone(), Pacing::instant());
    session
        .load(NumberSequence::new(vec![42, 7, 15, 500, 3]))
        .unwrap();

    let stop = sortanim_core::CancellationToken::new();
    let reports = execute_runs(&session, 4, &stop, &Silent).unwrap();
    let values: Vec<Vec<i32>> = reports.iter().map(|r| r.values.clone()).collect();
    assert_eq!(
        values,
        vec![
            vec![500, 42, 15, 7, 3],
            vec![3, 7, 15, 42, 500],
            vec![500, 42, 15, 7, 3],
            vec![3, 7, 15, 42, 500],
        ]
    );

    let dones: Vec<Step> = renderer
        .steps()
        .into_iter()
        .filter(|s| matches!(s, Step::Done { .. }))
        .collect();
    assert_eq!(
        dones,
        vec![
            Step::Done { order: Direction::Descending },
            Step::Done { order: Direction::Ascending },
            Step::Done { order: Direction::Descending },
            Step::Done { order: Direction::Ascending },
        ]
    );
    let total: u64 = reports.iter().map(|r| r.frames).sum();
    assert_eq!(total, renderer.frames().len() as u64);
}

#[test]
fn observers_see_steps_in_frame_order() {
    let renderer = Arc::new(RecordingRenderer::new());
    let session = session(renderer.clone(), Pacing::instant());
    let (tx, rx) = crossbeam_channel::unbounded::<StepEvent>();
    session.register_observer(Arc::new(ChannelObserver::new(tx)));

    let report = session
        .start(NumberSequence::new(vec![10, 50, 30]))
        .unwrap()
        .join();
    assert_eq!(report.run, 1);

    let events: Vec<StepEvent> = rx.try_iter().collect();
    let steps: Vec<Step> = events.iter().map(|e| e.step).collect();
    assert_eq!(steps, renderer.steps());
    assert!(events.iter().all(|e| e.run == 1));
    assert!(events.windows(2).all(|w| w[0].seq < w[1].seq));
}

#[test]
fn cancelled_run_keeps_a_permutation_and_direction() {
    let renderer = Arc::new(RecordingRenderer::new());
    let session = session(
        renderer.clone(),
        Pacing::from_step_delay(Duration::from_millis(20)),
    );
    let values: Vec<i32> = (1..=40).collect();
    let handle = session.start(NumberSequence::new(values.clone())).unwrap();
    std::thread::sleep(Duration::from_millis(60));
    session.cancel();

    let report = handle.join();
    assert_eq!(report.outcome, RunOutcome::Cancelled);
    let mut kept = report.values.clone();
    kept.sort_unstable();
    assert_eq!(kept, values);
    assert_eq!(session.direction(), Direction::Descending);
    assert!(!session.is_active());
    assert_eq!(session.snapshot(), Some(report.values));
}

#[test]
fn outcome_callbacks_fire_once_per_run() {
    let renderer = Arc::new(RecordingRenderer::new());
    let session = session(renderer, Pacing::instant());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    session.on_outcome(move |outcome| sink.lock().push(outcome));

    session
        .start(NumberSequence::new(vec![2, 1]))
        .unwrap()
        .join();
    session.start_current().unwrap().join();

    assert_eq!(
        *seen.lock(),
        vec![
            RunOutcome::Completed(Direction::Descending),
            RunOutcome::Completed(Direction::Ascending),
        ]
    );
}
