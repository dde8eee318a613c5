//! Application orchestration (CLI and TUI dispatch).

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use sortanim_cli::{CliOutcomePresenter, ConsoleRenderer, TraceObserver};
use sortanim_core::exit_codes;
use sortanim_core::observers::LoggingObserver;
use sortanim_core::{CancellationToken, NullRenderer, Renderer, StepObserver};
use sortanim_orchestration::{execute_runs, AnimationSession};

use crate::config::AppConfig;
use crate::errors::exit_code_for_reports;

/// Main application entry point. Returns the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        sortanim_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    config.validate()?;

    if config.tui {
        return run_tui(config);
    }
    run_cli(config)
}

/// Observers shared by both modes, plus the trace file if requested.
fn build_observers(
    config: &AppConfig,
) -> Result<(Vec<Arc<dyn StepObserver>>, Option<Arc<TraceObserver>>)> {
    let mut observers: Vec<Arc<dyn StepObserver>> = vec![Arc::new(LoggingObserver::new())];
    let trace = match &config.trace {
        Some(path) => {
            let trace = Arc::new(
                TraceObserver::create(path)
                    .with_context(|| format!("cannot create trace file {}", path.display()))?,
            );
            observers.push(trace.clone());
            Some(trace)
        }
        None => None,
    };
    Ok((observers, trace))
}

fn flush_trace(trace: Option<&TraceObserver>) -> Result<()> {
    if let Some(trace) = trace {
        trace.flush().context("failed to flush step trace")?;
    }
    Ok(())
}

fn run_cli(config: &AppConfig) -> Result<i32> {
    let sequence = config.initial_sequence()?;
    let renderer: Arc<dyn Renderer> = if config.quiet {
        Arc::new(NullRenderer)
    } else {
        Arc::new(ConsoleRenderer::stdout())
    };

    let session = AnimationSession::new(renderer, config.pacing(), config.engine_options());
    let (observers, trace) = build_observers(config)?;
    for observer in observers {
        session.register_observer(observer);
    }
    session.load(sequence)?;

    let stop = CancellationToken::new();
    install_ctrlc_handler(session.clone(), stop.clone())?;

    info!(runs = config.runs, "starting animation");
    let presenter = CliOutcomePresenter::new(config.verbose, config.quiet);
    let reports = execute_runs(&session, config.runs, &stop, &presenter)?;
    flush_trace(trace.as_deref())?;

    Ok(exit_code_for_reports(&reports))
}

fn run_tui(config: &AppConfig) -> Result<i32> {
    let (observers, trace) = build_observers(config)?;
    let mut app = sortanim_tui::build_app(
        config.pacing(),
        config.engine_options(),
        config.seed,
        observers,
    );
    if let Some(values) = &config.values {
        app.show_values(values.clone());
    }

    // Raw mode turns Ctrl+C into a key event, which the keymap maps to quit.
    app.run().context("TUI error")?;
    flush_trace(trace.as_deref())?;
    Ok(exit_codes::SUCCESS)
}

/// Cancel the active run and stop further runs on Ctrl+C.
fn install_ctrlc_handler(session: AnimationSession, stop: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        warn!("interrupt received, cancelling");
        stop.cancel();
        session.cancel();
    })
    .context("failed to install Ctrl+C handler")
}
