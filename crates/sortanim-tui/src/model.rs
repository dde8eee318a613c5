//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use rand::rngs::StdRng;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::Terminal;
use tracing::{debug, info};

use sortanim_core::generator::{generate, is_regenerate_trigger};
use sortanim_core::{Highlight, NumberSequence, RunOutcome, Step};
use sortanim_orchestration::interfaces::OutcomePresenter;
use sortanim_orchestration::{AnimationSession, RunHandle};

use crate::bridge::TuiOutcomePresenter;
use crate::footer::render_footer;
use crate::grid::{move_selection, render_grid};
use crate::header::render_header;
use crate::input::parse_count;
use crate::intro::render_intro;
use crate::keymap::{map_key, KeyAction, Screen};
use crate::logs::{push_log, render_logs};
use crate::messages::TuiMessage;
use crate::styles::ColorTheme;

/// Longest count the prompt accepts as typed characters.
const MAX_INPUT_LEN: usize = 9;

/// Message shown when a picked number cannot regenerate the grid.
pub const PICK_REJECTED: &str = "Please select a value smaller or equal to 30.";

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Screen receiving keys.
    pub screen: Screen,
    /// Text typed into the count prompt.
    pub input: String,
    /// Last prompt rejection.
    pub input_error: Option<String>,
    /// Number of values per generated sequence.
    pub count: usize,
    /// Values as last drawn.
    pub values: Vec<i32>,
    /// Indices emphasised in the last frame.
    pub highlight: Highlight,
    /// Last step drawn during the current run.
    pub last_step: Option<Step>,
    /// Selected grid cell.
    pub selected: usize,
    /// Log messages.
    pub logs: Vec<String>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    session: AnimationSession,
    presenter: TuiOutcomePresenter,
    rx: Receiver<TuiMessage>,
    rng: StdRng,
    theme: ColorTheme,
    /// The run this app started and has not yet seen finish.
    run: Option<RunHandle>,
    /// Acknowledgment for the frame waiting to be drawn.
    pending_ack: Option<Sender<()>>,
    /// Set after a reset until the abandoned run reports its outcome.
    discard_frames: bool,
    /// Sequence generated while a run still held the session.
    pending_load: Option<NumberSequence>,
}

impl TuiApp {
    /// Create a new TUI app driving `session`.
    ///
    /// `tx` must feed `rx`; it carries run reports to the log panel.
    #[must_use]
    pub fn new(
        session: AnimationSession,
        tx: Sender<TuiMessage>,
        rx: Receiver<TuiMessage>,
        rng: StdRng,
    ) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Intro,
            input: String::new(),
            input_error: None,
            count: 0,
            values: Vec::new(),
            highlight: Highlight::None,
            last_step: None,
            selected: 0,
            logs: Vec::new(),
            terminal_width: 80,
            terminal_height: 24,
            session,
            presenter: TuiOutcomePresenter::new(tx),
            rx,
            rng,
            theme: ColorTheme::default(),
            run: None,
            pending_ack: None,
            discard_frames: false,
            pending_load: None,
        }
    }

    /// Skip the prompt and show `values` directly.
    pub fn show_values(&mut self, values: Vec<i32>) {
        self.count = values.len();
        self.screen = Screen::Sort;
        self.selected = 0;
        self.highlight = Highlight::None;
        self.load(NumberSequence::new(values));
    }

    /// Whether a run started by this app has not yet reported its outcome.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Whether a drawn frame still waits for its acknowledgment.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.pending_ack.is_some()
    }

    /// The session this app drives.
    #[must_use]
    pub fn session(&self) -> &AnimationSession {
        &self.session
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Frame { frame, ack } => {
                if self.discard_frames {
                    // Dropping `ack` interrupts the abandoned run.
                    return;
                }
                self.values = frame.values;
                self.highlight = frame.highlight;
                if frame.step.is_some() {
                    self.last_step = frame.step;
                }
                self.pending_ack = Some(ack);
            }
            TuiMessage::Outcome(outcome) => self.finish_run(outcome),
            TuiMessage::Log(line) => push_log(&mut self.logs, line),
            TuiMessage::Error(err) => push_log(&mut self.logs, format!("[ERROR] {err}")),
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            TuiMessage::Quit => self.quit(),
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        if action == KeyAction::Quit {
            self.quit();
            return;
        }
        match self.screen {
            Screen::Intro => match action {
                KeyAction::Input(c) if self.input.len() < MAX_INPUT_LEN => self.input.push(c),
                KeyAction::Backspace => {
                    self.input.pop();
                }
                KeyAction::Select => self.submit(),
                _ => {}
            },
            Screen::Sort => match action {
                KeyAction::Start => self.start_sort(),
                KeyAction::Cancel => self.cancel_sort(),
                KeyAction::Reset => self.reset(),
                KeyAction::Select => self.pick(),
                KeyAction::Up | KeyAction::Down | KeyAction::Left | KeyAction::Right => {
                    self.selected = move_selection(self.selected, self.values.len(), action);
                }
                _ => {}
            },
        }
    }

    /// Signal that the last received frame is on screen.
    pub fn acknowledge_drawn(&mut self) {
        if let Some(ack) = self.pending_ack.take() {
            let _ = ack.send(());
        }
    }

    fn quit(&mut self) {
        self.session.cancel();
        self.pending_ack = None;
        self.should_quit = true;
    }

    fn submit(&mut self) {
        match parse_count(&self.input) {
            Ok(count) => {
                self.count = count;
                self.input.clear();
                self.input_error = None;
                self.screen = Screen::Sort;
                self.regenerate();
            }
            Err(e) => self.input_error = Some(e.to_string()),
        }
    }

    fn regenerate(&mut self) {
        match generate(self.count, &mut self.rng) {
            Ok(sequence) => {
                self.selected = 0;
                self.highlight = Highlight::None;
                push_log(&mut self.logs, format!("Generated {} numbers", self.count));
                self.load(sequence);
            }
            Err(e) => push_log(&mut self.logs, format!("[ERROR] {e}")),
        }
    }

    fn load(&mut self, sequence: NumberSequence) {
        self.values = sequence.snapshot();
        if self.run.is_some() {
            self.pending_load = Some(sequence);
        } else if let Err(e) = self.session.load(sequence) {
            push_log(&mut self.logs, format!("[ERROR] {e}"));
        }
    }

    fn start_sort(&mut self) {
        if self.run.is_some() {
            push_log(&mut self.logs, "[WARN] A sort is already running.".into());
            return;
        }
        let direction = self.session.direction();
        match self.session.start_current() {
            Ok(handle) => {
                info!(run = handle.run_id(), %direction, "TUI sort started");
                push_log(&mut self.logs, format!("Sorting {direction}"));
                self.last_step = None;
                self.run = Some(handle);
            }
            Err(e) => push_log(&mut self.logs, format!("[WARN] {e}")),
        }
    }

    fn cancel_sort(&mut self) {
        if self.run.is_some() {
            self.session.cancel();
            push_log(&mut self.logs, "Cancelling...".into());
        }
    }

    fn pick(&mut self) {
        let Some(&value) = self.values.get(self.selected) else {
            return;
        };
        if self.run.is_some() {
            push_log(&mut self.logs, "[WARN] Wait for the sort to finish.".into());
        } else if is_regenerate_trigger(value) {
            self.regenerate();
        } else {
            push_log(&mut self.logs, PICK_REJECTED.into());
        }
    }

    fn reset(&mut self) {
        if self.run.is_some() {
            self.session.cancel();
            self.discard_frames = true;
        }
        self.pending_ack = None;
        self.screen = Screen::Intro;
        self.input.clear();
        self.input_error = None;
        self.count = 0;
        self.values.clear();
        self.highlight = Highlight::None;
        self.last_step = None;
        self.selected = 0;
    }

    fn finish_run(&mut self, outcome: RunOutcome) {
        debug!(%outcome, "run outcome received");
        self.pending_ack = None;
        self.highlight = Highlight::None;
        if let Some(handle) = self.run.take() {
            let report = handle.join();
            if !self.discard_frames {
                self.values.clone_from(&report.values);
            }
            self.presenter.present_run(&report);
        }
        self.discard_frames = false;
        if let Some(sequence) = self.pending_load.take() {
            self.load(sequence);
        }
    }

    fn status(&self) -> String {
        match (&self.run, self.last_step) {
            (Some(_), Some(step)) => format!("Sorting: {step}"),
            (Some(_), None) => "Sorting".to_string(),
            (None, _) => "Idle".to_string(),
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, grid, logs, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Percentage(65), // grid
                Constraint::Percentage(35), // logs
            ])
            .split(outer[1]);

        (outer[0], main[0], main[1], outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, grid_area, logs_area, footer_area) = Self::compute_layout(frame.area());

        render_header(
            frame,
            header_area,
            self.count,
            self.session.direction(),
            &self.status(),
            &self.theme,
        );

        match self.screen {
            Screen::Intro => {
                let body = grid_area.union(logs_area);
                render_intro(
                    frame,
                    body,
                    &self.input,
                    self.input_error.as_deref(),
                    &self.theme,
                );
            }
            Screen::Sort => {
                render_grid(
                    frame,
                    grid_area,
                    &self.values,
                    self.highlight,
                    self.selected,
                    &self.theme,
                );
                render_logs(frame, logs_area, &self.logs);
            }
        }

        render_footer(frame, footer_area, self.screen);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Each iteration drains messages, draws, and only then acknowledges
    /// the frame it drew, so the sort never runs ahead of the screen.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(16);

        loop {
            self.update();

            terminal.draw(|frame| {
                self.render(frame);
            })?;
            self.acknowledge_drawn();

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        let action = map_key(self.screen, key_event);
                        self.handle_key_action(action);
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
