use crate::directory::EmployeeDirectory;
use crate::employee::Employee;
use crate::error::EmSearchError;
use crate::tui::dialog::DetailDialog;
use crate::tui::form::{CriteriaForm, FormField};
use crate::tui::table::TableState;
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Fallback message for a search worker that died without reporting
pub const UNKNOWN_SEARCH_FAILURE: &str =
    "An unknown error occurred during the search. Please try again later.";

/// Messages from background search threads
pub enum BgMessage {
    SearchComplete(Vec<Employee>),
    SearchError(String),
}

/// What the results area currently shows.
///
/// A single tagged value instead of independent loading/error/searched
/// flags, so contradictory combinations cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// Nothing searched yet; the area stays blank
    Idle,
    /// A search is in flight
    Loading,
    /// Validation or search failure, with a user-facing message
    Error(String),
    /// The search finished with no matching records
    Empty,
    /// The search finished with at least one record, in store order
    Results(Vec<Employee>),
}

/// Which region receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Results,
}

pub struct App {
    directory: Arc<dyn EmployeeDirectory>,

    // UI state
    pub form: CriteriaForm,
    pub view: ResultsView,
    pub table: TableState,
    pub focus: Focus,
    pub detail: Option<DetailDialog>,
    pub spinner_frame: usize,

    // Channel for the in-flight search, if any
    bg_receiver: Option<Receiver<BgMessage>>,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self {
            directory,
            form: CriteriaForm::new(),
            view: ResultsView::Idle,
            table: TableState::default(),
            focus: Focus::Form,
            detail: None,
            spinner_frame: 0,
            bg_receiver: None,
            should_quit: false,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> crate::Result<()>
    where
        EmSearchError: From<B::Error>,
    {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                if matches!(self.view, ResultsView::Loading) {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Kick off a search for the current criteria.
    ///
    /// Ignored while a search is already in flight, mirroring the disabled
    /// submit button of the original form. Empty criteria short-circuit into
    /// the error view without touching the directory.
    pub fn submit(&mut self) {
        if matches!(self.view, ResultsView::Loading) {
            return;
        }

        let criteria = self.form.criteria();
        if criteria.is_empty() {
            debug!("submit rejected: empty criteria");
            self.view = ResultsView::Error(EmSearchError::EmptyCriteria.to_string());
            self.table.reset();
            self.detail = None;
            self.bg_receiver = None;
            return;
        }

        info!(
            employee_number = %criteria.employee_number,
            name = %criteria.name,
            "search submitted"
        );
        self.view = ResultsView::Loading;
        self.table.reset();
        self.detail = None;

        let (tx, rx) = channel();
        self.bg_receiver = Some(rx);
        let directory = Arc::clone(&self.directory);

        thread::spawn(move || match directory.search(&criteria) {
            Ok(results) => {
                let _ = tx.send(BgMessage::SearchComplete(results));
            }
            Err(e) => {
                let _ = tx.send(BgMessage::SearchError(e.to_string()));
            }
        });
    }

    /// Drain the search channel. Each search sends exactly one message; a
    /// disconnected channel while still loading means the worker died, which
    /// surfaces as the generic fallback error.
    pub fn process_messages(&mut self) {
        let Some(rx) = self.bg_receiver.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(BgMessage::SearchComplete(results)) => {
                info!(count = results.len(), "search finished");
                if results.is_empty() {
                    self.view = ResultsView::Empty;
                } else {
                    self.table.select_first();
                    self.view = ResultsView::Results(results);
                }
            }
            Ok(BgMessage::SearchError(message)) => {
                error!(%message, "search failed");
                self.view = ResultsView::Error(format!("Search failed: {message}"));
                self.table.reset();
                self.focus = Focus::Form;
            }
            Err(TryRecvError::Empty) => {
                self.bg_receiver = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                error!("search worker vanished without a result");
                if matches!(self.view, ResultsView::Loading) {
                    self.view = ResultsView::Error(UNKNOWN_SEARCH_FAILURE.to_string());
                    self.table.reset();
                    self.focus = Focus::Form;
                }
            }
        }
    }

    /// Reset to the initial render state: empty criteria, nothing shown.
    /// An in-flight search loses its channel and its result is discarded.
    pub fn clear(&mut self) {
        self.form.clear_all();
        self.view = ResultsView::Idle;
        self.table.reset();
        self.detail = None;
        self.focus = Focus::Form;
        self.bg_receiver = None;
    }

    pub fn row_count(&self) -> usize {
        match &self.view {
            ResultsView::Results(results) => results.len(),
            _ => 0,
        }
    }

    fn open_detail(&mut self) {
        if let ResultsView::Results(results) = &self.view {
            if let Some(employee) = self.table.selected.and_then(|i| results.get(i)) {
                self.detail = Some(DetailDialog::for_employee(employee));
            }
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                return;
            }
            _ => {}
        }

        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.detail = None;
            }
            return;
        }

        match self.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Enter => match self.form.focused_field {
                FormField::Clear => self.clear(),
                _ => self.submit(),
            },
            KeyCode::Esc => {
                // First Esc empties the focused field, second one quits
                let emptied = match self.form.focused_field {
                    FormField::EmployeeNumber if !self.form.employee_number.is_empty() => {
                        self.form.employee_number.clear();
                        self.form.employee_number_cursor = 0;
                        true
                    }
                    FormField::Name if !self.form.name.is_empty() => {
                        self.form.name.clear();
                        self.form.name_cursor = 0;
                        true
                    }
                    _ => false,
                };
                if !emptied {
                    self.should_quit = true;
                }
            }
            KeyCode::Down => {
                if self.row_count() > 0 {
                    self.focus = Focus::Results;
                    if self.table.selected.is_none() {
                        self.table.select_first();
                    }
                }
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Delete => self.form.delete(),
            KeyCode::Left => self.form.cursor_left(),
            KeyCode::Right => self.form.cursor_right(),
            KeyCode::Home => self.form.cursor_home(),
            KeyCode::End => self.form.cursor_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let total = self.row_count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(total),
            KeyCode::PageUp => self.table.page_up(),
            KeyCode::PageDown => self.table.page_down(total),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(total),

            KeyCode::Enter => self.open_detail(),

            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('/') => {
                self.focus = Focus::Form;
            }

            // Any other printable char jumps back to the form and types there
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focus = Focus::Form;
                self.form.insert_char(c);
            }

            _ => {}
        }
    }
}
