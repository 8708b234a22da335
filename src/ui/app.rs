//! Main TUI application state and logic

use crate::accumulator::Accumulator;
use crate::history::StepOutcome;
use crate::ui::command::Command;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The accumulator instance
    pub accumulator: Accumulator,

    /// Contents of the command input line
    pub input: String,

    /// Scroll offset for the history tape
    pub history_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub message_is_error: bool,
}

impl App {
    /// Create a new app driving the given accumulator
    pub fn new(accumulator: Accumulator) -> Self {
        App {
            accumulator,
            input: String::new(),
            history_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready! Type a command like '+ 3'."),
            message_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // History tape on the left, value + input on the right, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Length(3), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_history_pane(
            frame,
            columns[0],
            self.accumulator.history(),
            &mut self.history_scroll,
        );

        super::panes::render_value_pane(
            frame,
            right_rows[0],
            self.accumulator.current_value(),
            self.accumulator.history().last(),
        );

        super::panes::render_input_pane(frame, right_rows[1], &self.input);

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.message_is_error,
            self.accumulator.history().len(),
            self.accumulator.undo_depth(),
            self.accumulator.redo_depth(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Control chords first so 'z'/'y' can still be typed into the input
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('z') => self.undo(),
                KeyCode::Char('y') => self.redo(),
                KeyCode::Char('q') | KeyCode::Char('c') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Up => {
                self.history_scroll = self.history_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.history_scroll = self.history_scroll.saturating_add(1);
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Parse and execute the input line
    fn submit_input(&mut self) {
        let line = self.input.trim().to_string();
        if line.is_empty() {
            return;
        }
        self.input.clear();

        match Command::parse(&line) {
            Ok(Command::Apply(kind, operand)) => {
                let result = match kind {
                    crate::accumulator::OperationKind::Add => self.accumulator.add(operand),
                    crate::accumulator::OperationKind::Subtract => {
                        self.accumulator.subtract(operand)
                    }
                    crate::accumulator::OperationKind::Multiply => {
                        self.accumulator.multiply(operand)
                    }
                    crate::accumulator::OperationKind::Divide => self.accumulator.divide(operand),
                };
                match result {
                    Ok(value) => {
                        self.set_message(format!("{} {} = {}", kind.symbol(), operand, value));
                        // Auto-scroll the tape to the newest entry
                        self.history_scroll = usize::MAX;
                    }
                    Err(e) => self.set_error(e.to_string()),
                }
            }
            Ok(Command::Undo) => self.undo(),
            Ok(Command::Redo) => self.redo(),
            Ok(Command::Quit) => self.should_quit = true,
            Err(message) => self.set_error(message),
        }
    }

    /// Undo the most recent operation
    fn undo(&mut self) {
        match self.accumulator.undo() {
            StepOutcome::Performed => {
                self.set_message(format!("Undid. Value is {}", self.accumulator.current_value()));
                self.history_scroll = usize::MAX;
            }
            StepOutcome::NothingToDo => self.set_message("Nothing to undo.".to_string()),
        }
    }

    /// Redo the most recently undone operation
    fn redo(&mut self) {
        match self.accumulator.redo() {
            StepOutcome::Performed => {
                self.set_message(format!("Redid. Value is {}", self.accumulator.current_value()));
                self.history_scroll = usize::MAX;
            }
            StepOutcome::NothingToDo => self.set_message("Nothing to redo.".to_string()),
        }
    }

    fn set_message(&mut self, message: String) {
        self.status_message = message;
        self.message_is_error = false;
    }

    fn set_error(&mut self, message: String) {
        self.status_message = message;
        self.message_is_error = true;
    }
}
