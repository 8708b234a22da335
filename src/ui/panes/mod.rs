//! TUI pane rendering modules
//!
//! Stateless render functions for each visible pane:
//!
//! - [`history`]: the operation tape with running values and REDO tags
//! - [`value`]: the current accumulator value
//! - [`input`]: the command input line
//! - [`status`]: status bar with counts, messages, and keybindings

pub mod history;
pub mod input;
pub mod status;
pub mod value;

// Re-export render functions for convenience
pub use history::render_history_pane;
pub use input::render_input_pane;
pub use status::render_status_bar;
pub use value::render_value_pane;
