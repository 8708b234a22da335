//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, input handling
//! - **[`command`]** — parsing for the input line
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (history tape, value, input, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`Accumulator`] and call [`App::run`] to start the event loop.
//!
//! [`Accumulator`]: crate::accumulator::Accumulator
//! [`App::run`]: app::App::run

pub mod app;
pub mod command;
pub mod panes;
pub mod theme;

pub use app::App;
