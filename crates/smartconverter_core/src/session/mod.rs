//! Conversion session: input state, copy highlight and its event loop.
//!
//! # Responsibility
//! - Hold the raw input text and the currently highlighted (copied) result.
//! - Reduce user commands into state changes plus effects.
//! - Run effects on a single-threaded dispatcher with deferred commands.
//!
//! # Invariants
//! - Displayed results are derived from state on demand, never stored.
//! - A deferred highlight clear only applies while the highlight still
//!   points at the conversion that scheduled it.

pub mod config;
pub mod dispatcher;
pub mod state;
pub mod view;

pub use config::{SessionConfig, SessionConfigError, DEFAULT_HIGHLIGHT_CLEAR_DELAY};
pub use dispatcher::{Clipboard, Dispatcher, Feedback, NoopFeedback};
pub use state::{Command, ConversionSession, Effect};
pub use view::{CategoryView, ResultView, SessionView};
