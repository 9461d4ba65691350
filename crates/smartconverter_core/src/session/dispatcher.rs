//! Single-threaded event loop for a conversion session.
//!
//! # Responsibility
//! - Serialize every command (user edits, copies, timer expiries) through
//!   one owner of the session.
//! - Execute reducer effects against clipboard/feedback collaborators.
//! - Keep deferred commands on a monotonic clock and fire them in due order.
//!
//! # Invariants
//! - Deferred commands are never cancelled; stale ones are neutralized by the
//!   session's identity check.
//! - Commands due at the same instant fire in scheduling order.
//! - Clipboard failures never reach the caller.

use crate::model::conversion::ConversionId;
use crate::session::state::{Command, ConversionSession, Effect};
use crate::session::view::SessionView;
use log::{debug, warn};
use std::time::Duration;

/// System clipboard collaborator.
pub trait Clipboard {
    /// Writes plain text. Errors are logged and otherwise ignored.
    fn write_text(&mut self, text: &str) -> std::io::Result<()>;
}

/// Haptic feedback collaborator.
pub trait Feedback {
    /// Medium impact tap.
    fn impact(&mut self);
}

/// Feedback sink for platforms without haptics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedback;

impl Feedback for NoopFeedback {
    fn impact(&mut self) {}
}

#[derive(Debug, Clone)]
struct PendingCommand {
    due: Duration,
    seq: u64,
    command: Command,
}

/// Owns a session and runs its effects.
pub struct Dispatcher<C: Clipboard, F: Feedback> {
    session: ConversionSession,
    clipboard: C,
    feedback: F,
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingCommand>,
}

impl<C: Clipboard, F: Feedback> Dispatcher<C, F> {
    /// Creates a dispatcher at clock time zero.
    pub fn new(session: ConversionSession, clipboard: C, feedback: F) -> Self {
        Self {
            session,
            clipboard,
            feedback,
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn session(&self) -> &ConversionSession {
        &self.session
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Elapsed time on the dispatcher clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of deferred commands not yet fired.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Current display snapshot.
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// Runs one command immediately, including all of its effects.
    pub fn dispatch(&mut self, command: Command) {
        let effects = self.session.apply(command);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Convenience for `dispatch(Command::SetInput(..))`.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.dispatch(Command::SetInput(text.into()));
    }

    /// Convenience for `dispatch(Command::Copy(..))`.
    pub fn copy(&mut self, conversion_id: ConversionId) {
        self.dispatch(Command::Copy(conversion_id));
    }

    /// Moves the clock forward by `elapsed`, firing every deferred command
    /// that becomes due. Returns how many commands fired.
    ///
    /// Commands scheduled while firing are honoured if they also fall within
    /// the advanced window.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.now.saturating_add(elapsed);
        let mut fired = 0;
        while let Some(index) = self.next_due_index(target) {
            let pending = self.pending.swap_remove(index);
            self.now = pending.due;
            debug!(
                "event=timer_fired module=dispatcher status=ok due_ms={}",
                pending.due.as_millis()
            );
            self.dispatch(pending.command);
            fired += 1;
        }
        self.now = target;
        fired
    }

    fn next_due_index(&self, target: Duration) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= target)
            .min_by_key(|(_, pending)| (pending.due, pending.seq))
            .map(|(index, _)| index)
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::WriteClipboard(text) => {
                if let Err(err) = self.clipboard.write_text(&text) {
                    warn!(
                        "event=clipboard_write module=dispatcher status=error error={}",
                        err
                    );
                }
            }
            Effect::ImpactFeedback => self.feedback.impact(),
            Effect::ScheduleHighlightClear {
                conversion_id,
                after,
            } => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.pending.push(PendingCommand {
                    due: self.now.saturating_add(after),
                    seq,
                    command: Command::HighlightExpired(conversion_id),
                });
            }
        }
    }
}
