//! Advisory progress notifications.
//!
//! The generator emits a small number of informational text events per run:
//! the pre-run combinatorial-size estimate in brute-force mode, and a
//! completion message with elapsed duration when a run exhausts. These are
//! advisory only; generation is correct whether or not anyone listens.

use std::sync::mpsc;

/// A consumer of advisory progress messages.
///
/// Attach an implementation to a
/// [`PinCracker`](crate::PinCracker::with_progress_sink) to observe the
/// pre-run size estimate and the completion message. The default is
/// [`NullSink`].
///
/// Closures work directly:
///
/// ```
/// use pinprobe_generator::PinCracker;
///
/// let cracker =
///     PinCracker::new().with_progress_sink(Box::new(|message: &str| eprintln!("{message}")));
/// ```
pub trait ProgressSink {
    /// Receives one informational message.
    fn notify(&self, message: &str);
}

/// A sink that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn notify(&self, _message: &str) {}
}

/// A sink that forwards messages to the [`log`] crate at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn notify(&self, message: &str) {
        log::info!(target: "pinprobe", "{message}");
    }
}

impl<F> ProgressSink for F
where
    F: Fn(&str),
{
    fn notify(&self, message: &str) {
        self(message);
    }
}

impl ProgressSink for mpsc::Sender<String> {
    /// Sends the message down the channel. A hung-up receiver is ignored;
    /// the generator does not care whether anyone is listening.
    fn notify(&self, message: &str) {
        let _ = self.send(message.to_owned());
    }
}
