//! Async readline input handling for the chat loop.
//!
//! Wraps `rustyline_async::Readline` to provide async line reading with
//! proper handling of EOF (Ctrl+D) and interrupt (Ctrl+C) signals.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (untrimmed; the widget trims on submit).
    Line(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler wrapping rustyline_async.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the input handler and a `SharedWriter` that prints without
    /// clobbering the prompt line.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                if !line.trim().is_empty() {
                    self.rl.add_history_entry(line.clone());
                }
                InputEvent::Line(line)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(e) => {
                tracing::debug!(error = %e, "readline failed, treating as EOF");
                InputEvent::Eof
            }
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }

    /// Restore the terminal before exit.
    pub fn flush(&mut self) {
        let _ = self.rl.flush();
    }
}
