//! Async readline input handling for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so EOF (Ctrl+D) and interrupt (Ctrl+C)
//! arrive as events instead of errors.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// A submitted line, exactly as typed.
    Message(String),
    /// A line with nothing but whitespace.
    Blank,
    /// Ctrl+D.
    Eof,
    /// Ctrl+C.
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the input handler with `prompt`.
    ///
    /// The returned `SharedWriter` prints without clobbering the prompt line.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let event = line_event(line);
                if let InputEvent::Message(text) = &event {
                    self.rl.add_history_entry(text.trim().to_string());
                }
                event
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Restore the terminal before the process prints its final lines.
    pub fn flush(&mut self) {
        let _ = self.rl.flush();
    }
}

/// Classify a submitted line. Only the emptiness check trims; the text that
/// gets scored and narrated is the line as typed.
pub fn line_event(line: String) -> InputEvent {
    if line.trim().is_empty() {
        InputEvent::Blank
    } else {
        InputEvent::Message(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keeps_surrounding_whitespace() {
        match line_event("  shipped the build  ".to_string()) {
            InputEvent::Message(text) => assert_eq!(text, "  shipped the build  "),
            other => panic!("expected message, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        assert!(matches!(line_event(String::new()), InputEvent::Blank));
        assert!(matches!(line_event(" \t ".to_string()), InputEvent::Blank));
    }
}
