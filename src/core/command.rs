//! Input-surface commands and the standard key mapping.

use super::memory::MemoryOp;

/// Every operation the input surface can trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Append a digit, operator, parenthesis or decimal point
    Append(String),
    /// Append a function token such as `sin(`
    AppendFunction(String),
    ClearAll,
    ClearEntry,
    Backspace,
    ToggleSign,
    Factorial,
    /// Send the expression to the evaluation service
    Submit,
    Memory(MemoryOp),
    MemoryRecall,
    MemoryClear,
    /// Reuse an entry of the recent-history view, 0 being the newest
    UseHistory(usize),
    ClearHistory,
}

/// Abstract key input, independent of any terminal library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
}

impl Command {
    /// The standard keyboard mapping.
    ///
    /// ```rust
    /// use calculon::core::{Command, Key};
    ///
    /// assert_eq!(Command::from_key(Key::Char('7')), Some(Command::Append("7".into())));
    /// assert_eq!(Command::from_key(Key::Char('=')), Some(Command::Submit));
    /// assert_eq!(Command::from_key(Key::Escape), Some(Command::ClearAll));
    /// assert_eq!(Command::from_key(Key::Char('x')), None);
    /// ```
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(c @ ('0'..='9' | '+' | '-' | '*' | '/' | '.' | '(' | ')')) => {
                Some(Self::Append(c.to_string()))
            }
            Key::Char('=') | Key::Enter => Some(Self::Submit),
            Key::Escape => Some(Self::ClearAll),
            Key::Backspace => Some(Self::Backspace),
            Key::Char(_) => None,
        }
    }
}
