//! Terminal key bindings.
//!
//! The standard mapping comes from [`Command::from_key`]; the terminal adds
//! bindings for operations that would otherwise need a pointer.

use crate::core::{Command, Key, MemoryOp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Run(Command),
    Quit,
}

/// Function tokens reachable from single letters.
const FUNCTION_KEYS: [(char, &str); 6] = [
    ('s', "sin("),
    ('c', "cos("),
    ('t', "tan("),
    ('l', "log("),
    ('r', "sqrt("),
    ('p', "π"),
];

/// One-line key reference for the help bar.
pub const HELP: &str = "Enter = | Esc AC | Del CE | ~ ± | ! n! | s c t l r p fn | \
F2 MC F3 MR F4 M+ F5 M- F6 MS | F9 clear history | Alt+0-9 reuse | Ctrl-Q quit";

pub fn action_for(event: KeyEvent) -> Option<KeyAction> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    match event.code {
        KeyCode::Char('c' | 'q') if ctrl => Some(KeyAction::Quit),
        KeyCode::Char(digit @ '0'..='9') if alt => digit
            .to_digit(10)
            .map(|index| KeyAction::Run(Command::UseHistory(index as usize))),
        _ if ctrl || alt => None,
        KeyCode::Char(c) => char_command(c).map(KeyAction::Run),
        KeyCode::Enter => Command::from_key(Key::Enter).map(KeyAction::Run),
        KeyCode::Esc => Command::from_key(Key::Escape).map(KeyAction::Run),
        KeyCode::Backspace => Command::from_key(Key::Backspace).map(KeyAction::Run),
        KeyCode::Delete => Some(KeyAction::Run(Command::ClearEntry)),
        KeyCode::F(n) => function_key(n).map(KeyAction::Run),
        _ => None,
    }
}

fn char_command(c: char) -> Option<Command> {
    if let Some(command) = Command::from_key(Key::Char(c)) {
        return Some(command);
    }
    match c {
        '~' => Some(Command::ToggleSign),
        '!' => Some(Command::Factorial),
        '%' => Some(Command::Append("%".to_string())),
        '^' => Some(Command::Append("**".to_string())),
        _ => FUNCTION_KEYS
            .iter()
            .find(|(key, _)| *key == c)
            .map(|(_, name)| Command::AppendFunction((*name).to_string())),
    }
}

fn function_key(n: u8) -> Option<Command> {
    match n {
        2 => Some(Command::MemoryClear),
        3 => Some(Command::MemoryRecall),
        4 => Some(Command::Memory(MemoryOp::Add)),
        5 => Some(Command::Memory(MemoryOp::Subtract)),
        6 => Some(Command::Memory(MemoryOp::Store)),
        9 => Some(Command::ClearHistory),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<KeyAction> {
        action_for(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn run(command: Command) -> Option<KeyAction> {
        Some(KeyAction::Run(command))
    }

    #[test]
    fn standard_keys() {
        assert_eq!(press(KeyCode::Char('7')), run(Command::Append("7".into())));
        assert_eq!(press(KeyCode::Char('(')), run(Command::Append("(".into())));
        assert_eq!(press(KeyCode::Enter), run(Command::Submit));
        assert_eq!(press(KeyCode::Char('=')), run(Command::Submit));
        assert_eq!(press(KeyCode::Esc), run(Command::ClearAll));
        assert_eq!(press(KeyCode::Backspace), run(Command::Backspace));
    }

    #[test]
    fn terminal_extras() {
        assert_eq!(press(KeyCode::Delete), run(Command::ClearEntry));
        assert_eq!(press(KeyCode::Char('~')), run(Command::ToggleSign));
        assert_eq!(press(KeyCode::Char('!')), run(Command::Factorial));
        assert_eq!(press(KeyCode::Char('^')), run(Command::Append("**".into())));
        assert_eq!(
            press(KeyCode::Char('r')),
            run(Command::AppendFunction("sqrt(".into()))
        );
        assert_eq!(
            press(KeyCode::Char('p')),
            run(Command::AppendFunction("π".into()))
        );
    }

    #[test]
    fn shifted_symbols_still_map() {
        let event = KeyEvent::new(KeyCode::Char('!'), KeyModifiers::SHIFT);
        assert_eq!(action_for(event), run(Command::Factorial));
    }

    #[test]
    fn memory_and_history_keys() {
        assert_eq!(press(KeyCode::F(2)), run(Command::MemoryClear));
        assert_eq!(press(KeyCode::F(3)), run(Command::MemoryRecall));
        assert_eq!(press(KeyCode::F(4)), run(Command::Memory(MemoryOp::Add)));
        assert_eq!(press(KeyCode::F(5)), run(Command::Memory(MemoryOp::Subtract)));
        assert_eq!(press(KeyCode::F(6)), run(Command::Memory(MemoryOp::Store)));
        assert_eq!(press(KeyCode::F(9)), run(Command::ClearHistory));
        assert_eq!(press(KeyCode::F(1)), None);

        let alt_three = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::ALT);
        assert_eq!(action_for(alt_three), run(Command::UseHistory(3)));
    }

    #[test]
    fn quit_and_ignored_keys() {
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_q), Some(KeyAction::Quit));
        assert_eq!(action_for(ctrl_c), Some(KeyAction::Quit));

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_x), None);
        assert_eq!(press(KeyCode::Char('z')), None);
        assert_eq!(press(KeyCode::Tab), None);
    }
}
