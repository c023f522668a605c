//! Keyboard-to-navigation mapping. One table, consumed both by the runtime
//! (to build its keyboard subscriptions) and by anything that wants to
//! render key hints.

use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Prev,
    GoTo(usize),
    Quit,
}

/// Maps a key to a navigation action. Digit jumps outside the deck are
/// rejected here so they never reach the controller.
pub fn map_key(code: KeyCode, deck_len: usize) -> Option<KeyAction> {
    match code {
        KeyCode::Right | KeyCode::Char(' ') => Some(KeyAction::Next),
        KeyCode::Left => Some(KeyAction::Prev),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            (index < deck_len).then_some(KeyAction::GoTo(index))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

/// The full navigation binding set for a deck of the given length, in
/// help-menu order.
pub fn bindings(deck_len: usize) -> Vec<(KeyCode, &'static str, KeyAction)> {
    let mut out = vec![
        (KeyCode::Right, "Next slide", KeyAction::Next),
        (KeyCode::Char(' '), "Next slide", KeyAction::Next),
        (KeyCode::Left, "Previous slide", KeyAction::Prev),
        (KeyCode::Char('q'), "Quit", KeyAction::Quit),
        (KeyCode::Esc, "Quit", KeyAction::Quit),
    ];
    for i in 0..deck_len.min(9) {
        let c = char::from(b'1' + i as u8);
        out.push((KeyCode::Char(c), "Jump to slide", KeyAction::GoTo(i)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_space_navigate() {
        assert_eq!(map_key(KeyCode::Right, 8), Some(KeyAction::Next));
        assert_eq!(map_key(KeyCode::Char(' '), 8), Some(KeyAction::Next));
        assert_eq!(map_key(KeyCode::Left, 8), Some(KeyAction::Prev));
    }

    #[test]
    fn digits_jump_only_when_in_range() {
        assert_eq!(map_key(KeyCode::Char('1'), 8), Some(KeyAction::GoTo(0)));
        assert_eq!(map_key(KeyCode::Char('8'), 8), Some(KeyAction::GoTo(7)));
        assert_eq!(map_key(KeyCode::Char('9'), 8), None);
        assert_eq!(map_key(KeyCode::Char('3'), 2), None);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Char('x'), 8), None);
        assert_eq!(map_key(KeyCode::Tab, 8), None);
        assert_eq!(map_key(KeyCode::Char('0'), 8), None);
    }

    #[test]
    fn bindings_cover_at_most_nine_digits() {
        assert_eq!(
            bindings(20)
                .iter()
                .filter(|(_, _, a)| matches!(a, KeyAction::GoTo(_)))
                .count(),
            9
        );
        assert_eq!(
            bindings(3)
                .iter()
                .filter(|(_, _, a)| matches!(a, KeyAction::GoTo(_)))
                .count(),
            3
        );
    }
}
