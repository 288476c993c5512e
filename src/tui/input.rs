//! Keyboard interpretation for the game screen.

use crossterm::event::KeyCode;

/// Actions a key press can trigger, depending on the current prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Answer yes to the current prompt.
    Yes,
    /// Answer no to the current prompt.
    No,
    /// Quit the program.
    Quit,
    /// Start another game.
    Replay,
    /// Any other key, forwarded to the active player.
    Key(KeyCode),
}

/// Maps a key press to an [`Action`].
pub fn parse_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Action::Yes,
        KeyCode::Char('n') | KeyCode::Char('N') => Action::No,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Replay,
        other => Action::Key(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_keys_map_to_answers() {
        assert_eq!(parse_key(KeyCode::Char('y')), Action::Yes);
        assert_eq!(parse_key(KeyCode::Char('N')), Action::No);
        assert_eq!(parse_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(parse_key(KeyCode::Esc), Action::Quit);
        assert_eq!(parse_key(KeyCode::Char('r')), Action::Replay);
    }

    #[test]
    fn test_digits_pass_through_to_the_player() {
        assert_eq!(parse_key(KeyCode::Char('4')), Action::Key(KeyCode::Char('4')));
    }
}
