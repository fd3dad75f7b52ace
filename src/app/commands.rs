//! Menu commands and input parsing for dirpeek.
//!
//! Maps the number typed at the menu prompt to a [Command].

/// One entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    View,
    Up,
    ChangeDir,
    Refresh,
    Exit,
}

impl Command {
    /// Looks up the command for a menu selection.
    /// Returns `None` for numbers that are not on the menu.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Command::Open),
            2 => Some(Command::View),
            3 => Some(Command::Up),
            4 => Some(Command::ChangeDir),
            5 => Some(Command::Refresh),
            0 => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Parses one line of input as an integer, ignoring surrounding whitespace.
pub fn parse_number<T: std::str::FromStr>(line: &str) -> Option<T> {
    line.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(Command::from_choice(0), Some(Command::Exit));
        assert_eq!(Command::from_choice(1), Some(Command::Open));
        assert_eq!(Command::from_choice(4), Some(Command::ChangeDir));
        assert_eq!(Command::from_choice(5), Some(Command::Refresh));
        assert_eq!(Command::from_choice(6), None);
        assert_eq!(Command::from_choice(-1), None);
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_number::<i64>(" 3 \n"), Some(3));
        assert_eq!(parse_number::<i64>("-2"), Some(-2));
        assert_eq!(parse_number::<usize>("-2"), None);
        assert_eq!(parse_number::<usize>("abc"), None);
        assert_eq!(parse_number::<usize>(""), None);
        assert_eq!(parse_number::<usize>("1 2"), None);
    }
}
