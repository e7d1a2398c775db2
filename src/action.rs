//! Driver actions.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseActionError;

/// A command a driver loop can send to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Stop drawing and let the dealer play.
    Stand,
    /// Start a new round.
    Reset,
    /// Log the current observation.
    Observe,
    /// Leave the driver loop.
    Exit,
}

impl Action {
    /// All actions, in the order a driver lists them.
    pub const ALL: [Self; 5] = [
        Self::Hit,
        Self::Stand,
        Self::Reset,
        Self::Observe,
        Self::Exit,
    ];

    /// Returns the command word for the action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Reset => "reset",
            Self::Observe => "observe",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(word))
            .ok_or_else(|| ParseActionError(word.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_words() {
        assert_eq!("hit".parse::<Action>(), Ok(Action::Hit));
        assert_eq!(" Stand\n".parse::<Action>(), Ok(Action::Stand));
        assert_eq!("EXIT".parse::<Action>(), Ok(Action::Exit));
        assert_eq!(
            "double".parse::<Action>(),
            Err(ParseActionError("double".into()))
        );
    }
}
