/// Where a round stands.
///
/// `Won` and `Lost` are terminal: only a fresh start leaves them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    /// Banner text shown exactly while in a terminal state.
    #[must_use]
    pub fn banner(self) -> Option<&'static str> {
        match self {
            GameStatus::Won => Some("ALL CLEARED"),
            GameStatus::Lost => Some("GAME OVER"),
            GameStatus::Idle | GameStatus::Playing => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}
