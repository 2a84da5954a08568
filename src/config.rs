/// Knobs for the interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wait for one line of input before showing the first board.
    pub pause_at_start: bool,

    /// Redraw the board after every applied move.
    pub show_board_after_move: bool,

    /// Print the title, rules and command summary on start.
    pub banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pause_at_start: true,
            show_board_after_move: true,
            banner: true,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pause_at_start(mut self, enabled: bool) -> Self {
        self.pause_at_start = enabled;
        self
    }

    pub fn with_show_board_after_move(mut self, enabled: bool) -> Self {
        self.show_board_after_move = enabled;
        self
    }

    pub fn with_banner(mut self, enabled: bool) -> Self {
        self.banner = enabled;
        self
    }
}
