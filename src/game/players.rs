use crate::draughts_boards::draughts_board::Color;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    move_count: u32,
    current: bool,
}

impl Player {
    /// Light opens the game, so a fresh light player starts out current.
    pub fn new(name: &str, color: Color) -> Self {
        Player {
            name: name.to_string(),
            color,
            move_count: 1,
            current: color == Color::Light,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn set_move_count(&mut self, move_count: u32) {
        self.move_count = move_count;
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    pub fn set_current(&mut self, current: bool) {
        self.current = current;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
