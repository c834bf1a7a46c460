use crate::board::Board;
use crate::game_state::Item;
use crate::types::{Position, SnakeTone};

/// Owned copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub head: Position,
    pub item: Option<Item>,
    pub snake_length: usize,
    pub display_length: usize,
    pub high_score: usize,
    pub tone: SnakeTone,
    pub power_ticks: u32,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub tick: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    pub fn powered(&self) -> bool {
        self.tone == SnakeTone::Powered
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::default(),
            head: Position::new(0, 0),
            item: None,
            snake_length: 0,
            display_length: 0,
            high_score: 0,
            tone: SnakeTone::Normal,
            power_ticks: 0,
            paused: false,
            game_over: false,
            episode_id: 0,
            tick: 0,
        }
    }
}
