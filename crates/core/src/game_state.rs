//! Game state module - the snake state machine
//!
//! [`GameState`] owns the board, the snake body, the active item, the growth
//! bookkeeping and the power-up timer. The driver steers it between ticks and
//! calls [`GameState::update`] once per tick; `update` returns `false` on the
//! tick the snake hits a wall or itself.
//!
//! One tick runs these steps in order:
//!
//! 1. eat the item under the head (growth target and power-up are only booked)
//! 2. compute the next head cell from the pending direction
//! 3. stop with game over if that cell is off the board or part of the snake
//! 4. move: vacate the old tail, occupy the new head
//! 5. grow by at most one segment at the recorded growth cell
//! 6. start, count down or end the power-up
//! 7. spawn a new item on a free cell if none is active

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{GameConfig, Variant};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Random spawn attempts before falling back to a scan of the free cells.
const MAX_SPAWN_ATTEMPTS: u32 = 64;

/// The consumable currently on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub pos: Position,
    pub kind: ItemKind,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    /// Head first, tail last.
    snake: VecDeque<Position>,
    /// Direction used by the last successful move.
    direction: Option<Direction>,
    /// Direction requested by input, applied on the next move.
    pending: Option<Direction>,
    /// Target length; the body catches up one segment per tick.
    display_length: usize,
    /// Where the next grown segment appears (tail at the time of eating).
    grow_at: Option<Position>,
    item: Option<Item>,
    power_pending: bool,
    power_ticks: u32,
    tone: SnakeTone,
    high_score: usize,
    paused: bool,
    game_over: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Successful updates in the current episode.
    tick: u64,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game seeded from `config.seed()`
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, SimpleRng::new(config.seed()))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing randomness from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let mut state = Self {
            config,
            board: Board::new(config.rows(), config.cols()),
            snake: VecDeque::new(),
            direction: None,
            pending: None,
            display_length: 1,
            grow_at: None,
            item: None,
            power_pending: false,
            power_ticks: 0,
            tone: SnakeTone::Normal,
            high_score: INITIAL_HIGH_SCORE,
            paused: false,
            game_over: false,
            episode_id: 0,
            tick: 0,
            rng,
        };
        state.init_round();
        state
    }

    fn init_round(&mut self) {
        let start = self.config.start();

        self.board.clear();
        self.snake.clear();
        self.snake.push_back(start);
        self.board.set(start, Cell::Snake(SnakeTone::Normal));

        self.direction = None;
        self.pending = None;
        self.display_length = 1;
        self.grow_at = None;
        self.item = None;
        self.power_pending = false;
        self.power_ticks = 0;
        self.tone = SnakeTone::Normal;
        self.paused = false;
        self.game_over = false;
        self.tick = 0;
    }

    /// Start a new round. The session high score and the RNG stream carry over.
    pub fn reset(&mut self) {
        self.init_round();
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(
            episode = self.episode_id,
            high_score = self.high_score,
            "new round"
        );
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the grid
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Target length shown on the scoreboard
    pub fn display_length(&self) -> usize {
        self.display_length
    }

    /// Segments currently on the board
    pub fn snake_length(&self) -> usize {
        self.snake.len()
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        // The body always holds at least the head.
        self.snake[0]
    }

    pub fn tail(&self) -> Position {
        self.snake[self.snake.len() - 1]
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn item(&self) -> Option<Item> {
        self.item
    }

    pub fn power_ticks(&self) -> u32 {
        self.power_ticks
    }

    pub fn tone(&self) -> SnakeTone {
        self.tone
    }

    pub fn high_score(&self) -> usize {
        self.high_score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.head = self.head();
        out.item = self.item;
        out.snake_length = self.snake.len();
        out.display_length = self.display_length;
        out.high_score = self.high_score;
        out.tone = self.tone;
        out.power_ticks = self.power_ticks;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.tick = self.tick;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn up(&mut self) {
        self.steer(Direction::Up);
    }

    pub fn down(&mut self) {
        self.steer(Direction::Down);
    }

    pub fn left(&mut self) {
        self.steer(Direction::Left);
    }

    pub fn right(&mut self) {
        self.steer(Direction::Right);
    }

    /// Request a direction for the next move.
    ///
    /// A single-segment snake accepts anything. A longer snake ignores the
    /// exact reverse of the direction it last moved in. Returns whether the
    /// request was taken.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if self.game_over {
            return false;
        }
        if self.snake.len() > 1 && self.direction == Some(dir.opposite()) {
            return false;
        }
        self.pending = Some(dir);
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
            GameAction::Up | GameAction::Down | GameAction::Left | GameAction::Right => action
                .direction()
                .map(|dir| self.steer(dir))
                .unwrap_or(false),
        }
    }

    /// Put `kind` on `pos` for scripted scenarios.
    ///
    /// Refuses when an item is already active or `pos` is off the board or
    /// under the snake.
    pub fn place_item(&mut self, pos: Position, kind: ItemKind) -> bool {
        if self.item.is_some() || !self.board.is_free(pos) {
            return false;
        }
        self.item = Some(Item { pos, kind });
        self.board.set(pos, Cell::Item(kind));
        true
    }

    /// Advance the game by one tick.
    ///
    /// Returns `false` when the move this tick ends the game (and on every
    /// call after that until [`reset`](Self::reset)). A paused game does not
    /// advance and reports `true`.
    pub fn update(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.paused {
            return true;
        }

        self.eat();
        if !self.advance() {
            self.game_over = true;
            self.high_score = self.high_score.max(self.display_length);
            info!(
                episode = self.episode_id,
                tick = self.tick,
                length = self.display_length,
                high_score = self.high_score,
                "game over"
            );
            return false;
        }
        self.grow();
        self.update_power();
        self.spawn_item();

        self.tick += 1;
        true
    }

    fn eat(&mut self) {
        let Some(item) = self.item else {
            return;
        };
        if item.pos != self.head() {
            return;
        }

        self.item = None;
        self.display_length += item.kind.growth();
        self.grow_at = Some(self.tail());
        if item.kind.triggers_power_up() {
            self.power_pending = true;
        }
        debug!(
            kind = item.kind.as_str(),
            display_length = self.display_length,
            "item eaten"
        );
    }

    /// Move the head one cell. Returns false on a wall or body hit, leaving the
    /// snake untouched.
    fn advance(&mut self) -> bool {
        let Some(dir) = self.pending else {
            return true;
        };

        let next = self.head().step(dir);
        // The tail still counts as occupied even though it would move away.
        if self.board.is_out_of_bounds(next) || self.board.is_snake(next) {
            return false;
        }

        self.direction = Some(dir);
        if let Some(tail) = self.snake.pop_back() {
            self.board.set(tail, Cell::Empty);
        }
        self.snake.push_front(next);
        self.board.set(next, Cell::Snake(self.tone));
        true
    }

    fn grow(&mut self) {
        if self.snake.len() >= self.display_length {
            return;
        }
        let Some(at) = self.grow_at else {
            return;
        };

        debug_assert!(
            !self.board.is_snake(at),
            "growth cell {:?} already occupied",
            at
        );
        self.snake.push_back(at);
        self.board.set(at, Cell::Snake(self.tone));
    }

    fn update_power(&mut self) {
        if std::mem::take(&mut self.power_pending) {
            self.power_ticks = POWER_UP_TICKS;
            self.paint(SnakeTone::Powered);
            debug!(ticks = self.power_ticks, "power-up started");
        } else if self.power_ticks > 0 {
            self.power_ticks -= 1;
            if self.power_ticks == 0 {
                self.paint(SnakeTone::Normal);
                debug!("power-up expired");
            }
        }
    }

    fn paint(&mut self, tone: SnakeTone) {
        self.tone = tone;
        for &pos in &self.snake {
            self.board.set(pos, Cell::Snake(tone));
        }
    }

    fn spawn_item(&mut self) {
        if self.item.is_some() {
            return;
        }
        let Some(pos) = self.pick_free_cell() else {
            debug!("no free cell, nothing spawned");
            return;
        };

        let kind = self.roll_kind();
        self.item = Some(Item { pos, kind });
        self.board.set(pos, Cell::Item(kind));
        debug!(row = pos.row, col = pos.col, kind = kind.as_str(), "item spawned");
    }

    /// Uniformly random cell outside the snake, `None` when the snake fills the board.
    fn pick_free_cell(&mut self) -> Option<Position> {
        let rows = self.board.rows() as u32;
        let cols = self.board.cols() as u32;

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let row = self.rng.next_range(rows) as i16;
            let col = self.rng.next_range(cols) as i16;
            let pos = Position::new(row, col);
            if self.board.is_free(pos) {
                return Some(pos);
            }
        }

        let free = self.board.free_count();
        if free == 0 {
            return None;
        }
        let n = self.rng.next_range(free as u32) as usize;
        self.board.nth_free(n)
    }

    fn roll_kind(&mut self) -> ItemKind {
        match self.config.variant() {
            Variant::Classic => ItemKind::Apple,
            Variant::PowerUp => {
                if self.rng.next_range(100) < POWER_ITEM_PERCENT {
                    ItemKind::Power
                } else {
                    ItemKind::Apple
                }
            }
        }
    }

    /// Replace the body with `body` (head first) for tests.
    #[cfg(test)]
    pub(crate) fn set_body(&mut self, body: &[Position], direction: Option<Direction>) {
        for &pos in &self.snake {
            self.board.set(pos, Cell::Empty);
        }
        self.snake = body.iter().copied().collect();
        for &pos in body {
            self.board.set(pos, Cell::Snake(self.tone));
        }
        self.display_length = body.len();
        self.direction = direction;
        self.pending = direction;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
