//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Rows**: 27 (indexed 0-26, top to bottom)
//! - **Columns**: 37 (indexed 0-36, left to right)
//! - **Start cell**: (14, 19)
//!
//! The game core accepts other sizes through its configuration; these are the
//! defaults the terminal build ships with.
//!
//! # Growth and Power-Up Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `APPLE_GROWTH` | 4 | Segments gained from a plain apple |
//! | `POWER_ITEM_GROWTH` | 8 | Segments gained from a power item |
//! | `POWER_UP_TICKS` | 6 | Ticks the snake stays powered |
//! | `POWER_ITEM_PERCENT` | 20 | Chance that a spawn is a power item |
//! | `INITIAL_HIGH_SCORE` | 1 | Session best before any game ends |
//!
//! # Timing
//!
//! The driver advances the game at a fixed 12 ticks per second (`TICK_MS` = 83).
//! The core itself is rate-agnostic: one `update()` is one step.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Position, COLS, ROWS};
//!
//! // Directions know their opposite
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Positions step one cell at a time
//! let head = Position::new(14, 19);
//! assert_eq!(head.step(Direction::Up), Position::new(13, 19));
//!
//! // Parse a game action
//! assert_eq!(GameAction::from_str("left"), Some(GameAction::Left));
//!
//! assert_eq!(ROWS, 27);
//! assert_eq!(COLS, 37);
//! ```

/// Default board height in cells (27 rows)
pub const ROWS: u16 = 27;

/// Default board width in cells (37 columns)
pub const COLS: u16 = 37;

/// Ticks per second driven by the terminal loop.
pub const TICKS_PER_SECOND: u32 = 12;

/// Fixed tick interval in milliseconds (1000 / 12, rounded down).
pub const TICK_MS: u32 = 1000 / TICKS_PER_SECOND;

/// Segments gained by eating a plain apple.
pub const APPLE_GROWTH: usize = 4;

/// Segments gained by eating a power item.
pub const POWER_ITEM_GROWTH: usize = 8;

/// Number of ticks the snake stays powered after eating a power item.
pub const POWER_UP_TICKS: u32 = 6;

/// Probability (in percent) that a spawned item is a power item.
pub const POWER_ITEM_PERCENT: u32 = 20;

/// High score of a fresh session.
pub const INITIAL_HIGH_SCORE: usize = 1;


/// A cell coordinate on the board.
///
/// `row` grows downwards, `col` grows to the right. Coordinates are signed so a
/// step off the top or left edge is representable; the board treats such
/// positions as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i16,
    pub col: i16,
}

impl Position {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one cell towards `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Orthogonal (taxicab) distance between two positions.
    pub fn manhattan(self, other: Position) -> u32 {
        (self.row - other.row).unsigned_abs() as u32 + (self.col - other.col).unsigned_abs() as u32
    }
}

/// Movement direction of the snake's head
///
/// A snake that has not been steered yet has no direction at all; the game
/// state models that as `Option<Direction>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that would reverse the snake onto itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Consumable kinds that can sit on the board
///
/// - **Apple**: plain food, grows the snake by [`APPLE_GROWTH`]
/// - **Power**: bonus food, grows by [`POWER_ITEM_GROWTH`] and powers the snake up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Apple,
    Power,
}

impl ItemKind {
    /// Segments added to the display length when eaten.
    pub fn growth(self) -> usize {
        match self {
            ItemKind::Apple => APPLE_GROWTH,
            ItemKind::Power => POWER_ITEM_GROWTH,
        }
    }

    /// Whether eating this item starts the power-up timer.
    pub fn triggers_power_up(self) -> bool {
        !matches!(self, ItemKind::Apple)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Apple => "apple",
            ItemKind::Power => "power",
        }
    }
}

/// Colour state of the snake body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnakeTone {
    #[default]
    Normal,
    Powered,
}

/// A cell on the game board
///
/// The board is a cache of the snake body and the active item: a cell is
/// `Snake(_)` exactly when its coordinate is part of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Snake(SnakeTone),
    Item(ItemKind),
}

impl Cell {
    pub fn is_snake(self) -> bool {
        matches!(self, Cell::Snake(_))
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Actions that the driver can apply to the game state
///
/// Directional actions map to the game's steering handlers; the rest control
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Steer the head upwards
    Up,
    /// Steer the head downwards
    Down,
    /// Steer the head left
    Left,
    /// Steer the head right
    Right,
    /// Toggle pause state
    Pause,
    /// Start a new game, keeping the session high score
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("Up"), Some(GameAction::Up));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Up),
            "down" => Some(GameAction::Down),
            "left" => Some(GameAction::Left),
            "right" => Some(GameAction::Right),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Up => "up",
            GameAction::Down => "down",
            GameAction::Left => "left",
            GameAction::Right => "right",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// The steering direction carried by this action, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            GameAction::Up => Some(Direction::Up),
            GameAction::Down => Some(Direction::Down),
            GameAction::Left => Some(Direction::Left),
            GameAction::Right => Some(Direction::Right),
            GameAction::Pause | GameAction::Restart => None,
        }
    }
}
