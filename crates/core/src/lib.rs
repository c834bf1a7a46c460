//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the snake game rules and the per-tick state machine.
//! It has **no dependencies** on terminals, windows, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or injected [`RandomSource`]) produces identical games
//! - **Testable**: Every rule is reachable from plain method calls
//! - **Portable**: The terminal driver is just one consumer of [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`board`]: rows x cols grid of cell markers, the O(1) occupancy cache
//! - [`config`]: validated board size, rule variant and seed
//! - [`game_state`]: the snake, items, growth, power-up and session high score
//! - [`rng`]: random source trait and the default LCG
//! - [`snapshot`]: owned per-frame copy for renderers
//!
//! # Game Rules
//!
//! - The snake starts as one segment in the middle of the board with no direction
//! - The head moves one cell per tick; reversing onto the body is ignored
//! - Leaving the board or running into the body (tail included) ends the game
//! - Apples grow the snake by 4, power items by 8, one segment per tick
//! - Power items (20% of spawns in the power-up variant) tint the snake for 6 ticks
//! - Items always spawn on a cell outside the snake
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_types::Position;
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345));
//!
//! game.right();
//! assert!(game.update());
//! assert_eq!(game.head(), Position::new(14, 20));
//!
//! // The first tick always leaves an item on the board.
//! assert!(game.item().is_some());
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig, Variant};
pub use game_state::{GameState, Item};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
