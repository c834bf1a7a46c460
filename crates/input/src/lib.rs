//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game core
//! has no repeat-rate logic: callers feed one action per key press and drop
//! terminal auto-repeat events.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, is_key_press, should_quit};
