//! Terminal rendering for the snake game.
//!
//! Rendering is split in two: [`GameView`] turns a core snapshot into a
//! [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`] flushes that
//! framebuffer to the terminal through crossterm. Board cells are drawn two
//! columns wide so the playfield looks square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FrameRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
