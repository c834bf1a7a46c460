//! Game configuration - board size, rule variant, RNG seed.

use thiserror::Error;

use crate::types::{Position, COLS, ROWS};

/// Smallest accepted board side.
pub const MIN_SIDE: u16 = 2;

/// Largest accepted board side.
pub const MAX_SIDE: u16 = 200;

/// Which item rules are in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Plain apples only.
    Classic,
    /// Apples plus power items that grow more and power the snake up.
    #[default]
    PowerUp,
}

impl Variant {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "power-up" | "powerup" | "power" => Some(Variant::PowerUp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::PowerUp => "power-up",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board rows must be within {min}..={max}, got {0}", min = MIN_SIDE, max = MAX_SIDE)]
    Rows(u16),
    #[error("board columns must be within {min}..={max}, got {0}", min = MIN_SIDE, max = MAX_SIDE)]
    Cols(u16),
}

/// Validated game configuration.
///
/// Construct with [`GameConfig::new`] (or take the [`Default`] 27 x 37 board)
/// and refine with the `with_*` builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    rows: u16,
    cols: u16,
    variant: Variant,
    seed: u32,
}

impl GameConfig {
    pub fn new(rows: u16, cols: u16) -> Result<Self, ConfigError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&rows) {
            return Err(ConfigError::Rows(rows));
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&cols) {
            return Err(ConfigError::Cols(cols));
        }
        Ok(Self {
            rows,
            cols,
            ..Self::default()
        })
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Cell the single-segment snake starts on.
    ///
    /// (14, 19) on the default 27 x 37 board.
    pub fn start(&self) -> Position {
        Position::new(((self.rows + 1) / 2) as i16, ((self.cols + 1) / 2) as i16)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            variant: Variant::default(),
            seed: 1,
        }
    }
}
