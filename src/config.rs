//! Engine configuration.
//!
//! Board size and komi are supplied once at construction and never change
//! for the life of a [`Board`](crate::board::Board). Values are not
//! validated here; a degenerate size or komi is the caller's problem.

/// Fixed per-game configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Board side length. Standard Go sizes are 9, 13, or 19.
    pub size: usize,
    /// Score bonus awarded to White to offset Black's first-move advantage.
    pub komi: f64,
}

impl GameConfig {
    pub fn new(size: usize, komi: f64) -> Self {
        Self { size, komi }
    }
}

impl Default for GameConfig {
    /// A 9x9 board with 6.5 komi.
    fn default() -> Self {
        Self {
            size: 9,
            komi: 6.5,
        }
    }
}
