//! Goban: a rules engine for the game of Go.
//!
//! This crate owns a single stateful board engine: it validates moves,
//! resolves captures, enforces the ko and suicide prohibitions, tracks
//! turn/pass/surrender state, and scores a finished game with a simplified
//! eye-based heuristic. Move search, rendering, and transport are left to
//! callers.
//!
//! ## Modules
//!
//! - [`config`] - Board size and komi, fixed at construction
//! - [`board`] - The board engine (legality, captures, ko, eyes, scoring)
//! - [`shuffle`] - Uniform in-place shuffling for external playout code
//!
//! ## Example
//!
//! ```
//! use goban::board::{Board, Move, Player};
//! use goban::config::GameConfig;
//!
//! // Start a 9x9 game
//! let mut board = Board::new(GameConfig::new(9, 6.5));
//!
//! // Black opens on the center point
//! board.place_stone(Move::Play(4, 4)).unwrap();
//!
//! assert_eq!(board.get(4, 4), Some(Player::Black));
//! assert_eq!(board.to_move(), Player::White);
//! assert_eq!(board.turn(), 2);
//! ```

pub mod board;
pub mod config;
pub mod shuffle;
