//! The Go board engine.
//!
//! This module provides the core game logic:
//! - Board state as a row-major grid of intersections
//! - Stone placement with capture resolution (dragon flood-fill, liberties)
//! - Immediate-ko enforcement against a one-ply snapshot
//! - Eye detection and territory scoring
//! - The turn/pass/surrender state machine
//!
//! Connectivity is cardinal only: a *dragon* is a maximal set of
//! same-colored stones connected through edge-sharing adjacency, and a
//! *liberty* is an empty intersection cardinally adjacent to a dragon.
//! Flood fills run on an explicit worklist with a visited vector, so group
//! size never grows the call stack.

use std::fmt;

use crate::config::GameConfig;

/// Offsets to the 4 cardinal neighbors (N, E, S, W) as (row, col) deltas.
const CARDINALS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Offsets to the 4 diagonal neighbors as (row, col) deltas.
const DIAGONALS: [(isize, isize); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// One of the two players. Intersections hold `Option<Player>`, with
/// `None` for an empty point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A move: either a (row, column) placement or a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Pass,
    Play(usize, usize),
}

/// Where the game stands. Only [`GameState::InProgress`] accepts moves;
/// the other three states are terminal and absorbing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    BlackSurrendered,
    WhiteSurrendered,
    DoublePass,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }
}

/// Why a placement was rejected. A failed placement never mutates the
/// board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended
    GameOver,
    /// Coordinate lies outside the grid
    OffBoard,
    /// Intersection already holds a stone
    Occupied,
    /// Move would immediately retake a ko
    Ko,
    /// Move would leave its own dragon with no liberties
    Suicide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "illegal move: game is over"),
            MoveError::OffBoard => write!(f, "illegal move: point is off the board"),
            MoveError::Occupied => write!(f, "illegal move: point is occupied"),
            MoveError::Ko => write!(f, "illegal move: retakes ko"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A Go board plus all per-game bookkeeping.
///
/// The grid is a row-major `Vec<Option<Player>>` whose dimensions are
/// fixed at construction. `snapshot` holds the grid as it stood after the
/// previous successful placement and exists only for the ko check.
/// Cloning produces a fully independent copy; clones may be mutated on
/// other threads, but a single instance must never be shared mutably.
#[derive(Clone)]
pub struct Board {
    size: usize,
    komi: f64,
    cells: Vec<Option<Player>>,
    snapshot: Vec<Option<Player>>,
    to_move: Player,
    turn: u32,
    passes: u32,
    black_captured: usize,
    white_captured: usize,
    state: GameState,
}

impl Board {
    /// Create an empty board. Black moves first on turn 1.
    pub fn new(config: GameConfig) -> Self {
        let cells = vec![None; config.size * config.size];
        Board {
            size: config.size,
            komi: config.komi,
            snapshot: cells.clone(),
            cells,
            to_move: Player::Black,
            turn: 1,
            passes: 0,
            black_captured: 0,
            white_captured: 0,
            state: GameState::InProgress,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Turn number, starting at 1 and bumped by every successful
    /// placement or pass.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Consecutive passes since the last successful placement.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Opponent stones removed by Black so far. Never decreases.
    pub fn black_captured(&self) -> usize {
        self.black_captured
    }

    /// Opponent stones removed by White so far. Never decreases.
    pub fn white_captured(&self) -> usize {
        self.white_captured
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The whole grid, row-major.
    pub fn cells(&self) -> &[Option<Player>] {
        &self.cells
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Read one intersection. Off-board coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if !self.is_on_board(row, col) {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    /// Overwrite one intersection, bypassing all legality checks. Meant
    /// for position setup and cloning collaborators; coordinates must be
    /// on the board.
    pub fn set(&mut self, row: usize, col: usize, stone: Option<Player>) {
        debug_assert!(self.is_on_board(row, col));
        let i = self.idx(row, col);
        self.cells[i] = stone;
    }

    pub fn is_on_board(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// True for an empty on-board intersection.
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        self.is_on_board(row, col) && self.cells[self.idx(row, col)].is_none()
    }

    /// Overwrite this instance's full mutable state from another board.
    /// Both boards must share the same configuration.
    pub fn copy_state(&mut self, other: &Board) {
        debug_assert_eq!(self.size, other.size);
        self.cells.clone_from(&other.cells);
        self.snapshot.clone_from(&other.snapshot);
        self.to_move = other.to_move;
        self.turn = other.turn;
        self.passes = other.passes;
        self.black_captured = other.black_captured;
        self.white_captured = other.white_captured;
        self.state = other.state;
    }

    /// On-board cardinal neighbors of a point. The iterator owns its
    /// points and holds no borrow of the board.
    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + use<> {
        let s = self.size;
        let mut v = Vec::new();
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        v.into_iter()
    }

    /// Attempt a move for the active player.
    ///
    /// `Move::Pass` delegates to [`Board::pass`] and always succeeds while
    /// the game is in progress. A placement is checked for board bounds,
    /// occupancy, ko, and suicide; on success, adjacent opponent dragons
    /// with no liberties left are removed whole and credited to the active
    /// player's capture count, the active player flips, the pass count
    /// resets, the turn number bumps, and the pre-move grid becomes the
    /// new ko snapshot.
    ///
    /// Every error path leaves the board exactly as it was.
    pub fn place_stone(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let (row, col) = match mv {
            Move::Pass => {
                self.pass();
                return Ok(());
            }
            Move::Play(row, col) => (row, col),
        };
        if !self.is_on_board(row, col) {
            return Err(MoveError::OffBoard);
        }
        let idx = self.idx(row, col);
        if self.cells[idx].is_some() {
            return Err(MoveError::Occupied);
        }
        if self.is_ko(row, col) {
            return Err(MoveError::Ko);
        }

        let player = self.to_move;
        let before = self.cells.clone();
        self.cells[idx] = Some(player);

        // Opponent dragons first: each neighbor dragon is evaluated once
        // per placement, even when two neighbors belong to the same dragon.
        let mut captured = 0;
        let mut checked = vec![false; self.cells.len()];
        for (nr, nc) in self.neighbors(row, col) {
            let ni = self.idx(nr, nc);
            if self.cells[ni] != Some(player.opponent()) || checked[ni] {
                continue;
            }
            for &(gr, gc) in &self.dragon(nr, nc) {
                checked[self.idx(gr, gc)] = true;
            }
            if self.count_dragon_liberties(nr, nc) == 0 {
                captured += self.remove_dragon(nr, nc);
            }
        }

        // A capture always opens a liberty next to the new stone, so only
        // a capture-less placement can be suicide.
        if self.count_dragon_liberties(row, col) == 0 {
            self.cells = before;
            return Err(MoveError::Suicide);
        }

        match player {
            Player::Black => self.black_captured += captured,
            Player::White => self.white_captured += captured,
        }
        self.to_move = player.opponent();
        self.passes = 0;
        self.turn += 1;
        self.snapshot = before;
        Ok(())
    }

    /// Pass the turn. Flips the active player, bumps the turn number, and
    /// ends the game with [`GameState::DoublePass`] on the second
    /// consecutive pass. Does nothing once the game is over.
    pub fn pass(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.to_move = self.to_move.opponent();
        self.turn += 1;
        self.passes += 1;
        if self.passes >= 2 {
            self.state = GameState::DoublePass;
        }
    }

    /// Resign on behalf of the active player. Does nothing once the game
    /// is over.
    pub fn surrender(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.state = match self.to_move {
            Player::Black => GameState::BlackSurrendered,
            Player::White => GameState::WhiteSurrendered,
        };
    }

    /// Collect the dragon containing the stone at (row, col).
    fn dragon(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let Some(color) = self.get(row, col) else {
            return Vec::new();
        };
        let mut stack = vec![(row, col)];
        let mut visited = vec![false; self.cells.len()];
        let mut stones = Vec::new();
        while let Some((r, c)) = stack.pop() {
            let i = self.idx(r, c);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            stones.push((r, c));
            for (nr, nc) in self.neighbors(r, c) {
                let ni = self.idx(nr, nc);
                if !visited[ni] && self.cells[ni] == Some(color) {
                    stack.push((nr, nc));
                }
            }
        }
        stones
    }

    /// Count the distinct liberties of the dragon containing (row, col).
    ///
    /// Liberties are marked visited as soon as counted, so a shared empty
    /// point reached from two stones of the dragon counts once. Returns 0
    /// for an empty seed.
    fn count_dragon_liberties(&self, row: usize, col: usize) -> usize {
        let Some(color) = self.get(row, col) else {
            return 0;
        };
        let mut stack = vec![(row, col)];
        let mut visited = vec![false; self.cells.len()];
        let mut liberties = 0;
        while let Some((r, c)) = stack.pop() {
            let i = self.idx(r, c);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            for (nr, nc) in self.neighbors(r, c) {
                let ni = self.idx(nr, nc);
                if visited[ni] {
                    continue;
                }
                match self.cells[ni] {
                    None => {
                        visited[ni] = true;
                        liberties += 1;
                    }
                    Some(c2) if c2 == color => stack.push((nr, nc)),
                    _ => {}
                }
            }
        }
        liberties
    }

    /// Clear the dragon containing (row, col), returning how many stones
    /// came off. Expansion stops at empty points, board edges, and stones
    /// of the other color.
    fn remove_dragon(&mut self, row: usize, col: usize) -> usize {
        let stones = self.dragon(row, col);
        for &(r, c) in &stones {
            let i = self.idx(r, c);
            self.cells[i] = None;
        }
        stones.len()
    }

    /// Would a placement at (row, col) immediately retake a ko?
    ///
    /// True only when the snapshot from one ply ago shows the active
    /// player's own stone on this exact point (it was just vacated by a
    /// single-stone capture) and the current grid differs from that
    /// snapshot in at most 2 intersections, i.e. replaying here would
    /// recreate the position from one ply prior. Only one snapshot is
    /// kept; this is not a positional superko check.
    pub fn is_ko(&self, row: usize, col: usize) -> bool {
        if !self.is_on_board(row, col) {
            return false;
        }
        if self.snapshot[self.idx(row, col)] != Some(self.to_move) {
            return false;
        }
        let mut differences = 0;
        for (cur, prev) in self.cells.iter().zip(&self.snapshot) {
            if cur != prev {
                differences += 1;
                if differences > 2 {
                    return false;
                }
            }
        }
        // One difference is the capturing stone, the other the vacated
        // point itself, so this is a ko and the move is forbidden.
        true
    }

    /// Classify an empty intersection as an eye and return its owner.
    ///
    /// Off-board neighbors count toward both colors (edge padding). A
    /// color must hold all 4 cardinal slots, then reach a combined 7 of
    /// the 8 weighted cardinal+diagonal slots; the diagonal requirement
    /// rejects false eyes at unprotected cutting points. Occupied and
    /// off-board points are never eyes.
    pub fn is_eye(&self, row: usize, col: usize) -> Option<Player> {
        if !self.is_free(row, col) {
            return None;
        }
        let mut black = 0;
        let mut white = 0;
        self.tally_neighbors(row, col, CARDINALS, &mut black, &mut white);
        if black < 4 && white < 4 {
            return None;
        }
        self.tally_neighbors(row, col, DIAGONALS, &mut black, &mut white);
        if black >= 7 {
            Some(Player::Black)
        } else if white >= 7 {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Add the stones found in the 4 given directions to the per-color
    /// totals, crediting off-board points to both colors.
    fn tally_neighbors(
        &self,
        row: usize,
        col: usize,
        directions: [(isize, isize); 4],
        black: &mut u32,
        white: &mut u32,
    ) {
        for (dr, dc) in directions {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r < 0 || c < 0 || r >= self.size as isize || c >= self.size as isize {
                *black += 1;
                *white += 1;
                continue;
            }
            match self.cells[self.idx(r as usize, c as usize)] {
                Some(Player::Black) => *black += 1,
                Some(Player::White) => *white += 1,
                None => {}
            }
        }
    }

    /// True when the game has reached a terminal state or every empty
    /// intersection is an eye for some color. No seki or dead-stone
    /// resolution is attempted.
    pub fn is_game_over(&self) -> bool {
        if self.state.is_terminal() {
            return true;
        }
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[self.idx(row, col)].is_none() && self.is_eye(row, col).is_none() {
                    return false;
                }
            }
        }
        true
    }

    /// Decide the game, returning the winner and both scores.
    ///
    /// A surrender decides the game outright with no scores computed.
    /// Otherwise the game must be over per [`Board::is_game_over`];
    /// returns `None` when it is not. Each side scores one point per own
    /// stone and per own eye, White additionally receives komi, and an
    /// exact tie goes to White.
    pub fn determine_winner(&self) -> Option<(Player, f64, f64)> {
        match self.state {
            GameState::BlackSurrendered => return Some((Player::White, 0.0, 0.0)),
            GameState::WhiteSurrendered => return Some((Player::Black, 0.0, 0.0)),
            _ => {}
        }
        if !self.is_game_over() {
            return None;
        }
        let mut black = 0.0;
        let mut white = 0.0;
        for row in 0..self.size {
            for col in 0..self.size {
                let owner = match self.cells[self.idx(row, col)] {
                    Some(stone) => Some(stone),
                    None => self.is_eye(row, col),
                };
                match owner {
                    Some(Player::Black) => black += 1.0,
                    Some(Player::White) => white += 1.0,
                    None => {}
                }
            }
        }
        white += self.komi;
        let winner = if black > white {
            Player::Black
        } else {
            Player::White
        };
        Some((winner, black, white))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, "{}", col % 10)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{} ", row % 10)?;
            for col in 0..self.size {
                let ch = match self.cells[self.idx(row, col)] {
                    Some(Player::Black) => 'b',
                    Some(Player::White) => 'w',
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board9() -> Board {
        Board::new(GameConfig::new(9, 6.5))
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board9();
        assert!(board.cells().iter().all(Option::is_none));
        assert_eq!(board.to_move(), Player::Black);
        assert_eq!(board.turn(), 1);
        assert_eq!(board.passes(), 0);
        assert_eq!(board.state(), GameState::InProgress);
    }

    #[test]
    fn test_place_stone_basic() {
        let mut board = board9();
        board.place_stone(Move::Play(4, 4)).unwrap();
        assert_eq!(board.get(4, 4), Some(Player::Black));
        assert_eq!(board.to_move(), Player::White);
        assert_eq!(board.turn(), 2);
    }

    #[test]
    fn test_place_stone_rejects_occupied_and_off_board() {
        let mut board = board9();
        board.place_stone(Move::Play(4, 4)).unwrap();
        assert_eq!(board.place_stone(Move::Play(4, 4)), Err(MoveError::Occupied));
        assert_eq!(board.place_stone(Move::Play(9, 0)), Err(MoveError::OffBoard));
        assert_eq!(board.place_stone(Move::Play(0, 9)), Err(MoveError::OffBoard));
        // Failed attempts change nothing
        assert_eq!(board.to_move(), Player::White);
        assert_eq!(board.turn(), 2);
    }

    #[test]
    #[should_panic]
    fn test_set_rejects_off_board_coordinates() {
        // (0,9) would alias (1,0) in the row-major grid without the bounds
        // check
        let mut board = board9();
        board.set(0, 9, Some(Player::Black));
    }

    #[test]
    fn test_single_stone_liberties() {
        let mut board = board9();
        board.set(4, 4, Some(Player::Black));
        assert_eq!(board.count_dragon_liberties(4, 4), 4);
        board.set(0, 0, Some(Player::White));
        assert_eq!(board.count_dragon_liberties(0, 0), 2);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        let mut board = board9();
        // Two connected black stones share liberties along the wall
        board.set(0, 0, Some(Player::Black));
        board.set(0, 1, Some(Player::Black));
        assert_eq!(board.count_dragon_liberties(0, 0), 3);
    }

    #[test]
    fn test_corner_capture() {
        let mut board = board9();
        board.set(0, 0, Some(Player::White));
        board.set(0, 1, Some(Player::Black));
        board.place_stone(Move::Play(1, 0)).unwrap();
        assert_eq!(board.get(0, 0), None);
        assert_eq!(board.black_captured(), 1);
        assert_eq!(board.white_captured(), 0);
    }

    #[test]
    fn test_suicide_rejected_without_mutation() {
        let mut board = board9();
        board.set(0, 1, Some(Player::Black));
        board.set(1, 0, Some(Player::Black));
        board.pass(); // White to move
        let before: Vec<_> = board.cells().to_vec();
        assert_eq!(board.place_stone(Move::Play(0, 0)), Err(MoveError::Suicide));
        assert_eq!(board.cells(), &before[..]);
        assert_eq!(board.to_move(), Player::White);
        assert_eq!(board.turn(), 2);
        assert_eq!(board.white_captured(), 0);
    }

    #[test]
    fn test_capture_makes_suicidal_point_legal() {
        let mut board = board9();
        // White fills the corner except (0,0); Black surrounds from outside
        board.set(0, 1, Some(Player::White));
        board.set(1, 0, Some(Player::White));
        board.set(1, 1, Some(Player::White));
        board.set(0, 2, Some(Player::Black));
        board.set(1, 2, Some(Player::Black));
        board.set(2, 0, Some(Player::Black));
        board.set(2, 1, Some(Player::Black));
        board.set(2, 2, Some(Player::Black));
        // (0,0) has no liberties of its own, but it takes the white
        // dragon's last liberty
        board.place_stone(Move::Play(0, 0)).unwrap();
        assert_eq!(board.get(0, 0), Some(Player::Black));
        assert_eq!(board.get(0, 1), None);
        assert_eq!(board.get(1, 1), None);
        assert_eq!(board.black_captured(), 3);
    }

    #[test]
    fn test_eye_in_center_and_at_corner() {
        let mut board = board9();
        // Full black diamond plus diagonals around (4,4)
        for (r, c) in [(3, 4), (5, 4), (4, 3), (4, 5), (3, 3), (3, 5), (5, 3), (5, 5)] {
            board.set(r, c, Some(Player::Black));
        }
        assert_eq!(board.is_eye(4, 4), Some(Player::Black));
        // Corner eye: two stones suffice, the edge pads the rest
        board.set(0, 1, Some(Player::White));
        board.set(1, 0, Some(Player::White));
        assert_eq!(board.is_eye(0, 0), Some(Player::White));
        // Occupied points are never eyes
        assert_eq!(board.is_eye(3, 4), None);
        // An open point next to nothing is not an eye
        assert_eq!(board.is_eye(7, 7), None);
    }

    #[test]
    fn test_false_eye_rejected_by_diagonals() {
        let mut board = board9();
        for (r, c) in [(3, 4), (5, 4), (4, 3), (4, 5)] {
            board.set(r, c, Some(Player::Black));
        }
        // All cardinals black but two hostile diagonals: not an eye
        board.set(3, 3, Some(Player::White));
        board.set(5, 5, Some(Player::White));
        assert_eq!(board.is_eye(4, 4), None);
    }

    #[test]
    fn test_double_pass_ends_game() {
        let mut board = board9();
        board.pass();
        board.pass();
        assert_eq!(board.state(), GameState::DoublePass);
        assert!(board.is_game_over());
        assert_eq!(board.place_stone(Move::Play(0, 0)), Err(MoveError::GameOver));
        assert_eq!(board.get(0, 0), None);
    }

    #[test]
    fn test_placement_resets_pass_count() {
        let mut board = board9();
        board.pass();
        board.place_stone(Move::Play(4, 4)).unwrap();
        assert_eq!(board.passes(), 0);
        board.pass();
        assert_eq!(board.state(), GameState::InProgress);
    }

    #[test]
    fn test_surrender_assigns_active_player() {
        let mut board = board9();
        board.surrender();
        assert_eq!(board.state(), GameState::BlackSurrendered);
        assert_eq!(board.determine_winner(), Some((Player::White, 0.0, 0.0)));

        let mut board = board9();
        board.place_stone(Move::Play(4, 4)).unwrap();
        board.surrender();
        assert_eq!(board.state(), GameState::WhiteSurrendered);
        assert_eq!(board.determine_winner(), Some((Player::Black, 0.0, 0.0)));
    }

    #[test]
    fn test_terminal_states_absorb() {
        let mut board = board9();
        board.surrender();
        let turn = board.turn();
        board.pass();
        board.surrender();
        assert_eq!(board.place_stone(Move::Pass), Err(MoveError::GameOver));
        assert_eq!(board.turn(), turn);
        assert_eq!(board.state(), GameState::BlackSurrendered);
    }

    #[test]
    fn test_no_ko_on_fresh_board() {
        let board = board9();
        for row in 0..9 {
            for col in 0..9 {
                assert!(!board.is_ko(row, col));
            }
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = board9();
        board.place_stone(Move::Play(4, 4)).unwrap();
        let mut fork = board.clone();
        fork.place_stone(Move::Play(3, 3)).unwrap();
        assert_eq!(board.get(3, 3), None);
        assert_eq!(board.turn(), 2);
        assert_eq!(fork.turn(), 3);
    }

    #[test]
    fn test_copy_state_round_trip() {
        let mut board = board9();
        board.place_stone(Move::Play(4, 4)).unwrap();
        board.place_stone(Move::Play(2, 2)).unwrap();
        let mut other = board9();
        other.copy_state(&board);
        assert_eq!(other.cells(), board.cells());
        assert_eq!(other.to_move(), board.to_move());
        assert_eq!(other.turn(), board.turn());
        // and the copy does not alias the source
        other.place_stone(Move::Play(6, 6)).unwrap();
        assert_eq!(board.get(6, 6), None);
    }
}
