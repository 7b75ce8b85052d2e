//! Game state module - the controller that owns a running game
//!
//! This module ties together the engine, the piece picker and scoring.
//! Gravity ticks and input actions are applied one at a time: each reads
//! the current board and piece, asks the engine for the next values and
//! swaps them in. There is no other copy of the state to go stale.

use crate::board::Board;
use crate::engine::{clear_lines, is_valid_move, overlay_piece, place_piece};
use crate::pieces::Piece;
use crate::rng::PiecePicker;
use crate::scoring::{calculate_score, get_drop_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Falling piece and where it is anchored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub piece: Piece,
    pub position: Position,
}

impl ActivePiece {
    /// Place a piece at the spawn position
    pub fn spawn(piece: Piece) -> Self {
        Self {
            piece,
            position: SPAWN_POSITION,
        }
    }

    /// Check if the piece fits where it is
    pub fn fits(&self, board: &Board) -> bool {
        is_valid_move(board, &self.piece, self.position.row, self.position.col)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    picker: PiecePicker,
    status: GameStatus,
    score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
    /// Last landing (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::standard(),
            active: None,
            picker: PiecePicker::new(seed),
            status: GameStatus::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_timer_ms: 0,
            last_event: None,
        }
    }

    /// Start the game and spawn the first piece
    ///
    /// Only meaningful from `Idle`; use [`GameState::restart`] afterwards.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Idle {
            return false;
        }
        self.reset_with(Board::standard());
        true
    }

    /// Throw the current game away and start a fresh one.
    ///
    /// The RNG keeps running, so a restart deals a new sequence.
    pub fn restart(&mut self) {
        self.reset_with(Board::standard());
    }

    /// Start a fresh game on a prepared board.
    ///
    /// Returns false if the first piece cannot spawn, in which case the game
    /// is already over.
    pub fn start_with_board(&mut self, board: Board) -> bool {
        self.reset_with(board);
        self.status == GameStatus::Active
    }

    fn reset_with(&mut self, board: Board) {
        self.board = board;
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.last_event = None;
        self.status = GameStatus::Active;
        self.spawn_piece();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn seed(&self) -> u32 {
        self.picker.seed()
    }

    /// Locked cells only; see [`GameState::render_board`] for the display view
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }

    /// Spawn a random piece
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.picker.draw();
        self.spawn(Piece::of(kind))
    }

    /// Put `piece` at the spawn position, replacing any falling piece.
    ///
    /// If it does not fit there the game is over.
    pub fn spawn(&mut self, piece: Piece) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }

        self.drop_timer_ms = 0;
        let candidate = ActivePiece::spawn(piece);
        if candidate.fits(&self.board) {
            self.active = Some(candidate);
            true
        } else {
            self.active = None;
            self.status = GameStatus::GameOver;
            false
        }
    }

    /// Shift the falling piece if the target position is valid
    pub fn try_move(&mut self, drow: i32, dcol: i32) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let target = active.position.offset(drow, dcol);
        if !is_valid_move(&self.board, &active.piece, target.row, target.col) {
            return false;
        }
        active.position = target;
        true
    }

    /// Drop one row, landing the piece when the row below is blocked.
    ///
    /// Returns true if the state changed (moved or landed).
    pub fn move_down(&mut self) -> bool {
        if self.try_move(1, 0) {
            return true;
        }
        if self.status != GameStatus::Active || self.active.is_none() {
            return false;
        }
        self.lock_piece();
        true
    }

    /// Rotate clockwise in place, if the rotated shape fits at the same anchor
    pub fn rotate(&mut self) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let rotated = active.piece.rotated();
        if !is_valid_move(
            &self.board,
            &rotated,
            active.position.row,
            active.position.col,
        ) {
            return false;
        }
        active.piece = rotated;
        true
    }

    /// Merge the falling piece into the board, clear lines, score, and spawn
    /// the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let placed = place_piece(
            &self.board,
            &active.piece,
            active.position.row,
            active.position.col,
        );
        let cleared = clear_lines(&placed);
        let result = calculate_score(self.score, cleared.lines_cleared);

        self.board = cleared.board;
        self.lines += cleared.lines_cleared;
        self.score = result.score;
        self.level = result.level;

        self.spawn_piece();

        self.last_event = Some(LockEvent {
            color: active.piece.color(),
            lines_cleared: cleared.lines_cleared,
            score: self.score,
            level: self.level,
            game_over: self.status == GameStatus::GameOver,
        });
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Toggle between `Active` and `Paused`
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Active => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Active;
                true
            }
            GameStatus::Idle | GameStatus::GameOver => false,
        }
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Returns true when the piece dropped or landed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.status != GameStatus::Active || self.active.is_none() {
            return false;
        }

        let interval = self.drop_interval_ms();
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < interval {
            return false;
        }
        // Carry the remainder so frame granularity does not stretch the
        // interval; at most one row per tick.
        self.drop_timer_ms = (self.drop_timer_ms - interval) % interval;
        self.move_down()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(0, -1),
            GameAction::MoveRight => self.try_move(0, 1),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Locked cells with the falling piece drawn on top
    pub fn render_board(&self) -> Board {
        match &self.active {
            Some(active) => overlay_piece(&self.board, &active.piece, active.position),
            None => self.board.clone(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.render_board().to_rows(),
            active: self.active.as_ref().map(|a| ActiveSnapshot {
                kind: a.piece.kind(),
                color: a.piece.color(),
                position: a.position,
                shape: a.piece.shape().to_rows(),
            }),
            status: self.status,
            seed: self.picker.seed(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            drop_interval_ms: self.drop_interval_ms(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::create_empty_board;

    fn active_game(kind: PieceKind) -> GameState {
        let mut state = GameState::new(12345);
        state.start();
        state.spawn(Piece::of(kind));
        state
    }

    fn position(state: &GameState) -> Position {
        state.active().unwrap().position
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.status(), GameStatus::Idle);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines(), 0);
        assert!(state.active().is_none());
        assert_eq!(state.board(), &create_empty_board(BOARD_ROWS, BOARD_COLS));
    }

    #[test]
    fn test_game_start() {
        let mut state = GameState::new(12345);
        assert!(state.start());

        assert!(state.is_active());
        assert_eq!(position(&state), SPAWN_POSITION);
        assert!(!state.start(), "start is only valid from idle");
    }

    #[test]
    fn test_actions_ignored_while_idle() {
        let mut state = GameState::new(1);
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::MoveDown));
        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.apply_action(GameAction::Pause));
        assert!(!state.tick(5000));
        assert_eq!(state.status(), GameStatus::Idle);
    }

    #[test]
    fn test_try_move_stops_at_walls() {
        let mut state = active_game(PieceKind::O);

        let mut moves = 0;
        while state.apply_action(GameAction::MoveLeft) {
            moves += 1;
        }
        assert_eq!(moves, 3);
        assert_eq!(position(&state).col, 0);

        let mut moves = 0;
        while state.apply_action(GameAction::MoveRight) {
            moves += 1;
        }
        assert_eq!(moves, 8);
        assert_eq!(position(&state).col, 8);
    }

    #[test]
    fn test_rotate_replaces_shape() {
        let mut state = active_game(PieceKind::I);
        assert!(state.rotate());
        let shape = state.active().unwrap().piece.shape().clone();
        assert_eq!((shape.rows(), shape.cols()), (4, 1));
        assert_eq!(position(&state), SPAWN_POSITION);
    }

    #[test]
    fn test_rotate_blocked_at_wall() {
        let mut state = active_game(PieceKind::I);
        assert!(state.rotate());
        while state.try_move(0, 1) {}
        assert_eq!(position(&state).col, 9);

        // Horizontal again would need columns 9..=12.
        assert!(!state.rotate());
        assert_eq!(state.active().unwrap().piece.shape().cols(), 1);
    }

    #[test]
    fn test_locked_cells_refuse_shift_and_rotate() {
        // T at the spawn covers (0, 4) and (1, 3..=5).
        let mut state = active_game(PieceKind::T);
        state.board.set(1, 2, 1);
        state.board.set(1, 6, 1);
        // Inside the rotated footprint, (0..=2, 3) and (1, 4).
        state.board.set(2, 3, 1);
        let before = state.active().unwrap().clone();

        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::MoveRight));
        assert!(!state.apply_action(GameAction::Rotate));
        assert_eq!(state.active().unwrap(), &before);
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = active_game(PieceKind::T);

        assert!(!state.tick(999));
        assert_eq!(position(&state).row, 0);

        assert!(state.tick(1));
        assert_eq!(position(&state).row, 1);
    }

    #[test]
    fn test_gravity_keeps_pace_with_frame_ticks() {
        let mut state = active_game(PieceKind::I);
        assert!(state.rotate());
        state.level = 10;
        assert_eq!(state.drop_interval_ms(), 100);

        // 63 frames of 16ms is 1008ms: ten full intervals.
        let mut drops = 0;
        for _ in 0..63 {
            if state.tick(16) {
                drops += 1;
            }
        }
        assert_eq!(drops, 10);
        assert_eq!(position(&state).row, 10);
    }

    #[test]
    fn test_long_stall_drops_one_row() {
        let mut state = active_game(PieceKind::T);
        assert!(state.tick(5000));
        assert_eq!(position(&state).row, 1);
        assert!(!state.tick(16));
    }

    #[test]
    fn test_drop_interval_follows_level() {
        let mut state = active_game(PieceKind::T);
        assert_eq!(state.drop_interval_ms(), 1000);
        state.level = 3;
        assert_eq!(state.drop_interval_ms(), 800);
        state.level = 25;
        assert_eq!(state.drop_interval_ms(), 100);
    }

    #[test]
    fn test_lock_piece_on_floor() {
        let mut state = active_game(PieceKind::O);

        for _ in 0..18 {
            assert!(state.move_down());
        }
        assert_eq!(position(&state), Position::new(18, 3));

        // Next drop is blocked by the floor: the piece lands.
        assert!(state.move_down());
        for (r, c) in [(18, 3), (18, 4), (19, 3), (19, 4)] {
            assert_eq!(state.board().get(r, c), Some(4));
        }

        let event = state.take_last_event().unwrap();
        assert_eq!(event.color, 4);
        assert_eq!(event.lines_cleared, 0);
        assert!(!event.game_over);
        assert!(state.take_last_event().is_none());

        // A fresh piece is falling from the spawn position.
        assert_eq!(position(&state), SPAWN_POSITION);
    }

    #[test]
    fn test_lock_piece_clears_lines() {
        let mut board = create_empty_board(BOARD_ROWS, BOARD_COLS);
        for c in (0..10).filter(|c| !(3..7).contains(c)) {
            board.set(19, c, 2);
        }
        board.set(18, 0, 5);

        let mut state = GameState::new(1);
        assert!(state.start_with_board(board));
        state.spawn(Piece::of(PieceKind::I));
        while state.try_move(1, 0) {}
        assert!(state.move_down());

        assert_eq!(state.lines(), 1);
        assert_eq!(state.score(), 100);
        assert_eq!(state.level(), 1);
        // Row 18 fell into row 19.
        assert_eq!(state.board().row(19), &[5, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(state.take_last_event().unwrap().lines_cleared, 1);
    }

    #[test]
    fn test_blocked_spawn_is_game_over() {
        let mut board = create_empty_board(BOARD_ROWS, BOARD_COLS);
        board.set(0, 4, 1);

        let mut state = GameState::new(1);
        state.start_with_board(board.clone());
        // J and L leave (0, 4) open and may have spawned; T never does.
        if state.is_active() {
            assert!(!state.spawn(Piece::of(PieceKind::T)));
        }
        assert!(state.game_over());
        assert!(state.active().is_none());
        assert!(!state.apply_action(GameAction::MoveDown));
        assert!(!state.tick(10_000));
    }

    #[test]
    fn test_game_over_after_landing_under_spawn() {
        // Columns 3 and 4 are stacked up to row 2, without completing rows.
        let mut board = create_empty_board(BOARD_ROWS, BOARD_COLS);
        for r in 2..BOARD_ROWS as i32 {
            board.set(r, 3, 1);
            board.set(r, 4, 1);
        }

        let mut state = GameState::new(7);
        assert!(state.start_with_board(board));
        assert!(state.spawn(Piece::of(PieceKind::O)));

        // O sits in rows 0-1; the next row down is occupied.
        assert!(state.move_down());
        let event = state.take_last_event().unwrap();
        assert!(event.game_over);
        assert!(state.game_over());
        assert_eq!(state.board().get(0, 3), Some(4));
    }

    #[test]
    fn test_pause_stops_game() {
        let mut state = active_game(PieceKind::T);

        assert!(state.apply_action(GameAction::Pause));
        assert!(state.paused());
        assert!(!state.tick(5000));
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(position(&state), SPAWN_POSITION);

        assert!(state.apply_action(GameAction::Pause));
        assert!(state.is_active());
        assert!(state.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut state = active_game(PieceKind::O);
        state.score = 2500;
        state.level = 3;
        state.lines = 25;
        state.board.set(19, 0, 1);

        assert!(state.apply_action(GameAction::Restart));
        assert!(state.is_active());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.board().get(19, 0), Some(EMPTY));
        assert_eq!(position(&state), SPAWN_POSITION);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut board = create_empty_board(BOARD_ROWS, BOARD_COLS);
        for c in 0..9 {
            board.set(0, c, 3);
        }
        let mut state = GameState::new(1);
        assert!(!state.start_with_board(board));
        assert!(state.game_over());
        assert!(!state.toggle_pause());

        assert!(state.apply_action(GameAction::Restart));
        assert!(state.is_active());
    }

    #[test]
    fn test_snapshot_overlays_active_piece() {
        let state = active_game(PieceKind::O);
        let snap = state.snapshot();

        assert_eq!(snap.board[0][3], 4);
        assert_eq!(snap.board[1][4], 4);
        assert_eq!(state.board().get(0, 3), Some(EMPTY));

        let active = snap.active.unwrap();
        assert_eq!(active.kind, Some(PieceKind::O));
        assert_eq!(active.position, SPAWN_POSITION);
        assert_eq!(snap.status, GameStatus::Active);
        assert_eq!(snap.drop_interval_ms, 1000);
    }
}
