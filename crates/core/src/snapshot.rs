//! Read-only views of a game for renderers and headless consumers.

use serde::Serialize;

use crate::types::{Cell, GameStatus, PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSnapshot {
    pub kind: Option<PieceKind>,
    pub color: Cell,
    pub position: Position,
    pub shape: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Locked cells with the falling piece drawn on top
    pub board: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub seed: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn rows(&self) -> usize {
        self.board.len()
    }

    pub fn cols(&self) -> usize {
        self.board.first().map(Vec::len).unwrap_or(0)
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: GameStatus) -> GameSnapshot {
        GameSnapshot {
            board: vec![vec![0; 3]; 2],
            active: None,
            status,
            seed: 1,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 1000,
        }
    }

    #[test]
    fn dimensions_come_from_board() {
        let snap = snapshot(GameStatus::Idle);
        assert_eq!((snap.rows(), snap.cols()), (2, 3));
        assert!(!snap.playable());
    }

    #[test]
    fn status_serializes_in_camel_case() {
        let json = serde_json::to_string(&snapshot(GameStatus::GameOver)).unwrap();
        assert!(json.contains(r#""status":"gameOver""#), "{}", json);
        assert!(json.contains(r#""dropIntervalMs":1000"#), "{}", json);
        assert!(snapshot(GameStatus::GameOver).game_over());
        assert!(snapshot(GameStatus::Paused).paused());
    }
}
