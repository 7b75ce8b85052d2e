//! Board/Piece engine - pure transformations over boards and pieces
//!
//! Every function here takes its inputs by reference and returns a fresh
//! value. Nothing is mutated in place, so a renderer holding an older board
//! never observes a half-applied update.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{Cell, Position, EMPTY};

/// Result of [`clear_lines`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub board: Board,
    pub lines_cleared: u32,
}

/// A board of the given size with every cell empty.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn create_empty_board(rows: usize, cols: usize) -> Board {
    Board::new(rows, cols)
}

/// Check whether `piece` anchored at (`row`, `col`) fits on `board`.
///
/// Every block of the shape must land in bounds on an empty cell. This is
/// the only collision check: shifts, drops, rotations and spawns all go
/// through it with the candidate position.
pub fn is_valid_move(board: &Board, piece: &Piece, row: i32, col: i32) -> bool {
    piece
        .shape()
        .blocks()
        .all(|(r, c)| board.is_free(row + r as i32, col + c as i32))
}

/// Write `piece` into a copy of `board` at (`row`, `col`).
///
/// No validity check is made: callers place only after a failed downward
/// step has confirmed the last valid position. Occupied cells under the
/// footprint are overwritten. Blocks falling outside the board are dropped.
pub fn place_piece(board: &Board, piece: &Piece, row: i32, col: i32) -> Board {
    let mut next = board.clone();
    stamp(&mut next, piece, row, col);
    next
}

/// Overlay the falling piece onto a board snapshot for display.
///
/// Blocks outside the board are skipped rather than reported. A position
/// that passed [`is_valid_move`] never has any.
pub fn overlay_piece(board: &Board, piece: &Piece, position: Position) -> Board {
    place_piece(board, piece, position.row, position.col)
}

fn stamp(board: &mut Board, piece: &Piece, row: i32, col: i32) {
    let color = piece.color();
    for (r, c) in piece.shape().blocks() {
        board.set(row + r as i32, col + c as i32, color);
    }
}

/// Remove every full row and drop the rows above into place.
///
/// Surviving rows keep their relative order and sit below the fresh empty
/// rows inserted at the top, so the board keeps its dimensions.
pub fn clear_lines(board: &Board) -> LineClear {
    let (rows, cols) = (board.rows(), board.cols());
    let full = board.full_row_count();

    let mut cells: Vec<Cell> = Vec::with_capacity(rows * cols);
    cells.resize(full * cols, EMPTY);
    for r in (0..rows).filter(|&r| !board.is_row_full(r)) {
        cells.extend_from_slice(board.row(r));
    }

    LineClear {
        board: Board::from_parts(rows, cols, cells),
        lines_cleared: full as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Shape;
    use crate::types::PieceKind;

    fn segment(color: Cell) -> Piece {
        Piece::new(Shape::from_rows(&[[color]]).unwrap(), color).unwrap()
    }

    #[test]
    fn test_empty_board_dimensions() {
        let board = create_empty_board(20, 10);
        assert_eq!(board.rows(), 20);
        assert_eq!(board.cols(), 10);
        assert!(board.cells().iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_valid_move_respects_right_edge() {
        let board = create_empty_board(20, 10);
        let o = Piece::of(PieceKind::O);
        assert!(!is_valid_move(&board, &o, 0, 9));
        assert!(is_valid_move(&board, &o, 0, 8));
    }

    #[test]
    fn test_valid_move_respects_every_edge() {
        let board = create_empty_board(20, 10);
        let o = Piece::of(PieceKind::O);
        assert!(!is_valid_move(&board, &o, -1, 0));
        assert!(!is_valid_move(&board, &o, 0, -1));
        assert!(!is_valid_move(&board, &o, 19, 0));
        assert!(is_valid_move(&board, &o, 18, 0));
    }

    #[test]
    fn test_empty_shape_cells_may_hang_off_the_board() {
        let board = create_empty_board(20, 10);
        let bar = Piece::new(Shape::from_rows(&[[5u8, 0], [5, 0]]).unwrap(), 5).unwrap();
        assert!(is_valid_move(&board, &bar, 0, 9));
        assert!(!is_valid_move(&board, &bar, 0, 10));
    }

    #[test]
    fn test_valid_move_respects_occupancy() {
        let board = create_empty_board(20, 10);
        let o = Piece::of(PieceKind::O);
        let placed = place_piece(&board, &o, 18, 0);
        assert!(!is_valid_move(&placed, &o, 18, 0));
        assert!(is_valid_move(&placed, &o, 16, 0));
        assert!(is_valid_move(&placed, &o, 18, 2));
    }

    #[test]
    fn test_place_piece_writes_color_and_leaves_input_untouched() {
        let board = create_empty_board(4, 4);
        let t = Piece::of(PieceKind::T);
        let placed = place_piece(&board, &t, 2, 1);

        assert_eq!(
            placed.to_rows(),
            vec![
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 6, 0],
                vec![0, 6, 6, 6],
            ]
        );
        assert!(board.cells().iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_place_piece_overwrites_without_validation() {
        let mut board = create_empty_board(2, 2);
        board.set(0, 0, 1);
        let placed = place_piece(&board, &segment(3), 0, 0);
        assert_eq!(placed.get(0, 0), Some(3));
    }

    #[test]
    fn test_overlay_skips_out_of_bounds_blocks() {
        let board = create_empty_board(3, 3);
        let i = Piece::of(PieceKind::I);
        let shown = overlay_piece(&board, &i, Position::new(0, 1));
        assert_eq!(shown.to_rows()[0], vec![0, 1, 1]);
        assert_eq!(shown.rows(), 3);

        let above = overlay_piece(&board, &i, Position::new(-1, 0));
        assert_eq!(above, board);
    }

    #[test]
    fn test_clear_lines_without_full_rows() {
        let mut board = create_empty_board(3, 2);
        board.set(2, 0, 1);
        let result = clear_lines(&board);
        assert_eq!(result.lines_cleared, 0);
        assert_eq!(result.board, board);
    }

    #[test]
    fn test_clear_lines_compacts_and_preserves_order() {
        let board = Board::from_rows(&[
            [0u8, 0, 0],
            [1, 0, 0],
            [2, 2, 2],
            [0, 3, 0],
            [4, 4, 4],
        ])
        .unwrap();

        let result = clear_lines(&board);
        assert_eq!(result.lines_cleared, 2);
        assert_eq!(
            result.board.to_rows(),
            vec![
                vec![0, 0, 0],
                vec![0, 0, 0],
                vec![0, 0, 0],
                vec![1, 0, 0],
                vec![0, 3, 0],
            ]
        );
    }

    #[test]
    fn test_clear_lines_on_full_board() {
        let board = Board::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
        let result = clear_lines(&board);
        assert_eq!(result.lines_cleared, 2);
        assert_eq!(result.board, create_empty_board(2, 2));
    }
}
