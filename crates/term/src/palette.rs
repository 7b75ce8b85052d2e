//! Color ids to display colors.
//!
//! Id 0 is the empty cell. Ids 1..=7 follow the archetype order I, J, L, O,
//! S, T, Z.

use crate::fb::Rgb;
use crate::types::{Cell, EMPTY};

/// Background of an empty board cell
pub const EMPTY_COLOR: Rgb = Rgb::new(31, 41, 55);

const PIECE_COLORS: [Rgb; 7] = [
    Rgb::new(239, 68, 68),  // I red
    Rgb::new(59, 130, 246), // J blue
    Rgb::new(249, 115, 22), // L orange
    Rgb::new(234, 179, 8),  // O yellow
    Rgb::new(34, 197, 94),  // S green
    Rgb::new(168, 85, 247), // T purple
    Rgb::new(236, 72, 153), // Z pink
];

/// Display color for a cell value.
///
/// Unknown ids fall back to the empty color.
pub fn color_for(cell: Cell) -> Rgb {
    match cell {
        EMPTY => EMPTY_COLOR,
        1..=7 => PIECE_COLORS[(cell - 1) as usize],
        _ => EMPTY_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn empty_and_unknown_share_background() {
        assert_eq!(color_for(EMPTY), EMPTY_COLOR);
        assert_eq!(color_for(42), EMPTY_COLOR);
    }

    #[test]
    fn every_piece_has_a_distinct_color() {
        let colors: Vec<Rgb> = PieceKind::ALL.iter().map(|k| color_for(k.color())).collect();
        for (i, a) in colors.iter().enumerate() {
            assert_ne!(*a, EMPTY_COLOR);
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(color_for(PieceKind::I.color()), Rgb::new(239, 68, 68));
    }
}
