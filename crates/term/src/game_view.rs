//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::palette::{color_for, EMPTY_COLOR};
use crate::types::{GameStatus, EMPTY};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen-space frame of the board, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const GRID_DOT: Rgb = Rgb::new(75, 85, 99);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::new(TEXT, SCREEN_BG));

        let frame = self.frame_for(snap, viewport);
        self.draw_border(fb, frame);

        for (r, row) in snap.board.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                let (ch, style) = if cell == EMPTY {
                    ('·', Style::new(GRID_DOT, EMPTY_COLOR))
                } else {
                    ('█', Style::new(color_for(cell), EMPTY_COLOR))
                };
                self.fill_cell(fb, frame, r, c, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.status {
            GameStatus::Idle => self.draw_overlay(fb, frame, &["PRESS R", "TO START"]),
            GameStatus::Paused => self.draw_overlay(fb, frame, &["PAUSED"]),
            GameStatus::GameOver => {
                let score = format!("SCORE {}", snap.score);
                self.draw_overlay(fb, frame, &["GAME OVER", &score, "PRESS R"]);
            }
            GameStatus::Active => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame_for(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let cols = u16::try_from(snap.cols()).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.rows()).unwrap_or(u16::MAX);
        let w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let h = rows.saturating_add(2);

        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        if f.w < 2 || f.h < 2 {
            return;
        }
        let style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let right = f.x.saturating_add(f.w - 1);
        let bottom = f.y.saturating_add(f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..f.w - 1 {
            fb.put_char(f.x.saturating_add(dx), f.y, '─', style);
            fb.put_char(f.x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y.saturating_add(dy), '│', style);
            fb.put_char(right, f.y.saturating_add(dy), '│', style);
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, row: usize, col: usize, ch: char, style: Style) {
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            return;
        };
        let px = f.x.saturating_add(1).saturating_add(col.saturating_mul(self.cell_w));
        let py = f.y.saturating_add(1).saturating_add(row);
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = Style::new(TEXT, SCREEN_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = f.y;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "PIECE", label);
        let letter = snap
            .active
            .as_ref()
            .and_then(|a| a.kind)
            .map(|k| k.as_str())
            .unwrap_or("-");
        let piece_style = match &snap.active {
            Some(a) => Style::new(color_for(a.color), SCREEN_BG).bold(),
            None => value,
        };
        fb.put_str(panel_x, y.saturating_add(1), letter, piece_style);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, lines: &[&str]) {
        let style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let top = f.y.saturating_add(f.h.saturating_sub(count) / 2);

        for (i, text) in lines.iter().enumerate() {
            let Ok(dy) = u16::try_from(i) else { break };
            let text_w = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
            let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
            fb.put_str(x, top.saturating_add(dy), text, style);
        }
    }
}
