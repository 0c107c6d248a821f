// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for the pipeline board.
//!
//! A [`Board`] is the concrete drawing surface the layout engine writes into; it composes
//! connector cells and framed boxes into a [`Canvas`] that is printed as text or painted by the
//! TUI.

use std::fmt;

use crate::layout::placement::Rect;

pub mod board;
pub mod status;
mod text;

pub use board::{render_board_text, Board};
pub use status::{status_glyph, BoxLabel, GlyphColor, StatusGlyph};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    match ch {
        UNICODE_BOX_HORIZONTAL => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT)),
        UNICODE_BOX_VERTICAL => Some(BoxEdges::UP.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::DOWN)),
        UNICODE_BOX_BOTTOM_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::UP)),
        UNICODE_BOX_BOTTOM_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::UP)),
        UNICODE_BOX_TEE_RIGHT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::RIGHT)),
        UNICODE_BOX_TEE_LEFT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::LEFT)),
        UNICODE_BOX_TEE_DOWN => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::DOWN)),
        UNICODE_BOX_TEE_UP => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::UP)),
        UNICODE_BOX_CROSS => Some(
            BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::UP).union(BoxEdges::DOWN),
        ),
        _ => None,
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        10 => UNICODE_BOX_TOP_LEFT,
        9 => UNICODE_BOX_TOP_RIGHT,
        6 => UNICODE_BOX_BOTTOM_LEFT,
        5 => UNICODE_BOX_BOTTOM_RIGHT,
        14 => UNICODE_BOX_TEE_RIGHT,
        13 => UNICODE_BOX_TEE_LEFT,
        11 => UNICODE_BOX_TEE_DOWN,
        7 => UNICODE_BOX_TEE_UP,
        _ => UNICODE_BOX_CROSS,
    }
}

/// A fixed-size character grid with a foreground color per cell.
///
/// Collision behavior is deterministic:
/// - non-box characters overwrite (last writer wins), including connector glyphs (`━┃┳┗┛`)
/// - light box-drawing characters merge into junctions, so touching frames become tees
///
/// Signed helpers ([`Canvas::put`], [`Canvas::draw_frame`]) clip silently at the edges, which is
/// how a terminal cell buffer treats off-screen writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    colors: Vec<GlyphColor>,
    box_edges: Vec<BoxEdges>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width.checked_mul(height).ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            colors: vec![GlyphColor::Default; len],
            box_edges: vec![BoxEdges::NONE; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.render_at(x, y, idx))
    }

    pub fn color_at(&self, x: usize, y: usize) -> Result<GlyphColor, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.colors[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        self.set_colored(x, y, ch, GlyphColor::Default)
    }

    pub fn set_colored(
        &mut self,
        x: usize,
        y: usize,
        ch: char,
        color: GlyphColor,
    ) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        if let Some(edges) = box_edges_from_char(ch) {
            self.box_edges[idx] = self.box_edges[idx].union(edges);
        } else {
            self.cells[idx] = ch;
            self.box_edges[idx] = BoxEdges::NONE;
        }
        self.colors[idx] = color;
        Ok(())
    }

    /// Signed, clipping variant of [`Canvas::set_colored`]. Returns whether the cell was written.
    pub fn put(&mut self, x: i32, y: i32, ch: char, color: GlyphColor) -> bool {
        match self.signed_cell(x, y) {
            Some((x, y)) => self.set_colored(x, y, ch, color).is_ok(),
            None => false,
        }
    }

    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
        self.colors.fill(GlyphColor::Default);
        self.box_edges.fill(BoxEdges::NONE);
    }

    /// Writes `text` left-to-right starting at `(x, y)`, clipping at every edge.
    pub fn write_str_clipped(&mut self, x: i32, y: i32, text: &str, color: GlyphColor) {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(offset) = i32::try_from(offset) else {
                break;
            };
            self.put(x.saturating_add(offset), y, ch, color);
        }
    }

    /// Draws a single-line frame around `rect`, clipping cells outside the canvas.
    pub fn draw_frame(&mut self, rect: Rect) {
        let Rect { x1, y1, x2, y2 } = rect;
        if x2 <= x1 || y2 <= y1 {
            return;
        }

        for x in (x1 + 1)..x2 {
            self.put(x, y1, UNICODE_BOX_HORIZONTAL, GlyphColor::Default);
            self.put(x, y2, UNICODE_BOX_HORIZONTAL, GlyphColor::Default);
        }

        for y in (y1 + 1)..y2 {
            self.put(x1, y, UNICODE_BOX_VERTICAL, GlyphColor::Default);
            self.put(x2, y, UNICODE_BOX_VERTICAL, GlyphColor::Default);
        }

        self.put(x1, y1, UNICODE_BOX_TOP_LEFT, GlyphColor::Default);
        self.put(x2, y1, UNICODE_BOX_TOP_RIGHT, GlyphColor::Default);
        self.put(x1, y2, UNICODE_BOX_BOTTOM_LEFT, GlyphColor::Default);
        self.put(x2, y2, UNICODE_BOX_BOTTOM_RIGHT, GlyphColor::Default);
    }

    /// Every cell as `(x, y, char, color)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, char, GlyphColor)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| {
                let idx = (y * self.width) + x;
                (x, y, self.render_at(x, y, idx), self.colors[idx])
            })
        })
    }

    fn signed_cell(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.in_bounds(x, y).then_some((x, y))
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width) + x)
    }

    fn render_at(&self, x: usize, y: usize, idx: usize) -> char {
        let edges = self.box_edges[idx];
        if edges.is_empty() {
            return self.cells[idx];
        }

        let connected = self.connected_box_edges(x, y, edges);
        let edges_for_render = if connected.is_empty() { edges } else { connected };
        box_char_from_edges(edges_for_render)
    }

    fn connected_box_edges(&self, x: usize, y: usize, edges: BoxEdges) -> BoxEdges {
        let mut connected = BoxEdges::NONE;

        if edges.contains(BoxEdges::LEFT) && x > 0 {
            let left_idx = (y * self.width) + (x - 1);
            if self.box_edges[left_idx].contains(BoxEdges::RIGHT) {
                connected = connected.union(BoxEdges::LEFT);
            }
        }

        if edges.contains(BoxEdges::RIGHT) && (x + 1) < self.width {
            let right_idx = (y * self.width) + (x + 1);
            if self.box_edges[right_idx].contains(BoxEdges::LEFT) {
                connected = connected.union(BoxEdges::RIGHT);
            }
        }

        if edges.contains(BoxEdges::UP) && y > 0 {
            let up_idx = ((y - 1) * self.width) + x;
            if self.box_edges[up_idx].contains(BoxEdges::DOWN) {
                connected = connected.union(BoxEdges::UP);
            }
        }

        if edges.contains(BoxEdges::DOWN) && (y + 1) < self.height {
            let down_idx = ((y + 1) * self.width) + x;
            if self.box_edges[down_idx].contains(BoxEdges::UP) {
                connected = connected.union(BoxEdges::DOWN);
            }
        }

        connected
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = (y * self.width) + x;
                f.write_char(self.render_at(x, y, idx))?;
            }

            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError, GlyphColor};
    use crate::layout::placement::Rect;

    #[test]
    fn set_and_get_in_bounds() {
        let mut c = Canvas::new_filled(3, 2, '.').expect("canvas");
        assert_eq!(c.get(1, 0).unwrap(), '.');
        c.set(1, 0, 'X').unwrap();
        assert_eq!(c.get(1, 0).unwrap(), 'X');
        assert_eq!(c.to_string(), ".X.\n...");
    }

    #[test]
    fn set_out_of_bounds_errors() {
        let mut c = Canvas::new(2, 2).expect("canvas");
        let err = c.set(2, 0, 'X').unwrap_err();
        assert_eq!(err, CanvasError::OutOfBounds { x: 2, y: 0, width: 2, height: 2 });
    }

    #[test]
    fn rejects_area_overflow() {
        let err = Canvas::new_filled(usize::MAX, 2, '.').unwrap_err();
        assert_eq!(err, CanvasError::AreaOverflow { width: usize::MAX, height: 2 });
    }

    #[test]
    fn put_clips_negative_and_overflowing_cells() {
        let mut c = Canvas::new_filled(3, 2, '.').expect("canvas");
        assert!(!c.put(-1, 0, 'X', GlyphColor::Red));
        assert!(!c.put(0, 2, 'X', GlyphColor::Red));
        assert!(c.put(2, 1, 'X', GlyphColor::Red));
        assert_eq!(c.to_string(), "...\n..X");
        assert_eq!(c.color_at(2, 1).unwrap(), GlyphColor::Red);
    }

    #[test]
    fn write_str_clipped_handles_both_edges() {
        let mut c = Canvas::new_filled(4, 1, '.').expect("canvas");
        c.write_str_clipped(-2, 0, "abcdef", GlyphColor::Default);
        assert_eq!(c.to_string(), "cdef");

        let mut c = Canvas::new_filled(4, 1, '.').expect("canvas");
        c.write_str_clipped(2, 0, "abcdef", GlyphColor::Default);
        assert_eq!(c.to_string(), "..ab");
    }

    #[test]
    fn draw_frame_draws_unicode_corners_and_edges() {
        let mut c = Canvas::new_filled(6, 5, '.').expect("canvas");
        c.draw_frame(Rect::new(1, 1, 4, 3));
        assert_eq!(c.to_string(), "......\n.┌──┐.\n.│..│.\n.└──┘.\n......");
    }

    #[test]
    fn draw_frame_clips_partially_visible_boxes() {
        let mut c = Canvas::new_filled(4, 3, '.').expect("canvas");
        c.draw_frame(Rect::new(-2, 0, 2, 2));
        assert_eq!(c.to_string(), "──┐.\n..│.\n──┘.");
    }

    #[test]
    fn touching_frames_merge_into_tees() {
        let mut c = Canvas::new_filled(7, 3, '.').expect("canvas");
        c.draw_frame(Rect::new(0, 0, 3, 2));
        c.draw_frame(Rect::new(3, 0, 6, 2));
        assert_eq!(c.to_string(), "┌──┬──┐\n│..│..│\n└──┴──┘");
    }

    #[test]
    fn connector_glyphs_overwrite_and_frames_win_over_them() {
        let mut c = Canvas::new_filled(5, 3, '.').expect("canvas");
        c.put(0, 1, '━', GlyphColor::Default);
        c.put(4, 1, '━', GlyphColor::Default);
        assert_eq!(c.to_string(), ".....\n━...━\n.....");

        c.draw_frame(Rect::new(0, 0, 2, 2));
        assert_eq!(c.to_string(), "┌─┐..\n│.│.━\n└─┘..");
    }
}
