// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::status::{BoxLabel, GlyphColor};
use super::text::{fit_label, trimmed_lines};
use super::{Canvas, CanvasError};
use crate::layout::placement::Rect;
use crate::layout::surface::{BoxEntry, Surface, UnknownBox};
use crate::model::ids::BoxKey;

#[derive(Debug, Clone, PartialEq, Eq)]
struct BoxView {
    rect: Rect,
    label: Option<BoxLabel>,
}

/// The in-memory board a layout session draws into.
///
/// Boxes persist across passes until [`Board::resize`] starts a new session. Connector cells are
/// kept on their own canvas so the host can wipe them between passes with [`Board::clear_cells`].
#[derive(Debug, Clone)]
pub struct Board {
    boxes: BTreeMap<BoxKey, BoxView>,
    order: Vec<BoxKey>,
    cells: Canvas,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Ok(Self { boxes: BTreeMap::new(), order: Vec::new(), cells: Canvas::new(width, height)? })
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cells.width(), self.cells.height())
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Box keys in creation order.
    pub fn box_keys(&self) -> impl Iterator<Item = &BoxKey> + '_ {
        self.order.iter()
    }

    pub fn label(&self, key: &BoxKey) -> Option<&BoxLabel> {
        self.boxes.get(key).and_then(|view| view.label.as_ref())
    }

    pub fn clear_cells(&mut self) {
        self.cells.fill(' ');
    }

    /// Drops every box and cell at the current size, starting a new layout session.
    pub fn reset(&mut self) {
        self.boxes.clear();
        self.order.clear();
        self.clear_cells();
    }

    /// Adopts a new size. A changed size drops every box and cell so the next pass re-places
    /// from scratch; returns whether anything was reset.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<bool, CanvasError> {
        if self.size() == (width, height) {
            return Ok(false);
        }
        self.cells = Canvas::new(width, height)?;
        self.reset();
        Ok(true)
    }

    /// Connector cells first, then each box frame and label in creation order.
    pub fn compose(&self) -> Canvas {
        let mut canvas = self.cells.clone();

        for key in &self.order {
            let Some(view) = self.boxes.get(key) else {
                continue;
            };
            let rect = view.rect;
            canvas.draw_frame(rect);

            let Some(label) = view.label.as_ref() else {
                continue;
            };
            let inner_width = rect.x2 - rect.x1 - 1;
            if inner_width <= 0 || rect.y2 - rect.y1 < 2 {
                continue;
            }
            let max_len = usize::try_from(inner_width).unwrap_or(0);
            canvas.write_str_clipped(
                rect.x1 + 1,
                rect.y1 + 1,
                &fit_label(&label.text, max_len),
                label.color,
            );
        }

        canvas
    }
}

impl Surface for Board {
    fn width(&self) -> i32 {
        i32::try_from(self.cells.width()).unwrap_or(i32::MAX)
    }

    fn height(&self) -> i32 {
        i32::try_from(self.cells.height()).unwrap_or(i32::MAX)
    }

    fn get_or_create_box(&mut self, key: &BoxKey, place: &mut dyn FnMut() -> Rect) -> BoxEntry {
        if let Some(view) = self.boxes.get(key) {
            return BoxEntry::Existing(view.rect);
        }
        let rect = place();
        self.boxes.insert(key.clone(), BoxView { rect, label: None });
        self.order.push(key.clone());
        BoxEntry::Created(rect)
    }

    fn box_rect(&self, key: &BoxKey) -> Option<Rect> {
        self.boxes.get(key).map(|view| view.rect)
    }

    fn set_box_label(&mut self, key: &BoxKey, label: BoxLabel) -> Result<(), UnknownBox> {
        let view = self.boxes.get_mut(key).ok_or_else(|| UnknownBox(key.clone()))?;
        view.label = Some(label);
        Ok(())
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, color: GlyphColor) {
        self.cells.put(x, y, glyph, color);
    }
}

/// Plain-text rendering of the board, trailing whitespace trimmed.
pub fn render_board_text(board: &Board) -> String {
    trimmed_lines(&board.compose())
}

#[cfg(test)]
mod tests {
    use super::{render_board_text, Board};
    use crate::layout::engine::LayoutEngine;
    use crate::layout::placement::Rect;
    use crate::layout::surface::{Surface, UnknownBox};
    use crate::model::{BoxKey, Job, JobStatus};
    use crate::render::status::{BoxLabel, GlyphColor};

    fn two_stage_jobs() -> Vec<Job> {
        vec![Job::new("a", "one", JobStatus::Success), Job::new("b", "two", JobStatus::Failed)]
    }

    #[test]
    fn renders_framed_box_with_truncated_label() {
        let mut board = Board::new(8, 4).expect("board");
        let key = BoxKey::job("x");
        board.get_or_create_box(&key, &mut || Rect::new(0, 0, 6, 2));
        board
            .set_box_label(&key, BoxLabel { text: "✔ build".to_owned(), color: GlyphColor::Green })
            .expect("label");

        assert_eq!(render_board_text(&board), "┌─────┐\n│✔ bu…│\n└─────┘");
        assert_eq!(board.compose().color_at(1, 1).expect("cell"), GlyphColor::Green);
    }

    #[test]
    fn creation_is_idempotent_per_key() {
        let mut board = Board::new(20, 10).expect("board");
        let key = BoxKey::stage("build");
        let first = board.get_or_create_box(&key, &mut || Rect::new(0, 0, 4, 2));
        let second = board.get_or_create_box(&key, &mut || Rect::new(9, 9, 12, 11));

        assert!(!first.was_present());
        assert!(second.was_present());
        assert_eq!(second.rect(), Rect::new(0, 0, 4, 2));
        assert_eq!(board.box_count(), 1);
    }

    #[test]
    fn labelling_an_unknown_box_fails() {
        let mut board = Board::new(20, 10).expect("board");
        let err = board.set_box_label(&BoxKey::job("ghost"), BoxLabel::plain("ghost")).unwrap_err();
        assert_eq!(err, UnknownBox(BoxKey::job("ghost")));
    }

    #[test]
    fn layout_pass_draws_boxes_labels_and_connector() {
        let mut board = Board::new(48, 12).expect("board");
        LayoutEngine::default().redraw(&two_stage_jobs(), &mut board).expect("redraw");
        let canvas = board.compose();

        // Jobs sit at x 9..=23 and 25..=39 on row 6; the connector runs along row 7.
        assert_eq!(canvas.get(9, 6).expect("cell"), '┌');
        assert_eq!(canvas.get(23, 7).expect("cell"), '│');
        assert_eq!(canvas.get(24, 7).expect("cell"), '━');
        assert_eq!(canvas.get(10, 7).expect("cell"), '✔');
        assert_eq!(canvas.get(26, 7).expect("cell"), '✘');
        assert_eq!(canvas.color_at(26, 7).expect("cell"), GlyphColor::Red);
        assert_eq!(canvas.get(10, 3).expect("cell"), 'o');
        assert_eq!(board.label(&BoxKey::stage("two")), Some(&BoxLabel::plain("two")));
    }

    #[test]
    fn clear_cells_keeps_boxes() {
        let mut board = Board::new(48, 12).expect("board");
        LayoutEngine::default().redraw(&two_stage_jobs(), &mut board).expect("redraw");
        board.clear_cells();

        assert_eq!(board.compose().get(24, 7).expect("cell"), ' ');
        assert_eq!(board.box_count(), 4);
    }

    #[test]
    fn resize_starts_a_new_session() {
        let mut board = Board::new(48, 12).expect("board");
        let engine = LayoutEngine::default();
        engine.redraw(&two_stage_jobs(), &mut board).expect("redraw");

        assert!(!board.resize(48, 12).expect("same size"));
        assert_eq!(board.box_count(), 4);

        assert!(board.resize(96, 24).expect("resize"));
        assert_eq!(board.box_count(), 0);
        assert_eq!(render_board_text(&board), "");

        let report = engine.redraw(&two_stage_jobs(), &mut board).expect("redraw");
        assert_eq!(report.created.len(), 4);
        assert_eq!(board.box_rect(&BoxKey::job("a")), Some(Rect::new(25, 12, 39, 14)));
    }

    #[test]
    fn reset_keeps_the_size_and_drops_the_session() {
        let mut board = Board::new(48, 12).expect("board");
        let engine = LayoutEngine::default();
        engine.redraw(&two_stage_jobs(), &mut board).expect("redraw");

        board.reset();
        assert_eq!(board.size(), (48, 12));
        assert_eq!(board.box_count(), 0);
        assert_eq!(board.box_keys().count(), 0);
        assert_eq!(render_board_text(&board), "");

        let report = engine.redraw(&two_stage_jobs()[..1], &mut board).expect("redraw");
        assert_eq!(report.created, vec![BoxKey::stage("one"), BoxKey::job("a")]);
        assert_eq!(board.box_rect(&BoxKey::job("a")), Some(Rect::new(17, 6, 31, 8)));
    }

    #[test]
    fn boxes_compose_in_creation_order() {
        let mut board = Board::new(48, 12).expect("board");
        LayoutEngine::default().redraw(&two_stage_jobs(), &mut board).expect("redraw");

        let keys = board.box_keys().cloned().collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![BoxKey::stage("one"), BoxKey::stage("two"), BoxKey::job("a"), BoxKey::job("b")]
        );
    }
}
