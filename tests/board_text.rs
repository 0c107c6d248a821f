// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use pipeboard::layout::{
    BoxEntry, ConnectorShape, LayoutEngine, LayoutError, Rect, Surface, UnknownBox,
};
use pipeboard::model::{demo_jobs, BoxKey};
use pipeboard::render::{render_board_text, Board, BoxLabel, GlyphColor};
use pipeboard::store::parse_jobs_json;

fn frame_row(left: char, fill: char, right: char) -> String {
    format!("{left}{}{right}", fill.to_string().repeat(13))
}

fn label_row(label: &str) -> String {
    format!("│{label:<13}│")
}

#[test]
fn two_stage_pipeline_renders_as_expected() {
    let jobs = parse_jobs_json(
        r#"{"jobs": [
            {"name": "a", "stage": "one", "status": "success"},
            {"name": "b", "stage": "two", "status": "failed"}
        ]}"#,
    )
    .expect("jobs");
    let mut board = Board::new(48, 12).expect("board");
    LayoutEngine::default().redraw(&jobs, &mut board).expect("redraw");

    let pad = " ".repeat(9);
    let top = frame_row('┌', '─', '┐');
    let bottom = frame_row('└', '─', '┘');
    let expected = [
        String::new(),
        String::new(),
        format!("{pad}{top} {top}"),
        format!("{pad}{} {}", label_row("one"), label_row("two")),
        format!("{pad}{bottom} {bottom}"),
        String::new(),
        format!("{pad}{top} {top}"),
        format!("{pad}{}━{}", label_row("✔ a"), label_row("✘ b")),
        format!("{pad}{bottom} {bottom}"),
    ]
    .join("\n");

    assert_eq!(render_board_text(&board), expected);
}

#[test]
fn demo_pipeline_draws_every_connector_glyph() {
    let mut board = Board::new(100, 30).expect("board");
    let report = LayoutEngine::default().redraw(&demo_jobs(), &mut board).expect("redraw");
    let text = render_board_text(&board);

    assert!(report.diagnostics.is_empty());
    for glyph in ['━', '┃', '┳', '┗', '┛'] {
        assert!(text.contains(glyph), "missing {glyph}:\n{text}");
    }
    for label in ["│✔ compile", "│✘ unit", "│● integration│", "│  production"] {
        assert!(text.contains(label), "missing {label}:\n{text}");
    }
    assert!(text.lines().count() <= 30);
    assert!(report.connectors.iter().any(|c| c.route().shape() == ConnectorShape::Straight));
}

#[test]
fn redraw_is_stable_across_frames() {
    let engine = LayoutEngine::default();
    let jobs = demo_jobs();
    let mut board = Board::new(100, 30).expect("board");

    engine.redraw(&jobs, &mut board).expect("first");
    let first = render_board_text(&board);
    board.clear_cells();
    engine.redraw(&jobs, &mut board).expect("second");

    assert_eq!(render_board_text(&board), first);
}

/// A surface that never keeps the boxes it is asked to create.
#[derive(Default)]
struct ForgetfulSurface {
    labels: BTreeMap<BoxKey, BoxLabel>,
    cells: usize,
}

impl Surface for ForgetfulSurface {
    fn width(&self) -> i32 {
        80
    }

    fn height(&self) -> i32 {
        24
    }

    fn get_or_create_box(&mut self, _key: &BoxKey, place: &mut dyn FnMut() -> Rect) -> BoxEntry {
        BoxEntry::Created(place())
    }

    fn box_rect(&self, _key: &BoxKey) -> Option<Rect> {
        None
    }

    fn set_box_label(&mut self, key: &BoxKey, _label: BoxLabel) -> Result<(), UnknownBox> {
        Err(UnknownBox(key.clone()))
    }

    fn set_cell(&mut self, _x: i32, _y: i32, _glyph: char, _color: GlyphColor) {
        self.cells += 1;
    }
}

#[test]
fn custom_surface_missing_boxes_abort_the_pass() {
    let mut surface = ForgetfulSurface::default();
    let err = LayoutEngine::default().redraw(&demo_jobs(), &mut surface).unwrap_err();

    assert_eq!(err, LayoutError::MissingBox { key: BoxKey::stage("build") });
    assert!(surface.labels.is_empty());
    assert_eq!(surface.cells, 0);
}
