// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::params::LayoutParams;
use super::stages::StageGroup;
use crate::model::ids::BoxKey;

/// A rectangle in signed cell coordinates; corners are inclusive.
///
/// Coordinates may be negative or exceed the surface on narrow terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    pub fn mid_y(&self) -> i32 {
        self.y1 + self.height() / 2
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }
}

/// Horizontal center of stage `stage_index` (1-based) out of `stage_count` columns.
pub fn column_center(canvas_width: i32, stage_index: usize, stage_count: usize) -> i32 {
    let columns = stage_count as i64 + 1;
    let center = i64::from(canvas_width) * stage_index as i64 / columns;
    center.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

pub fn stage_label_rect(
    canvas_width: i32,
    canvas_height: i32,
    stage_index: usize,
    stage_count: usize,
    params: &LayoutParams,
) -> Rect {
    let cx = column_center(canvas_width, stage_index, stage_count);
    let y2 = canvas_height / 2 - params.label_gap;
    Rect::new(cx - params.half_width, y2 - params.label_height, cx + params.half_width, y2)
}

pub fn job_rect(
    canvas_width: i32,
    canvas_height: i32,
    stage_index: usize,
    stage_count: usize,
    row: usize,
    params: &LayoutParams,
) -> Rect {
    let cx = column_center(canvas_width, stage_index, stage_count);
    let row = i32::try_from(row).unwrap_or(i32::MAX);
    let y1 = (canvas_height / 2).saturating_add(row.saturating_mul(params.row_pitch));
    let y2 = y1.saturating_add(params.box_height);
    Rect::new(cx - params.half_width, y1, cx + params.half_width, y2)
}

/// Whether `stage_count` columns fit side by side without overlapping at this width.
pub fn columns_fit(canvas_width: i32, stage_count: usize, params: &LayoutParams) -> bool {
    let pitch = i64::from(canvas_width) / (stage_count as i64 + 1);
    pitch > i64::from(params.box_width())
}

/// Every stage-label and job rectangle for `groups`, keyed by box identity.
///
/// This is the eager form of what the layout engine computes lazily per missing box.
pub fn place_boxes(
    groups: &[StageGroup<'_>],
    canvas_width: i32,
    canvas_height: i32,
    params: &LayoutParams,
) -> BTreeMap<BoxKey, Rect> {
    let stage_count = groups.len();
    let mut placements = BTreeMap::new();

    for group in groups {
        let stage_index = group.stage_index();
        placements
            .entry(BoxKey::stage(group.stage_name()))
            .or_insert_with(|| {
                stage_label_rect(canvas_width, canvas_height, stage_index, stage_count, params)
            });
        for (row, job) in group.rows() {
            placements.entry(BoxKey::job(job.name_key().clone())).or_insert_with(|| {
                job_rect(canvas_width, canvas_height, stage_index, stage_count, row, params)
            });
        }
    }

    placements
}
