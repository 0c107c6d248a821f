// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use super::placement::Rect;
use super::surface::{BoxEntry, Surface, UnknownBox};
use crate::model::ids::BoxKey;
use crate::render::status::{BoxLabel, GlyphColor};

/// In-memory surface that records every call the engine makes.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) boxes: BTreeMap<BoxKey, Rect>,
    pub(crate) labels: BTreeMap<BoxKey, BoxLabel>,
    pub(crate) creations: Vec<BoxKey>,
    pub(crate) cells: Vec<(i32, i32, char)>,
    /// Keys whose creation is silently dropped, simulating a surface that failed to make a box.
    pub(crate) skip: BTreeSet<BoxKey>,
    /// Keys that exist and take labels but whose rect lookup comes back empty.
    pub(crate) hidden: BTreeSet<BoxKey>,
}

impl RecordingSurface {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn get_or_create_box(&mut self, key: &BoxKey, place: &mut dyn FnMut() -> Rect) -> BoxEntry {
        if let Some(rect) = self.boxes.get(key) {
            return BoxEntry::Existing(*rect);
        }
        let rect = place();
        if !self.skip.contains(key) {
            self.creations.push(key.clone());
            self.boxes.insert(key.clone(), rect);
        }
        BoxEntry::Created(rect)
    }

    fn box_rect(&self, key: &BoxKey) -> Option<Rect> {
        if self.hidden.contains(key) {
            return None;
        }
        self.boxes.get(key).copied()
    }

    fn set_box_label(&mut self, key: &BoxKey, label: BoxLabel) -> Result<(), UnknownBox> {
        if !self.boxes.contains_key(key) {
            return Err(UnknownBox(key.clone()));
        }
        self.labels.insert(key.clone(), label);
        Ok(())
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, _color: GlyphColor) {
        self.cells.push((x, y, glyph));
    }
}
