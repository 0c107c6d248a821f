// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::placement::Rect;
use crate::model::ids::BoxKey;
use crate::render::status::{BoxLabel, GlyphColor};

/// Outcome of [`Surface::get_or_create_box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxEntry {
    /// The key was already registered; its rectangle is untouched.
    Existing(Rect),
    /// The key was new; the rectangle came from the placement callback.
    Created(Rect),
}

impl BoxEntry {
    pub fn rect(self) -> Rect {
        match self {
            Self::Existing(rect) | Self::Created(rect) => rect,
        }
    }

    pub fn was_present(self) -> bool {
        matches!(self, Self::Existing(_))
    }
}

/// A decoration referenced a box the surface does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBox(pub BoxKey);

impl fmt::Display for UnknownBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown box {}", self.0)
    }
}

impl std::error::Error for UnknownBox {}

/// Drawing capability the layout engine renders into.
///
/// The surface owns the box registry across passes (idempotent creation) and the glyph cells.
pub trait Surface {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Returns the box registered under `key`, or registers the rectangle produced by `place`.
    ///
    /// `place` is only invoked when the key is absent.
    fn get_or_create_box(&mut self, key: &BoxKey, place: &mut dyn FnMut() -> Rect) -> BoxEntry;

    fn box_rect(&self, key: &BoxKey) -> Option<Rect>;

    fn set_box_label(&mut self, key: &BoxKey, label: BoxLabel) -> Result<(), UnknownBox>;

    /// Writes one glyph cell; cells outside the surface are dropped.
    fn set_cell(&mut self, x: i32, y: i32, glyph: char, color: GlyphColor);
}
