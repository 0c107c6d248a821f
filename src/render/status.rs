// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::job::{Job, JobStatus};

/// Terminal-independent foreground colors used on the board.
///
/// The TUI maps these through its theme; text output ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlyphColor {
    #[default]
    Default,
    Green,
    Red,
    Blue,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusGlyph {
    pub glyph: char,
    pub color: GlyphColor,
}

/// Status marker for a job box, or `None` when the status carries no override.
pub fn status_glyph(status: JobStatus) -> Option<StatusGlyph> {
    let (glyph, color) = match status {
        JobStatus::Success => ('✔', GlyphColor::Green),
        JobStatus::Failed => ('✘', GlyphColor::Red),
        JobStatus::Running => ('●', GlyphColor::Blue),
        JobStatus::Pending => ('●', GlyphColor::Yellow),
        JobStatus::Created | JobStatus::Canceled | JobStatus::Skipped | JobStatus::Unknown => {
            return None
        }
    };
    Some(StatusGlyph { glyph, color })
}

/// Text and color shown inside a box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoxLabel {
    pub text: String,
    pub color: GlyphColor,
}

impl BoxLabel {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), color: GlyphColor::Default }
    }

    /// `"<glyph> <name>"`, with a blank marker cell when the status has no glyph.
    pub fn for_job(job: &Job) -> Self {
        match status_glyph(job.status()) {
            Some(StatusGlyph { glyph, color }) => {
                Self { text: format!("{glyph} {}", job.name()), color }
            }
            None => Self::plain(format!("  {}", job.name())),
        }
    }
}
