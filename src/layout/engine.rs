// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use tracing::{debug, warn};

use super::connector::{route_connector, Connector};
use super::params::LayoutParams;
use super::placement::{columns_fit, job_rect, stage_label_rect};
use super::stages::{group_stages, StageGroup};
use super::surface::{Surface, UnknownBox};
use crate::model::ids::BoxKey;
use crate::model::job::Job;
use crate::render::status::{BoxLabel, GlyphColor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    MissingBox { key: BoxKey },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBox { key } => write!(f, "box {key} is not on the surface"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<UnknownBox> for LayoutError {
    fn from(value: UnknownBox) -> Self {
        Self::MissingBox { key: value.0 }
    }
}

/// Non-fatal conditions noticed during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutDiagnostic {
    /// `stage_count + 1` columns do not fit in `width`; boxes may overlap or leave the surface.
    NarrowCanvas { width: i32, stage_count: usize },
}

impl fmt::Display for LayoutDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NarrowCanvas { width, stage_count } => {
                write!(f, "{stage_count} stages do not fit in {width} columns")
            }
        }
    }
}

/// What a single redraw did. Nothing in it feeds later passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedrawReport {
    pub stage_count: usize,
    pub created: Vec<BoxKey>,
    pub connectors: Vec<Connector>,
    pub diagnostics: Vec<LayoutDiagnostic>,
}

/// Lays out jobs on a [`Surface`]: group, place, decorate, connect.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    params: LayoutParams,
}

impl LayoutEngine {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Runs one full layout pass over `jobs`.
    ///
    /// Boxes are only placed for keys the surface does not hold yet. If any decoration or
    /// connector endpoint is missing the pass stops with [`LayoutError::MissingBox`] before any
    /// connector cell is written.
    pub fn redraw<S>(&self, jobs: &[Job], surface: &mut S) -> Result<RedrawReport, LayoutError>
    where
        S: Surface + ?Sized,
    {
        let groups = group_stages(jobs);
        let mut report = RedrawReport { stage_count: groups.len(), ..RedrawReport::default() };

        if groups.is_empty() {
            debug!("redraw skipped: no jobs");
            return Ok(report);
        }

        let width = surface.width();
        if !columns_fit(width, groups.len(), &self.params) {
            let diagnostic = LayoutDiagnostic::NarrowCanvas { width, stage_count: groups.len() };
            warn!(%diagnostic, "layout is best-effort");
            report.diagnostics.push(diagnostic);
        }

        self.place(&groups, surface, &mut report.created);
        self.decorate(&groups, surface)?;
        report.connectors = self.connect(jobs, surface)?;

        debug!(
            jobs = jobs.len(),
            stages = groups.len(),
            created = report.created.len(),
            connectors = report.connectors.len(),
            "redraw complete"
        );
        Ok(report)
    }

    fn place<S>(&self, groups: &[StageGroup<'_>], surface: &mut S, created: &mut Vec<BoxKey>)
    where
        S: Surface + ?Sized,
    {
        let (width, height) = (surface.width(), surface.height());
        let stage_count = groups.len();
        let params = &self.params;

        for group in groups {
            let key = BoxKey::stage(group.stage_name());
            let stage_index = group.stage_index();
            let entry = surface.get_or_create_box(&key, &mut || {
                stage_label_rect(width, height, stage_index, stage_count, params)
            });
            if !entry.was_present() {
                created.push(key);
            }
        }

        for group in groups {
            let stage_index = group.stage_index();
            for (row, job) in group.rows() {
                let key = BoxKey::job(job.name_key().clone());
                let entry = surface.get_or_create_box(&key, &mut || {
                    job_rect(width, height, stage_index, stage_count, row, params)
                });
                if !entry.was_present() {
                    created.push(key);
                }
            }
        }
    }

    fn decorate<S>(&self, groups: &[StageGroup<'_>], surface: &mut S) -> Result<(), LayoutError>
    where
        S: Surface + ?Sized,
    {
        for group in groups {
            let key = BoxKey::stage(group.stage_name());
            surface.set_box_label(&key, BoxLabel::plain(group.stage_name()))?;
            for job in group.jobs() {
                let key = BoxKey::job(job.name_key().clone());
                surface.set_box_label(&key, BoxLabel::for_job(job))?;
            }
        }
        Ok(())
    }

    fn connect<S>(&self, jobs: &[Job], surface: &mut S) -> Result<Vec<Connector>, LayoutError>
    where
        S: Surface + ?Sized,
    {
        let lookup = |surface: &S, job: &Job| {
            let key = BoxKey::job(job.name_key().clone());
            match surface.box_rect(&key) {
                Some(rect) => Ok((key, rect)),
                None => Err(LayoutError::MissingBox { key }),
            }
        };

        let connectors = jobs
            .windows(2)
            .map(|pair| -> Result<Connector, LayoutError> {
                let (from, a) = lookup(&*surface, &pair[0])?;
                let (to, b) = lookup(&*surface, &pair[1])?;
                Ok(Connector::new(from, to, route_connector(&a, &b, &self.params)))
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        for connector in &connectors {
            connector
                .route()
                .for_each_cell(|x, y, glyph| surface.set_cell(x, y, glyph, GlyphColor::Default));
        }

        Ok(connectors)
    }
}
