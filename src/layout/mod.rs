// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout and connector routing for the pipeline board.
//!
//! This module groups jobs into stage columns, places stage-label and job boxes, and routes the
//! orthogonal connectors between consecutive jobs onto a [`Surface`].

pub mod connector;
pub mod engine;
pub mod params;
pub mod placement;
pub mod stages;
pub mod surface;
#[cfg(test)]
pub(crate) mod test_utils;

pub use connector::{route_connector, Connector, ConnectorShape, DrawOp, Route};
pub use engine::{LayoutDiagnostic, LayoutEngine, LayoutError, RedrawReport};
pub use params::{ConfigError, LayoutParams};
pub use placement::{column_center, job_rect, place_boxes, stage_label_rect, Rect};
pub use stages::{group_stages, StageGroup};
pub use surface::{BoxEntry, Surface, UnknownBox};
