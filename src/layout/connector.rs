// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::params::LayoutParams;
use super::placement::Rect;
use crate::model::ids::BoxKey;

pub const CONNECTOR_HORIZONTAL: char = '━';
pub const CONNECTOR_VERTICAL: char = '┃';
pub const CONNECTOR_TEE_DOWN: char = '┳';
pub const CONNECTOR_CORNER_BOTTOM_LEFT: char = '┗';
pub const CONNECTOR_CORNER_BOTTOM_RIGHT: char = '┛';

/// A single connector drawing instruction in surface cell coordinates.
///
/// Runs with `len <= 0` draw nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    HLine { x: i32, y: i32, len: i32 },
    VLine { x: i32, y: i32, len: i32 },
    Glyph { x: i32, y: i32, glyph: char },
}

impl DrawOp {
    /// Calls `f(x, y, glyph)` for every cell this op covers, in drawing order.
    pub fn for_each_cell(&self, mut f: impl FnMut(i32, i32, char)) {
        match *self {
            Self::HLine { x, y, len } => {
                for i in 0..len.max(0) {
                    f(x + i, y, CONNECTOR_HORIZONTAL);
                }
            }
            Self::VLine { x, y, len } => {
                for i in 0..len.max(0) {
                    f(x, y + i, CONNECTOR_VERTICAL);
                }
            }
            Self::Glyph { x, y, glyph } => f(x, y, glyph),
        }
    }

    pub fn cell_count(&self) -> usize {
        match *self {
            Self::HLine { len, .. } | Self::VLine { len, .. } => len.max(0) as usize,
            Self::Glyph { .. } => 1,
        }
    }
}

/// Which geometric case a connector falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorShape {
    /// Later stage on a different row: one run plus a down-branching junction.
    Branch,
    /// Shared row: one run between the facing box edges.
    Straight,
    /// Same stage column: a bracket through the margins left and right of the column.
    LoopBack,
}

pub type DrawOps = SmallVec<[DrawOp; 8]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    shape: ConnectorShape,
    ops: DrawOps,
}

impl Route {
    pub fn shape(&self) -> ConnectorShape {
        self.shape
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn for_each_cell(&self, mut f: impl FnMut(i32, i32, char)) {
        for op in &self.ops {
            op.for_each_cell(&mut f);
        }
    }
}

/// A routed link between two sequential job boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    from: BoxKey,
    to: BoxKey,
    route: Route,
}

impl Connector {
    pub fn new(from: BoxKey, to: BoxKey, route: Route) -> Self {
        Self { from, to, route }
    }

    pub fn from_key(&self) -> &BoxKey {
        &self.from
    }

    pub fn to_key(&self) -> &BoxKey {
        &self.to
    }

    pub fn route(&self) -> &Route {
        &self.route
    }
}

/// Routes the orthogonal connector from box `a` to box `b`.
///
/// The case is picked from `dx`/`dy` between the two top-left corners:
/// - `dx != 0 && dy != 0`: [`ConnectorShape::Branch`]
/// - `dy == 0`: [`ConnectorShape::Straight`]
/// - `dx == 0`: [`ConnectorShape::LoopBack`]
///
/// The loop-back bracket has a single shape: its vertical runs grow downward from `a`'s bottom
/// edge, so an upward loop-back only draws the junction and corner glyphs.
pub fn route_connector(a: &Rect, b: &Rect, params: &LayoutParams) -> Route {
    let w = a.width();
    let h = a.height();
    let dx = b.x1 - a.x1;
    let dy = b.y1 - a.y1;
    let j = params.junction_offset;
    let mut ops = DrawOps::new();

    if dx != 0 && dy != 0 {
        let y = b.y1 + h / 2;
        ops.push(DrawOp::HLine { x: a.x1 + w, y, len: dx - w });
        ops.push(DrawOp::Glyph { x: a.x1 + w + j, y, glyph: CONNECTOR_TEE_DOWN });
        return Route { shape: ConnectorShape::Branch, ops };
    }

    if dy == 0 {
        ops.push(DrawOp::HLine { x: a.x1 + w, y: a.y1 + h / 2, len: dx - w });
        return Route { shape: ConnectorShape::Straight, ops };
    }

    let x = b.x1;
    let target_y = b.y1 + h / 2;

    ops.push(DrawOp::Glyph { x: x - j, y: a.y1 + h / 2, glyph: CONNECTOR_TEE_DOWN });

    ops.push(DrawOp::HLine { x: x - (j - 1), y: target_y, len: j - 1 });
    ops.push(DrawOp::Glyph { x: x - j, y: target_y, glyph: CONNECTOR_CORNER_BOTTOM_LEFT });

    ops.push(DrawOp::VLine { x: x - j, y: a.y1 + h, len: dy - 1 });
    ops.push(DrawOp::VLine { x: x + w + j, y: a.y1 + h, len: dy - 1 });

    ops.push(DrawOp::HLine { x: x + w + 1, y: target_y, len: j - 1 });
    ops.push(DrawOp::Glyph { x: x + w + j, y: target_y, glyph: CONNECTOR_CORNER_BOTTOM_RIGHT });

    Route { shape: ConnectorShape::LoopBack, ops }
}
