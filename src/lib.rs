// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pipeboard: a terminal board for CI pipelines.
//!
//! Jobs are grouped into stage columns, drawn as framed boxes with a status glyph, and chained by
//! orthogonal connectors in list order. The [`layout`] engine only talks to a
//! [`layout::Surface`]; [`render::Board`] is the in-memory one used by the TUI and `--print`.

pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod store;
pub mod tui;
