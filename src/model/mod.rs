// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Jobs are the immutable input of a layout pass; box keys identify the boxes a pass creates.

pub mod fixtures;
pub mod ids;
pub mod job;

pub use fixtures::demo_jobs;
pub use ids::{BoxKey, BoxKind};
pub use job::{Job, JobStatus};
