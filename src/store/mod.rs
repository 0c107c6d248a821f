// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Job lists on disk.
//!
//! The store reads the JSON job file the TUI and `--print` mode lay out; the layout engine itself
//! never touches the filesystem.

pub mod jobs_file;

pub use jobs_file::{load_jobs, parse_jobs_json, JobSource, StoreError};
