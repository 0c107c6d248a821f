// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::job::{Job, JobStatus};

fn job(name: &str, stage: &str, status: JobStatus) -> Job {
    Job::new(name, stage, status)
}

/// Built-in four-stage pipeline used by `--demo`.
///
/// Covers every connector shape (straight, branch, loop-back) and every status tag.
pub fn demo_jobs() -> Vec<Job> {
    vec![
        job("compile", "build", JobStatus::Success),
        job("assets", "build", JobStatus::Success),
        job("unit", "test", JobStatus::Failed),
        job("lint", "test", JobStatus::Success),
        job("integration", "test", JobStatus::Running),
        job("package", "package", JobStatus::Pending),
        job("staging", "deploy", JobStatus::Created),
        job("canary", "deploy", JobStatus::Skipped),
        job("production", "deploy", JobStatus::Canceled),
    ]
}

#[cfg(test)]
pub(crate) fn build_test_deploy() -> Vec<Job> {
    vec![
        job("compile", "build", JobStatus::Success),
        job("assets", "build", JobStatus::Success),
        job("unit", "test", JobStatus::Running),
        job("ship", "deploy", JobStatus::Pending),
    ]
}

#[cfg(test)]
pub(crate) fn single_row_chain() -> Vec<Job> {
    vec![
        job("a", "one", JobStatus::Success),
        job("b", "two", JobStatus::Success),
        job("c", "three", JobStatus::Failed),
    ]
}

#[cfg(test)]
pub(crate) fn repeated_stage_name() -> Vec<Job> {
    vec![
        job("build-1", "build", JobStatus::Success),
        job("test-1", "test", JobStatus::Success),
        job("build-2", "build", JobStatus::Running),
    ]
}
