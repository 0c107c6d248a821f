// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Deterministic pipelines for benchmarks (no RNG).

use pipeboard::model::{demo_jobs, Job, JobStatus};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Demo,
    Wide,
    Deep,
    Stress,
}

impl Case {
    pub const ALL: [Self; 4] = [Self::Demo, Self::Wide, Self::Deep, Self::Stress];

    /// Stable case ids; keep them unchanged so results stay comparable.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Wide => "wide_12x3",
            Self::Deep => "deep_3x40",
            Self::Stress => "stress_24x60",
        }
    }

    /// Board size the case is laid out on.
    pub const fn board(self) -> (usize, usize) {
        match self {
            Self::Demo => (100, 30),
            Self::Wide => (240, 40),
            Self::Deep => (120, 500),
            Self::Stress => (480, 800),
        }
    }

    pub fn jobs(self) -> Vec<Job> {
        match self {
            Self::Demo => demo_jobs(),
            Self::Wide => pipeline(12, 3),
            Self::Deep => pipeline(3, 40),
            Self::Stress => pipeline(24, 60),
        }
    }
}

fn pipeline(stages: usize, jobs_per_stage: usize) -> Vec<Job> {
    let mut jobs = Vec::with_capacity(stages * jobs_per_stage);
    for stage in 0..stages {
        for row in 0..jobs_per_stage {
            let status = JobStatus::ALL[(stage * 7 + row * 3) % JobStatus::ALL.len()];
            let name = format!("s{stage:02}_j{row:03}");
            jobs.push(Job::new(name, format!("stage-{stage:02}"), status));
        }
    }
    jobs
}
