// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use smol_str::SmolStr;

/// Lifecycle state of a CI job.
///
/// Any tag outside the known set parses to [`JobStatus::Unknown`] instead of failing, so legacy
/// or newer server-side states still render (without a status glyph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(from = "String")]
pub enum JobStatus {
    Created,
    Pending,
    Running,
    Failed,
    Success,
    Canceled,
    Skipped,
    #[default]
    Unknown,
}

impl JobStatus {
    pub const ALL: [Self; 8] = [
        Self::Created,
        Self::Pending,
        Self::Running,
        Self::Failed,
        Self::Success,
        Self::Canceled,
        Self::Skipped,
        Self::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Failed => "failed",
            Self::Success => "success",
            Self::Canceled => "canceled",
            Self::Skipped => "skipped",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "created" => Self::Created,
            "pending" => Self::Pending,
            "running" => Self::Running,
            "failed" => Self::Failed,
            "success" => Self::Success,
            "canceled" => Self::Canceled,
            "skipped" => Self::Skipped,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<String> for JobStatus {
    fn from(value: String) -> Self {
        Self::from_tag(&value)
    }
}

/// One pipeline job as handed to a layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    name: SmolStr,
    stage: SmolStr,
    #[serde(default)]
    status: JobStatus,
}

impl Job {
    pub fn new(name: impl Into<SmolStr>, stage: impl Into<SmolStr>, status: JobStatus) -> Self {
        Self { name: name.into(), stage: stage.into(), status }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub(crate) fn name_key(&self) -> &SmolStr {
        &self.name
    }
}
