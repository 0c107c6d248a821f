// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde_json::Value;
use tracing::debug;

use crate::model::fixtures::demo_jobs;
use crate::model::job::Job;

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// `path` is `None` when the text did not come from a file.
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    EmptyName {
        index: usize,
    },
    /// Job names key the boxes, so each may appear once.
    DuplicateName {
        index: usize,
        name: String,
    },
}

impl StoreError {
    fn at_path(self, path: &Path) -> Self {
        match self {
            Self::Json { path: None, source } => {
                Self::Json { path: Some(path.to_path_buf()), source }
            }
            other => other,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path: Some(path), source } => {
                write!(f, "json error at {path:?}: {source}")
            }
            Self::Json { path: None, source } => write!(f, "json error: {source}"),
            Self::EmptyName { index } => write!(f, "job #{index} has an empty name"),
            Self::DuplicateName { index, name } => {
                write!(f, "job #{index} reuses the name {name:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::EmptyName { .. } | Self::DuplicateName { .. } => None,
        }
    }
}

/// Where the host takes its job list from. Reloading re-reads the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    Demo,
    File(PathBuf),
}

impl JobSource {
    pub fn load(&self) -> Result<Vec<Job>, StoreError> {
        match self {
            Self::Demo => Ok(demo_jobs()),
            Self::File(path) => load_jobs(path),
        }
    }

    /// Short name for the footer and logs.
    pub fn label(&self) -> String {
        match self {
            Self::Demo => "demo".to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Reads and parses a job file. See [`parse_jobs_json`] for the accepted shapes.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>, StoreError> {
    let text = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    let jobs = parse_jobs_json(&text).map_err(|err| err.at_path(path))?;
    debug!(path = %path.display(), jobs = jobs.len(), "loaded job file");
    Ok(jobs)
}

/// Parses a job list from either a bare JSON array or an object with a `jobs` array.
///
/// List order is preserved: it is the order stages are discovered and connectors are drawn.
pub fn parse_jobs_json(text: &str) -> Result<Vec<Job>, StoreError> {
    let json = |source: serde_json::Error| StoreError::Json { path: None, source };

    let document: Value = serde_json::from_str(text).map_err(json)?;
    let list = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut object) => match object.remove("jobs") {
            Some(jobs @ Value::Array(_)) => jobs,
            _ => {
                return Err(json(serde_json::Error::custom(
                    "expected an object with a `jobs` array",
                )))
            }
        },
        _ => return Err(json(serde_json::Error::custom("expected a job array"))),
    };

    let jobs: Vec<Job> = serde_json::from_value(list).map_err(json)?;
    let mut seen = HashSet::with_capacity(jobs.len());
    for (index, job) in jobs.iter().enumerate() {
        if job.name().trim().is_empty() {
            return Err(StoreError::EmptyName { index });
        }
        if !seen.insert(job.name()) {
            return Err(StoreError::DuplicateName { index, name: job.name().to_owned() });
        }
    }
    Ok(jobs)
}
