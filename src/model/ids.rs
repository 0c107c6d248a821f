// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

/// Which kind of box a [`BoxKey`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoxKind {
    Stage,
    Job,
}

impl BoxKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Stage => "stage-",
            Self::Job => "jobs-",
        }
    }
}

/// Structured identity of a box on a drawing surface.
///
/// Identity is the `(kind, name)` pair: a stage and a job that share a name get distinct keys.
/// The `Display` form (`stage-<name>`, `jobs-<name>`) is for logs and error messages only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxKey {
    kind: BoxKind,
    name: SmolStr,
}

impl BoxKey {
    pub fn stage(name: impl Into<SmolStr>) -> Self {
        Self { kind: BoxKind::Stage, name: name.into() }
    }

    pub fn job(name: impl Into<SmolStr>) -> Self {
        Self { kind: BoxKind::Job, name: name.into() }
    }

    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BoxKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.prefix())?;
        f.write_str(&self.name)
    }
}
