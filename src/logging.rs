// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracing subscriber setup for the binary.
//!
//! Filtering follows `RUST_LOG` and falls back to `info`.

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// No subscriber; the TUI owns the terminal and stderr would corrupt the screen.
    Off,
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn build_subscriber(
    writer: BoxMakeWriter,
    ansi: bool,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer().with_writer(writer).with_ansi(ansi).with_target(false);
    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// Installs the global subscriber for `target`. The log file is truncated.
pub fn init(target: &LogTarget) -> Result<(), Box<dyn Error>> {
    let (writer, ansi) = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            let file = File::create(path)
                .map_err(|err| format!("cannot open log file {}: {err}", path.display()))?;
            (BoxMakeWriter::new(Arc::new(file)), false)
        }
    };

    build_subscriber(writer, ansi, env_filter()).try_init()?;
    Ok(())
}
