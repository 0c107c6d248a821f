// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

pub const LAYOUT_ENV: &str = "PIPEBOARD_LAYOUT";

/// Tunable geometry of the board, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Columns left and right of a stage center; boxes are `2 * half_width` wide.
    pub half_width: i32,
    /// Vertical distance between the tops of two consecutive job rows.
    pub row_pitch: i32,
    /// `y2 - y1` of a job box.
    pub box_height: i32,
    /// `y2 - y1` of a stage label box.
    pub label_height: i32,
    /// Rows between the bottom of a stage label and the vertical center.
    pub label_gap: i32,
    /// Distance from a box edge to the connector junction/corner column.
    pub junction_offset: i32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            half_width: 7,
            row_pitch: 6,
            box_height: 2,
            label_height: 2,
            label_gap: 2,
            junction_offset: 3,
        }
    }
}

impl LayoutParams {
    pub fn box_width(&self) -> i32 {
        self.half_width * 2
    }

    /// Reads overrides from `PIPEBOARD_LAYOUT` (`key=value` pairs separated by commas).
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(LAYOUT_ENV) {
            Ok(value) => Self::default().with_overrides(&value),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
                name: LAYOUT_ENV.to_string(),
                value: "<non-unicode>".to_string(),
            }),
        }
    }

    pub fn with_overrides(mut self, overrides: &str) -> Result<Self, ConfigError> {
        for part in overrides.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            let (key, raw) = part
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedPair { pair: part.to_string() })?;
            let key = key.trim();
            let raw = raw.trim();
            let value: i32 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw.to_string(),
            })?;

            let slot = match key {
                "half_width" => &mut self.half_width,
                "row_pitch" => &mut self.row_pitch,
                "box_height" => &mut self.box_height,
                "label_height" => &mut self.label_height,
                "label_gap" => &mut self.label_gap,
                "junction_offset" => &mut self.junction_offset,
                _ => return Err(ConfigError::UnknownKey { key: key.to_string() }),
            };
            *slot = value;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("half_width", self.half_width),
            ("row_pitch", self.row_pitch),
            ("box_height", self.box_height),
            ("label_height", self.label_height),
            ("junction_offset", self.junction_offset),
        ];
        for (key, value) in positive {
            if value < 1 {
                return Err(ConfigError::OutOfRange { key, value, min: 1 });
            }
        }
        if self.label_gap < 0 {
            return Err(ConfigError::OutOfRange { key: "label_gap", value: self.label_gap, min: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEnv { name: String, value: String },
    MalformedPair { pair: String },
    UnknownKey { key: String },
    InvalidValue { key: String, value: String },
    OutOfRange { key: &'static str, value: i32, min: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
            Self::MalformedPair { pair } => {
                write!(f, "invalid layout override `{pair}` (expected key=value)")
            }
            Self::UnknownKey { key } => write!(f, "unknown layout key `{key}`"),
            Self::InvalidValue { key, value } => {
                write!(f, "layout key `{key}` expects an integer, got `{value}`")
            }
            Self::OutOfRange { key, value, min } => {
                write!(f, "layout key `{key}` must be >= {min}, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
