// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pipeboard CLI entrypoint.
//!
//! By default this runs the interactive board. `--print` lays the pipeline out once on a fixed
//! size board and writes it to stdout instead.

use std::error::Error;
use std::path::PathBuf;

use pipeboard::layout::{LayoutEngine, LayoutParams};
use pipeboard::logging::{self, LogTarget};
use pipeboard::render::{render_board_text, Board};
use pipeboard::store::JobSource;

const DEFAULT_JOBS_FILE: &str = "jobs.json";
const DEFAULT_PRINT_SIZE: (usize, usize) = (100, 30);

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<jobs.json>] [--log-file <path>]\n  {program} [--jobs <path>] [--log-file <path>]\n  {program} --demo [--log-file <path>]\n  {program} [<jobs.json> | --demo] --print [--size <W>x<H>] [--log-file <path>]\n\nIf the job file is omitted, `{DEFAULT_JOBS_FILE}` in the current directory is used.\n--demo uses a built-in pipeline and cannot be combined with a job file.\n\n--print renders one layout pass to stdout (default size {}x{}); --size requires --print.\nLogs follow RUST_LOG (default info) and go to --log-file, or to stderr with --print.\n\nEnvironment:\n  PIPEBOARD_LAYOUT       key=value overrides for the board geometry\n  PIPEBOARD_TUI_PALETTE  18 comma-separated colors (fg,bg,16 ANSI); PIPEBOARD_PALETTE as fallback",
        DEFAULT_PRINT_SIZE.0, DEFAULT_PRINT_SIZE.1
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    print: bool,
    jobs_path: Option<String>,
    size: Option<(usize, usize)>,
    log_file: Option<String>,
}

impl CliOptions {
    fn job_source(&self) -> JobSource {
        if self.demo {
            return JobSource::Demo;
        }
        JobSource::File(PathBuf::from(self.jobs_path.as_deref().unwrap_or(DEFAULT_JOBS_FILE)))
    }

    fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.print) {
            (Some(path), _) => LogTarget::File(PathBuf::from(path)),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Off,
        }
    }
}

fn parse_size(raw: &str) -> Result<(usize, usize), ()> {
    let (width, height) = raw.split_once(['x', 'X']).ok_or(())?;
    let width: usize = width.parse().map_err(|_| ())?;
    let height: usize = height.parse().map_err(|_| ())?;
    if width == 0 || height == 0 {
        return Err(());
    }
    Ok((width, height))
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--jobs" => {
                if options.jobs_path.is_some() {
                    return Err(());
                }
                options.jobs_path = Some(args.next().ok_or(())?);
            }
            "--size" => {
                if options.size.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.size = Some(parse_size(&raw)?);
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                options.log_file = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.jobs_path.is_some() {
                    return Err(());
                }
                options.jobs_path = Some(arg);
            }
        }
    }

    if options.demo && options.jobs_path.is_some() {
        return Err(());
    }

    if options.size.is_some() && !options.print {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "pipeboard".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        logging::init(&options.log_target())?;

        let engine = LayoutEngine::new(LayoutParams::from_env()?);
        let source = options.job_source();

        if options.print {
            let (width, height) = options.size.unwrap_or(DEFAULT_PRINT_SIZE);
            let jobs = source.load()?;
            let mut board = Board::new(width, height)?;
            engine.redraw(&jobs, &mut board)?;
            println!("{}", render_board_text(&board));
            return Ok(());
        }

        pipeboard::tui::run(source, engine)
    })();

    if let Err(err) = result {
        tracing::error!(%err, "exiting");
        eprintln!("pipeboard: {err}");
        std::process::exit(1);
    }
}
