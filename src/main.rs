// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `oscillators`: search small tori for Game of Life oscillators.
//!
//! **Usage:**
//! ```text
//! oscillators [--min-width <N>] [--max-width <N>] [--height <H>] [--show] [-v...] [-q]
//! oscillators --pattern '.o.../..o../ooo../...../.....'
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use life_oscillators::cycle::{advance, detect_cycle};
use life_oscillators::geometry::PUZZLE_HEIGHT;
use life_oscillators::{search_board, GridState, Torus};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Enumerate every board of each width and report the cycles found.
#[derive(Parser, Debug)]
#[command(name = "oscillators", about = "Exhaustive oscillator search on small toroidal boards")]
struct Args {
    /// Narrowest board to search.
    #[arg(long, default_value_t = 1)]
    min_width: usize,

    /// Widest board to search.
    #[arg(long, default_value_t = 7)]
    max_width: usize,

    /// Board height.
    #[arg(long, default_value_t = PUZZLE_HEIGHT)]
    height: usize,

    /// Print every phase of each cycle found.
    #[arg(long)]
    show: bool,

    /// Replay one starting board, given as rows separated by '/', instead of searching.
    #[arg(long, value_name = "ROWS")]
    pattern: Option<String>,

    /// More logging; repeat for trace output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only errors are logged.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Writes `[target] message` records to stderr.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if record.level() <= Level::Warn {
            eprintln!("[{}] {}: {}", record.target(), record.level(), record.args());
        } else {
            eprintln!("[{}] {}", record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Route `log` records to stderr. Fails if a logger is already installed.
fn install_logger(level: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER).context("installing logger")?;
    log::set_max_level(level);
    Ok(())
}

fn replay(rows: &str, show: bool) -> Result<()> {
    let start: GridState = rows
        .parse()
        .with_context(|| format!("invalid pattern {rows:?}"))?;
    let torus = Torus::for_state(&start);
    let trajectory = detect_cycle(&start, |state| torus.step(state));
    let entry = advance(&start, trajectory.first_rep, |state| torus.step(state));

    println!(
        "{}x{} board {}: transient {}, period {}",
        start.height(),
        start.width(),
        start,
        trajectory.first_rep,
        trajectory.period
    );
    if show {
        let mut state = entry;
        for phase in 0..trajectory.period {
            println!("phase {phase}:");
            for row in state.render() {
                println!("  {row}");
            }
            state = torus.step(&state);
        }
    }
    Ok(())
}

fn run_search(args: &Args) -> Result<()> {
    if args.min_width > args.max_width {
        bail!(
            "--min-width {} is greater than --max-width {}",
            args.min_width,
            args.max_width
        );
    }

    for width in args.min_width..=args.max_width {
        let outcome = search_board(args.height, width)
            .with_context(|| format!("searching {}x{}", args.height, width))?;
        let cycles = outcome.cycles();
        println!(
            "{}x{}: {} oscillator states, {} cycles",
            args.height,
            width,
            outcome.oscillators.len(),
            cycles.len()
        );
        if args.show {
            for cycle in &cycles {
                println!("period {}:", cycle.period());
                for line in cycle.render() {
                    println!("  {line}");
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    install_logger(args.level())?;

    match &args.pattern {
        Some(rows) => replay(rows, args.show),
        None => run_search(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["oscillators"]);
        assert_eq!(args.min_width, 1);
        assert_eq!(args.max_width, 7);
        assert_eq!(args.height, 3);
        assert!(!args.show);
        assert_eq!(args.level(), LevelFilter::Warn);
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(Args::parse_from(["oscillators", "-v"]).level(), LevelFilter::Info);
        assert_eq!(Args::parse_from(["oscillators", "-vvv"]).level(), LevelFilter::Trace);
        assert_eq!(Args::parse_from(["oscillators", "-q"]).level(), LevelFilter::Error);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["oscillators", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_logger_installs_once() {
        install_logger(LevelFilter::Info).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Info);
        let err = install_logger(LevelFilter::Trace).unwrap_err();
        assert!(err.to_string().contains("installing logger"));
        assert_eq!(log::max_level(), LevelFilter::Info);
    }

    #[test]
    fn test_replay_rejects_bad_pattern() {
        assert!(replay("o./x.", false).is_err());
    }

    #[test]
    fn test_width_range_checked() {
        let args = Args::parse_from(["oscillators", "--min-width", "5", "--max-width", "4"]);
        assert!(run_search(&args).is_err());
    }
}
