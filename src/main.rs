//! # clean-flutter-dirs
//!
//! A CLI tool for batch-running `flutter clean` across every Flutter project
//! found directly under a parent folder, with before/after disk-space
//! tracking per project and in aggregate.
//!
//! ## Usage
//!
//! ```bash
//! # Fully interactive: prompts for the command form, folder and confirmation
//! clean-flutter-dirs
//!
//! # Pre-answer everything on the command line
//! clean-flutter-dirs ~/flutter/apps --fvm -y
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use clean_flutter_dirs::{
    app, cli::Cli, console, console::ConsolePrompter, process::SystemRunner,
};
use colored::Colorize;
use std::process::exit;
use std::sync::atomic::{AtomicBool, Ordering};

/// Raised by the SIGINT handler; checked between batch steps so an interrupt
/// ends the run with the cancellation message instead of a half-printed
/// summary.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Entry point for the clean-flutter-dirs application.
///
/// Delegates to [`inner_main`] and handles its errors: prompt interrupts
/// (Ctrl-C / Esc) are reported as a cancellation and exit cleanly, anything
/// else is printed to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        if console::is_interrupted(&err) {
            println!("\n{}", "⏹️  Operation cancelled by user.".yellow());
            return;
        }

        eprintln!("{} {err:#}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses command-line arguments, installs the interrupt handler, prints the
/// banner, and runs the batch workflow with the real console prompter and
/// process runner.
///
/// Ctrl-C while a prompt is open surfaces through `inquire` (the terminal is
/// in raw mode there, so no signal is generated); Ctrl-C anywhere else
/// raises [`INTERRUPTED`], which the orchestrator checks between steps. The
/// external clean command shares the foreground process group and receives
/// the same SIGINT.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
        .context("Failed to install the interrupt handler")?;

    println!(
        "{}",
        "🎯 Flutter Projects Batch Cleaner with Size Tracking".bold()
    );
    println!(
        "Scans a folder for Flutter projects, runs the clean command on each one, \
         and reports how much space was saved."
    );
    println!("{}", "=".repeat(60));

    let mut prompter = ConsolePrompter;
    let runner = SystemRunner;

    app::run(&args, &mut prompter, &runner, &INTERRUPTED)?;

    Ok(())
}
