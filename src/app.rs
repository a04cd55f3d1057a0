//! Batch orchestration.
//!
//! Drives the whole run: configure the invocation mode, acquire and validate
//! the parent folder, discover projects, confirm with the operator, clean
//! each project in discovery order, and print the summary. Prompts and
//! external commands are injected so the flow is testable end to end.

use std::{
    env,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::cleaner::{BatchTotals, Cleaner, print_summary};
use crate::cli::Cli;
use crate::console::Prompter;
use crate::process::CommandRunner;
use crate::scanner::discover_projects;

/// How a run ended, for callers that want more than the printed narration.
#[derive(Debug)]
pub enum RunOutcome {
    /// Projects were processed; totals were printed in the summary
    Cleaned(BatchTotals),

    /// Discovery found no Flutter projects — a message, not an error
    NoProjects,

    /// The operator declined the confirmation; nothing was invoked
    Cancelled,

    /// An interrupt arrived mid-batch; no summary was printed
    Interrupted,
}

/// Run the full batch-clean workflow.
///
/// CLI arguments pre-answer prompts where given: the parent folder, the
/// invocation mode and the confirmation can each be supplied up front.
/// `interrupted` is the operator-interrupt flag raised by the SIGINT
/// handler; once set, the batch stops and the run ends with the distinct
/// cancellation message instead of a summary.
///
/// # Errors
///
/// Returns an error when the parent path is missing, does not exist, is not
/// a directory, or cannot be listed — or when a prompt itself fails
/// (including an operator interrupt, which `main` reports as cancellation).
pub fn run<P: Prompter, R: CommandRunner>(
    cli: &Cli,
    prompter: &mut P,
    runner: &R,
    interrupted: &AtomicBool,
) -> Result<RunOutcome> {
    let mode = match cli.mode() {
        Some(mode) => mode,
        None => prompter.choose_mode()?,
    };
    println!("{} Using: {}", "✅".green(), mode.command_line());

    // A CLI-supplied path is used as-is; only prompted input goes through
    // string handling (it can carry a leading `~` the shell never expanded).
    let parent = match &cli.dir {
        Some(dir) => {
            if dir.as_os_str().is_empty() {
                bail!("No folder path provided");
            }
            absolutize(dir.clone())?
        }
        None => {
            let input = prompter.prompt_parent_dir()?;

            if input.trim().is_empty() {
                bail!("No folder path provided");
            }

            resolve_parent_dir(input.trim())?
        }
    };

    if !parent.exists() {
        bail!("Folder does not exist: {}", parent.display());
    }
    if !parent.is_dir() {
        bail!("Path is not a directory: {}", parent.display());
    }

    println!(
        "🔍 Scanning for Flutter projects in: {}",
        parent.display().to_string().bright_white()
    );

    let projects = discover_projects(&parent)?;

    for project in &projects {
        println!("📱 Found Flutter project: {project}");
    }

    if projects.is_empty() {
        println!(
            "{}",
            "No Flutter projects found in the specified folder.".yellow()
        );
        return Ok(RunOutcome::NoProjects);
    }

    println!(
        "\n🎯 Found {} Flutter project(s)",
        projects.len().to_string().bright_white()
    );
    println!("📋 Command to execute: {}", mode.command_line().bold());

    let confirmed = cli.yes || {
        let message = format!(
            "Run '{}' on all {} project(s)?",
            mode.command_line(),
            projects.len()
        );
        prompter.confirm(&message)?
    };

    if !confirmed {
        println!("{}", "⏹️  Operation cancelled.".yellow());
        return Ok(RunOutcome::Cancelled);
    }

    println!("\n{}", "🚀 Starting cleanup process...".cyan());

    let cleaner = Cleaner::new(runner, mode, interrupted);
    let totals = cleaner.clean_projects(&projects);

    if interrupted.load(Ordering::SeqCst) {
        println!("\n{}", "⏹️  Operation cancelled by user.".yellow());
        return Ok(RunOutcome::Interrupted);
    }

    print_summary(&totals, mode, projects.len());

    Ok(RunOutcome::Cleaned(totals))
}

/// Turn operator path input into an absolute path.
///
/// A leading `~` is expanded to the invoking user's home directory; relative
/// paths are resolved against the current working directory. The path is not
/// required to exist yet — validation happens separately so the operator gets
/// a specific message.
fn resolve_parent_dir(input: &str) -> Result<PathBuf> {
    absolutize(expand_tilde(input)?)
}

/// Resolve a relative path against the current working directory.
fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir().context("Failed to determine the current directory")?;
        Ok(cwd.join(path))
    }
}

/// Expand a leading `~` or `~/` to the user's home directory.
fn expand_tilde(input: &str) -> Result<PathBuf> {
    if input == "~" {
        return home_dir();
    }

    if let Some(rest) = input.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(input))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine the home directory for ~ expansion")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_absolute_path_kept_as_is() {
        let resolved = resolve_parent_dir("/tmp/projects").unwrap();
        assert_eq!(resolved, Path::new("/tmp/projects"));
    }

    #[test]
    fn test_relative_path_resolved_against_cwd() {
        let resolved = resolve_parent_dir("projects").unwrap();

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("projects"));
    }

    #[test]
    fn test_tilde_expansion() {
        let home = dirs::home_dir().unwrap();

        assert_eq!(resolve_parent_dir("~").unwrap(), home);
        assert_eq!(
            resolve_parent_dir("~/flutter/apps").unwrap(),
            home.join("flutter/apps")
        );
    }

    #[test]
    fn test_tilde_in_the_middle_is_literal() {
        let resolved = resolve_parent_dir("/data/~backup").unwrap();
        assert_eq!(resolved, Path::new("/data/~backup"));
    }
}
