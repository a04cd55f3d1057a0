//! Per-project clean cycle and batch accumulation.
//!
//! This module drives the external clean command over discovered projects.
//! Each project goes through a strict measure → clean → measure sequence,
//! producing a [`CleanOutcome`] that is folded into [`BatchTotals`] for the
//! final summary. A failing project never stops the batch.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

use crate::config::CleanMode;
use crate::process::CommandRunner;
use crate::project::FlutterProject;
use crate::size::{format_signed_size, format_size, measure_dir};

/// Result of cleaning one project.
///
/// Failed outcomes carry all-zero size fields: when the external command did
/// not complete, the before/after measurements say nothing useful about
/// reclaimed space.
#[derive(Clone, Copy, Debug)]
pub struct CleanOutcome {
    /// Whether the external clean command completed with status zero
    pub success: bool,

    /// Project size before cleaning, in bytes
    pub size_before: u64,

    /// Project size after cleaning, in bytes
    pub size_after: u64,

    /// `size_before - size_after`; negative when the tool grew the project
    pub size_saved: i64,
}

impl CleanOutcome {
    /// The outcome recorded for any per-project failure.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            success: false,
            size_before: 0,
            size_after: 0,
            size_saved: 0,
        }
    }
}

/// Running totals over all processed projects.
///
/// `size_saved == size_before - size_after` and
/// `cleaned + failed == projects processed` hold after every
/// [`record`](Self::record) call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BatchTotals {
    /// Number of successfully cleaned projects
    pub cleaned: usize,

    /// Number of projects whose clean failed
    pub failed: usize,

    /// Combined size of all projects before cleaning, in bytes
    pub size_before: u64,

    /// Combined size of all projects after cleaning, in bytes
    pub size_after: u64,

    /// Combined bytes saved across all projects
    pub size_saved: i64,
}

impl BatchTotals {
    /// Fold one project's outcome into the totals.
    pub fn record(&mut self, outcome: &CleanOutcome) {
        if outcome.success {
            self.cleaned += 1;
        } else {
            self.failed += 1;
        }

        self.size_before += outcome.size_before;
        self.size_after += outcome.size_after;
        self.size_saved += outcome.size_saved;
    }

    /// Percentage space reduction, when a before-total exists.
    ///
    /// `None` when nothing was measured (`size_before == 0`), which avoids a
    /// division by zero in the summary.
    #[must_use]
    pub fn reduction_percent(&self) -> Option<f64> {
        if self.size_before > 0 {
            Some(self.size_saved as f64 / self.size_before as f64 * 100.0)
        } else {
            None
        }
    }
}

/// Cleans projects by invoking the external clean command.
pub struct Cleaner<'a, R: CommandRunner> {
    runner: &'a R,
    mode: CleanMode,
    interrupted: &'a AtomicBool,
}

impl<'a, R: CommandRunner> Cleaner<'a, R> {
    /// Create a cleaner for the given runner and invocation mode.
    ///
    /// `interrupted` is the operator-interrupt flag (set by the SIGINT
    /// handler); once it is raised no further external command is launched.
    #[must_use]
    pub fn new(runner: &'a R, mode: CleanMode, interrupted: &'a AtomicBool) -> Self {
        Self {
            runner,
            mode,
            interrupted,
        }
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Clean every project in order, strictly sequentially.
    ///
    /// Each project is narrated as `[i/total]` while it is processed. A
    /// per-project failure is reported inline and the batch moves on. An
    /// operator interrupt stops the batch before the next project starts.
    #[must_use]
    pub fn clean_projects(&self, projects: &[FlutterProject]) -> BatchTotals {
        let mut totals = BatchTotals::default();

        for (index, project) in projects.iter().enumerate() {
            if self.is_interrupted() {
                break;
            }

            println!(
                "\n[{}/{}] Processing project...",
                index + 1,
                projects.len()
            );

            let outcome = self.clean_project(project);
            totals.record(&outcome);
        }

        totals
    }

    /// Clean a single project, narrating every step.
    ///
    /// The sequence is fixed: measure the project directory, run the clean
    /// command with the project as working directory, measure again, report
    /// the delta. The command's stdout is echoed when non-empty.
    ///
    /// All failure conditions — non-zero exit, missing executable, any other
    /// spawn error — are confined to this project's outcome; none of them
    /// propagate out of this method.
    pub fn clean_project(&self, project: &FlutterProject) -> CleanOutcome {
        println!("🧹 Cleaning Flutter project: {}", project.name.cyan());

        println!("  📏 Calculating folder size before cleaning...");
        let before = measure_dir(&project.path);
        print_measurement("Size before", before.bytes, before.complete);

        // An interrupt raised during the measurement must not launch the
        // external command anymore.
        if self.is_interrupted() {
            return CleanOutcome::failed();
        }

        println!("  🔧 Running: {}", self.mode.command_line().bright_white());

        let output = match self
            .runner
            .run(self.mode.program(), self.mode.args(), &project.path)
        {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                println!(
                    "  {} '{}' command not found. Make sure it is installed and in your PATH.",
                    "❌".red(),
                    self.mode.program()
                );
                return CleanOutcome::failed();
            }
            Err(e) => {
                println!(
                    "  {} Error cleaning {}: {e}",
                    "❌".red(),
                    project.name
                );
                return CleanOutcome::failed();
            }
        };

        if !output.success {
            let status = output
                .exit_code
                .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit status {c}"));
            println!(
                "  {} `{}` failed in {}: {status}",
                "❌".red(),
                self.mode.command_line(),
                project.name
            );

            let stderr = output.stderr.trim();
            if !stderr.is_empty() {
                println!("  Error details: {}", stderr.red());
            }

            return CleanOutcome::failed();
        }

        println!("  📏 Calculating folder size after cleaning...");
        let after = measure_dir(&project.path);
        let saved = before.bytes as i64 - after.bytes as i64;

        print_measurement("Size after", after.bytes, after.complete);
        println!(
            "  💾 Space saved: {}",
            format_signed_size(saved).bright_green()
        );

        let stdout = output.stdout.trim();
        if !stdout.is_empty() {
            println!("  📝 Flutter output: {stdout}");
        }

        println!(
            "  {} Successfully cleaned: {}",
            "✅".green(),
            project.name
        );

        CleanOutcome {
            success: true,
            size_before: before.bytes,
            size_after: after.bytes,
            size_saved: saved,
        }
    }
}

/// Print one size measurement line, noting incomplete traversals.
fn print_measurement(label: &str, bytes: u64, complete: bool) {
    if complete {
        println!("  📊 {label}: {}", format_size(bytes));
    } else {
        println!(
            "  📊 {label}: {} {}",
            format_size(bytes),
            "(some entries were inaccessible)".yellow()
        );
    }
}

/// Print the final batch summary.
///
/// Reports the command used, success/failure counts (failures only when any
/// occurred), the total project count, combined before/after/saved sizes and
/// the percentage reduction when a before-total exists.
pub fn print_summary(totals: &BatchTotals, mode: CleanMode, total_projects: usize) {
    println!("\n{}", "=".repeat(60));
    println!("{}", "📊 CLEANUP SUMMARY".bold());
    println!("{}", "=".repeat(60));
    println!("🔧 Command used: {}", mode.command_line());
    println!(
        "✅ Successfully cleaned: {} project(s)",
        totals.cleaned.to_string().green()
    );

    if totals.failed > 0 {
        println!(
            "❌ Failed to clean: {} project(s)",
            totals.failed.to_string().red()
        );
    }

    println!("📱 Total Flutter projects: {total_projects}");
    println!("{}", "-".repeat(60));
    println!(
        "📏 Total size before cleaning: {}",
        format_size(totals.size_before).bright_white()
    );
    println!(
        "📏 Total size after cleaning:  {}",
        format_size(totals.size_after).bright_white()
    );
    println!(
        "🎉 Total space saved:          {}",
        format_signed_size(totals.size_saved).bright_green().bold()
    );

    if let Some(percent) = totals.reduction_percent() {
        println!("📈 Space reduction:            {percent:.1}%");
    }

    println!("{}", "=".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_record_success_and_failure() {
        let mut totals = BatchTotals::default();

        totals.record(&CleanOutcome {
            success: true,
            size_before: 100,
            size_after: 40,
            size_saved: 60,
        });
        totals.record(&CleanOutcome::failed());

        assert_eq!(totals.cleaned, 1);
        assert_eq!(totals.failed, 1);
        assert_eq!(totals.size_before, 100);
        assert_eq!(totals.size_after, 40);
        assert_eq!(totals.size_saved, 60);
    }

    #[test]
    fn test_totals_invariant_holds_with_negative_savings() {
        let mut totals = BatchTotals::default();

        totals.record(&CleanOutcome {
            success: true,
            size_before: 50,
            size_after: 80,
            size_saved: -30,
        });
        totals.record(&CleanOutcome {
            success: true,
            size_before: 200,
            size_after: 100,
            size_saved: 100,
        });

        assert_eq!(totals.size_saved, 70);
        assert_eq!(
            totals.size_saved,
            totals.size_before as i64 - totals.size_after as i64
        );
    }

    #[test]
    fn test_reduction_percent() {
        let totals = BatchTotals {
            cleaned: 1,
            failed: 0,
            size_before: 200,
            size_after: 50,
            size_saved: 150,
        };

        let percent = totals.reduction_percent().unwrap();
        assert!((percent - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reduction_percent_undefined_for_zero_before() {
        assert!(BatchTotals::default().reduction_percent().is_none());
    }

    #[test]
    fn test_failed_outcome_is_zeroed() {
        let outcome = CleanOutcome::failed();

        assert!(!outcome.success);
        assert_eq!(outcome.size_before, 0);
        assert_eq!(outcome.size_after, 0);
        assert_eq!(outcome.size_saved, 0);
    }
}
