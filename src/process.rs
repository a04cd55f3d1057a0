//! External command invocation.
//!
//! The clean command is an opaque external collaborator; this module wraps
//! its invocation behind a narrow trait so the failure paths can be tested
//! with a fake runner instead of spawning real tools.

use std::{io, path::Path, process::Command};

/// Captured result of a completed external command.
#[derive(Clone, Debug)]
pub struct CommandOutput {
    /// Whether the command exited with status zero
    pub success: bool,

    /// Exit code, when the process terminated normally
    pub exit_code: Option<i32>,

    /// Captured standard output, lossily decoded as UTF-8
    pub stdout: String,

    /// Captured standard error, lossily decoded as UTF-8
    pub stderr: String,
}

/// Runs external commands to completion with captured output.
///
/// Implementations block until the command finishes; no timeout is enforced.
pub trait CommandRunner {
    /// Run `program` with `args`, using `cwd` as the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the command cannot be spawned at all. A missing
    /// executable surfaces as [`io::ErrorKind::NotFound`] so callers can give
    /// a distinct diagnostic; a command that runs but exits non-zero is an
    /// `Ok` result with `success == false`.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).current_dir(cwd).output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_executable_is_not_found() {
        let cwd = std::env::temp_dir();
        let err = SystemRunner
            .run("clean-flutter-dirs-no-such-tool", &[], &cwd)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_captured_not_an_error() {
        let cwd = PathBuf::from("/");
        let output = SystemRunner
            .run("sh", &["-c", "echo out; echo err >&2; exit 3"], &cwd)
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_working_directory() {
        let cwd = std::env::temp_dir();
        let output = SystemRunner.run("pwd", &[], &cwd).unwrap();

        assert!(output.success);
        assert_eq!(PathBuf::from(output.stdout.trim()), cwd.canonicalize().unwrap());
    }
}
