//! Interactive console prompts.
//!
//! All operator interaction goes through the [`Prompter`] trait so the
//! orchestration logic can be driven by a scripted prompter in tests. The
//! real implementation is backed by `inquire`.

use anyhow::Result;
use inquire::{InquireError, Select, Text};

use crate::config::CleanMode;

/// The interactive input boundary: one method per prompt the tool asks.
pub trait Prompter {
    /// Ask which form of the clean command to use.
    ///
    /// The menu cannot yield an invalid choice; it re-prompts until one of
    /// the two modes is selected or the operator interrupts.
    fn choose_mode(&mut self) -> Result<CleanMode>;

    /// Ask for the parent folder containing Flutter projects.
    fn prompt_parent_dir(&mut self) -> Result<String>;

    /// Ask a yes/no question.
    ///
    /// Only `y` / `yes` (case-insensitive, surrounding whitespace ignored)
    /// count as yes; every other answer, including an empty one, is no. The
    /// answer is taken as-is, never re-prompted.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// [`Prompter`] backed by `inquire` prompts on the real terminal.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn choose_mode(&mut self) -> Result<CleanMode> {
        let mode = Select::new(
            "Which Flutter command should be used?",
            vec![CleanMode::Fvm, CleanMode::Flutter],
        )
        .prompt()?;

        Ok(mode)
    }

    fn prompt_parent_dir(&mut self) -> Result<String> {
        let path = Text::new("Parent folder containing Flutter projects:").prompt()?;

        Ok(path)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        // A free-form Text prompt rather than inquire's Confirm: any answer
        // other than y/yes must count as "no" instead of re-prompting.
        let answer = Text::new(message).with_placeholder("y/N").prompt()?;

        Ok(is_affirmative(&answer))
    }
}

/// Whether an answer to a confirmation prompt counts as yes.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}

/// Whether an error is an operator interrupt from a prompt (Ctrl-C or Esc).
///
/// Interrupts are not failures; `main` reports them as a cancellation.
#[must_use]
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_is_affirmative_accepts_y_and_yes() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("  Yes  "));
    }

    #[test]
    fn test_is_affirmative_rejects_everything_else() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yeah"));
        assert!(!is_affirmative("yess"));
        assert!(!is_affirmative("1"));
    }

    #[test]
    fn test_is_interrupted_classification() {
        assert!(is_interrupted(&anyhow::Error::from(
            InquireError::OperationInterrupted
        )));
        assert!(is_interrupted(&anyhow::Error::from(
            InquireError::OperationCanceled
        )));
        assert!(!is_interrupted(&anyhow!("some other failure")));
    }
}
