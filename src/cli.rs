use std::path::PathBuf;

use clap::Parser;

use crate::config::CleanMode;

#[derive(Parser, Default)]
#[command(name = "clean-flutter-dirs")]
#[command(about = "Batch-run `flutter clean` across every Flutter project under a parent folder")]
pub struct Cli {
    /// Parent folder containing Flutter projects; prompted for when omitted
    pub dir: Option<PathBuf>,

    /// Run the clean through FVM (`fvm flutter clean`)
    #[arg(long, conflicts_with = "no_fvm")]
    pub fvm: bool,

    /// Use the Flutter SDK directly (`flutter clean`)
    #[arg(long = "no-fvm", conflicts_with = "fvm")]
    pub no_fvm: bool,

    /// Don't ask for confirmation; just clean all detected projects
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Cli {
    /// Invocation mode pre-selected on the command line, if any.
    #[must_use]
    pub const fn mode(&self) -> Option<CleanMode> {
        if self.fvm {
            Some(CleanMode::Fvm)
        } else if self.no_fvm {
            Some(CleanMode::Flutter)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        let cli = Cli {
            fvm: true,
            ..Cli::default()
        };
        assert_eq!(cli.mode(), Some(CleanMode::Fvm));

        let cli = Cli {
            no_fvm: true,
            ..Cli::default()
        };
        assert_eq!(cli.mode(), Some(CleanMode::Flutter));

        assert_eq!(Cli::default().mode(), None);
    }

    #[test]
    fn test_fvm_flags_conflict() {
        let result = Cli::try_parse_from(["clean-flutter-dirs", "--fvm", "--no-fvm"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_directory_argument() {
        let cli = Cli::try_parse_from(["clean-flutter-dirs", "/tmp/projects", "-y"]).unwrap();

        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/projects")));
        assert!(cli.yes);
    }
}
