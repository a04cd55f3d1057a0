//! Invocation mode configuration.
//!
//! The external clean command comes in two equivalent forms: through FVM
//! (Flutter Version Management) or through the Flutter SDK directly. The mode
//! is chosen once per run and held as immutable configuration afterwards.

use std::fmt::{Display, Formatter, Result};

/// Which form of the external clean command to invoke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CleanMode {
    /// `fvm flutter clean` — routes through Flutter Version Management
    Fvm,

    /// `flutter clean` — uses the Flutter SDK on `PATH` directly
    Flutter,
}

impl CleanMode {
    /// The executable to spawn for this mode.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Fvm => "fvm",
            Self::Flutter => "flutter",
        }
    }

    /// The arguments passed to [`program`](Self::program).
    #[must_use]
    pub const fn args(self) -> &'static [&'static str] {
        match self {
            Self::Fvm => &["flutter", "clean"],
            Self::Flutter => &["clean"],
        }
    }

    /// The full command line as shown to the operator.
    #[must_use]
    pub const fn command_line(self) -> &'static str {
        match self {
            Self::Fvm => "fvm flutter clean",
            Self::Flutter => "flutter clean",
        }
    }
}

impl Display for CleanMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.command_line())
    }
}
