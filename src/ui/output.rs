//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including debug-level status.
    Verbose,
    /// Show status and child process output.
    #[default]
    Normal,
    /// Show status only; child process output is captured.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the global CLI flags. `quiet` wins over `verbose`.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if child process output is passed through to the terminal.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
