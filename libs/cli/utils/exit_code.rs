use core::fmt::Debug;
use std::process::Termination;

/// Process exit codes, following `<sysexits.h>` where one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The program executed successfully. (EX_OK)
    Success = 0,

    /// A generic or unspecified error occurred.
    Error = 1,

    /// The command was used incorrectly: an empty name, an unknown list or
    /// to-do id. (EX_USAGE)
    Usage = 64,

    /// The configuration file or the selected profile is invalid. (EX_CONFIG)
    ConfigError = 78,
}

impl ExitCode {
    /// Returns the integer value of the exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Allows `ExitCode` to be returned from `main`.
impl Termination for ExitCode {
    fn report(self) -> std::process::ExitCode {
        self.code().into()
    }
}
