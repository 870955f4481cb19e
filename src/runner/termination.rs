//! Decoding of a child's exit status into a signed status code.
//!
//! Signal deaths use the negative-signal convention: a child killed by
//! SIGABRT reports `-6`.

use std::process::ExitStatus;

/// Signal raised by a failed C `assert()`. POSIX fixes SIGABRT at 6.
pub const SIGABRT: i32 = 6;

/// Exit code the Windows C runtime uses for `abort()`.
#[cfg(not(unix))]
const ABORT_EXIT_CODE: i32 = 3;

/// How a single run of the target ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with the given code
    Exited(i32),
    /// Killed by the given signal number
    Signaled(i32),
}

impl Termination {
    #[cfg(unix)]
    pub fn from_status(status: ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;

        match status.signal() {
            Some(signal) => Self::Signaled(signal),
            None => Self::Exited(status.code().unwrap_or_default()),
        }
    }

    #[cfg(not(unix))]
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(ABORT_EXIT_CODE) => Self::Signaled(SIGABRT),
            Some(code) => Self::Exited(code),
            None => Self::Exited(0),
        }
    }

    /// Signed status code: the exit code, or the negated signal number
    pub fn code(&self) -> i32 {
        match self {
            Self::Exited(code) => *code,
            Self::Signaled(signal) => -signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exited_code_is_passed_through() {
        assert_eq!(Termination::Exited(0).code(), 0);
        assert_eq!(Termination::Exited(1).code(), 1);
        assert_eq!(Termination::Exited(139).code(), 139);
    }

    #[test]
    fn test_signaled_code_is_negated() {
        assert_eq!(Termination::Signaled(SIGABRT).code(), -6);
        assert_eq!(Termination::Signaled(11).code(), -11);
    }

    #[cfg(unix)]
    #[test]
    fn test_from_status_exit() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status: exit code lives in the high byte
        let status = ExitStatus::from_raw(2 << 8);
        assert_eq!(Termination::from_status(status), Termination::Exited(2));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_status_abort() {
        use std::os::unix::process::ExitStatusExt;

        let status = ExitStatus::from_raw(SIGABRT);
        assert_eq!(Termination::from_status(status), Termination::Signaled(SIGABRT));
        assert_eq!(Termination::from_status(status).code(), -6);
    }
}
