use super::termination::{SIGABRT, Termination};

/// Classification of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Clean exit with status 0
    Success,
    /// Killed by SIGABRT, i.e. an assertion in the target fired
    AssertionFailure,
    /// Anything else; carries the signed status code
    Unexpected(i32),
}

impl RunOutcome {
    pub fn classify(termination: Termination) -> Self {
        match termination.code() {
            0 => Self::Success,
            code if code == -SIGABRT => Self::AssertionFailure,
            code => Self::Unexpected(code),
        }
    }
}
