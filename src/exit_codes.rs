//! Process exit statuses for the `taglink` binary.
//!
//! Editor integrations and scripts read the status to tell a tag that simply
//! has no matching rule apart from a broken setup:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | the tag resolved, or every rule is valid |
//! | 1 | no rule matched, no tag under the cursor, or a rule has a problem |
//! | 2 | configuration, file access or internal error |

/// Outcome of a `taglink` invocation, as seen by the calling process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitStatus {
    Success = 0,
    NoMatch = 1,
    ToolError = 2,
}

impl ExitStatus {
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Terminate the process with this status.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

/// Shorthands used by the command handlers.
pub mod exit {
    use super::ExitStatus;

    pub fn success() -> ! {
        ExitStatus::Success.exit()
    }

    pub fn no_match() -> ! {
        ExitStatus::NoMatch.exit()
    }

    pub fn tool_error() -> ! {
        ExitStatus::ToolError.exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::NoMatch.code(), 1);
        assert_eq!(ExitStatus::ToolError.code(), 2);
    }
}
