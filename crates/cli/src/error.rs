//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map error chains to the appropriate exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - `MalformedValue` equals `envkit_config::constants::EXIT_MALFORMED_VALUE`, so the
//!   CLI and library-level `or_exit()` terminate with the same status.

use envkit_config::EnvError;
use thiserror::Error;

use crate::args::ValueType;

/// Structured exit codes for envkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Usage error - an argument (such as `--default`) could not be interpreted.
    UsageError = 2,

    /// A variable is set but its value does not convert to the requested type.
    ///
    /// Scripts should fix the deployment configuration; retrying cannot help.
    MalformedValue = 78,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Errors raised by the CLI itself rather than by variable lookups.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid --default {value:?} for type {value_type}: {reason}")]
    InvalidDefault {
        value: String,
        value_type: ValueType,
        reason: String,
    },
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;

    /// The lookup error in this chain, if any.
    fn env_error(&self) -> Option<&EnvError>;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self.env_error().is_some() {
            return ExitCode::MalformedValue;
        }
        if self.chain().any(|cause| cause.downcast_ref::<CliError>().is_some()) {
            return ExitCode::UsageError;
        }
        ExitCode::GeneralError
    }

    fn env_error(&self) -> Option<&EnvError> {
        self.chain().find_map(|cause| cause.downcast_ref::<EnvError>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use envkit_config::constants::EXIT_MALFORMED_VALUE;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::UsageError.as_i32(), 2);
        assert_eq!(ExitCode::MalformedValue.as_i32(), EXIT_MALFORMED_VALUE);
    }

    #[test]
    fn test_env_error_maps_to_malformed_value() {
        let err = anyhow::Error::new(EnvError::InvalidMapEntry {
            key: "LABELS".to_string(),
            entry: "oops".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::MalformedValue);
        assert_eq!(err.env_error().map(EnvError::key), Some("LABELS"));
    }

    #[test]
    fn test_wrapped_env_error_is_found_in_chain() {
        let result: Result<(), EnvError> = Err(EnvError::InvalidMapEntry {
            key: "LABELS".to_string(),
            entry: "oops".to_string(),
        });
        let err = result.context("resolving LABELS").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::MalformedValue);
    }

    #[test]
    fn test_invalid_default_maps_to_usage_error() {
        let err = anyhow::Error::new(CliError::InvalidDefault {
            value: "abc".to_string(),
            value_type: ValueType::Int,
            reason: "invalid digit found in string".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::UsageError);
        assert!(err.to_string().contains("type int"));
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
