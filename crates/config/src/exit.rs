//! Process termination for malformed configuration.
//!
//! Accessors return `EnvError` rather than aborting; the application entry point
//! calls `.or_exit()` to turn a malformed value into an immediate, descriptive exit.

use crate::constants::EXIT_MALFORMED_VALUE;
use crate::error::EnvError;

/// Log `error` and terminate the process with [`EXIT_MALFORMED_VALUE`].
pub fn exit_malformed(error: &EnvError) -> ! {
    tracing::error!(key = error.key(), "{}", error);
    eprintln!("{}", error);
    std::process::exit(EXIT_MALFORMED_VALUE)
}

/// Unwrap an accessor result or terminate the process.
///
/// ```no_run
/// use envkit_config::{OrExit, get_env_int};
///
/// let workers = get_env_int("WORKERS", 4).or_exit();
/// # let _ = workers;
/// ```
pub trait OrExit<T> {
    /// The value on success; on error, log it and exit with status 78.
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for Result<T, EnvError> {
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => exit_malformed(&error),
        }
    }
}
