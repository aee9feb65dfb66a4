//! Centralized constants for the envkit workspace.
//!
//! File-format markers and process-level knobs shared by the overlay loader,
//! the accessors, and the CLI.

// =============================================================================
// Overlay File Format
// =============================================================================

/// Suffix matched by the `*.env` discovery glob. A bare `.env` also matches.
pub const ENV_FILE_SUFFIX: &str = ".env";

/// Lines starting with this character (after trimming) are comments.
pub const COMMENT_PREFIX: char = '#';

/// Separator between key and value; only the first occurrence splits.
pub const KEY_VALUE_SEPARATOR: char = '=';

// =============================================================================
// Process Knobs
// =============================================================================

/// When set to `1` or `true`, the global overlay scan is skipped entirely.
///
/// Useful for hermetic tests and for binaries that ship next to stray `.env` files.
pub const OVERLAY_DISABLED_VAR: &str = "ENVKIT_OVERLAY_DISABLED";

/// Exit status used when a present variable fails type conversion (`EX_CONFIG`).
pub const EXIT_MALFORMED_VALUE: i32 = 78;

// =============================================================================
// Duration Bounds
// =============================================================================

/// Largest representable duration in nanoseconds (about 292 years).
pub const MAX_DURATION_NANOS: u128 = i64::MAX as u128;
