//! Typed environment variable accessors with a `*.env` file overlay.
//!
//! Values resolve from the process environment first, then from `*.env` files
//! found next to the running executable, then from the caller's default. A
//! variable that is set but malformed is reported as an [`EnvError`]; pair
//! accessors with [`OrExit::or_exit`] at the entry point to fail fast.
//!
//! ```no_run
//! use std::time::Duration;
//! use envkit_config::{OrExit, get_env_duration, get_env_string};
//!
//! let addr = get_env_string("LISTEN_ADDR", "0.0.0.0:8080");
//! let timeout = get_env_duration("REQUEST_TIMEOUT", Duration::from_secs(30)).or_exit();
//! # let _ = (addr, timeout);
//! ```

mod accessor;
pub mod constants;
mod duration;
mod error;
mod exit;
pub mod overlay;
mod process;

pub use accessor::{
    Environment, Resolved, ValueSource, get_env_array_duration, get_env_array_int,
    get_env_array_string, get_env_bool, get_env_duration, get_env_float64, get_env_int,
    get_env_map_string_string, get_env_string, parse_bool, split_all, split_pair,
};
pub use duration::{DurationError, parse_duration};
pub use error::{EnvError, ValueKind};
pub use exit::{OrExit, exit_malformed};
pub use overlay::{EnvOverlay, OverlayEntry};
