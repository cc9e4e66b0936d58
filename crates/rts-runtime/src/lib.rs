//! Runtime support library for generated code.
//!
//! Provides the native symbols a generated object links against:
//! - `print(name, value)`: writes `name = value` to standard output
//! - `caller()`: sample routine that logs `x = 4`
//!
//! The process entry itself (`main` calling the generated `gogogo`) lives in
//! `rts-entry`, which bundles this crate into a staticlib.
//!
//! The same behavior is available to Rust hosts through [`Logger`] and
//! [`Trampoline`], which take their output sink and routine explicitly.

pub mod entry;
pub mod error;
pub mod ffi;
pub mod logger;
pub mod sample;


pub use entry::{ExitStatus, Routine, Trampoline, enter};
pub use error::{LogError, LogResult};
pub use logger::{LogRecord, Logger};
pub use sample::Caller;
