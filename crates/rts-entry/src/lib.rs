//! Process entry for executables built from generated objects.
//!
//! `librts_entry.a` bundles the whole runtime plus a C `main` that runs the
//! generated `gogogo` routine and exits with 0:
//!
//! ```text
//! cc output.o librts_entry.a -o program
//! ```
//!
//! `print` and `caller` resolve from the same archive.

use std::ffi::{c_char, c_int};

use rts_runtime::{Routine, enter};

unsafe extern "C" {
    /// Supplied by the generated object at link time.
    fn gogogo();
}

/// The generated `gogogo` routine, resolved by the linker.
#[derive(Debug, Clone, Copy, Default)]
struct ExternalRoutine;

impl Routine for ExternalRoutine {
    fn invoke(&mut self) {
        tracing::debug!("entering gogogo");
        // SAFETY: the link contract requires `gogogo` to be a C-ABI routine
        // taking no arguments and returning nothing.
        unsafe { gogogo() }
    }
}

/// Process entry: run the generated `gogogo` routine and exit with 0.
///
/// # Safety
///
/// Must only be called once, as the process entry point.
#[cfg(not(test))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn main(argc: c_int, argv: *const *const c_char) -> c_int {
    enter(ExternalRoutine, argc, argv).code()
}
