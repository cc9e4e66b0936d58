//! Sample routine shipped with the runtime
//!
//! Logs `x = 4`, the same record a minimal generated `gogogo` emits.
//! Handy for exercising a freshly built runtime without a generator.

use std::io::Write;

use crate::entry::Routine;
use crate::error::LogResult;
use crate::logger::Logger;

#[derive(Debug, Clone, Copy, Default)]
pub struct Caller;

impl Caller {
    pub const NAME: &'static str = "x";
    pub const VALUE: u64 = 4;

    /// Run the routine against an explicit logger instead of standard output.
    pub fn log_to<W: Write>(&self, logger: &mut Logger<W>) -> LogResult<()> {
        logger.log(Self::NAME, Self::VALUE)
    }
}

impl Routine for Caller {
    fn invoke(&mut self) {
        // SAFETY: the literal is NUL-terminated and 'static.
        unsafe { crate::ffi::print(c"x".as_ptr(), Self::VALUE) }
    }
}

/// C-ABI export of [`Caller`].
#[unsafe(no_mangle)]
pub extern "C" fn caller() {
    Caller.invoke()
}
