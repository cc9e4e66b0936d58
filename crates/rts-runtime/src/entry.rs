//! The entry trampoline
//!
//! Transfers control to exactly one routine, waits for it to return, and
//! reports success. Nothing the routine does changes the exit status.

use std::ffi::{c_char, c_int};

/// Exit status handed back to the operating environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus(c_int);

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus(0);

    pub fn code(self) -> c_int {
        self.0
    }
}

/// A routine the trampoline hands control to: no arguments, no result.
pub trait Routine {
    fn invoke(&mut self);
}

impl<F: FnMut()> Routine for F {
    fn invoke(&mut self) {
        self()
    }
}

/// One-shot trampoline around a [`Routine`].
///
/// `run` consumes the trampoline, so the routine is invoked exactly once.
pub struct Trampoline<R> {
    routine: R,
}

impl<R: Routine> Trampoline<R> {
    pub fn new(routine: R) -> Self {
        Trampoline { routine }
    }

    pub fn run(mut self) -> ExitStatus {
        tracing::debug!("trampoline started");
        self.routine.invoke();
        tracing::debug!("trampoline completed");
        ExitStatus::SUCCESS
    }
}

/// Process-entry shape of the trampoline. `argc` and `argv` are accepted
/// and never inspected, so `argv` may be null or dangling.
pub fn enter<R: Routine>(routine: R, _argc: c_int, _argv: *const *const c_char) -> ExitStatus {
    Trampoline::new(routine).run()
}
