//! C-ABI symbols exported to generated code
//!
//! Generated objects call into these. None of them panics or reports an
//! error; failures are dropped with a `warn` event.

use std::ffi::{CStr, c_char};

use crate::error::{LogError, LogResult};
use crate::logger::Logger;

/// Write `<name> = <value>\n` to standard output.
///
/// A null or empty `name` drops the record.
///
/// # Safety
///
/// `name` must be null or point to a NUL-terminated byte string that stays
/// valid for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn print(name: *const c_char, value: u64) {
    if let Err(error) = unsafe { log_c_str(name, value) } {
        tracing::warn!(%error, "dropped log record");
    }
}

unsafe fn log_c_str(name: *const c_char, value: u64) -> LogResult<()> {
    if name.is_null() {
        return Err(LogError::NullName);
    }
    let name = unsafe { CStr::from_ptr(name) };
    Logger::stdout().log(name.to_bytes(), value)
}
