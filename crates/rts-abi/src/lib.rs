//! Link contract between generated objects and `rts-runtime`
//!
//! A generated object must export [`ENTRY_SYMBOL`] as a C-ABI routine with
//! no arguments and no result. It may import [`LOG_SYMBOL`], which takes a
//! pointer to a NUL-terminated name and a 64-bit unsigned value.
//!
//! This crate only declares those symbols in a Cranelift module; producing
//! the routine body is up to the generator.

pub mod errors;
pub mod module;
pub mod symbols;


pub use errors::{AbiError, AbiErrorKind, AbiResult};
pub use module::{host_object_module, object_module};
pub use symbols::{
    ENTRY_SYMBOL, LOG_SYMBOL, RuntimeImports, SAMPLE_SYMBOL, declare_entry, log_signature,
    routine_signature,
};
