//! Symbol names and signatures shared with the runtime
//!
//! The names here must match the `#[unsafe(no_mangle)]` exports and imports
//! of `rts-runtime`.

use cranelift_codegen::ir::{AbiParam, Signature, types};
use cranelift_module::{FuncId, Linkage, Module};

use crate::errors::AbiResult;

/// Logger primitive exported by the runtime: `print(name: *const c_char, value: u64)`.
pub const LOG_SYMBOL: &str = "print";

/// Routine the runtime's `main` trampoline calls: `gogogo()`.
pub const ENTRY_SYMBOL: &str = "gogogo";

/// Sample routine exported by the runtime: `caller()`.
pub const SAMPLE_SYMBOL: &str = "caller";

/// `(name: pointer, value: i64) -> ()` in the module's default calling convention.
pub fn log_signature<M: Module>(module: &M) -> Signature {
    let mut sig = module.make_signature();
    sig.params.push(AbiParam::new(module.target_config().pointer_type()));
    sig.params.push(AbiParam::new(types::I64));
    sig
}

/// `() -> ()` in the module's default calling convention.
pub fn routine_signature<M: Module>(module: &M) -> Signature {
    module.make_signature()
}

/// Runtime functions a generated object may call.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeImports {
    /// The logger primitive
    pub print: FuncId,
    /// The sample routine
    pub caller: FuncId,
}

impl RuntimeImports {
    /// Declare every runtime function as an import in `module`.
    pub fn declare<M: Module>(module: &mut M) -> AbiResult<Self> {
        let log_sig = log_signature(module);
        let print = module.declare_function(LOG_SYMBOL, Linkage::Import, &log_sig)?;

        let routine_sig = routine_signature(module);
        let caller = module.declare_function(SAMPLE_SYMBOL, Linkage::Import, &routine_sig)?;

        tracing::debug!(?print, ?caller, "declared runtime imports");
        Ok(RuntimeImports { print, caller })
    }
}

/// Declare the exported entry routine the trampoline calls.
pub fn declare_entry<M: Module>(module: &mut M) -> AbiResult<FuncId> {
    let sig = routine_signature(module);
    let entry = module.declare_function(ENTRY_SYMBOL, Linkage::Export, &sig)?;
    tracing::debug!(?entry, "declared entry routine");
    Ok(entry)
}
