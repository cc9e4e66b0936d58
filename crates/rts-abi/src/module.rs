//! Object module setup for generated code
//!
//! Generated objects are linked next to the runtime staticlib into an
//! ordinary (usually position-independent) executable.

use cranelift_codegen::settings::{self, Configurable};
use cranelift_object::{ObjectBuilder, ObjectModule};
use target_lexicon::Triple;

use crate::errors::AbiResult;

/// Create an object module for the host target.
pub fn host_object_module(name: &str) -> AbiResult<ObjectModule> {
    object_module(Triple::host(), name)
}

/// Create an object module for `target`.
pub fn object_module(target: Triple, name: &str) -> AbiResult<ObjectModule> {
    let mut flag_builder = settings::builder();
    flag_builder.set("is_pic", "true")?;

    let isa_builder = cranelift_codegen::isa::lookup(target)?;
    let isa = isa_builder.finish(settings::Flags::new(flag_builder))?;

    let object_builder = ObjectBuilder::new(isa, name, cranelift_module::default_libcall_names())?;

    Ok(ObjectModule::new(object_builder))
}
