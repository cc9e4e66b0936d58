//! Common test utilities: emitting generated objects and linking them
//! against the runtime.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use cranelift_codegen::ir::{Function, InstBuilder, UserFuncName, types};
use cranelift_frontend::{FunctionBuilder, FunctionBuilderContext};
use cranelift_module::{DataDescription, Linkage, Module};
use rts_abi::{RuntimeImports, declare_entry, host_object_module, routine_signature};
use tempfile::TempDir;

/// Emit an object whose `gogogo` calls `print(name, value)` for each record.
pub fn emit_routine(records: &[(&str, i64)]) -> Vec<u8> {
    let mut module = host_object_module("generated").expect("Failed to create module");
    let imports = RuntimeImports::declare(&mut module).expect("Failed to declare imports");
    let entry = declare_entry(&mut module).expect("Failed to declare entry");

    let mut names = Vec::new();
    for (i, (name, _)) in records.iter().enumerate() {
        let data = module
            .declare_data(&format!("log-name-{i}"), Linkage::Local, false, false)
            .expect("Failed to declare name data");
        let mut desc = DataDescription::new();
        desc.define(format!("{name}\0").into_bytes().into_boxed_slice());
        module.define_data(data, &desc).expect("Failed to define name data");
        names.push(data);
    }

    let mut ctx = module.make_context();
    ctx.func = Function::with_name_signature(
        UserFuncName::user(0, entry.as_u32()),
        routine_signature(&module),
    );
    let pointer = module.target_config().pointer_type();
    let print = module.declare_func_in_func(imports.print, &mut ctx.func);
    let name_globals: Vec<_> = names
        .iter()
        .map(|data| module.declare_data_in_func(*data, &mut ctx.func))
        .collect();

    let mut fctx = FunctionBuilderContext::new();
    let mut builder = FunctionBuilder::new(&mut ctx.func, &mut fctx);
    let block = builder.create_block();
    builder.switch_to_block(block);
    builder.seal_block(block);

    for (global, (_, value)) in name_globals.iter().zip(records) {
        let name_ptr = builder.ins().symbol_value(pointer, *global);
        let value = builder.ins().iconst(types::I64, *value);
        builder.ins().call(print, &[name_ptr, value]);
    }
    builder.ins().return_(&[]);
    builder.finalize();

    module
        .define_function(entry, &mut ctx)
        .expect("Failed to define entry");
    module.finish().emit().expect("Failed to emit object")
}

/// Build `librts_entry.a` once per test binary and return its path.
///
/// Uses a private target directory so the nested cargo never waits on the
/// lock held by the outer build.
#[allow(dead_code)]
pub fn entry_staticlib() -> &'static Path {
    static STATICLIB: OnceLock<PathBuf> = OnceLock::new();
    STATICLIB.get_or_init(|| {
        let target_dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("rts-entry");
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../Cargo.toml");
        let status = Command::new(env!("CARGO"))
            .args(["build", "--quiet", "-p", "rts-entry", "--manifest-path"])
            .arg(&manifest)
            .arg("--target-dir")
            .arg(&target_dir)
            .status()
            .expect("Failed to run cargo");
        assert!(status.success(), "Building rts-entry failed: {status:?}");

        let staticlib = target_dir.join("debug").join("librts_entry.a");
        assert!(staticlib.exists(), "Missing {}", staticlib.display());
        staticlib
    })
}

/// Link an object against the runtime with the system C compiler, run the
/// executable with `args`, and return its output.
#[allow(dead_code)]
pub fn link_and_run(object_bytes: &[u8], args: &[&str]) -> Output {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let object_path = dir.path().join("output.o");
    std::fs::write(&object_path, object_bytes).expect("Failed to write object");

    let exe_path = dir.path().join("program");
    let mut link = Command::new("cc");
    link.arg(&object_path).arg(entry_staticlib());
    // Native libraries the Rust standard library needs in a staticlib
    link.args(["-lgcc_s", "-lutil", "-lrt", "-lpthread", "-lm", "-ldl", "-lc"]);
    let link_output = link
        .arg("-o")
        .arg(&exe_path)
        .output()
        .expect("Failed to run cc");
    assert!(
        link_output.status.success(),
        "Linking failed: {}",
        String::from_utf8_lossy(&link_output.stderr)
    );

    Command::new(&exe_path)
        .args(args)
        .output()
        .expect("Failed to run linked program")
}
