//! Error types for declaring the link contract

use cranelift_codegen::CodegenError;
use cranelift_codegen::isa::LookupError;
use cranelift_codegen::settings::SetError;
use cranelift_module::ModuleError;
use derive_more::{Display, From};

pub type AbiResult<T> = Result<T, AbiError>;

#[derive(Display, Debug)]
#[display("{kind}")]
pub struct AbiError {
    kind: Box<AbiErrorKind>,
}

impl AbiError {
    pub fn kind(&self) -> &AbiErrorKind {
        &self.kind
    }
}

impl<E> From<E> for AbiError
where
    AbiErrorKind: From<E>,
{
    fn from(error: E) -> Self {
        AbiError {
            kind: Box::new(AbiErrorKind::from(error)),
        }
    }
}

#[derive(Display, Debug, From)]
pub enum AbiErrorKind {
    #[display("Invalid target: {_0}")]
    InvalidTarget(LookupError),

    #[display("Invalid setting: {_0}")]
    Setting(SetError),

    #[display("Code generation error: {_0}")]
    Codegen(CodegenError),

    #[display("Module error: {_0}")]
    Module(ModuleError),
}

impl std::error::Error for AbiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.kind {
            AbiErrorKind::InvalidTarget(e) => Some(e),
            AbiErrorKind::Setting(e) => Some(e),
            AbiErrorKind::Codegen(e) => Some(e),
            AbiErrorKind::Module(e) => Some(e),
        }
    }
}
