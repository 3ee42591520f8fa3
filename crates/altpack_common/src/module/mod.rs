pub mod external_module;
pub mod module_table;
pub mod normal_module;

use crate::{ExternalModule, ModuleIdx, NormalModule};

#[derive(Debug)]
pub enum Module {
  Normal(Box<NormalModule>),
  External(Box<ExternalModule>),
}

impl Module {
  pub fn idx(&self) -> ModuleIdx {
    match self {
      Self::Normal(v) => v.idx,
      Self::External(v) => v.idx,
    }
  }

  pub fn id(&self) -> &str {
    match self {
      Self::Normal(v) => &v.id,
      Self::External(v) => &v.name,
    }
  }

  /// Rendered code of the module. Externals have none.
  pub fn code(&self) -> Option<&str> {
    match self {
      Self::Normal(v) => Some(v.code.as_str()),
      Self::External(_) => None,
    }
  }

  pub fn is_external(&self) -> bool {
    matches!(self, Self::External(..))
  }
}

impl From<NormalModule> for Module {
  fn from(module: NormalModule) -> Self {
    Self::Normal(Box::new(module))
  }
}

impl From<ExternalModule> for Module {
  fn from(module: ExternalModule) -> Self {
    Self::External(Box::new(module))
  }
}
