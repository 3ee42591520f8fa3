use arcstr::ArcStr;

use crate::ModuleIdx;

/// A module left unresolved by the bundler, provided by the runtime at load time.
#[derive(Debug)]
pub struct ExternalModule {
  pub idx: ModuleIdx,
  pub name: ArcStr,
}

impl ExternalModule {
  pub fn new(idx: ModuleIdx, name: ArcStr) -> Self {
    Self { idx, name }
  }
}
