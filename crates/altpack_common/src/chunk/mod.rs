pub mod chunk_table;

use arcstr::ArcStr;

use crate::ModuleIdx;

/// A named group of modules that share output files.
#[derive(Debug, Default)]
pub struct Chunk {
  pub name: ArcStr,
  pub modules: Vec<ModuleIdx>,
  /// Filenames this chunk contributes to, e.g. the code file and its source map.
  pub files: Vec<ArcStr>,
}

impl Chunk {
  pub fn new(name: impl Into<ArcStr>, modules: Vec<ModuleIdx>) -> Self {
    Self { name: name.into(), modules, files: Vec::new() }
  }

  #[must_use]
  pub fn with_file(mut self, filename: impl Into<ArcStr>) -> Self {
    self.files.push(filename.into());
    self
  }
}
