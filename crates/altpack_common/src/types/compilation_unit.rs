use arcstr::ArcStr;

/// Which part of the build graph the host bundler exposes to `process_assets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphView {
  /// Chunks with the resolved ids of the modules they were built from.
  Chunks,
  /// Only the emitted assets, each carrying the sources of the modules rendered into it.
  Assets,
}

/// A chunk or an asset: a group of modules that produces one or more output files.
#[derive(Debug, Clone)]
pub struct CompilationUnit<'a> {
  pub name: &'a str,
  pub files: &'a [ArcStr],
  /// Resolved ids of the modules in the unit. `None` when the graph view doesn't resolve them.
  pub module_ids: Option<Vec<&'a str>>,
  /// Code of the modules in the unit. External modules contribute none.
  pub sources: Vec<&'a str>,
}
