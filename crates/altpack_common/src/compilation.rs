use std::slice;

use altpack_sourcemap::Source;
use altpack_utils::indexmap::FxIndexSet;
use arcstr::ArcStr;
use rustc_hash::FxHashMap;

use crate::{
  AssetTable, ChunkTable, CompilationUnit, GraphView, Module, ModuleTable,
  SharedNormalizedBundlerOptions,
};

/// State of one build, as handed to `process_assets` plugins.
#[derive(Debug, Default)]
pub struct Compilation {
  pub options: SharedNormalizedBundlerOptions,
  pub modules: ModuleTable,
  pub chunks: ChunkTable,
  pub assets: AssetTable,
  pub warnings: Vec<anyhow::Error>,
  /// Import identifiers already prepended to each asset during this build.
  pub import_headers: FxHashMap<ArcStr, FxIndexSet<ArcStr>>,
}

impl Compilation {
  pub fn new(options: SharedNormalizedBundlerOptions) -> Self {
    Self { options, ..Self::default() }
  }

  pub fn graph_view(&self) -> GraphView {
    if self.chunks.is_empty() {
      GraphView::Assets
    } else {
      GraphView::Chunks
    }
  }

  pub fn units(&self) -> Vec<CompilationUnit<'_>> {
    match self.graph_view() {
      GraphView::Chunks => self.chunk_units(),
      GraphView::Assets => self.asset_units(),
    }
  }

  /// One unit per chunk, with the resolved ids and the code of its modules.
  pub fn chunk_units(&self) -> Vec<CompilationUnit<'_>> {
    self
      .chunks
      .iter()
      .map(|chunk| {
        let modules = chunk.modules.iter().map(|&idx| &self.modules[idx]);
        CompilationUnit {
          name: &chunk.name,
          files: &chunk.files,
          module_ids: Some(modules.clone().map(Module::id).collect()),
          sources: modules.filter_map(Module::code).collect(),
        }
      })
      .collect()
  }

  /// One unit per asset, described only by the sources it was assembled from.
  pub fn asset_units(&self) -> Vec<CompilationUnit<'_>> {
    self
      .assets
      .iter()
      .map(|(filename, source)| {
        let children = source.children();
        let sources = if children.is_empty() {
          vec![source.content()]
        } else {
          children.into_iter().map(Source::content).collect()
        };
        CompilationUnit {
          name: filename,
          files: slice::from_ref(filename),
          module_ids: None,
          sources,
        }
      })
      .collect()
  }
}
