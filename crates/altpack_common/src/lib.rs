mod bundler_options;
mod chunk;
mod compilation;
mod module;
mod types;

pub use bundler_options::{
  externals::{ExternalOption, Externals},
  normalized_bundler_options::{NormalizedBundlerOptions, SharedNormalizedBundlerOptions},
  output_format::OutputFormat,
  BundlerOptions,
};

pub use crate::{
  chunk::{chunk_table::ChunkTable, Chunk},
  compilation::Compilation,
  module::{
    external_module::ExternalModule, module_table::ModuleTable, normal_module::NormalModule,
    Module,
  },
  types::{
    asset_table::AssetTable,
    compilation_unit::{CompilationUnit, GraphView},
    module_id::ModuleId,
    raw_idx::{ChunkIdx, ModuleIdx},
  },
};

pub use altpack_sourcemap::{BoxedSource, ConcatSource, RawSource, Source, SourceMapSource};
