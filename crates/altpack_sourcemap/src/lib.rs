mod concat_source;
mod lines_count;
mod source;

pub use crate::{
  concat_source::ConcatSource,
  lines_count::lines_count,
  source::{BoxedSource, RawSource, Source, SourceMapSource},
};
pub use oxc_sourcemap::{JSONSourceMap, SourceMap};
