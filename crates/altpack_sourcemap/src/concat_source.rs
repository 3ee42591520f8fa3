use std::sync::OnceLock;

use oxc_sourcemap::{ConcatSourceMapBuilder, SourceMap};

use crate::source::{BoxedSource, Source};

/// Sources joined back to back, without separators.
///
/// The joined text is built eagerly. The joined source map is built on first access, shifting each
/// child's mappings down by the lines of the children before it. Children that carry a map are
/// expected to start at the beginning of a line, which holds when every preceding child ends with
/// `\n`.
#[derive(Debug, Default)]
pub struct ConcatSource {
  children: Vec<BoxedSource>,
  content: String,
  sourcemap: OnceLock<Option<SourceMap>>,
}

impl ConcatSource {
  pub fn new(children: impl IntoIterator<Item = BoxedSource>) -> Self {
    let mut ret = Self::default();
    children.into_iter().for_each(|child| ret.add(child));
    ret
  }

  pub fn add(&mut self, child: BoxedSource) {
    self.content.push_str(child.content());
    self.children.push(child);
    self.sourcemap = OnceLock::new();
  }

  fn join_sourcemaps(&self) -> Option<SourceMap> {
    let mut line_offset = 0;
    let mut sourcemaps = Vec::with_capacity(self.children.len());
    for child in &self.children {
      if let Some(sourcemap) = child.sourcemap() {
        sourcemaps.push((sourcemap, line_offset));
      }
      line_offset += child.lines_count();
    }

    if sourcemaps.is_empty() {
      return None;
    }
    Some(ConcatSourceMapBuilder::from_sourcemaps(&sourcemaps).into_sourcemap())
  }
}

impl Source for ConcatSource {
  fn content(&self) -> &str {
    &self.content
  }

  fn sourcemap(&self) -> Option<&SourceMap> {
    self.sourcemap.get_or_init(|| self.join_sourcemaps()).as_ref()
  }

  fn children(&self) -> Vec<&dyn Source> {
    self.children.iter().map(|child| child.as_ref() as &dyn Source).collect()
  }
}
