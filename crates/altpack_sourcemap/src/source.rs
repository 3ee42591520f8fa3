use std::fmt::Debug;

use oxc_sourcemap::SourceMap;

use crate::lines_count::lines_count;

/// The textual source of one output file, or of one piece of it.
pub trait Source: Debug {
  fn content(&self) -> &str;

  fn sourcemap(&self) -> Option<&SourceMap> {
    None
  }

  fn lines_count(&self) -> u32 {
    lines_count(self.content())
  }

  /// The sources this one was assembled from. Leaf sources have none.
  fn children(&self) -> Vec<&dyn Source> {
    Vec::new()
  }
}

pub type BoxedSource = Box<dyn Source + Send + Sync>;

impl Source for &str {
  fn content(&self) -> &str {
    self
  }
}

impl Source for String {
  fn content(&self) -> &str {
    self
  }
}

impl Source for BoxedSource {
  fn content(&self) -> &str {
    self.as_ref().content()
  }

  fn sourcemap(&self) -> Option<&SourceMap> {
    self.as_ref().sourcemap()
  }

  fn lines_count(&self) -> u32 {
    self.as_ref().lines_count()
  }

  fn children(&self) -> Vec<&dyn Source> {
    self.as_ref().children()
  }
}

/// Plain text without a source map.
#[derive(Debug, Default, Clone)]
pub struct RawSource {
  content: String,
}

impl RawSource {
  pub fn new(content: impl Into<String>) -> Self {
    Self { content: content.into() }
  }
}

impl Source for RawSource {
  fn content(&self) -> &str {
    &self.content
  }
}

#[derive(Debug)]
pub struct SourceMapSource {
  content: String,
  sourcemap: SourceMap,
}

impl SourceMapSource {
  pub fn new(content: String, sourcemap: SourceMap) -> Self {
    Self { content, sourcemap }
  }
}

impl Source for SourceMapSource {
  fn content(&self) -> &str {
    &self.content
  }

  fn sourcemap(&self) -> Option<&SourceMap> {
    Some(&self.sourcemap)
  }
}
