use altpack_sourcemap::{BoxedSource, RawSource};
use altpack_utils::indexmap::FxIndexMap;
use arcstr::ArcStr;

/// In-memory sources of the files a build is about to emit, keyed by filename.
///
/// Iteration follows insertion order, which keeps plugin output deterministic.
#[derive(Debug, Default)]
pub struct AssetTable {
  assets: FxIndexMap<ArcStr, BoxedSource>,
}

impl AssetTable {
  pub fn insert(
    &mut self,
    filename: impl Into<ArcStr>,
    source: BoxedSource,
  ) -> Option<BoxedSource> {
    self.assets.insert(filename.into(), source)
  }

  pub fn get(&self, filename: &str) -> Option<&BoxedSource> {
    self.assets.get(filename)
  }

  pub fn contains(&self, filename: &str) -> bool {
    self.assets.contains_key(filename)
  }

  /// Replaces the source of `filename` with `f(previous)`.
  ///
  /// Returns `false` without calling `f` if there is no such asset.
  pub fn update(&mut self, filename: &str, f: impl FnOnce(BoxedSource) -> BoxedSource) -> bool {
    let Some(slot) = self.assets.get_mut(filename) else {
      return false;
    };
    let previous = std::mem::replace(slot, Box::new(RawSource::default()));
    *slot = f(previous);
    true
  }

  pub fn iter(&self) -> impl Iterator<Item = (&ArcStr, &BoxedSource)> {
    self.assets.iter()
  }

  pub fn len(&self) -> usize {
    self.assets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }
}
