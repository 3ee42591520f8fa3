use std::iter;

use altpack_common::{BoxedSource, Compilation, ConcatSource, RawSource};
use altpack_utils::ecmascript::is_javascript_module_file;
use arcstr::ArcStr;

use crate::Binding;

/// Prepends one import line per binding to each file in `files`.
///
/// Bindings whose identifier was already imported into a file during this build are skipped, as
/// are files missing from the asset table and files that are not JavaScript modules, such as the
/// source map of a chunk. The remaining lines keep the order of `bindings` and
/// are added in front of the previous source in one step. Returns the number of lines added.
pub fn inject_headers(
  compilation: &mut Compilation,
  files: &[ArcStr],
  bindings: &[&Binding],
) -> usize {
  let mut injected = 0;

  for file in files {
    if !is_javascript_module_file(file) {
      tracing::debug!(file = file.as_str(), "not a javascript module, skipping import headers");
      continue;
    }
    if !compilation.assets.contains(file) {
      tracing::warn!(file = file.as_str(), "no asset for file, skipping import headers");
      continue;
    }

    let imported = compilation.import_headers.entry(file.clone()).or_default();
    let pending: Vec<&Binding> =
      bindings.iter().copied().filter(|binding| !imported.contains(&binding.identifier)).collect();
    if pending.is_empty() {
      continue;
    }
    imported.extend(pending.iter().map(|binding| binding.identifier.clone()));

    let headers: Vec<BoxedSource> = pending
      .iter()
      .map(|binding| {
        tracing::trace!(file = file.as_str(), "{binding}");
        Box::new(RawSource::new(binding.import_statement())) as BoxedSource
      })
      .collect();
    injected += headers.len();

    compilation.assets.update(file, |previous| {
      Box::new(ConcatSource::new(headers.into_iter().chain(iter::once(previous))))
    });
  }

  injected
}
