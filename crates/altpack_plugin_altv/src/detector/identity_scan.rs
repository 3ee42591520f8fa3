use altpack_common::CompilationUnit;

use super::{ReferenceDetector, WatchedSubset};
use crate::BindingTable;

/// Compares resolved module ids against the watched names by exact equality.
///
/// Needs a graph view that resolves module ids. A unit without them yields an empty subset.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityScan;

impl ReferenceDetector for IdentityScan {
  fn name(&self) -> &'static str {
    "identity"
  }

  fn detect(&self, unit: &CompilationUnit<'_>, table: &BindingTable) -> WatchedSubset {
    let Some(module_ids) = &unit.module_ids else {
      tracing::debug!(unit = unit.name, "no resolved module ids, skipping identity scan");
      return WatchedSubset::default();
    };
    WatchedSubset::from_positions(module_ids.iter().filter_map(|id| table.position_of(id)))
  }
}
