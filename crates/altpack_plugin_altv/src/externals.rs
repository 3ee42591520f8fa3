use altpack_common::{ExternalOption, Externals};

use crate::BindingTable;

/// Returns `existing` as a list with the watched modules appended as one map entry.
///
/// User entries are kept unchanged and in order. The watched map is not appended again if an equal
/// entry is already present.
pub fn register_externals(
  existing: Option<Externals>,
  table: &BindingTable,
) -> Vec<ExternalOption> {
  let mut externals = existing.map(Externals::into_vec).unwrap_or_default();
  if table.is_empty() {
    return externals;
  }

  let watched = ExternalOption::Map(table.externals_map());
  if externals.contains(&watched) {
    tracing::debug!("watched modules are already registered as externals");
  } else {
    externals.push(watched);
  }
  externals
}
