pub mod identity_scan;
pub mod source_scan;

use std::{collections::BTreeSet, fmt::Debug};

use altpack_common::CompilationUnit;

use crate::BindingTable;

/// Finds which watched modules a compilation unit references.
///
/// Detection is read-only. Every implementation reports the full matching subset so that callers
/// can tell which distinct bindings a unit needs.
pub trait ReferenceDetector: Debug {
  fn name(&self) -> &'static str;

  fn detect(&self, unit: &CompilationUnit<'_>, table: &BindingTable) -> WatchedSubset;
}

/// Watched modules found in a unit, stored as positions in the [`BindingTable`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WatchedSubset {
  positions: BTreeSet<usize>,
}

impl WatchedSubset {
  pub fn from_positions(positions: impl IntoIterator<Item = usize>) -> Self {
    Self { positions: positions.into_iter().collect() }
  }

  pub fn insert(&mut self, position: usize) -> bool {
    self.positions.insert(position)
  }

  pub fn union_with(&mut self, other: &Self) {
    self.positions.extend(other.positions.iter().copied());
  }

  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  pub fn len(&self) -> usize {
    self.positions.len()
  }

  /// Positions in declaration order.
  pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
    self.positions.iter().copied()
  }

  /// Module names in declaration order.
  pub fn names<'t>(&self, table: &'t BindingTable) -> Vec<&'t str> {
    self
      .positions()
      .filter_map(|position| table.get_index(position))
      .map(|(name, _)| name.as_str())
      .collect()
  }
}
