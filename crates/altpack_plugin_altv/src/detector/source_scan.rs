use std::fmt::Debug;

use altpack_common::CompilationUnit;
use altpack_utils::quote::{quoted_variants, SPECIFIER_QUOTES};
use anyhow::Context;
use daachorse::DoubleArrayAhoCorasick;

use super::{ReferenceDetector, WatchedSubset};
use crate::BindingTable;

/// Looks for watched names written as quoted string literals in the sources of a unit.
///
/// This trusts that a quoted watched name is a module specifier. Any string literal equal to a
/// watched name, e.g. `console.log("alt")`, is reported as a reference too and leads to an unused
/// import. Computed specifiers are never seen.
pub struct SourceScan {
  automaton: Option<DoubleArrayAhoCorasick<u32>>,
  patterns_len: usize,
}

impl SourceScan {
  pub fn new(table: &BindingTable) -> anyhow::Result<Self> {
    if table.is_empty() {
      return Ok(Self { automaton: None, patterns_len: 0 });
    }

    let mut patterns = Vec::with_capacity(table.len() * SPECIFIER_QUOTES.len());
    for (position, name) in table.watched_names().enumerate() {
      let value = u32::try_from(position).context("Too many watched modules")?;
      patterns.extend(quoted_variants(name).map(|pattern| (pattern, value)));
    }
    let patterns_len = patterns.len();
    let automaton = DoubleArrayAhoCorasick::with_values(patterns)
      .map_err(|err| anyhow::anyhow!("Failed to build the source scan automaton: {err}"))?;

    Ok(Self { automaton: Some(automaton), patterns_len })
  }
}

impl Debug for SourceScan {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SourceScan").field("patterns_len", &self.patterns_len).finish_non_exhaustive()
  }
}

impl ReferenceDetector for SourceScan {
  fn name(&self) -> &'static str {
    "source-scan"
  }

  fn detect(&self, unit: &CompilationUnit<'_>, table: &BindingTable) -> WatchedSubset {
    let mut subset = WatchedSubset::default();
    let Some(automaton) = &self.automaton else {
      return subset;
    };

    for source in &unit.sources {
      for found in automaton.find_overlapping_iter(source) {
        subset.insert(found.value() as usize);
      }
      if subset.len() == table.len() {
        break;
      }
    }
    subset
  }
}
