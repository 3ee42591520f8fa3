use serde::Deserialize;

use crate::{Binding, BindingTable};

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AltvPluginOptions {
  /// Replaces the default alt:V binding table when set.
  #[serde(default)]
  pub bindings: Option<Vec<BindingEntry>>,
  #[serde(default)]
  pub detection: DetectionStrategy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BindingEntry {
  pub module: String,
  pub identifier: String,
  /// Defaults to `identifier`.
  #[serde(default)]
  pub source: Option<String>,
}

/// How to find references to watched modules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionStrategy {
  /// Identity scan when the host resolves module ids, source scan otherwise.
  #[default]
  Auto,
  Identity,
  SourceScan,
}

impl AltvPluginOptions {
  pub fn into_binding_table(self) -> BindingTable {
    match self.bindings {
      Some(entries) => BindingTable::from_entries(entries.into_iter().map(|entry| {
        let source = entry.source.unwrap_or_else(|| entry.identifier.clone());
        (entry.module, Binding::new(entry.identifier, source))
      })),
      None => BindingTable::default_altv(),
    }
  }
}
