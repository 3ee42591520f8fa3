use std::fmt::Display;

use altpack_utils::{
  ecmascript::{is_plain_single_quoted_specifier, is_validate_identifier_name},
  indexmap::FxIndexMap,
};
use anyhow::bail;
use arcstr::ArcStr;
use itertools::Itertools;

use crate::WatchedSubset;

/// Local name the alt:V runtime is imported as.
pub const ALT_ID: &str = "alt";
/// Local name the natives runtime is imported as.
pub const NATIVES_ID: &str = "natives";

/// The aliases of the alt:V runtime. All of them bind to [`ALT_ID`].
const ALT_RUNTIMES: [&str; 3] = ["alt", "alt-client", "alt-server"];

/// What to import when a watched module is referenced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
  pub identifier: ArcStr,
  pub source: ArcStr,
}

impl Binding {
  pub fn new(identifier: impl Into<ArcStr>, source: impl Into<ArcStr>) -> Self {
    Self { identifier: identifier.into(), source: source.into() }
  }

  /// `import <identifier> from '<source>';` followed by a line break.
  pub fn import_statement(&self) -> String {
    format!("{self}\n")
  }
}

impl Display for Binding {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "import {} from '{}';", self.identifier, self.source)
  }
}

/// Watched module name -> binding, in declaration order.
///
/// Declaration order decides the order of header lines in a file needing more than one binding.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
  bindings: FxIndexMap<ArcStr, Binding>,
}

impl BindingTable {
  /// `natives`, then the alt:V runtime aliases.
  pub fn default_altv() -> Self {
    let natives = (ArcStr::from(NATIVES_ID), Binding::new(NATIVES_ID, NATIVES_ID));
    let alt = ALT_RUNTIMES.map(|name| (ArcStr::from(name), Binding::new(ALT_ID, ALT_ID)));
    Self::from_entries(std::iter::once(natives).chain(alt))
  }

  /// A module listed twice keeps its first position and its last binding.
  pub fn from_entries<N: Into<ArcStr>>(entries: impl IntoIterator<Item = (N, Binding)>) -> Self {
    let bindings = entries.into_iter().map(|(name, binding)| (name.into(), binding)).collect();
    Self { bindings }
  }

  /// Checks that every binding renders to a valid import statement.
  pub fn validate(&self) -> anyhow::Result<()> {
    for (name, binding) in &self.bindings {
      if !is_validate_identifier_name(&binding.identifier) {
        bail!(
          "Invalid binding for {name:?}: {:?} is not a valid identifier",
          binding.identifier.as_str()
        );
      }
      if !is_plain_single_quoted_specifier(&binding.source) {
        bail!(
          "Invalid binding for {name:?}: source {:?} must be non-empty and contain no quote, \
           backslash or line break",
          binding.source.as_str()
        );
      }
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }

  pub fn watched_names(&self) -> impl Iterator<Item = &ArcStr> {
    self.bindings.keys()
  }

  pub fn binding_for(&self, name: &str) -> Option<&Binding> {
    self.bindings.get(name)
  }

  /// Declaration position of `name`.
  pub fn position_of(&self, name: &str) -> Option<usize> {
    self.bindings.get_index_of(name)
  }

  pub fn get_index(&self, position: usize) -> Option<(&ArcStr, &Binding)> {
    self.bindings.get_index(position)
  }

  /// Watched module name -> identifier it resolves to at runtime.
  pub fn externals_map(&self) -> FxIndexMap<String, String> {
    self
      .bindings
      .iter()
      .map(|(name, binding)| (name.to_string(), binding.identifier.to_string()))
      .collect()
  }

  /// Bindings needed by `subset`, one per identifier, in declaration order.
  pub fn distinct_bindings(&self, subset: &WatchedSubset) -> Vec<&Binding> {
    subset
      .positions()
      .filter_map(|position| self.get_index(position).map(|(_, binding)| binding))
      .unique_by(|binding| &binding.identifier)
      .collect()
  }
}
