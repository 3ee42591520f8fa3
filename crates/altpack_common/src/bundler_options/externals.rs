use altpack_utils::indexmap::FxIndexMap;
use anyhow::bail;
use regex::Regex;
use serde_json::Value;

/// One entry of the `externals` option.
#[derive(Debug, Clone)]
pub enum ExternalOption {
  /// The request is external and keeps its own name at runtime.
  Name(String),
  /// Request name -> runtime reference.
  Map(FxIndexMap<String, String>),
  /// Every request matching the pattern is external and keeps its own name.
  Pattern(Regex),
}

impl ExternalOption {
  pub fn reference_for<'a>(&'a self, request: &'a str) -> Option<&'a str> {
    match self {
      Self::Name(name) => (name == request).then_some(request),
      Self::Map(map) => map.get(request).map(String::as_str),
      Self::Pattern(pattern) => pattern.is_match(request).then_some(request),
    }
  }

  pub fn from_json(value: Value) -> anyhow::Result<Self> {
    match value {
      Value::String(name) => Ok(Self::Name(name)),
      Value::Object(object) => {
        let mut map = FxIndexMap::default();
        for (request, reference) in object {
          let Value::String(reference) = reference else {
            bail!(
              "Invalid `externals` entry for {request:?}: expected a string, got {}",
              json_kind(&reference)
            );
          };
          map.insert(request, reference);
        }
        Ok(Self::Map(map))
      }
      other => bail!(
        "Invalid `externals` entry: expected a string or an object, got {}",
        json_kind(&other)
      ),
    }
  }
}

impl PartialEq for ExternalOption {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Name(a), Self::Name(b)) => a == b,
      (Self::Map(a), Self::Map(b)) => a.iter().eq(b.iter()),
      (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
      _ => false,
    }
  }
}

impl From<FxIndexMap<String, String>> for ExternalOption {
  fn from(value: FxIndexMap<String, String>) -> Self {
    Self::Map(value)
  }
}

/// The `externals` option as users write it: one entry or a list of entries.
#[derive(Debug, Clone, PartialEq)]
pub enum Externals {
  Single(ExternalOption),
  List(Vec<ExternalOption>),
}

impl Externals {
  pub fn into_vec(self) -> Vec<ExternalOption> {
    match self {
      Self::Single(external) => vec![external],
      Self::List(externals) => externals,
    }
  }

  /// Parses the `externals` option from its JSON form. `null` means the option is absent.
  pub fn from_json(value: Value) -> anyhow::Result<Option<Self>> {
    match value {
      Value::Null => Ok(None),
      Value::Array(items) => {
        let externals =
          items.into_iter().map(ExternalOption::from_json).collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Some(Self::List(externals)))
      }
      other => ExternalOption::from_json(other).map(|external| Some(Self::Single(external))),
    }
  }
}

impl From<ExternalOption> for Externals {
  fn from(value: ExternalOption) -> Self {
    Self::Single(value)
  }
}

impl From<Vec<ExternalOption>> for Externals {
  fn from(value: Vec<ExternalOption>) -> Self {
    Self::List(value)
  }
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
