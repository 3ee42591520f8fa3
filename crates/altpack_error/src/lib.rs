use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

/// Errors collected while running plugin hooks for one build.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Attaches `context` to every collected error, e.g. the name of the hook that failed.
  #[must_use]
  pub fn with_context(self, context: &str) -> Self {
    Self(self.0.into_iter().map(|err| err.context(context.to_string())).collect())
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, err) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{err:#}")?;
    }
    Ok(())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn display_joins_errors_with_context() {
  let err = BuildError::from(vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")])
    .with_context("options");
  assert_eq!(err.len(), 2);
  assert_eq!(err.to_string(), "options: first\noptions: second");
}
