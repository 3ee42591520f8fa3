use std::sync::Arc;

use crate::{ExternalOption, OutputFormat};

#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub externals: Vec<ExternalOption>,

  // --- Output
  pub format: OutputFormat,
}

pub type SharedNormalizedBundlerOptions = Arc<NormalizedBundlerOptions>;

impl Default for NormalizedBundlerOptions {
  fn default() -> Self {
    Self { externals: Vec::new(), format: OutputFormat::Esm }
  }
}
