pub mod externals;
pub mod normalized_bundler_options;
pub mod output_format;

use crate::{Externals, NormalizedBundlerOptions, OutputFormat};

#[derive(Default, Debug, Clone)]
pub struct BundlerOptions {
  // --- Input
  pub externals: Option<Externals>,

  // --- Output
  pub format: Option<OutputFormat>,
}

impl BundlerOptions {
  pub fn normalize(self) -> NormalizedBundlerOptions {
    NormalizedBundlerOptions {
      externals: self.externals.map(Externals::into_vec).unwrap_or_default(),
      format: self.format.unwrap_or(OutputFormat::Esm),
    }
  }
}
