use altpack_common::{BundlerOptions, Compilation};
use altpack_error::{BuildError, BuildResult};

use crate::SharedPlugin;

/// Runs the hooks of every registered plugin in registration order.
#[derive(Debug, Default)]
pub struct PluginDriver {
  plugins: Vec<SharedPlugin>,
}

impl PluginDriver {
  pub fn new(plugins: Vec<SharedPlugin>) -> Self {
    Self { plugins }
  }

  pub fn options(&self, options: &mut BundlerOptions) -> BuildResult<()> {
    for plugin in &self.plugins {
      tracing::trace!(plugin = %plugin.name(), "options");
      plugin.options(options).map_err(|err| {
        BuildError::from(err).with_context(&format!("[plugin {}] options", plugin.name()))
      })?;
    }
    Ok(())
  }

  pub fn process_assets(&self, compilation: &mut Compilation) -> BuildResult<()> {
    for plugin in &self.plugins {
      tracing::trace!(plugin = %plugin.name(), "process_assets");
      plugin.process_assets(compilation).map_err(|err| {
        BuildError::from(err).with_context(&format!("[plugin {}] process_assets", plugin.name()))
      })?;
    }
    Ok(())
  }
}
