use std::{borrow::Cow, fmt::Debug, sync::Arc};

use altpack_common::{BundlerOptions, Compilation};

pub type HookNoopReturn = anyhow::Result<()>;

pub trait Plugin: Debug + Send + Sync + 'static {
  fn name(&self) -> Cow<'static, str>;

  /// Called once per build, before the options are normalized and compilation starts.
  fn options(&self, _options: &mut BundlerOptions) -> HookNoopReturn {
    Ok(())
  }

  /// Called once per build after chunks are finalized, before assets are written.
  fn process_assets(&self, _compilation: &mut Compilation) -> HookNoopReturn {
    Ok(())
  }
}

pub type SharedPlugin = Arc<dyn Plugin>;
