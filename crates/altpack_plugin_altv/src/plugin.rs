use std::{borrow::Cow, slice};

use altpack_common::{BundlerOptions, Compilation, Externals, GraphView};
use altpack_plugin::{HookNoopReturn, Plugin};
use altpack_utils::indexmap::FxIndexMap;
use anyhow::{bail, Context};
use arcstr::ArcStr;
use serde::Deserialize;
use serde_json::Value;

use crate::{
  inject_headers, register_externals, AltvPluginOptions, BindingTable, DetectionStrategy,
  IdentityScan, ReferenceDetector, SourceScan, WatchedSubset,
};

/// Keeps the alt:V runtime modules out of the bundle and imports them where they are used.
///
/// - `options` registers every watched module as an external.
/// - `process_assets` finds the compilation units referencing watched modules and prepends
///   `import <identifier> from '<source>';` to each of their output files.
#[derive(Debug)]
pub struct AltvPlugin {
  table: BindingTable,
  detection: DetectionStrategy,
  source_scan: SourceScan,
}

impl AltvPlugin {
  pub fn new(options: AltvPluginOptions) -> anyhow::Result<Self> {
    let detection = options.detection;
    let table = options.into_binding_table();
    table.validate().context("Invalid options for the alt:V plugin")?;
    let source_scan = SourceScan::new(&table)?;
    Ok(Self { table, detection, source_scan })
  }

  /// Parses the options from a JSON object.
  pub fn from_json(options: &str) -> anyhow::Result<Self> {
    let value: Value =
      serde_json::from_str(options).context("Invalid options for the alt:V plugin")?;
    if !value.is_object() {
      bail!("Invalid options for the alt:V plugin: expected an object");
    }
    let options = AltvPluginOptions::deserialize(value)
      .context("Invalid options for the alt:V plugin")?;
    Self::new(options)
  }

  fn detector(
    &self,
    view: GraphView,
    warnings: &mut Vec<anyhow::Error>,
  ) -> &dyn ReferenceDetector {
    match (self.detection, view) {
      (DetectionStrategy::Auto | DetectionStrategy::Identity, GraphView::Chunks) => &IdentityScan,
      (DetectionStrategy::Auto, GraphView::Assets) | (DetectionStrategy::SourceScan, _) => {
        &self.source_scan
      }
      (DetectionStrategy::Identity, GraphView::Assets) => {
        tracing::warn!("identity detection needs resolved module ids, falling back to source scan");
        warnings.push(anyhow::anyhow!(
          "The alt:V plugin was configured with identity detection, but the build exposes no \
           resolved module ids. Falling back to source scan."
        ));
        &self.source_scan
      }
    }
  }

  /// Watched modules referenced by each output file, merged over every unit writing to it.
  fn detect_files(
    &self,
    compilation: &Compilation,
    detector: &dyn ReferenceDetector,
  ) -> FxIndexMap<ArcStr, WatchedSubset> {
    let mut files: FxIndexMap<ArcStr, WatchedSubset> = FxIndexMap::default();
    for unit in compilation.units() {
      let subset = detector.detect(&unit, &self.table);
      tracing::debug!(
        unit = unit.name,
        detector = detector.name(),
        watched = ?subset.names(&self.table),
        "detected watched modules"
      );
      if subset.is_empty() {
        continue;
      }
      for file in unit.files {
        files.entry(file.clone()).or_default().union_with(&subset);
      }
    }
    files
  }
}

impl Plugin for AltvPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("builtin:altv")
  }

  fn options(&self, options: &mut BundlerOptions) -> HookNoopReturn {
    let externals = register_externals(options.externals.take(), &self.table);
    options.externals = Some(Externals::List(externals));
    Ok(())
  }

  fn process_assets(&self, compilation: &mut Compilation) -> HookNoopReturn {
    let format = compilation.options.format;
    if !format.keep_esm_import_export_syntax() {
      tracing::warn!(%format, "output format has no top-level imports, skipping alt:V imports");
      compilation.warnings.push(anyhow::anyhow!(
        "The alt:V plugin only supports `esm` output, but the output format is `{format}`. \
         No imports were added."
      ));
      return Ok(());
    }

    let detector = self.detector(compilation.graph_view(), &mut compilation.warnings);
    let files = self.detect_files(compilation, detector);

    let mut injected = 0;
    for (file, subset) in &files {
      let bindings = self.table.distinct_bindings(subset);
      injected += inject_headers(compilation, slice::from_ref(file), &bindings);
    }
    tracing::info!(files = files.len(), injected, "alt:V imports added");
    Ok(())
  }
}
