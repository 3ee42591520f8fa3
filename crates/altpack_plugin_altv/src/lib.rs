mod binding_table;
mod detector;
mod externals;
mod injector;
mod options;
mod plugin;

pub use crate::{
  binding_table::{Binding, BindingTable, ALT_ID, NATIVES_ID},
  detector::{
    identity_scan::IdentityScan, source_scan::SourceScan, ReferenceDetector, WatchedSubset,
  },
  externals::register_externals,
  injector::inject_headers,
  options::{AltvPluginOptions, BindingEntry, DetectionStrategy},
  plugin::AltvPlugin,
};
