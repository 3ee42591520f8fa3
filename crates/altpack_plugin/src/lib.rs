mod plugin;
mod plugin_driver;

pub use crate::{
  plugin::{HookNoopReturn, Plugin, SharedPlugin},
  plugin_driver::PluginDriver,
};
