use std::ops::Deref;

use arcstr::ArcStr;
use oxc_index::IndexVec;

use crate::{ExternalModule, Module, ModuleId, ModuleIdx, NormalModule};

pub type IndexModules = IndexVec<ModuleIdx, Module>;

#[derive(Debug, Default)]
pub struct ModuleTable {
  pub modules: IndexModules,
}

impl Deref for ModuleTable {
  type Target = IndexModules;

  fn deref(&self) -> &Self::Target {
    &self.modules
  }
}

impl ModuleTable {
  pub fn add_normal(&mut self, id: impl Into<ModuleId>, code: impl Into<ArcStr>) -> ModuleIdx {
    let idx = self.modules.next_idx();
    self.modules.push(NormalModule { idx, id: id.into(), code: code.into() }.into())
  }

  pub fn add_external(&mut self, name: impl Into<ArcStr>) -> ModuleIdx {
    let idx = self.modules.next_idx();
    self.modules.push(ExternalModule::new(idx, name.into()).into())
  }
}

#[test]
fn test() {
  let mut table = ModuleTable::default();
  let foo = table.add_normal("./foo.js", "foo();");
  let alt = table.add_external("alt-client");

  assert_eq!(table[foo].id(), "./foo.js");
  assert_eq!(table[foo].code(), Some("foo();"));
  assert_eq!(table[alt].idx(), alt);
  assert!(table[alt].is_external());
  assert_eq!(table[alt].code(), None);
}
