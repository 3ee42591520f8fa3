use arcstr::ArcStr;

use crate::{ModuleId, ModuleIdx};

#[derive(Debug)]
pub struct NormalModule {
  pub idx: ModuleIdx,
  pub id: ModuleId,
  pub code: ArcStr,
}
