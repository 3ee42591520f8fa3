pub mod asset_table;
pub mod compilation_unit;
pub mod module_id;
pub mod raw_idx;
