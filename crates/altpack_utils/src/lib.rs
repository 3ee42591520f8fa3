pub mod ecmascript;
pub mod indexmap;
pub mod quote;
