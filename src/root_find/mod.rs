//----------------------------------------
// root finding mod
//----------------------------------------
pub mod error;
pub mod root_find;
pub mod types;
