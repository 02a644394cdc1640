//----------------------------------------
// resolve mod
//----------------------------------------
pub mod error;
pub mod search;
pub mod solve;
pub mod types;
