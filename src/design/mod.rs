//----------------------------------------
// design mod
//----------------------------------------
pub mod cluster_sizes;
pub mod defaults;
pub mod error;
pub mod types;
pub(crate) mod validate;
