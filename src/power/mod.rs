//----------------------------------------
// power mod
//----------------------------------------
pub mod error;
pub mod evaluate;
pub mod noncentral_t;
pub mod std_normal;
