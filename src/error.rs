//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::design::error::DesignErr;
pub use crate::power::error::{DistributionErr, NormalDistErr};
pub use crate::resolve::error::ResolveErr;
pub use crate::root_find::error::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CpaBinaryErr {
    #[error("invalid design: {0}")]
    Design(DesignErr),
    #[error("while resolving unknown parameter: {0}")]
    Resolve(ResolveErr),
    #[error("while finding root: {0}")]
    RootFind(RootFindErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while evaluating t distribution: {0}")]
    Distribution(DistributionErr),
}
