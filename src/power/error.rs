//----------------------------------------
// power errors
//----------------------------------------
use crate::error::CpaBinaryErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in [0, 1]; got {0}")]
    QuantileOutOfBounds(f64),
}

impl From<NormalDistErr> for CpaBinaryErr {
    fn from(err: NormalDistErr) -> CpaBinaryErr {
        CpaBinaryErr::NormalDist(err)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionErr {
    #[error("degrees of freedom should be positive; got {0}")]
    InvalidFreedom(f64),
    #[error("noncentrality should be finite; got {0}")]
    InvalidNoncentrality(f64),
    #[error("arguments to quantile function should be in [0, 1]; got {0}")]
    QuantileOutOfBounds(f64),
    #[error("could not construct Student's t: {0}")]
    StudentsT(String),
}

impl From<DistributionErr> for CpaBinaryErr {
    fn from(err: DistributionErr) -> CpaBinaryErr {
        CpaBinaryErr::Distribution(err)
    }
}
