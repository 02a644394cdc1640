//----------------------------------------
// design errors
//----------------------------------------
use crate::design::types::Parameter;
use crate::error::CpaBinaryErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignErr {
    #[error("number of clusters per arm must be greater than 1; got {0}")]
    InvalidClusterCount(f64),
    #[error("exactly one parameter must be left unspecified; got {count}")]
    AmbiguousUnknownCount { count: usize },
    #[error("{parameter} is outside of its domain; got {value}")]
    DomainViolation { parameter: Parameter, value: f64 },
    #[error("implied power is not a finite number; got {0}")]
    NonFinitePower(f64),
    #[error("root finding tolerance must be finite and non-negative; got {0}")]
    InvalidTolerance(f64),
}

impl From<DesignErr> for CpaBinaryErr {
    fn from(err: DesignErr) -> CpaBinaryErr {
        CpaBinaryErr::Design(err)
    }
}
