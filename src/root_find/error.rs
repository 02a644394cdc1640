//----------------------------------------
// root finding errors
//----------------------------------------
use crate::error::CpaBinaryErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootFindErr {
    #[error("bracket must be finite with lower < upper; got [{lower}, {upper}]")]
    InvalidBracket { lower: f64, upper: f64 },
    #[error("f({x}) is not finite; got {residual}")]
    NonFiniteResidual { x: f64, residual: f64 },
    #[error(
        "f(lower) and f(upper) have the same sign (f({lower}) = {f_lower}, \
        f({upper}) = {f_upper})"
    )]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
    #[error("failed to converge after {iterations} iterations (last estimate: {estimate})")]
    FailedToConverge { estimate: f64, iterations: usize },
}

impl From<RootFindErr> for CpaBinaryErr {
    fn from(err: RootFindErr) -> CpaBinaryErr {
        CpaBinaryErr::RootFind(err)
    }
}
