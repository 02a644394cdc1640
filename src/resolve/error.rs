//----------------------------------------
// resolve errors
//----------------------------------------
use crate::design::types::{EffectDirection, Parameter};
use crate::error::CpaBinaryErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveErr {
    #[error(
        "no value of {parameter} in [{lower}, {upper}]{} reaches the target \
        (residuals {f_lower}, {f_upper})",
        .direction.map(|d| format!(" with {d}")).unwrap_or_default()
    )]
    RootBracketingFailure {
        parameter: Parameter,
        direction: Option<EffectDirection>,
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
}

impl From<ResolveErr> for CpaBinaryErr {
    fn from(err: ResolveErr) -> CpaBinaryErr {
        CpaBinaryErr::Resolve(err)
    }
}
