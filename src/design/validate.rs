use crate::design::error::DesignErr;
use crate::design::types::{DesignParameters, Parameter, SolveOptions};
use crate::error::CpaBinaryErr;

/// Checks the design before any computation and returns the unknown
pub fn validate(params: &DesignParameters) -> Result<Parameter, CpaBinaryErr> {
    let unknowns = params.unknowns();
    if unknowns.len() != 1 {
        return Err(DesignErr::AmbiguousUnknownCount {
            count: unknowns.len(),
        }
        .into());
    }

    if let Some(nclusters) = params.nclusters {
        // df of the t reference is 2 * (nclusters - 1)
        if nclusters <= 1. {
            return Err(DesignErr::InvalidClusterCount(nclusters).into());
        }
    }

    for parameter in Parameter::ALL {
        if let Some(value) = params.get(parameter) {
            if !in_domain(parameter, value) {
                return Err(DesignErr::DomainViolation { parameter, value }.into());
            }
        }
    }

    Ok(unknowns[0])
}

/// Checks the settings handed to the root finder
pub fn validate_options(options: &SolveOptions) -> Result<(), CpaBinaryErr> {
    if !options.tol.is_finite() || options.tol < 0. {
        return Err(DesignErr::InvalidTolerance(options.tol).into());
    }
    Ok(())
}

fn in_domain(parameter: Parameter, value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    match parameter {
        Parameter::Alpha | Parameter::Power | Parameter::P1 | Parameter::P2 => {
            value > 0. && value < 1.
        }
        Parameter::NClusters => value > 1.,
        Parameter::NSubjects => value > 0.,
        Parameter::Cv => value >= 0.,
        Parameter::Icc => (0.0..1.0).contains(&value),
    }
}
