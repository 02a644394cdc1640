use tracing::{debug, warn};

use crate::design::error::DesignErr;
use crate::design::types::{Design, DesignParameters, Parameter, SolveOptions};
use crate::design::validate::{validate, validate_options};
use crate::error::CpaBinaryErr;
use crate::power::evaluate::evaluate_power;
use crate::resolve::error::ResolveErr;
use crate::resolve::search::SearchPlan;
use crate::resolve::types::Solution;
use crate::root_find::error::RootFindErr;
use crate::root_find::root_find::find_root;

/// Solves for the single unspecified parameter of `params`.
///
/// Power is evaluated directly. Every other unknown is found by driving
/// `power(design) - target power` to zero over the search plan for that
/// parameter.
pub fn solve(params: &DesignParameters, options: &SolveOptions) -> Result<Solution, CpaBinaryErr> {
    let unknown = validate(params)?;
    validate_options(options)?;
    // The unknown slot is overwritten before every evaluation
    let design = Design::from_parameters(params, f64::NAN);

    let Some(plan) = SearchPlan::for_parameter(unknown, &design, options.direction) else {
        let power = evaluate_power(&design, options.variance, options.reference)?;
        if !power.is_finite() {
            return Err(DesignErr::NonFinitePower(power).into());
        }
        debug!(power, "evaluated power");
        return Ok(Solution {
            parameter: Parameter::Power,
            value: power,
        });
    };

    let target = design.power;
    let direction = plan.directional.then_some(options.direction);
    debug!(
        parameter = %unknown,
        lower = plan.bracket.lower,
        upper = plan.bracket.upper,
        expansion = ?plan.expansion,
        target,
        "searching for unknown"
    );

    let residual = |x: f64| -> Result<f64, CpaBinaryErr> {
        let power = evaluate_power(&design.with(unknown, x), options.variance, options.reference)?;
        Ok(power - target)
    };

    let root = find_root(
        residual,
        plan.bracket,
        plan.expansion,
        options.tol,
        options.max_iter,
    )
    .map_err(|err| match err {
        CpaBinaryErr::RootFind(RootFindErr::NoSignChange {
            lower,
            upper,
            f_lower,
            f_upper,
        }) => {
            warn!(parameter = %unknown, lower, upper, "no solution in search interval");
            ResolveErr::RootBracketingFailure {
                parameter: unknown,
                direction,
                lower,
                upper,
                f_lower,
                f_upper,
            }
            .into()
        }
        // Directional brackets invert when the fixed proportion sits at the
        // edge of (0, 1)
        CpaBinaryErr::RootFind(RootFindErr::InvalidBracket { lower, upper }) => {
            warn!(parameter = %unknown, lower, upper, "empty search interval");
            ResolveErr::RootBracketingFailure {
                parameter: unknown,
                direction,
                lower,
                upper,
                f_lower: f64::NAN,
                f_upper: f64::NAN,
            }
            .into()
        }
        other => other,
    })?;

    Ok(Solution {
        parameter: unknown,
        value: root.x,
    })
}
