use tracing::{debug, trace};

use crate::error::CpaBinaryErr;
use crate::root_find::error::RootFindErr;
use crate::root_find::types::{Bracket, Expansion, Root};

/// Number of times an open-ended bracket may grow before giving up
pub const MAX_EXPANSIONS: usize = 60;

/// Finds x in `bracket` with f(x) = 0 using Brent's method.
///
/// If f has the same sign at both ends and `expansion` is given, the
/// corresponding end of the bracket is pushed outward by a step that doubles
/// each time, until the sign changes or `MAX_EXPANSIONS` is reached.
pub fn find_root<F>(
    f: F,
    bracket: Bracket,
    expansion: Option<Expansion>,
    tol: f64,
    max_iter: usize,
) -> Result<Root, CpaBinaryErr>
where
    F: Fn(f64) -> Result<f64, CpaBinaryErr>,
{
    let Bracket { lower, upper } = bracket;
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(RootFindErr::InvalidBracket { lower, upper }.into());
    }

    let f_lower = finite_residual(&f, lower)?;
    let f_upper = finite_residual(&f, upper)?;

    let (bracket, f_lower, f_upper, expansions) = match expansion {
        Some(direction) => expand(&f, bracket, f_lower, f_upper, direction)?,
        None => (bracket, f_lower, f_upper, 0),
    };

    if f_lower == 0. {
        return Ok(Root {
            x: bracket.lower,
            f_x: 0.,
            iterations: 0,
            expansions,
        });
    }
    if f_upper == 0. {
        return Ok(Root {
            x: bracket.upper,
            f_x: 0.,
            iterations: 0,
            expansions,
        });
    }
    if f_lower.signum() == f_upper.signum() {
        return Err(RootFindErr::NoSignChange {
            lower: bracket.lower,
            upper: bracket.upper,
            f_lower,
            f_upper,
        }
        .into());
    }

    let mut root = brent(&f, bracket, f_lower, f_upper, tol, max_iter)?;
    root.expansions = expansions;
    debug!(
        x = root.x,
        f_x = root.f_x,
        iterations = root.iterations,
        expansions,
        "root found"
    );
    Ok(root)
}

fn finite_residual<F>(f: &F, x: f64) -> Result<f64, CpaBinaryErr>
where
    F: Fn(f64) -> Result<f64, CpaBinaryErr>,
{
    let residual = f(x)?;
    if !residual.is_finite() {
        return Err(RootFindErr::NonFiniteResidual { x, residual }.into());
    }
    Ok(residual)
}

fn same_sign(a: f64, b: f64) -> bool {
    a != 0. && b != 0. && a.signum() == b.signum()
}

fn expand<F>(
    f: &F,
    bracket: Bracket,
    f_lower: f64,
    f_upper: f64,
    direction: Expansion,
) -> Result<(Bracket, f64, f64, usize), CpaBinaryErr>
where
    F: Fn(f64) -> Result<f64, CpaBinaryErr>,
{
    let Bracket {
        mut lower,
        mut upper,
    } = bracket;
    let (mut f_lower, mut f_upper) = (f_lower, f_upper);
    let mut step = match direction {
        Expansion::Upward => 0.01 * upper.abs().max(1e-4),
        Expansion::Downward => 0.01 * lower.abs().max(1e-4),
    };

    let mut safety = 0;
    while same_sign(f_lower, f_upper) && safety < MAX_EXPANSIONS {
        match direction {
            Expansion::Upward => {
                upper += step;
                f_upper = finite_residual(f, upper)?;
            }
            Expansion::Downward => {
                lower -= step;
                f_lower = finite_residual(f, lower)?;
            }
        }
        step *= 2.;
        safety += 1;
        trace!(lower, upper, f_lower, f_upper, "expanded bracket");
    }

    Ok((Bracket { lower, upper }, f_lower, f_upper, safety))
}

/// Brent's zeroin. Assumes f(lower) and f(upper) have opposite signs.
fn brent<F>(
    f: &F,
    bracket: Bracket,
    f_lower: f64,
    f_upper: f64,
    tol: f64,
    max_iter: usize,
) -> Result<Root, CpaBinaryErr>
where
    F: Fn(f64) -> Result<f64, CpaBinaryErr>,
{
    // b is the best estimate, c the opposite end of the bracket, a the
    // previous value of b
    let (mut a, mut fa) = (bracket.lower, f_lower);
    let (mut b, mut fb) = (bracket.upper, f_upper);
    let (mut c, mut fc) = (a, fa);

    for iteration in 1..=max_iter {
        let prev_step = b - a;

        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol_act = 2. * f64::EPSILON * b.abs() + tol / 2.;
        let mut new_step = (c - b) / 2.;

        if new_step.abs() <= tol_act || fb == 0. {
            return Ok(Root {
                x: b,
                f_x: fb,
                iterations: iteration,
                expansions: 0,
            });
        }

        // Try interpolation if the previous step was large enough and in
        // the right direction
        if prev_step.abs() >= tol_act && fa.abs() > fb.abs() {
            let cb = c - b;
            let (mut p, mut q) = if a == c {
                // secant
                let t1 = fb / fa;
                (cb * t1, 1. - t1)
            } else {
                // inverse quadratic
                let qa = fa / fc;
                let t1 = fb / fc;
                let t2 = fb / fa;
                (
                    t2 * (cb * qa * (qa - t1) - (b - a) * (t1 - 1.)),
                    (qa - 1.) * (t1 - 1.) * (t2 - 1.),
                )
            };
            if p > 0. {
                q = -q;
            } else {
                p = -p;
            }
            if p < 0.75 * cb * q - (tol_act * q).abs() / 2. && p < (prev_step * q / 2.).abs() {
                new_step = p / q;
            }
        }

        if new_step.abs() < tol_act {
            new_step = if new_step > 0. { tol_act } else { -tol_act };
        }

        a = b;
        fa = fb;
        b += new_step;
        fb = finite_residual(f, b)?;
        if (fb > 0. && fc > 0.) || (fb < 0. && fc < 0.) {
            c = a;
            fc = fa;
        }
    }

    Err(RootFindErr::FailedToConverge {
        estimate: b,
        iterations: max_iter,
    }
    .into())
}
