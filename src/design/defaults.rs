//----------------------------------------
// design defaults
//----------------------------------------
/// Two-sided type I error rate used when none is given
pub const ALPHA: f64 = 0.05;
/// Intraclass correlation used when none is given
pub const ICC: f64 = 0.05;
/// Equal cluster sizes unless told otherwise
pub const CV: f64 = 0.0;

/// Same default as R's `uniroot`: `.Machine$double.eps^0.25`
pub fn tolerance() -> f64 {
    f64::EPSILON.powf(0.25)
}

pub const MAX_ITER: usize = 1_000;
