//----------------------------------------
// design mod types
//----------------------------------------
use std::fmt;

use crate::design::defaults;

/// The eight quantities linked by the power equation
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Parameter {
    Alpha,
    Power,
    NClusters,
    NSubjects,
    Cv,
    P1,
    P2,
    Icc,
}

impl Parameter {
    pub const ALL: [Parameter; 8] = [
        Parameter::Alpha,
        Parameter::Power,
        Parameter::NClusters,
        Parameter::NSubjects,
        Parameter::Cv,
        Parameter::P1,
        Parameter::P2,
        Parameter::Icc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Alpha => "alpha",
            Parameter::Power => "power",
            Parameter::NClusters => "nclusters",
            Parameter::NSubjects => "nsubjects",
            Parameter::Cv => "CV",
            Parameter::P1 => "p1",
            Parameter::P2 => "p2",
            Parameter::Icc => "ICC",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variance of the difference in proportions
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum VarianceEstimator {
    #[default]
    Unpooled,
    Pooled,
}

/// Reference distribution for the test statistic
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReferenceDistribution {
    #[default]
    StudentT,
    Normal,
}

/// Which arm is expected to have the larger proportion; only used when
/// `p1` or `p2` is the unknown
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum EffectDirection {
    #[default]
    P1Greater,
    P2Greater,
}

impl fmt::Display for EffectDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectDirection::P1Greater => f.write_str("p1 > p2"),
            EffectDirection::P2Greater => f.write_str("p2 > p1"),
        }
    }
}

/// Design of the trial, with `None` marking the quantity to solve for
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DesignParameters {
    pub alpha: Option<f64>,
    pub power: Option<f64>,
    pub nclusters: Option<f64>,
    pub nsubjects: Option<f64>,
    pub cv: Option<f64>,
    pub p1: Option<f64>,
    pub p2: Option<f64>,
    pub icc: Option<f64>,
}

impl Default for DesignParameters {
    fn default() -> Self {
        DesignParameters {
            alpha: Some(defaults::ALPHA),
            power: None,
            nclusters: None,
            nsubjects: None,
            cv: Some(defaults::CV),
            p1: None,
            p2: None,
            icc: Some(defaults::ICC),
        }
    }
}

impl DesignParameters {
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Alpha => self.alpha,
            Parameter::Power => self.power,
            Parameter::NClusters => self.nclusters,
            Parameter::NSubjects => self.nsubjects,
            Parameter::Cv => self.cv,
            Parameter::P1 => self.p1,
            Parameter::P2 => self.p2,
            Parameter::Icc => self.icc,
        }
    }

    pub fn unknowns(&self) -> Vec<Parameter> {
        Parameter::ALL
            .into_iter()
            .filter(|p| self.get(*p).is_none())
            .collect()
    }
}

/// Fully specified design, as consumed by the power evaluator
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Design {
    pub alpha: f64,
    pub power: f64,
    pub nclusters: f64,
    pub nsubjects: f64,
    pub cv: f64,
    pub p1: f64,
    pub p2: f64,
    pub icc: f64,
}

impl Design {
    /// Copy of this design with `parameter` set to `value`
    pub fn with(&self, parameter: Parameter, value: f64) -> Design {
        let mut design = *self;
        match parameter {
            Parameter::Alpha => design.alpha = value,
            Parameter::Power => design.power = value,
            Parameter::NClusters => design.nclusters = value,
            Parameter::NSubjects => design.nsubjects = value,
            Parameter::Cv => design.cv = value,
            Parameter::P1 => design.p1 = value,
            Parameter::P2 => design.p2 = value,
            Parameter::Icc => design.icc = value,
        }
        design
    }

    /// Fills the single unknown of `params` with `value`. Specified fields
    /// are copied as-is.
    pub fn from_parameters(params: &DesignParameters, value: f64) -> Design {
        Design {
            alpha: params.alpha.unwrap_or(value),
            power: params.power.unwrap_or(value),
            nclusters: params.nclusters.unwrap_or(value),
            nsubjects: params.nsubjects.unwrap_or(value),
            cv: params.cv.unwrap_or(value),
            p1: params.p1.unwrap_or(value),
            p2: params.p2.unwrap_or(value),
            icc: params.icc.unwrap_or(value),
        }
    }
}

/// Settings that shape the calculation but are never solved for
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SolveOptions {
    pub variance: VarianceEstimator,
    pub direction: EffectDirection,
    pub reference: ReferenceDistribution,
    pub tol: f64,
    pub max_iter: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            variance: VarianceEstimator::default(),
            direction: EffectDirection::default(),
            reference: ReferenceDistribution::default(),
            tol: defaults::tolerance(),
            max_iter: defaults::MAX_ITER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_leave_five_unknowns() {
        let params = DesignParameters::default();
        assert_eq!(
            params.unknowns(),
            vec![
                Parameter::Power,
                Parameter::NClusters,
                Parameter::NSubjects,
                Parameter::P1,
                Parameter::P2
            ]
        );
        assert_eq!(params.alpha, Some(0.05));
        assert_eq!(params.icc, Some(0.05));
        assert_eq!(params.cv, Some(0.0));
    }

    #[test]
    fn with_replaces_only_one_field() {
        let params = DesignParameters {
            power: Some(0.8),
            nclusters: Some(20.),
            nsubjects: Some(10.),
            p1: Some(0.1),
            ..Default::default()
        };
        let design = Design::from_parameters(&params, 0.3);
        assert_eq!(design.p2, 0.3);
        let moved = design.with(Parameter::P2, 0.25);
        assert_eq!(moved.p2, 0.25);
        assert_eq!(moved.p1, 0.1);
        assert_eq!(moved.nclusters, 20.);
    }

    #[test]
    fn default_options() {
        let options = SolveOptions::default();
        assert_eq!(options.variance, VarianceEstimator::Unpooled);
        assert_eq!(options.direction, EffectDirection::P1Greater);
        assert_eq!(options.reference, ReferenceDistribution::StudentT);
        assert!((options.tol - 1.220703e-4).abs() < 1e-9);
    }

    #[test]
    fn parameter_names() {
        assert_eq!(format!("{}", Parameter::NClusters), "nclusters");
        assert_eq!(format!("{}", Parameter::Icc), "ICC");
    }
}
