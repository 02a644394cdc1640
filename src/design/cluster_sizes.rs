use statrs::statistics::Statistics;

use crate::design::error::DesignErr;
use crate::design::types::{DesignParameters, Parameter};
use crate::error::CpaBinaryErr;

/// Mean cluster size and coefficient of variation of cluster sizes
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ClusterSizes {
    pub nsubjects: f64,
    pub cv: f64,
}

impl ClusterSizes {
    /// Summarizes a list of cluster sizes. CV uses the sample standard
    /// deviation; a single cluster has CV 0.
    pub fn summarize(sizes: &[f64]) -> Result<ClusterSizes, CpaBinaryErr> {
        if sizes.is_empty() {
            return Err(DesignErr::DomainViolation {
                parameter: Parameter::NSubjects,
                value: f64::NAN,
            }
            .into());
        }
        if let Some(bad) = sizes.iter().find(|s| !s.is_finite() || **s <= 0.) {
            return Err(DesignErr::DomainViolation {
                parameter: Parameter::NSubjects,
                value: *bad,
            }
            .into());
        }

        let nsubjects = sizes.mean();
        let cv = if sizes.len() == 1 {
            0.
        } else {
            sizes.std_dev() / nsubjects
        };
        Ok(ClusterSizes { nsubjects, cv })
    }
}

impl DesignParameters {
    /// Sets `nsubjects` and `cv` from the given cluster sizes
    pub fn with_cluster_sizes(self, sizes: &[f64]) -> Result<DesignParameters, CpaBinaryErr> {
        let ClusterSizes { nsubjects, cv } = ClusterSizes::summarize(sizes)?;
        Ok(DesignParameters {
            nsubjects: Some(nsubjects),
            cv: Some(cv),
            ..self
        })
    }
}
