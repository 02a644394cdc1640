//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::design::cluster_sizes::ClusterSizes;
pub use crate::design::types::{
    Design, DesignParameters, EffectDirection, Parameter, ReferenceDistribution, SolveOptions,
    VarianceEstimator,
};
pub use crate::power::evaluate::{design_effect, evaluate_power, se_difference};
pub use crate::resolve::solve::solve;
pub use crate::resolve::types::Solution;
