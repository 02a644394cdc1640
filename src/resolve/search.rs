use crate::design::types::{Design, EffectDirection, Parameter};
use crate::root_find::types::{Bracket, Expansion};

/// Largest cluster count or cluster size searched before expansion
const UPPER_COUNT: f64 = 1e7;
/// Offset keeping alpha off 0 and 1
const ALPHA_EPS: f64 = 1e-10;
/// Offset keeping counts above 2
const COUNT_EPS: f64 = 1e-10;
/// Offset keeping proportions, CV and ICC inside their domains
const PROPORTION_EPS: f64 = 1e-7;

/// Where to look for an unknown and how the search may grow
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SearchPlan {
    pub bracket: Bracket,
    pub expansion: Option<Expansion>,
    /// Whether the bracket depends on the effect direction
    pub directional: bool,
}

impl SearchPlan {
    /// Search plan for `parameter`, with other bounds taken from `design`.
    /// `None` for power, which is evaluated directly.
    pub fn for_parameter(
        parameter: Parameter,
        design: &Design,
        direction: EffectDirection,
    ) -> Option<SearchPlan> {
        let fixed = |lower, upper| SearchPlan {
            bracket: Bracket::new(lower, upper),
            expansion: None,
            directional: false,
        };
        let directional = |lower, upper| SearchPlan {
            bracket: Bracket::new(lower, upper),
            expansion: None,
            directional: true,
        };
        let expanding = |lower, upper, expansion| SearchPlan {
            bracket: Bracket::new(lower, upper),
            expansion: Some(expansion),
            directional: false,
        };

        let plan = match (parameter, direction) {
            (Parameter::Power, _) => return None,
            (Parameter::Alpha, _) => fixed(ALPHA_EPS, 1. - ALPHA_EPS),
            (Parameter::NClusters, _) => fixed(2. + COUNT_EPS, UPPER_COUNT),
            (Parameter::P1, EffectDirection::P1Greater) => {
                directional(design.p2 + PROPORTION_EPS, 1. - PROPORTION_EPS)
            }
            (Parameter::P1, EffectDirection::P2Greater) => {
                directional(PROPORTION_EPS, design.p2 - PROPORTION_EPS)
            }
            (Parameter::P2, EffectDirection::P1Greater) => {
                directional(PROPORTION_EPS, design.p1 - PROPORTION_EPS)
            }
            (Parameter::P2, EffectDirection::P2Greater) => {
                directional(design.p1 + PROPORTION_EPS, 1. - PROPORTION_EPS)
            }
            (Parameter::NSubjects, _) => {
                expanding(2. + COUNT_EPS, UPPER_COUNT, Expansion::Upward)
            }
            (Parameter::Cv, _) => expanding(PROPORTION_EPS, UPPER_COUNT, Expansion::Downward),
            (Parameter::Icc, _) => fixed(PROPORTION_EPS, 1. - PROPORTION_EPS),
        };
        Some(plan)
    }
}
