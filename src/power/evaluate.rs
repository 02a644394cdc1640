use crate::design::types::{Design, ReferenceDistribution, VarianceEstimator};
use crate::error::CpaBinaryErr;
use crate::power::noncentral_t::{NoncentralT, students_t_quantile};
use crate::power::std_normal::{std_normal_cdf, std_normal_quantile};

/// Variance inflation from clustering and unequal cluster sizes
pub fn design_effect(nsubjects: f64, cv: f64, icc: f64) -> f64 {
    1. + ((cv * cv + 1.) * nsubjects - 1.) * icc
}

/// Standard error of the difference in proportions
pub fn se_difference(design: &Design, variance: VarianceEstimator) -> f64 {
    let Design {
        nclusters,
        nsubjects,
        cv,
        p1,
        p2,
        icc,
        ..
    } = *design;
    let deff = design_effect(nsubjects, cv, icc);
    let n = nclusters * nsubjects;
    match variance {
        VarianceEstimator::Pooled => {
            let p_bar = (p1 + p2) / 2.;
            (p_bar * (1. - p_bar) * 2. * deff / n).sqrt()
        }
        VarianceEstimator::Unpooled => ((p1 * (1. - p1) + p2 * (1. - p2)) * deff / n).sqrt(),
    }
}

/// Power of the two-sided test implied by a fully specified design. The
/// `power` field of `design` is ignored. The result is not clamped; NaN comes
/// back for degenerate designs.
pub fn evaluate_power(
    design: &Design,
    variance: VarianceEstimator,
    reference: ReferenceDistribution,
) -> Result<f64, CpaBinaryErr> {
    let sdd = se_difference(design, variance);
    let ncp = (design.p1 - design.p2).abs() / sdd;
    if ncp.is_nan() {
        return Ok(f64::NAN);
    }

    match reference {
        ReferenceDistribution::Normal => {
            let z = std_normal_quantile(1. - design.alpha / 2.)?;
            Ok(std_normal_cdf(ncp - z))
        }
        ReferenceDistribution::StudentT => {
            if ncp.is_infinite() {
                return Ok(1.);
            }
            let df = 2. * (design.nclusters - 1.);
            let t_crit = students_t_quantile(1. - design.alpha / 2., df)?;
            Ok(NoncentralT::new(df, ncp)?.sf(t_crit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn scenario_1(nclusters: f64) -> Design {
        Design {
            alpha: 0.05,
            power: 0.8,
            nclusters,
            nsubjects: 10.,
            cv: 0.,
            p1: 0.1,
            p2: 0.2,
            icc: 0.1,
        }
    }

    fn t_power(design: &Design) -> f64 {
        evaluate_power(
            design,
            VarianceEstimator::Unpooled,
            ReferenceDistribution::StudentT,
        )
        .expect("failed to evaluate power")
    }

    #[test]
    fn design_effect_values() {
        assert_abs_diff_eq!(design_effect(10., 0., 0.1), 1.9, epsilon = 1e-12);
        assert_eq!(design_effect(10., 0., 0.), 1.);
        // CV 1 doubles the effective cluster size
        assert_abs_diff_eq!(design_effect(10., 1., 0.1), 2.9, epsilon = 1e-12);
    }

    #[test]
    fn unpooled_standard_error() {
        // (0.09 + 0.16) * 1.9 / 400
        let sdd = se_difference(&scenario_1(40.), VarianceEstimator::Unpooled);
        assert_abs_diff_eq!(sdd, (0.25 * 1.9 / 400_f64).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn pooled_standard_error() {
        let sdd = se_difference(&scenario_1(40.), VarianceEstimator::Pooled);
        assert_abs_diff_eq!(sdd, (0.15 * 0.85 * 2. * 1.9 / 400_f64).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn normal_reference_power() {
        let design = scenario_1(38.);
        let sdd = se_difference(&design, VarianceEstimator::Unpooled);
        let expected = std_normal_cdf(0.1 / sdd - 1.959964);
        let power = evaluate_power(
            &design,
            VarianceEstimator::Unpooled,
            ReferenceDistribution::Normal,
        )
        .unwrap();
        assert_abs_diff_eq!(power, expected, epsilon = 1e-6);
    }

    #[test]
    fn scenario_1_brackets_target_power() {
        // 0.8 is reached between 38 and 39 clusters per arm
        assert!(t_power(&scenario_1(37.)) < 0.8);
        assert!(t_power(&scenario_1(39.)) > 0.8);
    }

    #[test]
    fn t_reference_is_more_conservative() {
        let design = scenario_1(10.);
        let normal = evaluate_power(
            &design,
            VarianceEstimator::Unpooled,
            ReferenceDistribution::Normal,
        )
        .unwrap();
        assert!(t_power(&design) < normal);
    }

    #[test]
    fn equal_proportions_give_alpha_over_two() {
        let design = Design {
            p2: 0.1,
            ..scenario_1(20.)
        };
        assert_abs_diff_eq!(t_power(&design), 0.025, epsilon = 1e-7);
    }

    #[test]
    fn pooled_and_unpooled_are_close() {
        let design = scenario_1(30.);
        let unpooled = evaluate_power(
            &design,
            VarianceEstimator::Unpooled,
            ReferenceDistribution::StudentT,
        )
        .unwrap();
        let pooled = evaluate_power(
            &design,
            VarianceEstimator::Pooled,
            ReferenceDistribution::StudentT,
        )
        .unwrap();
        assert!(unpooled != pooled);
        assert!((unpooled - pooled).abs() < 0.02);
    }

    #[test]
    fn pooled_and_unpooled_match_for_equal_proportions() {
        let design = Design {
            p1: 0.3,
            p2: 0.3,
            ..scenario_1(30.)
        };
        let unpooled = evaluate_power(
            &design,
            VarianceEstimator::Unpooled,
            ReferenceDistribution::Normal,
        )
        .unwrap();
        let pooled = evaluate_power(
            &design,
            VarianceEstimator::Pooled,
            ReferenceDistribution::Normal,
        )
        .unwrap();
        assert_abs_diff_eq!(unpooled, pooled, epsilon = 1e-15);
        assert_eq!(
            se_difference(&design, VarianceEstimator::Unpooled),
            se_difference(&design, VarianceEstimator::Pooled)
        );
    }

    #[test]
    fn degenerate_design_gives_nan() {
        let design = Design {
            nsubjects: f64::NAN,
            ..scenario_1(20.)
        };
        assert!(t_power(&design).is_nan());
    }

    fn design_strategy() -> impl Strategy<Value = Design> {
        (
            0.01f64..0.1,
            2.5f64..150.,
            2f64..60.,
            0f64..1.,
            0.05f64..0.95,
            0.05f64..0.95,
            0f64..0.3,
        )
            .prop_map(|(alpha, nclusters, nsubjects, cv, p1, p2, icc)| Design {
                alpha,
                power: 0.8,
                nclusters,
                nsubjects,
                cv,
                p1,
                p2,
                icc,
            })
    }

    fn both_estimators(design: &Design, reference: ReferenceDistribution) -> [f64; 2] {
        [VarianceEstimator::Unpooled, VarianceEstimator::Pooled]
            .map(|v| evaluate_power(design, v, reference).expect("failed to evaluate power"))
    }

    proptest! {
        #[test]
        fn power_non_decreasing_in_nclusters(design in design_strategy(), extra in 0.5f64..50.) {
            let larger = Design { nclusters: design.nclusters + extra, ..design };
            let before = both_estimators(&design, ReferenceDistribution::StudentT);
            let after = both_estimators(&larger, ReferenceDistribution::StudentT);
            for i in 0..2 {
                prop_assert!(after[i] >= before[i] - 1e-9);
            }
        }

        #[test]
        fn power_non_decreasing_in_nsubjects(design in design_strategy(), extra in 0.5f64..50.) {
            let larger = Design { nsubjects: design.nsubjects + extra, ..design };
            let before = both_estimators(&design, ReferenceDistribution::StudentT);
            let after = both_estimators(&larger, ReferenceDistribution::StudentT);
            for i in 0..2 {
                prop_assert!(after[i] >= before[i] - 1e-9);
            }
        }

        #[test]
        fn power_non_increasing_in_icc(design in design_strategy(), extra in 0.01f64..0.6) {
            let larger = Design { icc: design.icc + extra, ..design };
            for reference in [ReferenceDistribution::StudentT, ReferenceDistribution::Normal] {
                let before = both_estimators(&design, reference);
                let after = both_estimators(&larger, reference);
                for i in 0..2 {
                    prop_assert!(after[i] <= before[i] + 1e-9);
                }
            }
        }

        #[test]
        fn power_non_increasing_in_cv(design in design_strategy(), extra in 0.01f64..2.) {
            let larger = Design { cv: design.cv + extra, ..design };
            let before = both_estimators(&design, ReferenceDistribution::StudentT);
            let after = both_estimators(&larger, ReferenceDistribution::StudentT);
            for i in 0..2 {
                prop_assert!(after[i] <= before[i] + 1e-9);
            }
        }

        #[test]
        fn power_symmetric_in_proportions(design in design_strategy()) {
            let swapped = Design { p1: design.p2, p2: design.p1, ..design };
            for reference in [ReferenceDistribution::StudentT, ReferenceDistribution::Normal] {
                let a = both_estimators(&design, reference);
                let b = both_estimators(&swapped, reference);
                for i in 0..2 {
                    prop_assert!((a[i] - b[i]).abs() < 1e-12);
                }
            }
        }
    }
}
