use std::time::Instant;

use cpa_binary::compute::{
    DesignParameters, EffectDirection, ReferenceDistribution, SolveOptions, solve,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let clusters_needed = DesignParameters {
        alpha: Some(0.05),
        power: Some(0.8),
        nclusters: None,
        nsubjects: Some(10.),
        cv: Some(0.),
        p1: Some(0.1),
        p2: Some(0.2),
        icc: Some(0.1),
    };
    let detectable_p2 = DesignParameters {
        nclusters: Some(38.),
        p2: None,
        ..clusters_needed
    };
    let achieved_power = DesignParameters {
        power: None,
        nclusters: Some(38.),
        ..clusters_needed
    };
    // Unequal cluster sizes summarized to a mean and CV
    let unequal_sizes = DesignParameters {
        nsubjects: None,
        cv: None,
        ..clusters_needed
    }
    .with_cluster_sizes(&[4., 8., 10., 12., 16.]);

    let normal = SolveOptions {
        reference: ReferenceDistribution::Normal,
        ..Default::default()
    };
    let normal_p2_greater = SolveOptions {
        direction: EffectDirection::P2Greater,
        ..normal
    };

    let mut runs = vec![
        ("clusters per arm, t reference", clusters_needed, SolveOptions::default()),
        ("clusters per arm, normal reference", clusters_needed, normal),
        ("detectable p2 (p2 > p1)", detectable_p2, normal_p2_greater),
        ("power with 38 clusters per arm", achieved_power, SolveOptions::default()),
    ];
    match unequal_sizes {
        Ok(params) => runs.push((
            "clusters per arm, unequal cluster sizes",
            params,
            SolveOptions::default(),
        )),
        Err(e) => error!("could not summarize cluster sizes: {e}"),
    }

    for (label, params, options) in runs {
        let start = Instant::now();
        let result = solve(&params, &options);
        let duration = start.elapsed();
        match result {
            Ok(solution) => info!("{label}: {solution} ({duration:?})"),
            Err(e) => error!("{label}: {e}"),
        }
    }
}
