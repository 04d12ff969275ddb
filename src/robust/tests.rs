// Scenario tests for robust scoring over generated series
//
// Exercises the full seed -> series -> score path with the demonstration
// fixture outliers, the way the CLI and report renderers drive it.

use super::*;
use crate::series::{generate, generate_with, GeneratorConfig, NoInjection, FIXTURE_POSITIONS};

/// Seed 42, default shape: every injected fixture must be flagged at 3.5
#[test]
fn test_seed_42_flags_all_fixtures() {
    let series = generate(42, 320);
    let report = score(&series, 3.5);

    let flagged = report.flagged_indices();
    for position in FIXTURE_POSITIONS {
        assert!(
            flagged.contains(&(position + 1)),
            "fixture at index {} not flagged (flagged: {:?})",
            position + 1,
            flagged
        );
    }
}

/// Raising the threshold to the top of the slider range cannot flag more
#[test]
fn test_seed_42_strict_threshold_flags_no_more() {
    let series = generate(42, 320);
    let relaxed = score(&series, 3.5);
    let strict = score(&series, 6.0);

    assert!(strict.summary.flagged_count <= relaxed.summary.flagged_count);
    for index in strict.flagged_indices() {
        assert!(relaxed.flagged_indices().contains(&index));
    }
}

/// Robust estimates stay near the generating distribution despite injection
#[test]
fn test_fixtures_do_not_distort_estimates() {
    let dirty = score(&generate(42, 320), 3.5);
    let clean = score(
        &generate_with(42, &GeneratorConfig::default(), &NoInjection),
        3.5,
    );

    assert!((dirty.summary.median - 50.0).abs() < 3.0);
    assert!((dirty.summary.scaled_mad - 10.0).abs() < 2.5);

    // Six contaminated points out of 320 move the median by well under one unit
    assert!((dirty.summary.median - clean.summary.median).abs() < 1.0);
}

/// Fixture magnitudes sit far outside the clean bulk
#[test]
fn test_fixture_z_scores_extreme() {
    let report = score(&generate(42, 320), 3.5);
    let scored = report.scored();

    for position in FIXTURE_POSITIONS {
        let sample = scored[position];
        assert!(sample.abs_z > 4.0, "index {} z = {}", sample.index, sample.z);
    }
}

/// Scaled MAD in the summary is the rounded product, not product of rounded
#[test]
fn test_scaled_mad_invariant() {
    let series = generate(1234, 320);
    let stats = RobustStats::from_values(&series.values());
    let report = classify(&series, &stats, 3.5);

    assert!((report.summary.scaled_mad - round2(MAD_SCALE * stats.mad)).abs() < 1e-9);
    assert!((report.summary.median - round2(stats.median)).abs() < 1e-9);
}

/// Re-classifying with cached stats matches a full rescore
#[test]
fn test_classify_matches_score() {
    let series = generate(5, 200);
    let stats = RobustStats::from_values(&series.values());
    for threshold in [2.0, 2.5, 3.5, 4.75, 6.0] {
        assert_eq!(classify(&series, &stats, threshold), score(&series, threshold));
    }
}

/// Zero threshold on a spread-out series flags every point
#[test]
fn test_zero_threshold_flags_all() {
    let series = generate_with(9, &GeneratorConfig::default(), &NoInjection);
    let report = score(&series, 0.0);
    assert_eq!(report.summary.flagged_count, series.len());
}
