// Robust outlier scoring with the Median Absolute Deviation
//
// Classical z-scores divide by the standard deviation, which the outliers
// themselves inflate; a few extreme points can hide each other. This module
// scores points against the median and 1.4826 × MAD instead, which stay put
// until half the data is contaminated.
//
// Implementation:
// - Exact, sort-based median and MAD over an in-memory series
// - Full-precision z-scores; two-decimal rounding only in the summary
// - Classification is a pure function of (series, threshold)

mod classifier;
mod statistics;

pub use classifier::{
    classify, score, ScoreReport, ScoredSample, StatisticsSummary, DEFAULT_THRESHOLD,
    THRESHOLD_RANGE,
};
pub use statistics::{mad, median, robust_z, round2, RobustStats, MAD_SCALE};

#[cfg(test)]
mod tests;
