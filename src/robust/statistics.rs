// Median-based robust statistics for outlier scoring
//
// Mean and standard deviation are dragged around by the very outliers we are
// trying to find. The median and the Median Absolute Deviation (MAD) have a
// 50% breakdown point: up to half the series can be garbage before either
// estimate moves arbitrarily far.
//
// Scientific Foundation:
// - Hampel, F. R. (1974). The influence curve and its role in robust estimation. JASA.
// - Iglewicz, B. & Hoaglin, D. (1993). How to detect and handle outliers.
//   Modified z-scores above 3.5 are the usual outlier cut-off.
//
// All values here are exact (sort-based), full precision. Rounding to two
// decimals happens only when a summary is built for presentation.

/// Consistency constant: `1.4826 * MAD` estimates σ for normally distributed data
pub const MAD_SCALE: f64 = 1.4826;

/// Median of `values`; 0.0 for an empty slice
///
/// Sorts a copy ascending. Odd length returns the middle element, even length
/// the mean of the two central elements.
///
/// # Example
/// ```
/// use madlens::robust::median;
///
/// assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// assert_eq!(median(&[]), 0.0);
/// ```
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Median Absolute Deviation of `values` around `center`
///
/// `center` is normally `median(values)`; the deviations `|x - center|` are fed
/// back through [`median`], so an empty input yields 0.0.
pub fn mad(values: &[f64], center: f64) -> f64 {
    let deviations: Vec<f64> = values.iter().map(|x| (x - center).abs()).collect();
    median(&deviations)
}

/// Robust (modified) z-score of `x`
///
/// `(x - median) / (1.4826 * mad)`, or exactly 0.0 when `mad == 0`. A
/// zero-spread series has no outliers by this measure.
pub fn robust_z(x: f64, median: f64, mad: f64) -> f64 {
    if mad == 0.0 {
        return 0.0;
    }
    (x - median) / (MAD_SCALE * mad)
}

/// Round to two decimal places (presentation boundary only)
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Threshold-independent location/scale estimates of a series
///
/// Computed once per series; re-classifying at a new threshold reuses it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobustStats {
    /// Series median (full precision)
    pub median: f64,
    /// Median absolute deviation around `median` (full precision)
    pub mad: f64,
}

impl RobustStats {
    /// Compute median and MAD of `values`
    pub fn from_values(values: &[f64]) -> Self {
        let median = median(values);
        let mad = mad(values, median);
        Self { median, mad }
    }

    /// `1.4826 * mad`, the σ-comparable spread
    pub fn scaled_mad(&self) -> f64 {
        MAD_SCALE * self.mad
    }

    /// Robust z-score of `x` against these estimates
    pub fn z(&self, x: f64) -> f64 {
        robust_z(x, self.median, self.mad)
    }
}
