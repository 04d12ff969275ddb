//! Synthetic series generation
//!
//! Produces a near-normal series from a seed, then overwrites a handful of
//! positions with extreme values so there is always something to detect.
//! Generation is a pure function of (seed, config, injector).

use crate::gaussian::draw_standard_normal;
use crate::lehmer::LehmerRng;
use crate::robust::round2;
use serde::{Deserialize, Serialize};

/// Default series length
pub const DEFAULT_COUNT: usize = 320;

/// Default center (μ) of the generated distribution
pub const DEFAULT_CENTER_MEAN: f64 = 50.0;

/// Default spread (σ) of the generated distribution
pub const DEFAULT_CENTER_SPREAD: f64 = 10.0;

/// Generation-order positions (0-based) overwritten by [`FixtureInjector`]
pub const FIXTURE_POSITIONS: [usize; 6] = [12, 47, 88, 120, 201, 260];

/// One generated observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// 1-based position on the index axis
    pub index: usize,
    pub value: f64,
}

/// Ordered samples, index order == generation order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Build a series from raw values, assigning 1-based indices in order
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let samples = values
            .into_iter()
            .enumerate()
            .map(|(position, value)| Sample {
                index: position + 1,
                value,
            })
            .collect();
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Values in index order
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Shape of the generated distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub center_mean: f64,
    pub center_spread: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            center_mean: DEFAULT_CENTER_MEAN,
            center_spread: DEFAULT_CENTER_SPREAD,
        }
    }
}

/// Deterministic overwrite applied after the base series is drawn
///
/// Receives the 0-based generation position; `Some(v)` replaces the sample
/// value with `v`. Must not depend on the random source.
pub trait OutlierInjector {
    fn override_value(&self, position: usize) -> Option<f64>;
}

impl<F> OutlierInjector for F
where
    F: Fn(usize) -> Option<f64>,
{
    fn override_value(&self, position: usize) -> Option<f64> {
        self(position)
    }
}

/// Leaves the base series untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInjection;

impl OutlierInjector for NoInjection {
    fn override_value(&self, _position: usize) -> Option<f64> {
        None
    }
}

/// Demonstration fixture: six extreme values at [`FIXTURE_POSITIONS`]
///
/// The k-th fixture position (0-based) gets `130 + 10k` for even k and
/// `-10 - 7k` for odd k: 130, -17, 150, -31, 170, -45.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureInjector;

impl FixtureInjector {
    /// Value injected at the k-th fixture position
    pub fn value_for_ordinal(k: usize) -> f64 {
        if k % 2 == 0 {
            130.0 + 10.0 * k as f64
        } else {
            -10.0 - 7.0 * k as f64
        }
    }
}

impl OutlierInjector for FixtureInjector {
    fn override_value(&self, position: usize) -> Option<f64> {
        FIXTURE_POSITIONS
            .iter()
            .position(|&p| p == position)
            .map(Self::value_for_ordinal)
    }
}

/// Generate `count` samples around μ = 50, σ = 10 with the fixture outliers
///
/// # Example
/// ```
/// use madlens::series::generate;
///
/// let a = generate(42, 320);
/// let b = generate(42, 320);
/// assert_eq!(a, b);
/// assert_eq!(a.samples()[12].value, 130.0);
/// ```
pub fn generate(seed: i64, count: usize) -> Series {
    let config = GeneratorConfig {
        count,
        ..GeneratorConfig::default()
    };
    generate_with(seed, &config, &FixtureInjector)
}

/// Generate a series with an explicit distribution shape and injector
///
/// Each sample consumes two uniforms: `value = round2(μ + σ·z)`. The injector
/// runs afterwards over every position `< count`, so positions beyond the
/// series length are silently skipped.
pub fn generate_with(
    seed: i64,
    config: &GeneratorConfig,
    injector: &dyn OutlierInjector,
) -> Series {
    let mut rng = LehmerRng::new(seed);

    let mut values: Vec<f64> = (0..config.count)
        .map(|_| {
            let z = draw_standard_normal(&mut rng);
            round2(config.center_mean + config.center_spread * z)
        })
        .collect();

    let mut injected = 0usize;
    for (position, value) in values.iter_mut().enumerate() {
        if let Some(replacement) = injector.override_value(position) {
            *value = replacement;
            injected += 1;
        }
    }

    tracing::debug!(
        seed,
        count = config.count,
        injected,
        "generated synthetic series"
    );

    Series::from_values(values)
}
