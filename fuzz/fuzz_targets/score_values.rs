#![no_main]

use libfuzzer_sys::fuzz_target;
use madlens::robust::score;
use madlens::series::Series;

fuzz_target!(|data: &[u8]| {
    // Interpret input as little-endian f64 values; NaN and infinities included
    if data.len() < 8 {
        return;
    }
    let threshold = f64::from_le_bytes(data[..8].try_into().unwrap_or([0; 8])).abs();
    let values = data[8..]
        .chunks_exact(8)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap_or([0; 8])));

    // Scoring is total: it must never panic, and partitions must cover the series
    let series = Series::from_values(values);
    let report = score(&series, threshold);
    assert_eq!(report.flagged.len() + report.clean.len(), series.len());
});
