//! SIMD kernels shared by the windowed indicators.
//!
//! These use the `wide` crate for portable SIMD operations. Every kernel
//! handles the tail that does not fill a full lane group with scalar code.

use wide::f64x4;

/// Split a price sequence into per-step gains and losses.
///
/// Both outputs have the same length as the input. The first entry of each is
/// 0 because the first bar has no predecessor.
pub fn price_changes_simd(data: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut gains = Vec::with_capacity(data.len());
    let mut losses = Vec::with_capacity(data.len());

    if data.is_empty() {
        return (gains, losses);
    }

    gains.push(0.0);
    losses.push(0.0);

    let steps = data.len() - 1;
    let chunks = steps / 4;
    let zero = f64x4::splat(0.0);

    for i in 0..chunks {
        let idx = i * 4;
        let prev = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        let curr = f64x4::new([
            data[idx + 1],
            data[idx + 2],
            data[idx + 3],
            data[idx + 4],
        ]);

        let diff = curr - prev;
        gains.extend(diff.max(zero).to_array());
        losses.extend((-diff).max(zero).to_array());
    }

    // Handle remaining elements
    for i in (chunks * 4)..steps {
        let change = data[i + 1] - data[i];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    (gains, losses)
}

/// Sum of a slice.
pub fn sum_simd(data: &[f64]) -> f64 {
    let chunks = data.len() / 4;
    let mut simd_sum = f64x4::splat(0.0);

    for i in 0..chunks {
        let idx = i * 4;
        let values = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        simd_sum += values;
    }

    let mut result = simd_sum.reduce_add();

    for &value in &data[(chunks * 4)..] {
        result += value;
    }

    result
}

/// Sum of squared deviations from `mean`.
pub fn sum_sq_dev_simd(data: &[f64], mean: f64) -> f64 {
    let chunks = data.len() / 4;
    let mean_vec = f64x4::splat(mean);
    let mut sum_sq = 0.0;

    for i in 0..chunks {
        let idx = i * 4;
        let values = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        let diff = values - mean_vec;
        sum_sq += (diff * diff).reduce_add();
    }

    for &value in &data[(chunks * 4)..] {
        let diff = value - mean;
        sum_sq += diff * diff;
    }

    sum_sq
}

/// Minimum and maximum of the finite values in a slice.
pub fn minmax_simd(data: &[f64]) -> Option<(f64, f64)> {
    let chunks = data.len() / 4;
    let mut min_vec = f64x4::splat(f64::INFINITY);
    let mut max_vec = f64x4::splat(f64::NEG_INFINITY);

    for i in 0..chunks {
        let idx = i * 4;
        let values = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        min_vec = min_vec.min(values);
        max_vec = max_vec.max(values);
    }

    let (mut min, mut max) = min_vec
        .to_array()
        .iter()
        .zip(max_vec.to_array().iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (&a, &b)| {
            (lo.min(a), hi.max(b))
        });

    for &value in &data[(chunks * 4)..] {
        min = min.min(value);
        max = max.max(value);
    }

    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}
