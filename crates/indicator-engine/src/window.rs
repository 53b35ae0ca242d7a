//! Growing-then-fixed trailing windows.
//!
//! Point `i` covers `data[max(0, i + 1 - window)..=i]`: the window grows from a
//! single point until `window` observations exist, then slides.

use crate::simd::sum_simd;

/// Start index of the trailing window ending at `index`.
#[inline]
pub fn window_start(index: usize, window: usize) -> usize {
    (index + 1).saturating_sub(window)
}

/// Iterate over the trailing window ending at each point of `data`.
pub fn trailing_windows(data: &[f64], window: usize) -> impl Iterator<Item = &[f64]> + '_ {
    (0..data.len()).map(move |i| &data[window_start(i, window)..=i])
}

/// True when every value equals the first one.
///
/// Lane-wise summation does not reproduce a repeated value exactly, so flat
/// windows are resolved before any arithmetic.
pub fn is_flat(values: &[f64]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => true,
    }
}

/// Arithmetic mean of each trailing window. A flat window yields its value exactly.
pub fn trailing_mean(data: &[f64], window: usize) -> Vec<f64> {
    trailing_windows(data, window)
        .map(|w| {
            if is_flat(w) {
                w[0]
            } else {
                sum_simd(w) / w.len() as f64
            }
        })
        .collect()
}
