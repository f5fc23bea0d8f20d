//! Statistical kernels shared across the analysis core
//!
//! Slices in, scalars out. Accumulation runs in f64 so long magnitude
//! vectors do not lose precision before the final cast back to f32.

/// Arithmetic mean. Empty input yields 0.0.
pub fn mean(data: &[f32]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().map(|&v| v as f64).sum();
    (sum / data.len() as f64) as f32
}

/// Median of a slice, without mutating the caller's data.
pub fn median(data: &[f32]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Coefficient of variation (stddev / mean). Zero or near-zero mean yields
/// f32::INFINITY so a degenerate interval set always fails tolerance checks.
pub fn coefficient_of_variation(data: &[f32]) -> f32 {
    if data.is_empty() {
        return f32::INFINITY;
    }
    let m: f64 = data.iter().map(|&v| v as f64).sum::<f64>() / data.len() as f64;
    if m.abs() < 1e-12 {
        return f32::INFINITY;
    }
    let var: f64 = data
        .iter()
        .map(|&v| {
            let d = v as f64 - m;
            d * d
        })
        .sum::<f64>()
        / data.len() as f64;
    (var.sqrt() / m.abs()) as f32
}

/// Pearson correlation coefficient between two equal-length vectors.
///
/// Returns `None` when either vector has zero variance (correlation is
/// undefined for a constant signal) or the lengths differ.
pub fn pearson(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.len() < 2 {
        return None;
    }

    let n = a.len() as f64;
    let mean_a: f64 = a.iter().map(|&v| v as f64).sum::<f64>() / n;
    let mean_b: f64 = b.iter().map(|&v| v as f64).sum::<f64>() / n;

    let mut cov = 0.0f64;
    let mut var_a = 0.0f64;
    let mut var_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let dx = x as f64 - mean_a;
        let dy = y as f64 - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a < 1e-24 || var_b < 1e-24 {
        return None;
    }

    let r = cov / (var_a * var_b).sqrt();
    Some(r.clamp(-1.0, 1.0) as f32)
}
