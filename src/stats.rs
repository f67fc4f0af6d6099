//! Reduction of the `E_ref` time series into an energy estimate.

use crate::error::DmcError;

/// Mean and spread over the trailing part of a series.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowStats {
    pub mean: f64,
    /// Population standard deviation of the window
    pub std_dev: f64,
    pub samples: usize,
}

/// Statistics over the last `ceil(fraction * len)` samples, `fraction` in (0, 1].
pub fn trailing_window(series: &[f64], fraction: f64) -> Result<WindowStats, DmcError> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(DmcError::invalid(format!(
            "window fraction must lie in (0, 1], got {}",
            fraction
        )));
    }
    if series.is_empty() {
        return Err(DmcError::invalid("cannot average an empty series"));
    }

    // snap products like 0.07 * 100 = 7.000000000000001 before rounding up
    let raw = fraction * series.len() as f64;
    let nearest = raw.round();
    let samples = if (raw - nearest).abs() <= 1e-9 * raw.max(1.0) {
        nearest
    } else {
        raw.ceil()
    };
    let samples = (samples as usize).clamp(1, series.len());
    let window = &series[series.len() - samples..];

    let n = samples as f64;
    let mean = window.iter().sum::<f64>() / n;
    let var = window.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;

    Ok(WindowStats {
        mean,
        std_dev: var.sqrt(),
        samples,
    })
}

/// Estimate autocorrelation time using initial positive sequence.
///
/// Sums the normalized autocorrelation until it first turns negative. `run_dmc`
/// uses it on the `E_ref` window to size the blocks for `blocking_error`.
pub fn autocorrelation_time(series: &[f64]) -> f64 {
    let n = series.len();
    if n < 2 {
        return 1.0;
    }
    let mean = series.iter().sum::<f64>() / n as f64;
    let var = series.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    if var == 0.0 {
        return 1.0;
    }

    let mut autocorr = 1.0;
    for t in 1..n / 2 {
        let auto_t: f64 = series[..n - t].iter()
            .zip(series[t..].iter())
            .map(|(&x, &y)| (x - mean) * (y - mean))
            .sum::<f64>() / ((n - t) as f64 * var);

        if auto_t < 0.0 {
            break;
        }
        autocorr += 2.0 * auto_t;
    }
    autocorr
}

/// Standard error of the mean from block averages of size `ceil(2 tau)`.
pub fn blocking_error(series: &[f64], autocorrelation_time: f64) -> f64 {
    let block_size = ((2.0 * autocorrelation_time).ceil() as usize).max(1);
    let n_blocks = series.len() / block_size;

    if n_blocks < 2 {
        return 0.0;
    }

    let block_means: Vec<f64> = series
        .chunks_exact(block_size)
        .map(|block| block.iter().sum::<f64>() / block_size as f64)
        .collect();

    let mean = block_means.iter().sum::<f64>() / n_blocks as f64;
    let variance = block_means.iter()
        .map(|&x| (x - mean).powi(2))
        .sum::<f64>() / (n_blocks - 1) as f64;

    (variance / n_blocks as f64).sqrt()
}
