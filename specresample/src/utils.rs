//! Convenience methods for building wavelength axes in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// Returns an empty axis for `n == 0` and `[start]` for `n == 1`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let dx: T = (stop - start) / T::from(n - 1).unwrap_or_else(T::nan);
            (0..n)
                .map(|i| start + T::from(i).unwrap_or_else(T::nan) * dx)
                .collect()
        }
    }
}

/// Band-centre axis spaced evenly from `start` to `stop`, with a matching
/// FWHM per band equal to the band spacing (contiguous bands).
pub fn contiguous_bands<T>(start: T, stop: T, n: usize) -> (Vec<T>, Vec<T>)
where
    T: Float,
{
    let centers = linspace(start, stop, n);
    let width = match centers.len() {
        0 | 1 => T::zero(),
        len => (stop - start) / T::from(len - 1).unwrap_or_else(T::nan),
    };
    let fwhm = vec![width; centers.len()];
    (centers, fwhm)
}
