//! Resampling driver: validation, sorting, the per-point loop, and restoring
//! the caller's band order.
//!
//! ```rust
//! use specresample::{Method, Resampler, ResamplerOptions};
//!
//! let wavelengths = [0.40_f64, 0.41, 0.42, 0.43, 0.44, 0.45];
//! let values = [0.0, 1.0, 4.0, 6.0, 5.0, 3.0];
//! let targets = [0.4075, 0.415, 0.425];
//!
//! let resampler = Resampler::new(ResamplerOptions::default().with_method(Method::Linear));
//! let out = resampler.execute(&values, &wavelengths, &targets, &[]).unwrap();
//! assert_eq!(out.bands, vec![0, 1, 2]);
//! assert!((out.values[1] - 2.5).abs() < 1e-12);
//! ```

use core::cmp::Ordering;

use alloc::vec::Vec;

use itertools::izip;
use num_traits::{Float, NumCast};

use crate::bracket::{has_duplicate_values, Bracket, BracketLocator};
use crate::interpolate::{Interpolate, Strategy};
use crate::{Method, ResampleError, ResamplerOptions};

/// Output of one resampling call.
///
/// `values[i]` is the resampled value for destination band `bands[i]`.
/// Bands that could not be resampled are absent, and `bands` is ascending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resampled<T> {
    pub values: Vec<T>,
    pub bands: Vec<usize>,
}

impl<T> Resampled<T> {
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Whether every one of `requested` destination bands was produced.
    pub fn is_complete(&self, requested: usize) -> bool {
        self.bands.len() == requested
    }
}

/// Resamples spectra from one wavelength axis onto another.
///
/// Holds no state besides its options, so one instance can serve any number
/// of calls, from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Resampler {
    options: ResamplerOptions,
}

impl Resampler {
    pub fn new(options: ResamplerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResamplerOptions {
        &self.options
    }

    /// Resample with the configured method.
    ///
    /// See [`Resampler::execute_with`].
    pub fn execute<T: Float>(
        &self,
        source_values: &[T],
        source_wavelengths: &[T],
        dest_wavelengths: &[T],
        dest_fwhm: &[T],
    ) -> Result<Resampled<T>, ResampleError> {
        self.execute_with(
            source_values,
            source_wavelengths,
            dest_wavelengths,
            dest_fwhm,
            self.options.method,
        )
    }

    /// Resample with a method given by name ("Linear", "Cubic Spline" or
    /// "Gaussian").
    ///
    /// # Errors
    /// * As [`Resampler::execute_with`]; an unknown name is reported after
    ///   input shape errors.
    pub fn execute_named<T: Float>(
        &self,
        source_values: &[T],
        source_wavelengths: &[T],
        dest_wavelengths: &[T],
        dest_fwhm: &[T],
        method: &str,
    ) -> Result<Resampled<T>, ResampleError> {
        let method = match method.parse::<Method>() {
            Ok(m) => m,
            Err(e) => {
                check_shapes(source_values, source_wavelengths, dest_wavelengths, dest_fwhm)?;
                return Err(e);
            }
        };
        self.execute_with(
            source_values,
            source_wavelengths,
            dest_wavelengths,
            dest_fwhm,
            method,
        )
    }

    /// Resample `source_values`, sampled at `source_wavelengths`, onto
    /// `dest_wavelengths`.
    ///
    /// Neither axis needs to be sorted. `dest_fwhm` is either empty (the
    /// configured default FWHM is used) or holds one width per destination
    /// band; it is only read by [`Method::Gaussian`].
    ///
    /// If the source axis already matches `dest_wavelengths` band-for-band
    /// the source values are returned unchanged.
    ///
    /// # Errors
    /// * If the number of source values and wavelengths differ
    /// * If `dest_fwhm` is non-empty and its length differs from `dest_wavelengths`
    /// * If the drop-out window is negative
    /// * If the source axis is empty or has duplicate wavelengths
    /// * If the method is Gaussian and a band's FWHM is not positive
    /// * If not a single destination band could be resampled
    pub fn execute_with<T: Float>(
        &self,
        source_values: &[T],
        source_wavelengths: &[T],
        dest_wavelengths: &[T],
        dest_fwhm: &[T],
        method: Method,
    ) -> Result<Resampled<T>, ResampleError> {
        check_shapes(source_values, source_wavelengths, dest_wavelengths, dest_fwhm)?;

        let sorted = SortedInput::new(source_wavelengths, source_values, dest_wavelengths, dest_fwhm);
        let drop_out_window = cast::<T>(self.options.drop_out_window)?;
        let default_fwhm = cast::<T>(self.options.full_width_half_max)?;
        let locator = BracketLocator::new(&sorted.from_wavelengths, drop_out_window);

        // Compared against the caller's destination order, not the sorted one
        if locator.no_resampling_necessary(dest_wavelengths) {
            log::debug!(
                "Source and destination axes match ({} bands); no resampling necessary",
                source_values.len()
            );
            return Ok(Resampled {
                values: source_values.to_vec(),
                bands: (0..source_values.len()).collect(),
            });
        }

        validate_source(drop_out_window, &sorted.from_wavelengths, &sorted.from_values)?;
        if method == Method::Gaussian {
            validate_fwhm(default_fwhm, &sorted.to_fwhm)?;
        }

        let strategy = Strategy::new(method, &sorted.from_wavelengths, &sorted.from_values);
        let mut out = run(&locator, &strategy, &sorted, default_fwhm)?;
        if out.is_empty() {
            return Err(ResampleError::NoBandsResampled);
        }
        log::debug!(
            "{} resampled {} of {} bands",
            method,
            out.len(),
            dest_wavelengths.len()
        );

        // Back to the caller's band order
        out.sort_unstable_by_key(|&(band, _)| band);
        let (bands, values) = out.into_iter().unzip();

        Ok(Resampled { values, bands })
    }
}

/// Resample with default options and the default (linear) method.
pub fn resample<T: Float>(
    source_values: &[T],
    source_wavelengths: &[T],
    dest_wavelengths: &[T],
    dest_fwhm: &[T],
) -> Result<Resampled<T>, ResampleError> {
    Resampler::default().execute(source_values, source_wavelengths, dest_wavelengths, dest_fwhm)
}

/// Both axes sorted by wavelength, with each destination band remembering
/// its original position.
struct SortedInput<T> {
    from_wavelengths: Vec<T>,
    from_values: Vec<T>,
    to_wavelengths: Vec<T>,
    /// Empty if no per-band FWHM was supplied
    to_fwhm: Vec<T>,
    to_bands: Vec<usize>,
}

impl<T: Float> SortedInput<T> {
    fn new(
        source_wavelengths: &[T],
        source_values: &[T],
        dest_wavelengths: &[T],
        dest_fwhm: &[T],
    ) -> Self {
        let mut from: Vec<(T, T)> = izip!(source_wavelengths, source_values)
            .map(|(&w, &v)| (w, v))
            .collect();
        from.sort_by(|a, b| total_cmp(a.0, b.0).then_with(|| total_cmp(a.1, b.1)));
        let (from_wavelengths, from_values) = from.into_iter().unzip();

        let has_fwhm = !dest_fwhm.is_empty();
        let mut to: Vec<(T, T, usize)> = dest_wavelengths
            .iter()
            .enumerate()
            .map(|(i, &w)| (w, if has_fwhm { dest_fwhm[i] } else { T::zero() }, i))
            .collect();
        // Stable, so equal wavelengths keep their relative order
        to.sort_by(|a, b| total_cmp(a.0, b.0));

        let mut to_wavelengths = Vec::with_capacity(to.len());
        let mut to_fwhm = Vec::with_capacity(if has_fwhm { to.len() } else { 0 });
        let mut to_bands = Vec::with_capacity(to.len());
        for (w, fwhm, band) in to {
            to_wavelengths.push(w);
            if has_fwhm {
                to_fwhm.push(fwhm);
            }
            to_bands.push(band);
        }

        Self {
            from_wavelengths,
            from_values,
            to_wavelengths,
            to_fwhm,
            to_bands,
        }
    }
}

/// Resample every sorted destination band that has a bracket, producing
/// `(original band, value)` pairs in sorted-wavelength order.
fn run<T: Float, S: Interpolate<T>>(
    locator: &BracketLocator<'_, T>,
    strategy: &S,
    sorted: &SortedInput<T>,
    default_fwhm: T,
) -> Result<Vec<(usize, T)>, ResampleError> {
    let mut out = Vec::with_capacity(sorted.to_wavelengths.len());

    for (i, &to_wavelength) in sorted.to_wavelengths.iter().enumerate() {
        let band = sorted.to_bands[i];
        let value = match locator.locate(to_wavelength)? {
            None => {
                log::trace!("Band {band} at {:?} cannot be resampled", to_wavelength.to_f64());
                continue;
            }
            Some(Bracket::Point(j)) => sorted.from_values[j],
            Some(Bracket::Span(left, right)) => {
                let fwhm = sorted.to_fwhm.get(i).copied().unwrap_or(default_fwhm);
                strategy.resample_point(left, right, to_wavelength, fwhm)
            }
        };
        out.push((band, value));
    }

    Ok(out)
}

/// Length checks done before anything is sorted.
fn check_shapes<T>(
    source_values: &[T],
    source_wavelengths: &[T],
    dest_wavelengths: &[T],
    dest_fwhm: &[T],
) -> Result<(), ResampleError> {
    if source_values.len() != source_wavelengths.len() {
        return Err(ResampleError::LengthMismatch);
    }
    if !dest_fwhm.is_empty() && dest_fwhm.len() != dest_wavelengths.len() {
        return Err(ResampleError::FwhmMismatch {
            expected: dest_wavelengths.len(),
            actual: dest_fwhm.len(),
        });
    }
    Ok(())
}

/// Checks on the sorted source spectrum before any interpolation.
fn validate_source<T: Float>(
    drop_out_window: T,
    wavelengths: &[T],
    values: &[T],
) -> Result<(), ResampleError> {
    if drop_out_window < T::zero() {
        return Err(ResampleError::NegativeDropOutWindow);
    }
    if wavelengths.is_empty() {
        return Err(ResampleError::NoWavelengths);
    }
    if has_duplicate_values(wavelengths) {
        return Err(ResampleError::DuplicateWavelengths);
    }
    if values.is_empty() {
        return Err(ResampleError::NoData);
    }
    Ok(())
}

/// Widths the Gaussian kernel will use: the per-band values if given,
/// otherwise the default. NaN is rejected along with zero and negatives.
fn validate_fwhm<T: Float>(default_fwhm: T, to_fwhm: &[T]) -> Result<(), ResampleError> {
    let positive = |w: &T| *w > T::zero();
    let ok = if to_fwhm.is_empty() {
        positive(&default_fwhm)
    } else {
        to_fwhm.iter().all(positive)
    };
    if ok {
        Ok(())
    } else {
        Err(ResampleError::NonPositiveFwhm)
    }
}

#[inline]
fn cast<T: Float>(v: f64) -> Result<T, ResampleError> {
    <T as NumCast>::from(v).ok_or(ResampleError::Unrepresentable)
}

/// Ordering with NaN above every number, so sorting never sees an
/// inconsistent comparison.
#[inline]
fn total_cmp<T: Float>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
mod test {
    use rand::seq::SliceRandom;

    use super::{resample, Resampled, Resampler};
    use crate::testing::*;
    use crate::utils::linspace;
    use crate::{Method, ResampleError, ResamplerOptions};

    const BASE_WAVELENGTHS: [f64; 6] = [0.40, 0.41, 0.42, 0.43, 0.44, 0.45];
    const BASE_VALUES: [f64; 6] = [0.0, 1.0, 4.0, 6.0, 5.0, 3.0];
    const STRADDLING: [f64; 9] = [0.385, 0.395, 0.405, 0.415, 0.425, 0.435, 0.445, 0.455, 0.465];
    const INTERIOR: [f64; 5] = [0.4075, 0.4150, 0.4250, 0.4350, 0.4450];

    fn resampler(method: Method) -> Resampler {
        Resampler::new(ResamplerOptions::default().with_method(method))
    }

    #[allow(clippy::too_many_arguments)]
    fn run_positive(
        method: Method,
        source_values: &[f64],
        source_wavelengths: &[f64],
        dest_wavelengths: &[f64],
        dest_fwhm: &[f64],
        expected_values: &[f64],
        expected_bands: &[usize],
        tolerance: f64,
    ) {
        let out = resampler(method)
            .execute(source_values, source_wavelengths, dest_wavelengths, dest_fwhm)
            .unwrap();

        assert_eq!(out.values.len(), expected_values.len(), "{out:?}");
        assert_eq!(out.bands, expected_bands);
        for (v, e) in out.values.iter().zip(expected_values) {
            assert!((v - e).abs() <= tolerance, "got {v}, expected {e}");
        }
    }

    fn run_negative(
        source_values: &[f64],
        source_wavelengths: &[f64],
        dest_wavelengths: &[f64],
        expected: ResampleError,
    ) {
        let err = resampler(Method::Linear)
            .execute(source_values, source_wavelengths, dest_wavelengths, &[])
            .unwrap_err();
        assert_eq!(err, expected);
    }

    #[test]
    fn test_linear_interior() {
        run_positive(
            Method::Linear,
            &BASE_VALUES,
            &BASE_WAVELENGTHS,
            &INTERIOR,
            &[],
            &[0.75, 2.50, 5.00, 5.50, 4.00],
            &[0, 1, 2, 3, 4],
            1e-6,
        );
    }

    #[test]
    fn test_linear_extrapolates_both_ends() {
        run_positive(
            Method::Linear,
            &BASE_VALUES,
            &BASE_WAVELENGTHS,
            &STRADDLING,
            &[],
            &[-0.5, 0.5, 2.5, 5.0, 5.5, 4.0, 2.0],
            &[1, 2, 3, 4, 5, 6, 7],
            1e-6,
        );
    }

    #[test]
    fn test_linear_skips_drop_out() {
        run_positive(
            Method::Linear,
            &BASE_VALUES,
            &[0.40, 0.41, 0.42, 0.53, 0.54, 0.55],
            &[0.405, 0.415, 0.425, 0.435, 0.460, 0.515, 0.525, 0.535, 0.545],
            &[],
            &[0.50, 2.50, 5.50, 6.50, 5.50, 4.00],
            &[0, 1, 2, 6, 7, 8],
            1e-6,
        );
    }

    #[test]
    fn test_linear_isolated_first_sample() {
        // The lone sample at 0.40 has no usable neighbour; the points near it
        // are out of reach, and only the dense 0.51..0.55 block is usable
        run_positive(
            Method::Linear,
            &BASE_VALUES,
            &[0.40, 0.51, 0.52, 0.53, 0.54, 0.55],
            &[
                0.385, 0.395, 0.405, 0.415, 0.495, 0.505, 0.515, 0.525, 0.535, 0.545, 0.555, 0.565,
                0.635, 0.645, 0.655, 0.665,
            ],
            &[],
            &[-0.5, 2.5, 5.0, 5.5, 4.0, 2.0],
            &[5, 6, 7, 8, 9, 10],
            1e-6,
        );
    }

    #[test]
    fn test_linear_coarse_identical_axes() {
        run_positive(
            Method::Linear,
            &[0.0, 1.0, 4.0],
            &[0.4, 0.6, 0.8],
            &[0.4, 0.6, 0.8],
            &[],
            &[0.0, 1.0, 4.0],
            &[0, 1, 2],
            1e-6,
        );
    }

    #[test]
    fn test_no_bands_resampled() {
        run_negative(
            &[0.0, 1.0, 4.0],
            &[0.40, 0.41, 0.42],
            &[0.50, 0.51, 0.52],
            ResampleError::NoBandsResampled,
        );
    }

    #[test]
    fn test_cubic_spline_straddling() {
        run_positive(
            Method::CubicSpline,
            &BASE_VALUES,
            &BASE_WAVELENGTHS,
            &STRADDLING,
            &[],
            &[
                -0.291866028708,
                0.291866028708,
                2.374401913876,
                5.335526315789,
                5.783492822967,
                4.030502392344,
                1.969497607656,
            ],
            &[1, 2, 3, 4, 5, 6, 7],
            1e-6,
        );
    }

    #[test]
    fn test_duplicate_wavelengths() {
        run_negative(
            &[0.0, 1.0, 4.0, 5.0, 4.0, 2.0],
            &[0.40, 0.41, 0.42, 0.41, 0.43, 0.44],
            &[0.50, 0.51, 0.52],
            ResampleError::DuplicateWavelengths,
        );
    }

    #[test]
    fn test_value_count_mismatch() {
        run_negative(
            &[0.0, 1.0, 4.0, 5.0, 4.0, 2.0],
            &[0.40, 0.41, 0.42, 0.43, 0.44],
            &[0.50, 0.51, 0.52],
            ResampleError::LengthMismatch,
        );
        assert_eq!(
            ResampleError::LengthMismatch.to_string(),
            "Number of input data values differs from number of input wavelengths."
        );
    }

    #[test]
    fn test_gaussian_default_fwhm() {
        run_positive(
            Method::Gaussian,
            &BASE_VALUES,
            &BASE_WAVELENGTHS,
            &INTERIOR,
            &[],
            &[0.839510061, 2.501945599, 4.992217691, 5.492217765, 4.003898635],
            &[0, 1, 2, 3, 4],
            1e-6,
        );
    }

    #[test]
    fn test_gaussian_per_band_fwhm() {
        run_positive(
            Method::Gaussian,
            &BASE_VALUES,
            &BASE_WAVELENGTHS,
            &INTERIOR,
            &[0.020, 0.015, 0.010, 0.015, 0.025],
            &[1.244945068, 2.539888968, 4.992217691, 5.342002258, 4.325097502],
            &[0, 1, 2, 3, 4],
            1e-6,
        );
    }

    #[test]
    fn test_scrambled_source_and_destination() {
        run_positive(
            Method::Linear,
            &[0.0, 5.0, 1.0, 4.0, 6.0, 3.0],
            &[0.40, 0.44, 0.41, 0.42, 0.43, 0.45],
            &[0.4075, 0.4450, 0.4150, 0.4250, 0.4350],
            &[],
            &[0.75, 4.00, 2.50, 5.00, 5.50],
            &[0, 1, 2, 3, 4],
            1e-6,
        );
    }

    /// Degenerate axes that match exactly take the pass-through path before
    /// any duplicate check
    #[test]
    fn test_all_zero_axes_pass_through() {
        run_positive(
            Method::Linear,
            &[0.0, 5.0, 1.0, 4.0, 6.0, 3.0],
            &[0.0; 6],
            &[0.0; 6],
            &[],
            &[0.0, 5.0, 1.0, 4.0, 6.0, 3.0],
            &[0, 1, 2, 3, 4, 5],
            0.0,
        );
    }

    #[test]
    fn test_identical_unsorted_axes_copy_exactly() {
        let axis = [0.40, 0.50, 0.60, 0.70, 0.90, 0.80];
        run_positive(
            Method::Linear,
            &[0.0, 5.0, 1.0, 4.0, 6.0, 3.0],
            &axis,
            &axis,
            &[],
            &[0.0, 5.0, 1.0, 4.0, 6.0, 3.0],
            &[0, 1, 2, 3, 4, 5],
            0.0,
        );
    }

    #[test]
    fn test_reordered_destination_follows_caller_order() {
        run_positive(
            Method::Linear,
            &[0.0, 5.0, 1.0, 4.0, 6.0, 3.0],
            &[0.40, 0.50, 0.60, 0.70, 0.90, 0.80],
            &[0.40, 0.60, 0.50, 0.70, 0.90, 0.80],
            &[],
            &[0.0, 1.0, 5.0, 4.0, 6.0, 3.0],
            &[0, 1, 2, 3, 4, 5],
            1e-6,
        );
    }

    #[test]
    fn test_sparse_axes_single_point_matches() {
        run_positive(
            Method::Linear,
            &[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0],
            &[1.0, 2.0, 5.0, 3.0, 6.0, 7.0, 8.0],
            &[1.0, 12.0, 3.0, 4.0, 8.0, 5.0, 6.0, 7.0],
            &[],
            &[10.0, 13.0, 16.0, 12.0, 14.0, 15.0],
            &[0, 2, 4, 5, 6, 7],
            0.0,
        );
    }

    #[test]
    fn test_configuration_errors() {
        let negative = Resampler::new(ResamplerOptions::default().with_drop_out_window(-0.1));
        let err = negative
            .execute(&BASE_VALUES, &BASE_WAVELENGTHS, &INTERIOR, &[])
            .unwrap_err();
        assert_eq!(err, ResampleError::NegativeDropOutWindow);

        let err = resampler(Method::Linear)
            .execute_named(&BASE_VALUES, &BASE_WAVELENGTHS, &INTERIOR, &[], "Nearest")
            .unwrap_err();
        assert_eq!(err, ResampleError::UnknownMethod("Nearest".into()));

        // Shape problems win over an unknown method name
        let err = resampler(Method::Linear)
            .execute_named(&BASE_VALUES[..5], &BASE_WAVELENGTHS, &INTERIOR, &[], "Nearest")
            .unwrap_err();
        assert_eq!(err, ResampleError::LengthMismatch);

        let out = resampler(Method::Gaussian)
            .execute_named(&BASE_VALUES, &BASE_WAVELENGTHS, &INTERIOR, &[], "Linear")
            .unwrap();
        assert!((out.values[0] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_requires_positive_fwhm() {
        let gaussian = resampler(Method::Gaussian);
        let err = gaussian
            .execute(&BASE_VALUES, &BASE_WAVELENGTHS, &[0.415], &[0.0])
            .unwrap_err();
        assert_eq!(err, ResampleError::NonPositiveFwhm);
        let err = gaussian
            .execute(&BASE_VALUES, &BASE_WAVELENGTHS, &[0.415, 0.425], &[0.01, f64::NAN])
            .unwrap_err();
        assert_eq!(err, ResampleError::NonPositiveFwhm);

        let zero_default = Resampler::new(
            ResamplerOptions::default()
                .with_method(Method::Gaussian)
                .with_full_width_half_max(0.0),
        );
        let err = zero_default
            .execute(&BASE_VALUES, &BASE_WAVELENGTHS, &INTERIOR, &[])
            .unwrap_err();
        assert_eq!(err, ResampleError::NonPositiveFwhm);
        // Per-band widths replace the zero default
        let out = zero_default
            .execute(&BASE_VALUES, &BASE_WAVELENGTHS, &[0.415], &[0.01])
            .unwrap();
        assert!(out.values[0].is_finite());
        // Matching axes never reach the kernel
        let out = zero_default
            .execute(&BASE_VALUES, &BASE_WAVELENGTHS, &BASE_WAVELENGTHS, &[])
            .unwrap();
        assert_eq!(out.values, BASE_VALUES);

        // Widths are irrelevant to the other methods
        let out = resampler(Method::Linear)
            .execute(&BASE_VALUES, &BASE_WAVELENGTHS, &[0.415], &[0.0])
            .unwrap();
        assert!((out.values[0] - 2.5).abs() < 1e-12);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "all Gaussian weights underflowed")]
    fn test_gaussian_far_from_every_sample() {
        // A wide window bridges the gap, but the narrow kernel reaches no sample
        let wide = Resampler::new(
            ResamplerOptions::default()
                .with_method(Method::Gaussian)
                .with_drop_out_window(1.0),
        );
        let _ = wide.execute(&[1.0, 2.0, 3.0], &[0.0, 0.5, 1.0], &[0.25], &[]);
    }

    #[test]
    fn test_input_shape_errors() {
        let err = resample(&BASE_VALUES, &BASE_WAVELENGTHS, &INTERIOR, &[0.01, 0.02])
            .unwrap_err();
        assert_eq!(
            err,
            ResampleError::FwhmMismatch {
                expected: 5,
                actual: 2
            }
        );

        let err = resample::<f64>(&[], &[], &INTERIOR, &[]).unwrap_err();
        assert_eq!(err, ResampleError::NoWavelengths);
    }

    #[test]
    fn test_f32_linear() {
        let x: Vec<f32> = BASE_WAVELENGTHS.iter().map(|&v| v as f32).collect();
        let y: Vec<f32> = BASE_VALUES.iter().map(|&v| v as f32).collect();
        let out = resample(&y, &x, &[0.415_f32, 0.425], &[]).unwrap();
        assert_eq!(out.bands, vec![0, 1]);
        assert!((out.values[0] - 2.5).abs() < 1e-4);
        assert!((out.values[1] - 5.0).abs() < 1e-4);
    }

    /// Resampling onto the source axis is the identity for every method
    #[test]
    fn test_identity_on_source_axis() {
        let mut rng = rng_fixed_seed();
        let x = sorted_axis(&mut rng, 40, 0.4, 0.01);
        let y = randn::<f64>(&mut rng, x.len());

        for method in Method::ALL {
            let out = resampler(method).execute(&y, &x, &x, &[]).unwrap();
            assert_eq!(out.values, y);
            assert_eq!(out.bands, (0..x.len()).collect::<Vec<_>>());
        }
    }

    /// Without the pass-through, knots are still reproduced exactly by the
    /// methods that go through the data
    #[test]
    fn test_identity_on_shuffled_source_axis() {
        let mut rng = rng_fixed_seed();
        let x = sorted_axis(&mut rng, 40, 0.4, 0.01);
        let y = randn::<f64>(&mut rng, x.len());
        let mut order: Vec<usize> = (0..x.len()).collect();
        order.shuffle(&mut rng);
        let xs: Vec<f64> = order.iter().map(|&i| x[i]).collect();

        for method in [Method::Linear, Method::CubicSpline] {
            let out = resampler(method).execute(&y, &x, &xs, &[]).unwrap();
            assert_eq!(out.bands, (0..x.len()).collect::<Vec<_>>());
            for (k, &i) in order.iter().enumerate() {
                assert!((out.values[k] - y[i]).abs() < 1e-12);
            }
        }
    }

    /// Shuffling either axis changes nothing but the order of the output
    #[test]
    fn test_sorting_invariance() {
        let mut rng = rng_fixed_seed();
        let x = sorted_axis(&mut rng, 30, 0.4, 0.01);
        let y = randn::<f64>(&mut rng, x.len());
        let dest = linspace(0.39, 0.4 + 0.01 * 31.0, 17);
        let fwhm = linspace(0.005, 0.02, dest.len());

        let mut src_order: Vec<usize> = (0..x.len()).collect();
        src_order.shuffle(&mut rng);
        let xs: Vec<f64> = src_order.iter().map(|&i| x[i]).collect();
        let ys: Vec<f64> = src_order.iter().map(|&i| y[i]).collect();

        let mut dest_order: Vec<usize> = (0..dest.len()).collect();
        dest_order.shuffle(&mut rng);
        let dests: Vec<f64> = dest_order.iter().map(|&i| dest[i]).collect();
        let fwhms: Vec<f64> = dest_order.iter().map(|&i| fwhm[i]).collect();

        for method in Method::ALL {
            let r = resampler(method);
            let sorted = r.execute(&y, &x, &dest, &fwhm).unwrap();
            let shuffled = r.execute(&ys, &xs, &dests, &fwhms).unwrap();
            assert_eq!(sorted.len(), shuffled.len());

            // Map shuffled band positions back to the sorted destination
            let mut remapped: Vec<(usize, f64)> = shuffled
                .bands
                .iter()
                .zip(&shuffled.values)
                .map(|(&b, &v)| (dest_order[b], v))
                .collect();
            remapped.sort_by_key(|&(b, _)| b);

            for ((b, v), (eb, ev)) in remapped.iter().zip(sorted.bands.iter().zip(&sorted.values)) {
                assert_eq!(b, eb);
                assert!((v - ev).abs() < 1e-12);
            }
        }
    }

    /// Inside any segment narrower than the window, linear resampling of a
    /// linear function is exact
    #[test]
    fn test_linear_exact_inside_segments() {
        let mut rng = rng_fixed_seed();
        let x = sorted_axis(&mut rng, 25, 1.0, 0.02);
        let y: Vec<f64> = x.iter().map(|&v| 4.0 * v - 2.5).collect();
        let t = randn::<f64>(&mut rng, x.len() - 1);
        let dest: Vec<f64> = (0..x.len() - 1)
            .map(|i| x[i] + t[i] * (x[i + 1] - x[i]))
            .collect();

        let out = resample(&y, &x, &dest, &[]).unwrap();
        assert!(out.is_complete(dest.len()));
        for (v, d) in out.values.iter().zip(&dest) {
            assert!((v - (4.0 * d - 2.5)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_resampled_accessors() {
        let out = Resampled {
            values: vec![1.0, 2.0],
            bands: vec![0, 2],
        };
        assert_eq!(out.len(), 2);
        assert!(!out.is_empty());
        assert!(!out.is_complete(3));
        assert!(Resampled::<f64>::default().is_empty());
    }
}
