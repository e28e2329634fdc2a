//! Locating the source samples that a destination wavelength is built from.
//!
//! The source axis may have drop-outs: neighbouring wavelengths further apart
//! than the drop-out window. Inside such a gap there is no trustworthy data, so
//! a destination point there is only resampled if it sits close enough to a
//! usable end segment (extrapolation, within `window / 5`) or close enough to a
//! single source sample (direct copy, within `window / 20`). Everything else is
//! dropped.
//!
//! The order in which these rules are tried decides which points survive and
//! must not be rearranged.

use num_traits::Float;

use crate::ResampleError;

/// Source samples backing one destination point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bracket {
    /// Use the source value at this index as-is.
    Point(usize),
    /// Interpolate (or extrapolate) from the segment `left..=right`.
    Span(usize, usize),
}

/// Bracket search over a sorted, duplicate-free source axis.
#[derive(Clone, Copy, Debug)]
pub struct BracketLocator<'a, T: Float> {
    wavelengths: &'a [T],
    drop_out_window: T,
}

impl<'a, T: Float> BracketLocator<'a, T> {
    /// Wrap a source axis. `wavelengths` must be sorted ascending; this is
    /// not checked here.
    pub fn new(wavelengths: &'a [T], drop_out_window: T) -> Self {
        Self {
            wavelengths,
            drop_out_window,
        }
    }

    pub fn wavelengths(&self) -> &'a [T] {
        self.wavelengths
    }

    pub fn drop_out_window(&self) -> T {
        self.drop_out_window
    }

    /// Find the source samples for `to_wavelength`.
    ///
    /// Returns `Ok(None)` when the point cannot be resampled and should be
    /// dropped.
    ///
    /// # Errors
    /// * If the source axis is empty
    pub fn locate(&self, to_wavelength: T) -> Result<Option<Bracket>, ResampleError> {
        let x = self.wavelengths;
        let n = x.len();
        if n == 0 {
            return Err(ResampleError::NoWavelengths);
        }

        if to_wavelength < x[0] || to_wavelength > x[n - 1] {
            // Outside the axis: only the end segments can reach it
            if n < 2 {
                return Ok(None);
            }
            if self.can_extrapolate(x[0], x[1], to_wavelength) {
                return Ok(Some(Bracket::Span(0, 1)));
            }
            if self.can_extrapolate(x[n - 2], x[n - 1], to_wavelength) {
                return Ok(Some(Bracket::Span(n - 2, n - 1)));
            }
            return Ok(None);
        }

        // First source wavelength strictly above the target
        let Some(i) = x.iter().position(|&v| v > to_wavelength) else {
            // Only reachable when the target equals the last wavelength
            let last = n - 1;
            return Ok(self
                .can_use_single_point(x[last], to_wavelength)
                .then_some(Bracket::Point(last)));
        };

        let bracket = if i == 0 {
            self.can_use_single_point(x[0], to_wavelength)
                .then_some(Bracket::Point(0))
        } else if x[i] - x[i - 1] < self.drop_out_window {
            Some(Bracket::Span(i - 1, i))
        } else if i >= 2 && self.can_extrapolate(x[i - 2], x[i - 1], to_wavelength) {
            Some(Bracket::Span(i - 2, i - 1))
        } else if i + 2 <= n && self.can_extrapolate(x[i], x[i + 1], to_wavelength) {
            Some(Bracket::Span(i, i + 1))
        } else if self.can_use_single_point(x[i], to_wavelength) {
            Some(Bracket::Point(i))
        } else if self.can_use_single_point(x[i - 1], to_wavelength) {
            Some(Bracket::Point(i - 1))
        } else {
            None
        };

        Ok(bracket)
    }

    /// Whether the segment `(left, right)` is narrow enough to trust and the
    /// target lies just beyond one of its ends.
    #[inline]
    pub fn can_extrapolate(&self, left: T, right: T, to_wavelength: T) -> bool {
        if right - left < self.drop_out_window {
            let reach = self.drop_out_window / five::<T>();
            if to_wavelength < left && to_wavelength + reach > left {
                return true;
            }
            if to_wavelength > right && to_wavelength - reach < right {
                return true;
            }
        }
        false
    }

    /// Whether `from_wavelength` is close enough to stand in for the target.
    #[inline]
    pub fn can_use_single_point(&self, from_wavelength: T, to_wavelength: T) -> bool {
        (from_wavelength - to_wavelength).abs() < self.drop_out_window / twenty::<T>()
    }

    /// Whether `to_wavelengths` matches the source axis band-for-band, so
    /// that the source values can be returned untouched.
    pub fn no_resampling_necessary(&self, to_wavelengths: &[T]) -> bool {
        self.wavelengths.len() == to_wavelengths.len()
            && self
                .wavelengths
                .iter()
                .zip(to_wavelengths)
                .all(|(&from, &to)| self.can_use_single_point(from, to))
    }
}

/// Whether any two neighbouring values are equal. On a sorted axis this
/// finds every duplicate.
pub fn has_duplicate_values<T: PartialEq>(values: &[T]) -> bool {
    values.windows(2).any(|w| w[0] == w[1])
}

#[inline]
fn five<T: Float>() -> T {
    T::one() + T::one() + T::one() + T::one() + T::one()
}

#[inline]
fn twenty<T: Float>() -> T {
    let four = T::one() + T::one() + T::one() + T::one();
    four * five::<T>()
}
