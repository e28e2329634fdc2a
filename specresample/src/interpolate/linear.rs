//! Two-point linear interpolation / extrapolation

use num_traits::Float;

use super::Interpolate;

/// Straight line through the two bracketing samples. Extrapolated brackets
/// (target outside `left..=right`) simply extend the line.
#[derive(Clone, Copy)]
pub struct Linear1D<'a, T: Float> {
    wavelengths: &'a [T],
    values: &'a [T],
}

impl<'a, T: Float> Linear1D<'a, T> {
    pub fn new(wavelengths: &'a [T], values: &'a [T]) -> Self {
        Self {
            wavelengths,
            values,
        }
    }
}

impl<T: Float> Interpolate<T> for Linear1D<'_, T> {
    #[inline]
    fn resample_point(&self, left: usize, right: usize, to_wavelength: T, _to_fwhm: T) -> T {
        let (x0, x1) = (self.wavelengths[left], self.wavelengths[right]);
        let (y0, y1) = (self.values[left], self.values[right]);
        debug_assert!(x1 != x0, "zero-width bracket");

        y0 + (to_wavelength - x0) * (y1 - y0) / (x1 - x0)
    }
}
