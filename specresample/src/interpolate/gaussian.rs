//! Gaussian-kernel resampling, modelling a detector band as a Gaussian
//! spectral response centred on the destination wavelength.

use num_traits::Float;

use super::Interpolate;

/// Weighted average of the whole source spectrum under a normal density
/// with standard deviation `fwhm / (2 sqrt(2 ln 2))`.
///
/// O(n) per destination point; the bracket is ignored.
#[derive(Clone, Copy)]
pub struct Gaussian1D<'a, T: Float> {
    wavelengths: &'a [T],
    values: &'a [T],
}

impl<'a, T: Float> Gaussian1D<'a, T> {
    pub fn new(wavelengths: &'a [T], values: &'a [T]) -> Self {
        Self {
            wavelengths,
            values,
        }
    }

    /// Kernel-weighted average at `loc` for a band of width `fwhm`.
    ///
    /// `fwhm` must be positive, and `loc` close enough to the source axis that
    /// some weight survives; the driver only calls this for bracketed points.
    #[inline]
    pub fn eval_one(&self, loc: T, fwhm: T) -> T {
        let one = T::one();
        let two = one + one;
        let half = one / two;
        let pi = (-one).acos();
        let sigma = fwhm / (two * (two * two.ln()).sqrt());
        debug_assert!(sigma > T::zero(), "non-positive Gaussian FWHM");
        let norm = one / (sigma * (two * pi).sqrt());

        let mut value = T::zero();
        let mut scale = T::zero();
        for (&x, &y) in self.wavelengths.iter().zip(self.values) {
            let ratio = (loc - x) / sigma;
            let probability = norm * (-ratio * ratio * half).exp();
            scale = scale + probability;
            value = value + y * probability;
        }

        debug_assert!(scale > T::zero(), "all Gaussian weights underflowed");
        value / scale
    }
}

impl<T: Float> Interpolate<T> for Gaussian1D<'_, T> {
    #[inline]
    fn resample_point(&self, _left: usize, _right: usize, to_wavelength: T, to_fwhm: T) -> T {
        self.eval_one(to_wavelength, to_fwhm)
    }
}
