//! Per-point resampling strategies.
//!
//! Every strategy is bound to one sorted, duplicate-free source spectrum and
//! turns a [`Bracket::Span`](crate::Bracket) plus a target wavelength into a
//! single value. Which samples a strategy actually reads differs:
//! * [`Linear1D`] only reads the two bracketing samples
//! * [`CubicSpline1D`] evaluates a spline fitted once over the whole axis
//! * [`Gaussian1D`] weights every source sample, using the bracket only as
//!   the signal that the point is worth resampling at all

pub mod gaussian;
pub mod linear;
pub mod spline;

pub use gaussian::Gaussian1D;
pub use linear::Linear1D;
pub use spline::CubicSpline1D;

use num_traits::Float;

use crate::Method;

/// A resampling strategy over a fixed source spectrum.
pub trait Interpolate<T: Float> {
    /// Produce the value at `to_wavelength` from the segment `left..=right`.
    ///
    /// `to_fwhm` is only meaningful to kernel methods.
    /// Assumes `left < right` are valid indices into the source axis.
    fn resample_point(&self, left: usize, right: usize, to_wavelength: T, to_fwhm: T) -> T;
}

/// The strategy chosen for one resampling call.
pub enum Strategy<'a, T: Float> {
    Linear(Linear1D<'a, T>),
    CubicSpline(CubicSpline1D<'a, T>),
    Gaussian(Gaussian1D<'a, T>),
}

impl<'a, T: Float> Strategy<'a, T> {
    /// Bind `method` to a sorted source spectrum.
    ///
    /// Spline setup is O(n) and happens here, once per call.
    pub fn new(method: Method, wavelengths: &'a [T], values: &'a [T]) -> Self {
        match method {
            Method::Linear => Strategy::Linear(Linear1D::new(wavelengths, values)),
            Method::CubicSpline => Strategy::CubicSpline(CubicSpline1D::new(wavelengths, values)),
            Method::Gaussian => Strategy::Gaussian(Gaussian1D::new(wavelengths, values)),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Strategy::Linear(_) => Method::Linear,
            Strategy::CubicSpline(_) => Method::CubicSpline,
            Strategy::Gaussian(_) => Method::Gaussian,
        }
    }
}

impl<T: Float> Interpolate<T> for Strategy<'_, T> {
    #[inline]
    fn resample_point(&self, left: usize, right: usize, to_wavelength: T, to_fwhm: T) -> T {
        match self {
            Strategy::Linear(s) => s.resample_point(left, right, to_wavelength, to_fwhm),
            Strategy::CubicSpline(s) => s.resample_point(left, right, to_wavelength, to_fwhm),
            Strategy::Gaussian(s) => s.resample_point(left, right, to_wavelength, to_fwhm),
        }
    }
}
