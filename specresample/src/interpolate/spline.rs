//! Natural cubic spline over the full source axis.
//!
//! The second derivatives at every knot come from the usual tridiagonal
//! solve with zero curvature imposed at both ends. Setup is O(n) per call;
//! each evaluation is a bisection search plus the cubic blend of the two
//! knots around the target, so targets outside the axis follow the end
//! polynomial.

use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use super::Interpolate;

/// Natural cubic spline bound to one source spectrum.
#[derive(Clone)]
pub struct CubicSpline1D<'a, T: Float> {
    wavelengths: &'a [T],
    values: &'a [T],

    /// Second derivative of the spline at each knot
    y2: Vec<T>,
}

impl<'a, T: Float> CubicSpline1D<'a, T> {
    /// Fit the spline. Assumes `wavelengths` is strictly increasing and the
    /// same length as `values`.
    pub fn new(wavelengths: &'a [T], values: &'a [T]) -> Self {
        let y2 = second_derivatives(wavelengths, values);
        Self {
            wavelengths,
            values,
            y2,
        }
    }

    /// Evaluate the spline at `loc`.
    #[inline]
    pub fn eval_one(&self, loc: T) -> T {
        let x = self.wavelengths;
        let y = self.values;
        let n = x.len();
        if n < 2 {
            // A single knot has no interval to blend across
            return y[0];
        }

        // Lower knot of the interval containing `loc`, clipped to the interior
        let lo = (x.partition_point(|v| *v <= loc) as isize - 1).clamp(0, n as isize - 2) as usize;
        let hi = lo + 1;

        let h = x[hi] - x[lo];
        debug_assert!(h != T::zero(), "zero-width spline interval");
        let a = (x[hi] - loc) / h;
        let b = (loc - x[lo]) / h;
        let two = T::one() + T::one();
        let six = two + two + two;

        a * y[lo] + b * y[hi] + ((a * a * a - a) * self.y2[lo] + (b * b * b - b) * self.y2[hi]) * (h * h) / six
    }

    pub fn second_derivatives(&self) -> &[T] {
        &self.y2
    }
}

impl<T: Float> Interpolate<T> for CubicSpline1D<'_, T> {
    #[inline]
    fn resample_point(&self, _left: usize, _right: usize, to_wavelength: T, _to_fwhm: T) -> T {
        self.eval_one(to_wavelength)
    }
}

/// Tridiagonal solve for knot curvatures with natural boundary conditions.
fn second_derivatives<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    let n = x.len();
    let zero = T::zero();
    let mut y2 = vec![zero; n];
    if n < 3 {
        // Zero curvature at both ends leaves nothing to solve
        return y2;
    }

    let one = T::one();
    let two = one + one;
    let six = two + two + two;
    let mut u = vec![zero; n];

    // Forward sweep
    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * y2[i - 1] + two;
        y2[i] = (sig - one) / p;
        u[i] = (y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
        u[i] = (six * u[i] / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
    }

    // Back substitution; the last knot stays at zero curvature
    y2[n - 1] = zero;
    for k in (0..n - 1).rev() {
        y2[k] = y2[k] * y2[k + 1] + u[k];
    }

    y2
}
