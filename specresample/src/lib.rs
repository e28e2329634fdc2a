//! Spectral resampling between irregular wavelength axes, no-std compatible
//! with `alloc`.
//!
//! A source spectrum (values at strictly increasing wavelengths) is mapped
//! onto a destination axis with one of three strategies:
//!
//! | Method       | Uses                                     | Cost per point         |
//! |--------------|------------------------------------------|------------------------|
//! | Linear       | the two bracketing samples               | O(log n)               |
//! | Cubic Spline | a natural spline over the whole axis     | O(log n), O(n) setup   |
//! | Gaussian     | every sample, weighted by the band FWHM  | O(n)                   |
//!
//! Destination points that sit in a gap wider than the drop-out window, or
//! too far past either end of the source axis, are dropped rather than
//! guessed at. The output carries the index of every destination point that
//! was produced, in the caller's original order.
//!
//! # Example
//! ```rust
//! use specresample::resample;
//!
//! let wavelengths = [0.40_f64, 0.41, 0.42, 0.43, 0.44, 0.45];
//! let values = [0.0, 1.0, 4.0, 6.0, 5.0, 3.0];
//!
//! // The last target is 0.05 past the axis and cannot be reached
//! let out = resample(&values, &wavelengths, &[0.415, 0.395, 0.50], &[]).unwrap();
//! assert_eq!(out.bands, vec![0, 1]);
//! assert!((out.values[0] - 2.5).abs() < 1e-12);
//! assert!((out.values[1] + 0.5).abs() < 1e-12);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bracket;
pub mod error;
pub mod interpolate;
pub mod options;
pub mod resampler;
pub mod signature;

pub use bracket::{Bracket, BracketLocator};
pub use error::ResampleError;
pub use interpolate::{Interpolate, Strategy};
pub use options::{Method, ResamplerOptions, DEFAULT_DROP_OUT_WINDOW, DEFAULT_FULL_WIDTH_HALF_MAX};
pub use resampler::{resample, Resampled, Resampler};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
