//! Resampling method selection and per-call configuration.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::ResampleError;

/// Default maximum gap between neighbouring source wavelengths, in the
/// units of the wavelength axis (microns for the usual hyperspectral case).
pub const DEFAULT_DROP_OUT_WINDOW: f64 = 0.05;

/// Default Gaussian full-width-half-max used when no per-band FWHM is given.
pub const DEFAULT_FULL_WIDTH_HALF_MAX: f64 = 0.01;

/// Interpolation strategy used to produce each resampled value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Two-point linear interpolation within the bracket.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "Linear"))]
    Linear,
    /// Natural cubic spline fitted over the whole source axis.
    #[cfg_attr(feature = "serde", serde(rename = "Cubic Spline"))]
    CubicSpline,
    /// Gaussian-weighted average over the whole source axis.
    #[cfg_attr(feature = "serde", serde(rename = "Gaussian"))]
    Gaussian,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Linear, Method::CubicSpline, Method::Gaussian];

    /// Canonical display name, also accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Method::Linear => "Linear",
            Method::CubicSpline => "Cubic Spline",
            Method::Gaussian => "Gaussian",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ResampleError::UnknownMethod(s.to_string()))
    }
}

/// Settings shared by every call made through a [`Resampler`](crate::Resampler).
///
/// `use_fill_value` and `fill_value` only matter to the signature layer
/// ([`SignatureResampler`](crate::signature::SignatureResampler)); the
/// engine itself never fills gaps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResamplerOptions {
    pub method: Method,
    pub drop_out_window: f64,
    pub full_width_half_max: f64,
    pub use_fill_value: bool,
    pub fill_value: f64,
}

impl Default for ResamplerOptions {
    fn default() -> Self {
        Self {
            method: Method::default(),
            drop_out_window: DEFAULT_DROP_OUT_WINDOW,
            full_width_half_max: DEFAULT_FULL_WIDTH_HALF_MAX,
            use_fill_value: false,
            fill_value: 0.0,
        }
    }
}

impl ResamplerOptions {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_drop_out_window(mut self, drop_out_window: f64) -> Self {
        self.drop_out_window = drop_out_window;
        self
    }

    pub fn with_full_width_half_max(mut self, fwhm: f64) -> Self {
        self.full_width_half_max = fwhm;
        self
    }

    /// Enable gap filling with `fill_value`, or disable it with `None`.
    pub fn with_fill_value(mut self, fill_value: Option<f64>) -> Self {
        self.use_fill_value = fill_value.is_some();
        self.fill_value = fill_value.unwrap_or(0.0);
        self
    }
}
