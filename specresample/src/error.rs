//! Failure taxonomy for a resampling call.

use alloc::string::String;

/// Everything that can stop a resampling call from producing output.
///
/// Points that merely fall into an unresamplable gap are not errors; they are
/// dropped from the output and can be detected by comparing
/// [`Resampled::bands`](crate::Resampled) against the requested axis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ResampleError {
    #[error("Number of input data values differs from number of input wavelengths.")]
    LengthMismatch,

    #[error("Number of FWHM values ({actual}) differs from number of output wavelengths ({expected}).")]
    FwhmMismatch { expected: usize, actual: usize },

    /// The method name did not match any known strategy.
    #[error("Unable to create interpolator for resampling.")]
    UnknownMethod(String),

    #[error("Drop Out Window must be at least 0.0.")]
    NegativeDropOutWindow,

    /// The Gaussian kernel needs a positive width for every band it resamples.
    #[error("Full Width Half Max must be greater than 0.0 for Gaussian resampling.")]
    NonPositiveFwhm,

    #[error("Signature has no wavelengths.")]
    NoWavelengths,

    #[error("Signature wavelengths have duplicate values.")]
    DuplicateWavelengths,

    #[error("Signature has no data.")]
    NoData,

    #[error("No bands could be resampled.")]
    NoBandsResampled,

    #[error("No signatures are available to be resampled.")]
    NoSignatures,

    /// A configuration value could not be cast into the working float type.
    #[error("Unrepresentable number")]
    Unrepresentable,
}
