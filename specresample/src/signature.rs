//! Batch resampling of named spectral signatures onto a common set of band
//! centres, with optional gap filling.
//!
//! ```rust
//! use specresample::signature::{Signature, SignatureResampler, TargetWavelengths};
//! use specresample::ResamplerOptions;
//!
//! let sig = Signature::new(
//!     "grass",
//!     vec![0.40, 0.41, 0.42, 0.43, 0.44, 0.45],
//!     vec![0.0, 1.0, 4.0, 6.0, 5.0, 3.0],
//! );
//! let target = TargetWavelengths::new(vec![0.405, 0.415, 0.425], Vec::new());
//!
//! let resampler = SignatureResampler::new(ResamplerOptions::default());
//! let out = resampler.resample(&sig, &target).unwrap().unwrap();
//! assert_eq!(out.name, "grass_resampled");
//! assert_eq!(out.wavelengths, vec![0.405, 0.415, 0.425]);
//! ```

use core::fmt;
use core::str::FromStr;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use num_traits::{Float, NumCast};

use crate::{ResampleError, Resampled, Resampler, ResamplerOptions};

/// Units of a wavelength axis, which decide how close two band centres must
/// be to count as the same band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WavelengthUnits {
    #[default]
    Microns,
    Nanometers,
    InverseCentimeters,
}

impl WavelengthUnits {
    /// 0.1 nm, or 0.001 cm^-1, expressed in these units.
    pub fn close_enough(&self) -> f64 {
        match self {
            WavelengthUnits::Microns => 0.0001,
            WavelengthUnits::Nanometers => 0.1,
            WavelengthUnits::InverseCentimeters => 0.001,
        }
    }
}

impl fmt::Display for WavelengthUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WavelengthUnits::Microns => "microns",
            WavelengthUnits::Nanometers => "nanometers",
            WavelengthUnits::InverseCentimeters => "wavenumber",
        })
    }
}

impl FromStr for WavelengthUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "microns" | "micrometers" | "um" => Ok(WavelengthUnits::Microns),
            "nanometers" | "nm" => Ok(WavelengthUnits::Nanometers),
            "wavenumber" | "inverse centimeters" | "cm-1" => Ok(WavelengthUnits::InverseCentimeters),
            _ => Err(format!("Unknown wavelength units \"{s}\"")),
        }
    }
}

/// A named spectrum: one value per wavelength.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature<T> {
    pub name: String,
    pub wavelengths: Vec<T>,
    pub values: Vec<T>,
    pub units: WavelengthUnits,
    /// Name of the wavelength source this signature was resampled onto
    pub resampled_to: Option<String>,
    /// Value written into bands the source signature did not cover
    pub fill_value: Option<T>,
}

impl<T> Signature<T> {
    pub fn new(name: impl Into<String>, wavelengths: Vec<T>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            wavelengths,
            values,
            units: WavelengthUnits::default(),
            resampled_to: None,
            fill_value: None,
        }
    }

    pub fn with_units(mut self, units: WavelengthUnits) -> Self {
        self.units = units;
        self
    }
}

/// Band centres (and optionally widths) to resample onto.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetWavelengths<T> {
    centers: Vec<T>,
    fwhm: Vec<T>,
    source_name: Option<String>,
}

impl<T: Clone> TargetWavelengths<T> {
    /// Widths that do not pair up one-to-one with `centers` are discarded,
    /// leaving the default FWHM in effect.
    pub fn new(centers: Vec<T>, fwhm: Vec<T>) -> Self {
        let fwhm = if fwhm.len() == centers.len() {
            fwhm
        } else {
            if !fwhm.is_empty() {
                log::debug!(
                    "Ignoring {} FWHM values for {} band centers",
                    fwhm.len(),
                    centers.len()
                );
            }
            Vec::new()
        };
        Self {
            centers,
            fwhm,
            source_name: None,
        }
    }

    /// Use another signature's wavelengths as the target.
    pub fn from_signature(signature: &Signature<T>) -> Self {
        Self::new(signature.wavelengths.clone(), Vec::new()).named(signature.name.clone())
    }

    /// Record where these wavelengths came from.
    pub fn named(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    pub fn centers(&self) -> &[T] {
        &self.centers
    }

    pub fn fwhm(&self) -> &[T] {
        &self.fwhm
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

/// Whether `signature` must be resampled to line up with `target`, judged
/// band-by-band with the tolerance of the signature's units.
pub fn needs_resampling<T: Float>(signature: &Signature<T>, target: &TargetWavelengths<T>) -> bool {
    if signature.wavelengths.len() != target.centers.len() {
        return true;
    }
    let close_enough = match <T as NumCast>::from(signature.units.close_enough()) {
        Some(v) => v,
        None => return true,
    };
    signature
        .wavelengths
        .iter()
        .zip(&target.centers)
        .any(|(&a, &b)| (a - b).abs() > close_enough)
}

/// Result of resampling a batch of signatures.
#[derive(Clone, Debug, Default)]
pub struct BatchReport<T> {
    /// Output signatures in input order: resampled copies, or the originals
    /// where no resampling was needed
    pub signatures: Vec<Signature<T>>,
    /// Index into the input batch of each entry in `signatures`
    pub sources: Vec<usize>,
    pub resampled: usize,
    pub unchanged: usize,
    /// Too little coverage to be worth keeping
    pub skipped: usize,
    pub failed: Vec<(String, ResampleError)>,
}

impl<T> BatchReport<T> {
    pub fn total(&self) -> usize {
        self.resampled + self.unchanged + self.skipped + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.resampled + self.unchanged == self.total()
    }
}

/// Resamples whole signatures with one set of options.
#[derive(Clone, Debug, Default)]
pub struct SignatureResampler {
    resampler: Resampler,
}

impl SignatureResampler {
    pub fn new(options: ResamplerOptions) -> Self {
        Self {
            resampler: Resampler::new(options),
        }
    }

    pub fn options(&self) -> &ResamplerOptions {
        self.resampler.options()
    }

    /// Resample one signature onto `target`.
    ///
    /// Returns a clone of `signature` if it already matches the target,
    /// `Ok(None)` if fewer than two target bands were covered, and otherwise a
    /// new signature named `"<name>_resampled"`. When some bands are not
    /// covered they are either filled with the configured fill value or left
    /// out of the result, depending on `use_fill_value`.
    ///
    /// # Errors
    /// * Any error from [`Resampler::execute`]
    pub fn resample<T: Float>(
        &self,
        signature: &Signature<T>,
        target: &TargetWavelengths<T>,
    ) -> Result<Option<Signature<T>>, ResampleError> {
        if !needs_resampling(signature, target) {
            return Ok(Some(signature.clone()));
        }

        let Resampled { values, bands } = self.resampler.execute(
            &signature.values,
            &signature.wavelengths,
            &target.centers,
            &target.fwhm,
        )?;

        let mut out = Signature::new(
            format!("{}_resampled", signature.name),
            target.centers.clone(),
            values,
        )
        .with_units(signature.units);
        out.resampled_to = target.source_name.clone();

        if bands.len() != target.centers.len() {
            if bands.len() < 2 {
                return Ok(None);
            }

            let options = self.resampler.options();
            if options.use_fill_value {
                let fill = <T as NumCast>::from(options.fill_value).ok_or(ResampleError::Unrepresentable)?;
                let mut filled = alloc::vec![fill; target.centers.len()];
                for (&band, &value) in bands.iter().zip(&out.values) {
                    filled[band] = value;
                }
                out.values = filled;
                out.fill_value = Some(fill);
            } else {
                out.wavelengths = bands.iter().map(|&b| target.centers[b]).collect();
            }
        }

        Ok(Some(out))
    }

    /// Resample every signature in `signatures`; failures are recorded in
    /// the report and do not stop the batch.
    ///
    /// # Errors
    /// * If `signatures` is empty
    pub fn resample_all<T: Float>(
        &self,
        signatures: &[Signature<T>],
        target: &TargetWavelengths<T>,
    ) -> Result<BatchReport<T>, ResampleError> {
        if signatures.is_empty() {
            return Err(ResampleError::NoSignatures);
        }

        let mut report = BatchReport {
            signatures: Vec::with_capacity(signatures.len()),
            sources: Vec::with_capacity(signatures.len()),
            resampled: 0,
            unchanged: 0,
            skipped: 0,
            failed: Vec::new(),
        };
        for (i, sig) in signatures.iter().enumerate() {
            if !needs_resampling(sig, target) {
                report.signatures.push(sig.clone());
                report.sources.push(i);
                report.unchanged += 1;
                continue;
            }
            match self.resample(sig, target) {
                Ok(Some(out)) => {
                    report.signatures.push(out);
                    report.sources.push(i);
                    report.resampled += 1;
                }
                Ok(None) => {
                    log::debug!("Signature \"{}\" covers fewer than two target bands", sig.name);
                    report.skipped += 1;
                }
                Err(e) => {
                    log::debug!("Signature \"{}\" could not be resampled: {e}", sig.name);
                    report.failed.push((sig.name.to_string(), e));
                }
            }
            log::trace!("Resampled signature {} of {} signatures", i + 1, signatures.len());
        }

        if !report.is_complete() {
            log::warn!(
                "Only {} of the {} signatures were successfully resampled.",
                report.resampled + report.unchanged,
                report.total()
            );
        }

        Ok(report)
    }
}
