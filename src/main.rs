//! Resample spectral signatures onto a target set of band centres.
//!
//! ```sh
//! specresample --wavelengths sensor.txt grass.csv soil.csv
//! specresample --like reference.csv --method "Cubic Spline" --output-dir out sample.csv
//! ```

mod io;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use specresample::signature::{SignatureResampler, TargetWavelengths, WavelengthUnits};
use specresample::{Method, ResamplerOptions, DEFAULT_DROP_OUT_WINDOW, DEFAULT_FULL_WIDTH_HALF_MAX};

#[derive(Parser, Debug)]
#[command(name = "specresample")]
#[command(about = "Resample spectral signatures to a target set of wavelengths")]
#[command(version)]
#[command(group(ArgGroup::new("target").required(true).args(["wavelengths", "like"])))]
struct Cli {
    /// Signature CSV files with `wavelength` and `value` columns.
    #[arg(required = true, value_name = "SIGNATURES")]
    signatures: Vec<PathBuf>,

    /// Wavelength file: one band centre per line, optionally followed by its FWHM.
    #[arg(short, long, value_name = "FILE", env = "SPECRESAMPLE_WAVELENGTHS")]
    wavelengths: Option<PathBuf>,

    /// Use the wavelengths of another signature CSV as the target.
    #[arg(long, value_name = "CSV", env = "SPECRESAMPLE_LIKE")]
    like: Option<PathBuf>,

    /// "Linear", "Cubic Spline" or "Gaussian".
    #[arg(short, long, default_value_t = Method::Linear, env = "SPECRESAMPLE_METHOD")]
    method: Method,

    /// Widest gap between source wavelengths that may be bridged.
    #[arg(long, default_value_t = DEFAULT_DROP_OUT_WINDOW, env = "SPECRESAMPLE_DROP_OUT_WINDOW")]
    drop_out_window: f64,

    /// FWHM for target bands that have none.
    #[arg(long, default_value_t = DEFAULT_FULL_WIDTH_HALF_MAX, env = "SPECRESAMPLE_FWHM")]
    fwhm: f64,

    /// Keep every target band, writing this value where a signature has no data.
    #[arg(long, value_name = "V", allow_negative_numbers = true, env = "SPECRESAMPLE_FILL_VALUE")]
    fill_value: Option<f64>,

    /// Wavelength units of the inputs: microns, nanometers or wavenumber.
    #[arg(long, default_value_t = WavelengthUnits::Microns, env = "SPECRESAMPLE_UNITS")]
    units: WavelengthUnits,

    /// Directory for the resampled signatures.
    #[arg(short, long, value_name = "DIR", default_value = ".", env = "SPECRESAMPLE_OUTPUT_DIR")]
    output_dir: PathBuf,
}

impl Cli {
    fn options(&self) -> ResamplerOptions {
        ResamplerOptions::default()
            .with_method(self.method)
            .with_drop_out_window(self.drop_out_window)
            .with_full_width_half_max(self.fwhm)
            .with_fill_value(self.fill_value)
    }

    fn target(&self) -> Result<TargetWavelengths<f64>> {
        match (&self.wavelengths, &self.like) {
            (Some(path), _) => io::read_wavelengths(path),
            (None, Some(path)) => {
                let like = io::read_signature(path, self.units)?;
                Ok(TargetWavelengths::from_signature(&like))
            }
            (None, None) => bail!("one of --wavelengths or --like is required"),
        }
    }
}

/// Resample every input and write the results; returns how many files were
/// written.
fn run(cli: &Cli) -> Result<usize> {
    let target = cli.target()?;
    let signatures = cli
        .signatures
        .iter()
        .map(|path| io::read_signature(path, cli.units))
        .collect::<Result<Vec<_>>>()?;

    let resampler = SignatureResampler::new(cli.options());
    log::debug!("Resampling {} signatures with {:?}", signatures.len(), resampler.options());
    let report = resampler.resample_all(&signatures, &target)?;

    for (name, e) in &report.failed {
        log::error!("{name}: {e}");
    }

    for (signature, &source) in report.signatures.iter().zip(&report.sources) {
        let name = format!("{}_resampled", signatures[source].name);
        let path = io::write_signature(signature, &cli.output_dir, &name)?;
        log::info!("Wrote {}", path.display());
    }

    println!(
        "Resampled {} of {} signatures ({} already on the target wavelengths, {} skipped, {} failed)",
        report.resampled,
        report.total(),
        report.unchanged,
        report.skipped,
        report.failed.len()
    );
    Ok(report.signatures.len())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if run(&cli)? == 0 {
        bail!("No signatures could be resampled.");
    }
    Ok(())
}
