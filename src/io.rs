//! Reading and writing signatures and wavelength files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use specresample::signature::{Signature, TargetWavelengths, WavelengthUnits};

/// One row of a signature CSV file.
#[derive(Debug, Deserialize, Serialize)]
struct Row {
    wavelength: f64,
    value: f64,
}

/// Signature name for a file: its stem, or the whole path if it has none.
fn name_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Load a signature from a CSV file with `wavelength` and `value` columns.
pub fn read_signature(path: &Path, units: WavelengthUnits) -> Result<Signature<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)
        .with_context(|| format!("opening signature {}", path.display()))?;

    let mut wavelengths = Vec::new();
    let mut values = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let row: Row = result.with_context(|| format!("{}: CSV row {row_no}", path.display()))?;
        wavelengths.push(row.wavelength);
        values.push(row.value);
    }

    Ok(Signature::new(name_of(path), wavelengths, values).with_units(units))
}

/// Write `signature` to `<dir>/<name>.csv`, creating `dir` if needed.
pub fn write_signature(signature: &Signature<f64>, dir: &Path, name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(format!("{name}.csv"));

    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    for (&wavelength, &value) in signature.wavelengths.iter().zip(&signature.values) {
        writer.serialize(Row { wavelength, value })?;
    }
    writer.flush()?;

    Ok(path)
}

/// Parse a wavelength file: one band per line, the centre optionally
/// followed by its FWHM, separated by whitespace or a comma. Blank lines and
/// anything after `#` are ignored.
pub fn parse_wavelengths(text: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut centers = Vec::new();
    let mut fwhm = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("");
        let mut fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty());

        let Some(center) = fields.next() else {
            continue;
        };
        let center: f64 = center
            .parse()
            .with_context(|| format!("line {}: invalid wavelength \"{center}\"", line_no + 1))?;
        centers.push(center);

        if let Some(width) = fields.next() {
            let width: f64 = width
                .parse()
                .with_context(|| format!("line {}: invalid FWHM \"{width}\"", line_no + 1))?;
            fwhm.push(width);
        }
        if let Some(extra) = fields.next() {
            bail!("line {}: unexpected field \"{extra}\"", line_no + 1);
        }
    }

    if centers.is_empty() {
        bail!("no wavelengths found");
    }
    Ok((centers, fwhm))
}

/// Load target band centres from a wavelength file.
pub fn read_wavelengths(path: &Path) -> Result<TargetWavelengths<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading wavelengths {}", path.display()))?;
    let (centers, fwhm) =
        parse_wavelengths(&text).with_context(|| format!("parsing wavelengths {}", path.display()))?;
    log::debug!(
        "Read {} band centers and {} FWHM values from {}",
        centers.len(),
        fwhm.len(),
        path.display()
    );

    Ok(TargetWavelengths::new(centers, fwhm).named(name_of(path)))
}
