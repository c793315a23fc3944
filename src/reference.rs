//! Reference finite-element result files
//!
//! Files hold whitespace-separated rows whose first two numeric fields are a
//! coordinate and a value. Deflection files use the span coordinate as is;
//! stress files store the physical thickness coordinate, mapped back onto
//! z ∈ [-1/2, 1/2] by `z = c / h - 1/2`.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{PlateError, PlateResult};
use crate::evaluate::SampledCurve;
use crate::loads::LoadingKind;

/// Affine map `c * scale - shift` applied to file coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRescale {
    pub scale: f64,
    pub shift: f64,
}

impl AxisRescale {
    /// Identity map
    pub const IDENTITY: AxisRescale = AxisRescale {
        scale: 1.0,
        shift: 0.0,
    };

    pub fn new(scale: f64, shift: f64) -> Self {
        Self { scale, shift }
    }

    /// Physical thickness coordinate to the normalized one
    pub fn thickness(h: f64) -> Self {
        Self::new(1.0 / h, 0.5)
    }

    pub fn apply(&self, c: f64) -> f64 {
        c * self.scale - self.shift
    }
}

impl Default for AxisRescale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Kind of quantity a reference file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceQuantity {
    Deflection,
    /// In-plane normal stress (σ11)
    NormalStress,
    /// Transverse shear stress (σ13)
    ShearStress,
}

impl ReferenceQuantity {
    fn tag(&self) -> &'static str {
        match self {
            ReferenceQuantity::Deflection => "W",
            ReferenceQuantity::NormalStress => "SX",
            ReferenceQuantity::ShearStress => "SXY",
        }
    }

    /// File-name suffix, e.g. `_SX_uniform`
    pub fn suffix(&self, loading: LoadingKind) -> String {
        format!("_{}_{}", self.tag(), loading.as_str())
    }

    /// Coordinate map for a plate of thickness `h`
    pub fn rescale(&self, h: f64) -> AxisRescale {
        match self {
            ReferenceQuantity::Deflection => AxisRescale::IDENTITY,
            ReferenceQuantity::NormalStress | ReferenceQuantity::ShearStress => {
                AxisRescale::thickness(h)
            }
        }
    }
}

/// `{base}_conc0{⌊100 g⌋}_h{h without '.'}{suffix}.txt`
pub fn reference_file_name(base: &str, concentration: f64, thickness: f64, suffix: &str) -> String {
    // Plain truncation of the float product: 0.29 reads as 28
    let percent = (concentration * 100.0).trunc() as i64;
    // Whole thicknesses keep their ".0", so 1.0 becomes "10"
    let h = if thickness.fract() == 0.0 {
        format!("{thickness:.1}")
    } else {
        thickness.to_string()
    }
    .replace('.', "");
    format!("{base}_conc0{percent}_h{h}{suffix}.txt")
}

/// Read a reference file, rescaling coordinates
///
/// Blank lines are skipped; a row without two leading numeric fields is an
/// error carrying its 1-based line number.
pub fn read_reference(path: &Path, rescale: AxisRescale) -> PlateResult<SampledCurve> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PlateError::MissingReferenceData(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut pairs = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut fields = trimmed.split_whitespace().map(str::parse::<f64>);
        match (fields.next(), fields.next()) {
            (Some(Ok(c)), Some(Ok(v))) => pairs.push((rescale.apply(c), v)),
            _ => {
                return Err(PlateError::MalformedReferenceRow {
                    path: path.to_path_buf(),
                    line: index + 1,
                    content: trimmed.to_string(),
                })
            }
        }
    }
    Ok(SampledCurve::from_pairs(&pairs))
}

/// Read a reference file, degrading any failure to an empty curve
pub fn load_reference_or_empty(path: &Path, rescale: AxisRescale) -> SampledCurve {
    match read_reference(path, rescale) {
        Ok(curve) => curve,
        Err(e) => {
            warn!("{e}; comparison continues without reference data");
            SampledCurve::empty()
        }
    }
}

/// Location of reference results for one plate
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSet {
    pub dir: PathBuf,
    pub base: String,
    pub concentration: f64,
    pub thickness: f64,
    pub loading: LoadingKind,
}

impl ReferenceSet {
    /// Path of the file holding `quantity`
    pub fn path(&self, quantity: ReferenceQuantity) -> PathBuf {
        self.dir.join(reference_file_name(
            &self.base,
            self.concentration,
            self.thickness,
            &quantity.suffix(self.loading),
        ))
    }

    /// Load `quantity`, empty if unavailable
    pub fn load(&self, quantity: ReferenceQuantity) -> SampledCurve {
        load_reference_or_empty(&self.path(quantity), quantity.rescale(self.thickness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_names() {
        assert_eq!(
            reference_file_name("Steel_Rubber", 0.12, 0.05, "_W_uniform"),
            "Steel_Rubber_conc012_h005_W_uniform.txt"
        );
        assert_eq!(
            reference_file_name("Textile_Rubber", 0.25, 0.05, "_SXY_uniform"),
            "Textile_Rubber_conc025_h005_SXY_uniform.txt"
        );
        assert_eq!(
            ReferenceQuantity::NormalStress.suffix(LoadingKind::Focused),
            "_SX_focused"
        );
    }

    #[test]
    fn test_file_name_number_formatting() {
        assert_eq!(
            reference_file_name("Plate", 0.29, 1.0, "_W_uniform"),
            "Plate_conc028_h10_W_uniform.txt"
        );
        assert_eq!(
            reference_file_name("Plate", 0.5, 0.1, "_SX_focused"),
            "Plate_conc050_h01_SX_focused.txt"
        );
    }

    #[test]
    fn test_stress_rows_are_rescaled() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0.5 -0.0012").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  0.0   3.0  extra").unwrap();
        let curve = read_reference(file.path(), AxisRescale::new(20.0, 0.5)).unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.coordinates[0], 9.5);
        assert_eq!(curve.values[0], -0.0012);
        assert_eq!(curve.coordinates[1], -0.5);
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0.1 0.2").unwrap();
        writeln!(file, "0.3").unwrap();
        match read_reference(file.path(), AxisRescale::IDENTITY) {
            Err(PlateError::MalformedReferenceRow { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(matches!(
            read_reference(&path, AxisRescale::IDENTITY),
            Err(PlateError::MissingReferenceData(_))
        ));
        assert!(load_reference_or_empty(&path, AxisRescale::IDENTITY).is_empty());
    }

    #[test]
    fn test_reference_set_paths() {
        let set = ReferenceSet {
            dir: PathBuf::from("ANSYS/results"),
            base: "Epoxy_Carbon".to_string(),
            concentration: 0.5,
            thickness: 0.05,
            loading: LoadingKind::Uniform,
        };
        assert_eq!(
            set.path(ReferenceQuantity::ShearStress),
            PathBuf::from("ANSYS/results/Epoxy_Carbon_conc050_h005_SXY_uniform.txt")
        );
        assert_eq!(ReferenceQuantity::Deflection.rescale(0.05), AxisRescale::IDENTITY);
    }
}
