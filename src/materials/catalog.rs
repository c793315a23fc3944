//! Catalogue of example composites, loaded from structured records

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Constituent, MaterialSpec, Topology};
use crate::error::PlateResult;
use crate::loads::LoadingKind;

/// A raw catalogue record as stored on disk
///
/// Topology and loading stay textual here so an unknown value fails only the
/// entry that carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub topology: String,
    pub e_c: f64,
    pub nu_c: f64,
    pub concentration: f64,
    pub e_m: f64,
    pub nu_m: f64,
    pub reference_name: String,
    pub loading: String,
    pub thickness: f64,
}

impl CatalogEntry {
    /// Convert into a validated specification
    pub fn to_spec(&self) -> PlateResult<MaterialSpec> {
        let topology: Topology = self.topology.parse()?;
        let loading: LoadingKind = self.loading.parse()?;
        MaterialSpec::new(
            &self.name,
            topology,
            Constituent::new(self.e_c, self.nu_c),
            Constituent::new(self.e_m, self.nu_m),
            self.concentration,
            self.thickness,
            loading,
            &self.reference_name,
        )
    }
}

/// Parse catalogue entries from a JSON array
pub fn parse_catalog(json: &str) -> PlateResult<Vec<CatalogEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Load catalogue entries from a JSON file
pub fn load_catalog(path: &Path) -> PlateResult<Vec<CatalogEntry>> {
    let text = fs::read_to_string(path)?;
    parse_catalog(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlateError;

    const CATALOG: &str = r#"[
        {"name": "steel-rubber", "topology": "fiber", "e_c": 200.0, "nu_c": 0.25,
         "concentration": 0.12, "e_m": 0.015, "nu_m": 0.499,
         "reference_name": "Steel_Rubber", "loading": "focused", "thickness": 0.05},
        {"name": "bad", "topology": "unknown", "e_c": 1.0, "nu_c": 0.2,
         "concentration": 0.1, "e_m": 1.0, "nu_m": 0.2,
         "reference_name": "Bad", "loading": "uniform", "thickness": 0.05}
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let entries = parse_catalog(CATALOG).unwrap();
        assert_eq!(entries.len(), 2);

        let spec = entries[0].to_spec().unwrap();
        assert_eq!(spec.topology, Topology::Fiber);
        assert_eq!(spec.loading, LoadingKind::Focused);
        assert_eq!(spec.reference_name, "Steel_Rubber");

        assert!(matches!(
            entries[1].to_spec(),
            Err(PlateError::UnknownTopology(_))
        ));
    }

    #[test]
    fn test_unsupported_loading_entry() {
        let mut entries = parse_catalog(CATALOG).unwrap();
        entries[0].loading = "cyclic".to_string();
        assert!(matches!(
            entries[0].to_spec(),
            Err(PlateError::UnsupportedLoading(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_catalog("{not json"),
            Err(PlateError::SerializationError(_))
        ));
    }
}
