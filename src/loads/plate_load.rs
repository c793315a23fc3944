//! Transverse plate loads

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlateError, PlateResult};

/// How the transverse load is applied along the span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingKind {
    /// Uniformly distributed pressure
    Uniform,
    /// Concentrated load at mid-span x = 1/2
    Focused,
}

impl LoadingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingKind::Uniform => "uniform",
            LoadingKind::Focused => "focused",
        }
    }
}

impl fmt::Display for LoadingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadingKind {
    type Err = PlateError;

    fn from_str(s: &str) -> PlateResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(LoadingKind::Uniform),
            "focused" | "concentrated" => Ok(LoadingKind::Focused),
            _ => Err(PlateError::UnsupportedLoading(s.to_string())),
        }
    }
}

/// A transverse load on the plate strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateLoad {
    /// Loading kind
    pub kind: LoadingKind,
    /// Load magnitude p (pressure for uniform, force for focused)
    pub magnitude: f64,
}

impl PlateLoad {
    /// Create a new load
    pub fn new(kind: LoadingKind, magnitude: f64) -> Self {
        Self { kind, magnitude }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loading() {
        assert_eq!("uniform".parse::<LoadingKind>().unwrap(), LoadingKind::Uniform);
        assert_eq!(" Focused ".parse::<LoadingKind>().unwrap(), LoadingKind::Focused);
        assert!(matches!(
            "torsion".parse::<LoadingKind>(),
            Err(PlateError::UnsupportedLoading(_))
        ));
    }

    #[test]
    fn test_loading_display_round_trips() {
        for kind in [LoadingKind::Uniform, LoadingKind::Focused] {
            assert_eq!(kind.to_string().parse::<LoadingKind>().unwrap(), kind);
        }
        let json = serde_json::to_string(&PlateLoad::new(LoadingKind::Focused, 2.0)).unwrap();
        assert_eq!(json, r#"{"kind":"focused","magnitude":2.0}"#);
    }
}
