//! Reporting and plot documents
//!
//! A comparison is rendered into a self-describing JSON plot document
//! (title, axis labels, limits, legend and styled series) that any plotting
//! front end can draw. Language and style are explicit configuration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::error::{PlateError, PlateResult};
use crate::evaluate::SampledCurve;
use crate::materials::{EngineeringModuli, Topology};
use crate::math::{SPAN_INTERVAL, THICKNESS_INTERVAL};
use crate::response::Theory;
use crate::results::{BatchReport, Comparison, FieldKind, PlateReport};

/// Language of titles and legends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Russian,
    English,
}

impl FromStr for Language {
    type Err = PlateError;

    fn from_str(s: &str) -> PlateResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rus" | "ru" | "russian" => Ok(Language::Russian),
            "eng" | "en" | "english" => Ok(Language::English),
            _ => Err(PlateError::InvalidInput(format!(
                "unknown language '{s}' (expected 'rus' or 'eng')"
            ))),
        }
    }
}

pub type Rgb = [f64; 3];

/// Line, marker and font settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub line_width: f64,
    pub marker_size: f64,
    pub label_size: f64,
    pub title_size: f64,
    pub legend_size: f64,
    /// Pairs of (line, marker edge) colours per theory, then the reference colour
    pub colors: Vec<Rgb>,
    pub markers: Vec<String>,
    /// Marker period along a curve
    pub mark_period: usize,
    /// Marker offset between successive curves
    pub mark_offset: usize,
    /// Extra width of the dashed reference line
    pub reference_extra_width: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            line_width: 1.5,
            marker_size: 15.0,
            label_size: 25.0,
            title_size: 30.0,
            legend_size: 20.0,
            colors: vec![
                [0.93, 0.694, 0.0],
                [0.90, 0.514, 0.0],
                [0.301, 0.745, 0.933],
                [0.361, 0.405, 1.0],
                [0.0, 0.70, 0.0],
                [0.0, 0.45, 0.0],
                [0.494, 0.184, 0.556],
                [0.354, 0.184, 0.456],
                [1.0, 0.0, 0.0],
            ],
            markers: ["v", "^", "s", "o"].iter().map(|m| m.to_string()).collect(),
            mark_period: 80,
            mark_offset: 20,
            reference_extra_width: 2.0,
        }
    }
}

impl PlotStyle {
    fn color(&self, index: usize) -> Rgb {
        if self.colors.is_empty() {
            return [0.0, 0.0, 0.0];
        }
        self.colors[index % self.colors.len()]
    }

    fn reference_color(&self) -> Rgb {
        self.colors.last().copied().unwrap_or([1.0, 0.0, 0.0])
    }

    fn marker(&self, index: usize) -> Option<String> {
        if self.markers.is_empty() {
            return None;
        }
        Some(self.markers[index % self.markers.len()].clone())
    }
}

/// Rendering configuration passed to every render call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub language: Language,
    pub output_dir: PathBuf,
    pub style: PlotStyle,
}

impl RenderConfig {
    pub fn new(language: Language, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            language,
            output_dir: output_dir.into(),
            style: PlotStyle::default(),
        }
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }
}

/// Legend label of a theory curve
///
/// Kirchhoff-Love has no constitutive shear, so its σ13 slot holds the
/// equilibrium profile and is labelled as such.
pub fn legend_label(theory: Theory, kind: FieldKind, language: Language) -> &'static str {
    match (theory, language) {
        (Theory::KirchhoffLove, Language::Russian) if kind == FieldKind::Sigma13 => "Формула Журавского",
        (Theory::KirchhoffLove, Language::English) if kind == FieldKind::Sigma13 => "Zhuravsky formula",
        (Theory::KirchhoffLove, Language::Russian) => "Теория Кирхгофа-Лява",
        (Theory::KirchhoffLove, Language::English) => "Kirchhoff–Love theory",
        (Theory::ReissnerMindlin, Language::Russian) => "Теория Рейсснера",
        (Theory::ReissnerMindlin, Language::English) => "Reissner theory",
        (Theory::Reddy, Language::Russian) => "Теория 3-го порядка",
        (Theory::Reddy, Language::English) => "Third-order theory",
        (Theory::Asymptotic, Language::Russian) => "Асимптотическая теория",
        (Theory::Asymptotic, Language::English) => "Asymptotic theory",
    }
}

/// Legend label of the reference curve
pub fn reference_label(language: Language) -> &'static str {
    match language {
        Language::Russian => "МКЭ",
        Language::English => "FEM",
    }
}

fn component_symbol(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Deflection => "$w(x)$",
        FieldKind::Sigma11 => "$\\sigma_{11}$",
        FieldKind::Sigma13 => "$\\sigma_{13}$",
        FieldKind::Sigma33 => "$\\sigma_{33}$",
    }
}

/// Plot title; stress titles name their section
pub fn title(kind: FieldKind, section: Option<f64>, language: Language) -> String {
    let symbol = component_symbol(kind);
    match (kind, language) {
        (FieldKind::Deflection, Language::Russian) => format!("Прогиб пластины {symbol}"),
        (FieldKind::Deflection, Language::English) => format!("Plate deflection {symbol}"),
        (_, Language::Russian) => format!(
            "Распределение компоненты {symbol} по толщине пластины в сечении $x = {}$",
            section.unwrap_or_default()
        ),
        (_, Language::English) => format!(
            "Distribution of the {symbol} component over the plate thickness in the section $x = {}$",
            section.unwrap_or_default()
        ),
    }
}

/// (x label, y label)
pub fn axis_labels(kind: FieldKind) -> (&'static str, &'static str) {
    match kind {
        FieldKind::Deflection => ("$x$", component_symbol(kind)),
        _ => ("$z$", component_symbol(kind)),
    }
}

/// Axis limits ((x_min, x_max), (y_min, y_max))
///
/// Deflection plots pin the top at zero; stress plots pad both ends by 5 %
/// and always include zero at the top.
pub fn axis_limits(comparison: &Comparison) -> ((f64, f64), (f64, f64)) {
    let (lo, hi) = comparison.value_range().unwrap_or((0.0, 0.0));
    match comparison.kind {
        FieldKind::Deflection => (SPAN_INTERVAL, (1.05 * lo, 0.0)),
        _ => (THICKNESS_INTERVAL, (1.05 * lo, 1.05 * hi.max(0.0))),
    }
}

/// One drawn line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Rgb,
    pub line_width: f64,
    pub dashed: bool,
    pub marker: Option<String>,
    pub marker_edge_color: Option<Rgb>,
    /// (offset, period) of markers along the curve
    pub mark_every: Option<(usize, usize)>,
}

/// A complete plot, ready for a drawing front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDocument {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub title_size: f64,
    pub label_size: f64,
    pub legend_size: f64,
    pub marker_size: f64,
    pub series: Vec<PlotSeries>,
}

impl PlotDocument {
    /// Lay out a comparison: one styled series per theory, then the reference
    pub fn from_comparison(comparison: &Comparison, config: &RenderConfig) -> Self {
        let style = &config.style;
        let (x_label, y_label) = axis_labels(comparison.kind);
        let (x_limits, y_limits) = axis_limits(comparison);

        let mut series: Vec<PlotSeries> = comparison
            .curves
            .iter()
            .enumerate()
            .map(|(j, tc)| {
                series_from(
                    legend_label(tc.theory, comparison.kind, config.language),
                    &tc.curve,
                    style.color(2 * j),
                    style.line_width,
                    false,
                    style.marker(j),
                    Some(style.color(2 * j + 1)),
                    Some((style.mark_offset * j, style.mark_period)),
                )
            })
            .collect();

        if comparison.has_reference() {
            series.push(series_from(
                reference_label(config.language),
                &comparison.reference,
                style.reference_color(),
                style.line_width + style.reference_extra_width,
                true,
                None,
                None,
                None,
            ));
        }

        Self {
            title: title(comparison.kind, comparison.section, config.language),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            x_limits,
            y_limits,
            title_size: style.title_size,
            label_size: style.label_size,
            legend_size: style.legend_size,
            marker_size: style.marker_size,
            series,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn series_from(
    label: &str,
    curve: &SampledCurve,
    color: Rgb,
    line_width: f64,
    dashed: bool,
    marker: Option<String>,
    marker_edge_color: Option<Rgb>,
    mark_every: Option<(usize, usize)>,
) -> PlotSeries {
    PlotSeries {
        label: label.to_string(),
        x: curve.coordinates.iter().copied().collect(),
        y: curve.values.iter().copied().collect(),
        color,
        line_width,
        dashed,
        marker,
        marker_edge_color,
        mark_every,
    }
}

/// Write `{stem}.json` for a comparison into the output directory
pub fn render_comparison(comparison: &Comparison, config: &RenderConfig) -> PlateResult<PathBuf> {
    fs::create_dir_all(&config.output_dir)?;
    let document = PlotDocument::from_comparison(comparison, config);
    let path = config.output_dir.join(format!("{}.json", comparison.stem));
    fs::write(&path, serde_json::to_string_pretty(&document)?)?;
    debug!("wrote {}", path.display());
    Ok(path)
}

/// Render every comparison of a plate
pub fn render_report(report: &PlateReport, config: &RenderConfig) -> PlateResult<Vec<PathBuf>> {
    let paths = report
        .comparisons
        .iter()
        .map(|c| render_comparison(c, config))
        .collect::<PlateResult<Vec<_>>>()?;
    info!("{}: {} plot document(s) in {}", report.name, paths.len(), config.output_dir.display());
    Ok(paths)
}

/// Moduli listing headed by model and material name
pub struct ModuliReport<'a> {
    pub topology: Topology,
    pub name: &'a str,
    pub moduli: &'a EngineeringModuli,
}

impl fmt::Display for ModuliReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {}, materials: {}", self.topology, self.name)?;
        write!(f, "{}", self.moduli)
    }
}

/// Display name made safe for a single path component
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Save a full plate report as JSON
pub fn write_report(report: &PlateReport, dir: &Path) -> PlateResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!(
        "{}_{}_report.json",
        file_stem(&report.name),
        report.loading
    ));
    fs::write(&path, serde_json::to_string_pretty(report)?)?;
    Ok(path)
}

/// Render plot documents and the JSON report of every analyzed plate
///
/// A plate whose output cannot be written is logged and skipped; the
/// remaining plates are still published. Returns the number published.
pub fn publish_batch(batch: &BatchReport, config: &RenderConfig) -> usize {
    batch
        .reports
        .iter()
        .filter(|report| {
            match render_report(report, config)
                .and_then(|_| write_report(report, &config.output_dir))
            {
                Ok(_) => true,
                Err(e) => {
                    error!("{}: output not written: {}", report.name, e);
                    false
                }
            }
        })
        .count()
}
