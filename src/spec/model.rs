use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::core::Color;
use crate::error::ChartResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    #[serde(alias = "donut")]
    Doughnut,
    Line,
}

/// Fill or stroke color, either shared by every point or assigned per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorFill {
    Single(Color),
    PerPoint(Vec<Color>),
}

impl ColorFill {
    fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Single(color) => color.validate(),
            Self::PerPoint(colors) => colors.iter().try_for_each(|color| color.validate()),
        }
    }
}

/// One data series plus its styling.
///
/// Non-finite values serialize as `null`, which engines draw as gaps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    #[serde(deserialize_with = "deserialize_values")]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(ColorFill::Single(color));
        self
    }

    #[must_use]
    pub fn with_background_colors(mut self, colors: Vec<Color>) -> Self {
        self.background_color = Some(ColorFill::PerPoint(colors));
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(ColorFill::Single(color));
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Curve smoothing; `0` draws straight segments.
    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }
}

fn deserialize_values<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    let raw = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect())
}

/// Labels plus series; the part of a spec replaced by registry updates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    #[must_use]
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default = "default_legend_display")]
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
}

impl LegendOptions {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            display: false,
            position: None,
        }
    }

    #[must_use]
    pub fn shown_at(position: LegendPosition) -> Self {
        Self {
            display: true,
            position: Some(position),
        }
    }
}

fn default_legend_display() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOptions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PluginOptions {
    fn is_empty(&self) -> bool {
        self.legend.is_none() && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Rendering options; unknown keys survive in `extra` and are flattened
/// into the engine config as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<IndexAxis>,
    #[serde(default, skip_serializing_if = "PluginOptions::is_empty")]
    pub plugins: PluginOptions,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub scales: IndexMap<String, ScaleOptions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartOptions {
    #[must_use]
    pub fn responsive() -> Self {
        Self {
            responsive: Some(true),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_index_axis(mut self, axis: IndexAxis) -> Self {
        self.index_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.plugins.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, axis_id: impl Into<String>, scale: ScaleOptions) -> Self {
        self.scales.insert(axis_id.into(), scale);
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn legend(&self) -> Option<LegendOptions> {
        self.plugins.legend
    }
}

/// Declarative chart description handed to a rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartSpec {
    #[must_use]
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            kind,
            data,
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.data.datasets
    }

    /// Checks styling values. Data values are not checked: non-finite
    /// amounts and temperatures are passed through to the engine.
    pub fn validate(&self) -> ChartResult<()> {
        for dataset in &self.data.datasets {
            for fill in [&dataset.background_color, &dataset.border_color]
                .into_iter()
                .flatten()
            {
                fill.validate()?;
            }
        }
        Ok(())
    }
}
