use serde::{Deserialize, Serialize};

use crate::core::{BudgetCategory, BudgetRecord, Palette};
use crate::spec::{ChartData, ChartKind, ChartOptions, ChartSpec, Dataset, IndexAxis, LegendOptions};

/// Horizontal bar chart of planned spend per fixed budget category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetChartBuilder {
    #[serde(default = "default_budget_palette")]
    pub palette: Palette,
    #[serde(default = "default_budget_dataset_label")]
    pub dataset_label: String,
    #[serde(default = "default_budget_bar_radius")]
    pub bar_radius: f64,
}

impl Default for BudgetChartBuilder {
    fn default() -> Self {
        Self {
            palette: default_budget_palette(),
            dataset_label: default_budget_dataset_label(),
            bar_radius: default_budget_bar_radius(),
        }
    }
}

impl BudgetChartBuilder {
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Labels and values follow [`BudgetCategory::ALL`]; amounts are not
    /// validated or aggregated.
    #[must_use]
    pub fn build(&self, record: &BudgetRecord) -> ChartSpec {
        let labels = BudgetCategory::ALL
            .iter()
            .map(|category| category.label().to_owned())
            .collect();
        let values = record.amounts().to_vec();
        let colors = self.palette.colors_for(values.len());

        let dataset = Dataset::new(self.dataset_label.clone(), values)
            .with_background_colors(colors)
            .with_border_radius(self.bar_radius);
        let options = ChartOptions::responsive()
            .with_index_axis(IndexAxis::Y)
            .with_legend(LegendOptions::hidden());

        ChartSpec::new(ChartKind::Bar, ChartData::new(labels, vec![dataset])).with_options(options)
    }
}

fn default_budget_palette() -> Palette {
    Palette::budget()
}

fn default_budget_dataset_label() -> String {
    "预算 (元)".to_owned()
}

fn default_budget_bar_radius() -> f64 {
    8.0
}
