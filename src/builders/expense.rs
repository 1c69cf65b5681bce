use serde::{Deserialize, Serialize};

use crate::core::{Color, ExpenseBreakdown, Palette};
use crate::spec::{
    ChartData, ChartKind, ChartOptions, ChartSpec, Dataset, LegendOptions, LegendPosition,
};

/// Doughnut chart of actual spend split by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseChartBuilder {
    #[serde(default = "default_expense_palette")]
    pub palette: Palette,
    #[serde(default = "default_expense_dataset_label")]
    pub dataset_label: String,
    #[serde(default = "default_segment_border_color")]
    pub segment_border_color: Color,
    #[serde(default = "default_segment_border_width")]
    pub segment_border_width: f64,
    #[serde(default = "default_expense_legend_position")]
    pub legend_position: LegendPosition,
}

impl Default for ExpenseChartBuilder {
    fn default() -> Self {
        Self {
            palette: default_expense_palette(),
            dataset_label: default_expense_dataset_label(),
            segment_border_color: default_segment_border_color(),
            segment_border_width: default_segment_border_width(),
            legend_position: default_expense_legend_position(),
        }
    }
}

impl ExpenseChartBuilder {
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Segments follow the breakdown's insertion order. Colors wrap around
    /// the palette when there are more categories than colors.
    #[must_use]
    pub fn build(&self, expenses: &ExpenseBreakdown) -> ChartSpec {
        let labels = expenses.labels();
        let values = expenses.amounts();
        let colors = self.palette.colors_for(values.len());

        let dataset = Dataset::new(self.dataset_label.clone(), values)
            .with_background_colors(colors)
            .with_border_color(self.segment_border_color)
            .with_border_width(self.segment_border_width);
        let options =
            ChartOptions::responsive().with_legend(LegendOptions::shown_at(self.legend_position));

        ChartSpec::new(ChartKind::Doughnut, ChartData::new(labels, vec![dataset]))
            .with_options(options)
    }
}

fn default_expense_palette() -> Palette {
    Palette::expense()
}

fn default_expense_dataset_label() -> String {
    "实际支出".to_owned()
}

fn default_segment_border_color() -> Color {
    Color::WHITE
}

fn default_segment_border_width() -> f64 {
    2.0
}

fn default_expense_legend_position() -> LegendPosition {
    LegendPosition::Right
}
