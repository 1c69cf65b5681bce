use serde::{Deserialize, Serialize};

use crate::core::{Color, DailyForecast};
use crate::spec::{
    ChartData, ChartKind, ChartOptions, ChartSpec, Dataset, LegendOptions, LegendPosition,
    ScaleOptions,
};

const FILL_ALPHA: f64 = 0.1;

/// Styling for one temperature line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSeriesStyle {
    pub label: String,
    pub color: Color,
}

/// Smoothed two-line chart of day and night temperatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherChartBuilder {
    pub day: TemperatureSeriesStyle,
    pub night: TemperatureSeriesStyle,
    #[serde(default = "default_tension")]
    pub tension: f64,
}

impl Default for WeatherChartBuilder {
    fn default() -> Self {
        Self {
            day: TemperatureSeriesStyle {
                label: "最高温度".to_owned(),
                color: Color::rgb(0xe7, 0x4c, 0x3c),
            },
            night: TemperatureSeriesStyle {
                label: "最低温度".to_owned(),
                color: Color::rgb(0x34, 0x98, 0xdb),
            },
            tension: default_tension(),
        }
    }
}

impl WeatherChartBuilder {
    /// Keeps forecast order. The value axis is not pinned to zero so narrow
    /// temperature ranges stay readable.
    #[must_use]
    pub fn build(&self, forecast: &[DailyForecast]) -> ChartSpec {
        let labels = forecast.iter().map(DailyForecast::label).collect();
        let day_values = forecast.iter().map(DailyForecast::day_temperature).collect();
        let night_values = forecast
            .iter()
            .map(DailyForecast::night_temperature)
            .collect();

        let datasets = vec![
            self.series(&self.day, day_values),
            self.series(&self.night, night_values),
        ];
        let options = ChartOptions::responsive()
            .with_legend(LegendOptions::shown_at(LegendPosition::Bottom))
            .with_scale(
                "y",
                ScaleOptions {
                    begin_at_zero: Some(false),
                    ..ScaleOptions::default()
                },
            );

        ChartSpec::new(ChartKind::Line, ChartData::new(labels, datasets)).with_options(options)
    }

    fn series(&self, style: &TemperatureSeriesStyle, values: Vec<f64>) -> Dataset {
        Dataset::new(style.label.clone(), values)
            .with_border_color(style.color)
            .with_background(style.color.with_alpha(FILL_ALPHA))
            .with_fill(true)
            .with_tension(self.tension)
    }
}

fn default_tension() -> f64 {
    0.4
}
