//! Pure mappings from travel-planning records to chart specs.

mod budget;
mod expense;
mod weather;

pub use budget::BudgetChartBuilder;
pub use expense::ExpenseChartBuilder;
pub use weather::{TemperatureSeriesStyle, WeatherChartBuilder};

use crate::core::{BudgetRecord, DailyForecast, ExpenseBreakdown};
use crate::spec::ChartSpec;

/// Budget bar chart with the default palette and labels.
#[must_use]
pub fn build_budget_spec(record: &BudgetRecord) -> ChartSpec {
    BudgetChartBuilder::default().build(record)
}

/// Expense doughnut chart with the default palette.
#[must_use]
pub fn build_expense_spec(expenses: &ExpenseBreakdown) -> ChartSpec {
    ExpenseChartBuilder::default().build(expenses)
}

/// Day/night temperature line chart with the default styling.
#[must_use]
pub fn build_weather_spec(forecast: &[DailyForecast]) -> ChartSpec {
    WeatherChartBuilder::default().build(forecast)
}
