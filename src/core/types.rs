use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fixed budget categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    Transport,
    Accommodation,
    Food,
    Tickets,
    Shopping,
    Other,
}

impl BudgetCategory {
    pub const ALL: [Self; 6] = [
        Self::Transport,
        Self::Accommodation,
        Self::Food,
        Self::Tickets,
        Self::Shopping,
        Self::Other,
    ];

    /// Localized axis label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "交通",
            Self::Accommodation => "住宿",
            Self::Food => "餐饮",
            Self::Tickets => "门票",
            Self::Shopping => "购物",
            Self::Other => "其他",
        }
    }
}

/// Planned spend per category for one trip.
///
/// Amounts are passed through to charts untouched; negative values are not
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetRecord {
    pub transport: f64,
    pub accommodation: f64,
    pub food: f64,
    pub tickets: f64,
    pub shopping: f64,
    pub other: f64,
}

impl BudgetRecord {
    #[must_use]
    pub fn amount(&self, category: BudgetCategory) -> f64 {
        match category {
            BudgetCategory::Transport => self.transport,
            BudgetCategory::Accommodation => self.accommodation,
            BudgetCategory::Food => self.food,
            BudgetCategory::Tickets => self.tickets,
            BudgetCategory::Shopping => self.shopping,
            BudgetCategory::Other => self.other,
        }
    }

    /// Amounts in [`BudgetCategory::ALL`] order.
    #[must_use]
    pub fn amounts(&self) -> [f64; 6] {
        BudgetCategory::ALL.map(|category| self.amount(category))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.amounts().iter().sum()
    }
}

/// Spend per free-form category, iterated in insertion order.
///
/// Re-inserting an existing label replaces its amount and keeps its original
/// position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseBreakdown {
    entries: IndexMap<String, f64>,
}

impl ExpenseBreakdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a category amount, returning the previous amount.
    pub fn insert(&mut self, label: impl Into<String>, amount: f64) -> Option<f64> {
        self.entries.insert(label.into(), amount)
    }

    #[must_use]
    pub fn with_entry(mut self, label: impl Into<String>, amount: f64) -> Self {
        self.insert(label, amount);
        self
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(label, amount)| (label.as_str(), *amount))
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    #[must_use]
    pub fn amounts(&self) -> Vec<f64> {
        self.entries.values().copied().collect()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ExpenseBreakdown {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(label, amount)| (label.into(), amount))
                .collect(),
        }
    }
}

/// One day of a weather forecast.
///
/// Temperatures are kept as delivered by the forecast feed and parsed when a
/// chart is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    #[serde(alias = "daytemp")]
    pub day_temp: String,
    #[serde(alias = "nighttemp")]
    pub night_temp: String,
}

impl DailyForecast {
    #[must_use]
    pub fn new(date: NaiveDate, day_temp: impl Into<String>, night_temp: impl Into<String>) -> Self {
        Self {
            date,
            day_temp: day_temp.into(),
            night_temp: night_temp.into(),
        }
    }

    /// Builds a record from an ISO `YYYY-MM-DD` date string.
    pub fn parse(
        date: &str,
        day_temp: impl Into<String>,
        night_temp: impl Into<String>,
    ) -> ChartResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| ChartError::InvalidData(format!("invalid forecast date `{date}`: {e}")))?;
        Ok(Self::new(date, day_temp, night_temp))
    }

    /// Month-day axis label, e.g. `05-01`.
    #[must_use]
    pub fn label(&self) -> String {
        self.date.format("%m-%d").to_string()
    }

    /// Day temperature, `NaN` when the feed value is not numeric.
    #[must_use]
    pub fn day_temperature(&self) -> f64 {
        parse_temperature(&self.day_temp)
    }

    /// Night temperature, `NaN` when the feed value is not numeric.
    #[must_use]
    pub fn night_temperature(&self) -> f64 {
        parse_temperature(&self.night_temp)
    }
}

fn parse_temperature(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
