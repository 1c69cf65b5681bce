pub mod color;
pub mod palette;
pub mod types;

pub use color::Color;
pub use palette::{BUDGET_COLORS, EXPENSE_COLORS, Palette};
pub use types::{BudgetCategory, BudgetRecord, DailyForecast, ExpenseBreakdown};
