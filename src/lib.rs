//! travel-charts: chart spec builders and a chart instance registry for
//! travel-planning dashboards.
//!
//! Builders turn budget, expense and forecast records into declarative
//! Chart.js-shaped specs. The registry hands those specs to a rendering
//! engine and keeps the returned handles for later update and disposal.

pub mod api;
pub mod builders;
pub mod core;
pub mod error;
pub mod render;
pub mod spec;
pub mod telemetry;

#[cfg(feature = "web-adapter")]
pub mod platform_web;

pub use api::{ChartCreationRequest, ChartRegistry, ChartRegistryConfig};
pub use builders::{build_budget_spec, build_expense_spec, build_weather_spec};
pub use error::{ChartError, ChartResult};
pub use spec::{ChartKind, ChartSpec};
