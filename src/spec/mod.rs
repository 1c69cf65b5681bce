mod json_contract;
mod model;

pub use json_contract::{CHART_SPEC_JSON_SCHEMA_V1, ChartSpecJsonContractV1};
pub use model::{
    ChartData, ChartKind, ChartOptions, ChartSpec, ColorFill, Dataset, IndexAxis, LegendOptions,
    LegendPosition, PluginOptions, ScaleOptions,
};
