use serde::{Deserialize, Serialize};

use crate::spec::{ChartData, ChartKind, ChartOptions, ChartSpec};

/// Everything needed to create one chart through a registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartCreationRequest {
    /// Registry key; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Target container; the registry's bound container when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartCreationRequest {
    #[must_use]
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            id: None,
            container_id: None,
            kind,
            data,
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn from_spec(spec: ChartSpec) -> Self {
        Self {
            id: None,
            container_id: None,
            kind: spec.kind,
            data: spec.data,
            options: spec.options,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = Some(container_id.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn into_spec(self) -> ChartSpec {
        ChartSpec {
            kind: self.kind,
            data: self.data,
            options: self.options,
        }
    }
}

impl From<ChartSpec> for ChartCreationRequest {
    fn from(spec: ChartSpec) -> Self {
        Self::from_spec(spec)
    }
}
