use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Registry bootstrap configuration.
///
/// Serializable so host pages can ship registry setup alongside their own
/// settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRegistryConfig {
    pub container_id: String,
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(default = "default_dispose_on_replace")]
    pub dispose_on_replace: bool,
}

impl ChartRegistryConfig {
    #[must_use]
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            id_prefix: default_id_prefix(),
            dispose_on_replace: default_dispose_on_replace(),
        }
    }

    /// Prefix for identifiers generated when a request carries none.
    #[must_use]
    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = id_prefix.into();
        self
    }

    /// Whether re-using an identifier disposes the chart it replaces.
    #[must_use]
    pub fn with_dispose_on_replace(mut self, dispose_on_replace: bool) -> Self {
        self.dispose_on_replace = dispose_on_replace;
        self
    }

    pub(super) fn validate(&self) -> ChartResult<()> {
        if self.container_id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "registry container id must not be empty".to_owned(),
            ));
        }
        if self.id_prefix.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "generated chart id prefix must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_id_prefix() -> String {
    "chart".to_owned()
}

fn default_dispose_on_replace() -> bool {
    true
}
