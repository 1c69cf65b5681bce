use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartHandle, HostDocument, RenderingEngine};
use crate::spec::ChartData;

use super::{ChartCreationRequest, ChartRegistryConfig};

/// Live charts of one page container, keyed by identifier.
///
/// The registry owns the handles returned by the engine, not the engine's
/// render state. Dropping the registry disposes every chart still held.
pub struct ChartRegistry<D, E>
where
    D: HostDocument,
    E: RenderingEngine<Surface = D::Surface>,
{
    document: D,
    engine: E,
    config: ChartRegistryConfig,
    charts: IndexMap<String, E::Handle>,
    generated_ids: u64,
}

impl<D, E> ChartRegistry<D, E>
where
    D: HostDocument,
    E: RenderingEngine<Surface = D::Surface>,
{
    /// Binds a registry to `container_id` with default settings.
    pub fn initialize(document: D, engine: E, container_id: impl Into<String>) -> ChartResult<Self> {
        Self::with_config(document, engine, ChartRegistryConfig::new(container_id))
    }

    pub fn with_config(document: D, engine: E, config: ChartRegistryConfig) -> ChartResult<Self> {
        config.validate()?;
        if !document.has_container(&config.container_id) {
            return Err(ChartError::ContainerNotFound {
                container_id: config.container_id,
            });
        }
        debug!(container_id = %config.container_id, "chart registry initialized");

        Ok(Self {
            document,
            engine,
            config,
            charts: IndexMap::new(),
            generated_ids: 0,
        })
    }

    /// Creates charts in request order and returns their identifiers.
    ///
    /// Stops at the first failure. Charts created before it stay registered.
    pub fn init_charts<I>(&mut self, requests: I) -> ChartResult<Vec<String>>
    where
        I: IntoIterator<Item = ChartCreationRequest>,
    {
        let mut ids = Vec::new();
        for request in requests {
            let id = self.create_chart_entry(request)?;
            ids.push(id);
        }
        Ok(ids)
    }

    /// Creates one chart and stores its handle.
    ///
    /// An identifier already in use is overwritten; with
    /// `dispose_on_replace` the previous chart is disposed once its
    /// replacement is live.
    pub fn create_chart(&mut self, request: ChartCreationRequest) -> ChartResult<&E::Handle> {
        let id = self.create_chart_entry(request)?;
        self.charts.get(&id).ok_or_else(|| {
            ChartError::InvalidData(format!("chart `{id}` missing right after creation"))
        })
    }

    fn create_chart_entry(&mut self, mut request: ChartCreationRequest) -> ChartResult<String> {
        let id = match request.id.take() {
            Some(id) => id,
            None => self.next_generated_id(),
        };
        let container_id = request
            .container_id
            .take()
            .unwrap_or_else(|| self.config.container_id.clone());
        if !self.document.has_container(&container_id) {
            return Err(ChartError::ContainerNotFound { container_id });
        }

        let surface = self.document.create_surface(&container_id, &id)?;
        let spec = request.into_spec();
        let kind = spec.kind;
        let handle = self.engine.create_chart(surface, spec)?;
        debug!(chart_id = %id, %container_id, ?kind, "chart created");

        if let Some(mut previous) = self.charts.insert(id.clone(), handle) {
            if self.config.dispose_on_replace {
                if let Err(err) = previous.destroy() {
                    warn!(chart_id = %id, error = %err, "failed to dispose replaced chart");
                }
            } else {
                warn!(chart_id = %id, "chart replaced without disposing the previous instance");
            }
        }
        Ok(id)
    }

    fn next_generated_id(&mut self) -> String {
        loop {
            self.generated_ids += 1;
            let id = format!("{}-{}", self.config.id_prefix, self.generated_ids);
            if !self.charts.contains_key(&id) {
                return id;
            }
        }
    }

    /// Replaces a chart's data and re-renders it.
    ///
    /// Returns `Ok(false)` without touching anything when `id` is unknown.
    pub fn update_chart(&mut self, id: &str, data: ChartData) -> ChartResult<bool> {
        let Some(handle) = self.charts.get_mut(id) else {
            trace!(chart_id = id, "ignoring update for unknown chart");
            return Ok(false);
        };
        *handle.data_mut() = data;
        handle.update()?;
        trace!(chart_id = id, "chart updated");
        Ok(true)
    }

    /// Disposes and forgets one chart. Returns `Ok(false)` for unknown ids.
    pub fn remove_chart(&mut self, id: &str) -> ChartResult<bool> {
        let Some(mut handle) = self.charts.shift_remove(id) else {
            return Ok(false);
        };
        handle.destroy()?;
        debug!(chart_id = id, "chart removed");
        Ok(true)
    }

    /// Disposes every chart and empties the registry.
    ///
    /// Every handle gets a disposal attempt; the first failure is returned.
    /// Calling this on an empty registry does nothing.
    pub fn destroy(&mut self) -> ChartResult<()> {
        if self.charts.is_empty() {
            return Ok(());
        }

        let count = self.charts.len();
        let mut first_error = None;
        for (id, mut handle) in self.charts.drain(..) {
            if let Err(err) = handle.destroy() {
                warn!(chart_id = %id, error = %err, "failed to dispose chart");
                first_error.get_or_insert(err);
            }
        }
        debug!(count, "chart registry destroyed");

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&E::Handle> {
        self.charts.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.charts.contains_key(id)
    }

    /// Identifiers in creation order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.config.container_id
    }

    #[must_use]
    pub fn config(&self) -> &ChartRegistryConfig {
        &self.config
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Host document access, e.g. for adding containers after setup.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<D, E> Drop for ChartRegistry<D, E>
where
    D: HostDocument,
    E: RenderingEngine<Surface = D::Surface>,
{
    fn drop(&mut self) {
        if let Err(err) = self.destroy() {
            warn!(error = %err, "chart disposal failed while dropping registry");
        }
    }
}
