use std::cell::Cell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartHandle, HostDocument, RenderingEngine};
use crate::spec::{ChartData, ChartSpec};

/// In-memory page used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    containers: IndexMap<String, Vec<HeadlessSurface>>,
}

impl HeadlessDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.add_container(container_id);
        self
    }

    pub fn add_container(&mut self, container_id: impl Into<String>) {
        self.containers.entry(container_id.into()).or_default();
    }

    /// Ids of surfaces still attached to a container, in append order.
    #[must_use]
    pub fn surfaces_in(&self, container_id: &str) -> Vec<&str> {
        self.containers
            .get(container_id)
            .into_iter()
            .flatten()
            .filter(|surface| surface.is_attached())
            .map(|surface| surface.id.as_str())
            .collect()
    }
}

/// Drawing surface appended to a [`HeadlessDocument`] container.
///
/// Clones share attachment state with the document's copy.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    pub id: String,
    pub container_id: String,
    attached: Rc<Cell<bool>>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Removes the surface from its container.
    pub fn detach(&self) {
        self.attached.set(false);
    }
}

impl PartialEq for HeadlessSurface {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.container_id == other.container_id
            && self.is_attached() == other.is_attached()
    }
}

impl HostDocument for HeadlessDocument {
    type Surface = HeadlessSurface;

    fn has_container(&self, container_id: &str) -> bool {
        self.containers.contains_key(container_id)
    }

    fn create_surface(
        &mut self,
        container_id: &str,
        surface_id: &str,
    ) -> ChartResult<HeadlessSurface> {
        let surfaces = self.containers.get_mut(container_id).ok_or_else(|| {
            ChartError::ContainerNotFound {
                container_id: container_id.to_owned(),
            }
        })?;
        let surface = HeadlessSurface {
            id: surface_id.to_owned(),
            container_id: container_id.to_owned(),
            attached: Rc::new(Cell::new(true)),
        };
        surfaces.push(surface.clone());
        Ok(surface)
    }
}

/// Engine that keeps specs in memory instead of drawing them.
///
/// It still validates specs so styling mistakes surface before a real engine
/// is involved.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    pub charts_created: usize,
}

impl RenderingEngine for HeadlessEngine {
    type Surface = HeadlessSurface;
    type Handle = HeadlessChart;

    fn create_chart(
        &mut self,
        surface: HeadlessSurface,
        spec: ChartSpec,
    ) -> ChartResult<HeadlessChart> {
        spec.validate()?;
        self.charts_created += 1;
        Ok(HeadlessChart {
            surface,
            spec,
            update_count: 0,
            destroyed: false,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessChart {
    surface: HeadlessSurface,
    spec: ChartSpec,
    update_count: usize,
    destroyed: bool,
}

impl HeadlessChart {
    #[must_use]
    pub fn surface(&self) -> &HeadlessSurface {
        &self.surface
    }

    #[must_use]
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    #[must_use]
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn ensure_live(&self) -> ChartResult<()> {
        if self.destroyed {
            return Err(ChartError::Engine(format!(
                "chart on surface `{}` was already destroyed",
                self.surface.id
            )));
        }
        Ok(())
    }
}

impl ChartHandle for HeadlessChart {
    fn data(&self) -> &ChartData {
        &self.spec.data
    }

    fn data_mut(&mut self) -> &mut ChartData {
        &mut self.spec.data
    }

    fn update(&mut self) -> ChartResult<()> {
        self.ensure_live()?;
        self.spec.validate()?;
        self.update_count += 1;
        Ok(())
    }

    fn destroy(&mut self) -> ChartResult<()> {
        self.ensure_live()?;
        self.destroyed = true;
        self.surface.detach();
        Ok(())
    }
}
