//! Seams to the host page and the external rendering engine.
//!
//! The registry only talks to these traits. Drawing, layout and animation
//! stay inside the engine implementation.

mod headless;

pub use headless::{HeadlessChart, HeadlessDocument, HeadlessEngine, HeadlessSurface};

use crate::error::ChartResult;
use crate::spec::{ChartData, ChartSpec};

/// Live chart instance owned by a rendering engine.
pub trait ChartHandle {
    fn data(&self) -> &ChartData;

    /// Mutable data payload; changes become visible after [`ChartHandle::update`].
    fn data_mut(&mut self) -> &mut ChartData;

    /// Re-renders after the data payload changed.
    fn update(&mut self) -> ChartResult<()>;

    /// Releases engine resources. The handle must not be used afterwards.
    fn destroy(&mut self) -> ChartResult<()>;
}

/// Engine that turns a spec plus a drawing surface into a live chart.
pub trait RenderingEngine {
    type Surface;
    type Handle: ChartHandle;

    fn create_chart(&mut self, surface: Self::Surface, spec: ChartSpec)
    -> ChartResult<Self::Handle>;
}

/// Page that hosts chart containers.
pub trait HostDocument {
    type Surface;

    fn has_container(&self, container_id: &str) -> bool;

    /// Creates a drawing surface with `surface_id` and appends it to the
    /// container.
    fn create_surface(&mut self, container_id: &str, surface_id: &str)
    -> ChartResult<Self::Surface>;
}
