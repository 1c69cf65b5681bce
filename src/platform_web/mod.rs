//! Browser adapter: DOM containers through `web-sys`, rendering through the
//! page's global Chart.js `Chart` constructor.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartHandle, HostDocument, RenderingEngine};
use crate::spec::{ChartData, ChartSpec};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, setter = data, js_class = "Chart")]
    fn set_data(this: &JsChart, data: &JsValue);

    #[wasm_bindgen(method, catch, js_class = "Chart")]
    fn update(this: &JsChart) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Chart")]
    fn destroy(this: &JsChart) -> Result<(), JsValue>;
}

fn js_error(err: JsValue) -> ChartError {
    ChartError::Engine(format!("{err:?}"))
}

fn to_js<T: Serialize>(value: &T) -> ChartResult<JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| ChartError::Serialization(format!("failed to encode chart payload: {e}")))?;
    js_sys::JSON::parse(&json).map_err(js_error)
}

const DEFAULT_SURFACE_MAX_HEIGHT: &str = "300px";

/// The page's DOM.
pub struct WebDocument {
    document: Document,
    surface_max_height: String,
}

impl WebDocument {
    /// Uses `window.document`.
    pub fn new() -> ChartResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ChartError::Engine("no browser document available".to_owned()))?;
        Ok(Self::from_document(document))
    }

    #[must_use]
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            surface_max_height: DEFAULT_SURFACE_MAX_HEIGHT.to_owned(),
        }
    }

    /// CSS `max-height` applied to every created canvas.
    #[must_use]
    pub fn with_surface_max_height(mut self, max_height: impl Into<String>) -> Self {
        self.surface_max_height = max_height.into();
        self
    }
}

impl HostDocument for WebDocument {
    type Surface = HtmlCanvasElement;

    fn has_container(&self, container_id: &str) -> bool {
        self.document.get_element_by_id(container_id).is_some()
    }

    fn create_surface(
        &mut self,
        container_id: &str,
        surface_id: &str,
    ) -> ChartResult<HtmlCanvasElement> {
        let container = self.document.get_element_by_id(container_id).ok_or_else(|| {
            ChartError::ContainerNotFound {
                container_id: container_id.to_owned(),
            }
        })?;
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(js_error)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::Engine("created element is not a canvas".to_owned()))?;
        canvas.set_id(surface_id);
        canvas
            .style()
            .set_property("max-height", &self.surface_max_height)
            .map_err(js_error)?;
        container.append_child(&canvas).map_err(js_error)?;
        Ok(canvas)
    }
}

/// Chart.js, loaded by the page as the global `Chart`.
#[derive(Debug, Default)]
pub struct ChartJsEngine;

impl RenderingEngine for ChartJsEngine {
    type Surface = HtmlCanvasElement;
    type Handle = ChartJsChart;

    fn create_chart(
        &mut self,
        canvas: HtmlCanvasElement,
        spec: ChartSpec,
    ) -> ChartResult<ChartJsChart> {
        let config = to_js(&spec)?;
        let chart = JsChart::new(&canvas, &config).map_err(js_error)?;
        Ok(ChartJsChart {
            chart,
            canvas,
            data: spec.data,
        })
    }
}

/// Live Chart.js instance plus the Rust-side copy of its data.
pub struct ChartJsChart {
    chart: JsChart,
    canvas: HtmlCanvasElement,
    data: ChartData,
}

impl ChartHandle for ChartJsChart {
    fn data(&self) -> &ChartData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ChartData {
        &mut self.data
    }

    fn update(&mut self) -> ChartResult<()> {
        let data = to_js(&self.data)?;
        self.chart.set_data(&data);
        self.chart.update().map_err(js_error)
    }

    /// Disposes the Chart.js instance and detaches its canvas.
    fn destroy(&mut self) -> ChartResult<()> {
        self.chart.destroy().map_err(js_error)?;
        self.canvas.remove();
        Ok(())
    }
}
