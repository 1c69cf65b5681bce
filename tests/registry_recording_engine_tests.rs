use std::cell::RefCell;
use std::rc::Rc;

use travel_charts::ChartError;
use travel_charts::api::{ChartCreationRequest, ChartRegistry, ChartRegistryConfig};
use travel_charts::error::ChartResult;
use travel_charts::render::{ChartHandle, HeadlessDocument, HeadlessSurface, RenderingEngine};
use travel_charts::spec::{ChartData, ChartKind, ChartSpec, Dataset};

#[derive(Debug, Clone, PartialEq)]
enum EngineEvent {
    Created(String),
    Updated(String),
    Destroyed(String),
}

type EventLog = Rc<RefCell<Vec<EngineEvent>>>;

struct RecordingEngine {
    events: EventLog,
    fail_destroy_for: Option<String>,
}

impl RecordingEngine {
    fn new(events: EventLog) -> Self {
        Self {
            events,
            fail_destroy_for: None,
        }
    }
}

struct RecordingChart {
    surface_id: String,
    data: ChartData,
    events: EventLog,
    fail_destroy: bool,
}

impl RenderingEngine for RecordingEngine {
    type Surface = HeadlessSurface;
    type Handle = RecordingChart;

    fn create_chart(
        &mut self,
        surface: HeadlessSurface,
        spec: ChartSpec,
    ) -> ChartResult<RecordingChart> {
        self.events
            .borrow_mut()
            .push(EngineEvent::Created(surface.id.clone()));
        Ok(RecordingChart {
            fail_destroy: self.fail_destroy_for.as_deref() == Some(surface.id.as_str()),
            surface_id: surface.id,
            data: spec.data,
            events: self.events.clone(),
        })
    }
}

impl ChartHandle for RecordingChart {
    fn data(&self) -> &ChartData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ChartData {
        &mut self.data
    }

    fn update(&mut self) -> ChartResult<()> {
        self.events
            .borrow_mut()
            .push(EngineEvent::Updated(self.surface_id.clone()));
        Ok(())
    }

    fn destroy(&mut self) -> ChartResult<()> {
        if self.fail_destroy {
            return Err(ChartError::Engine("destroy refused".to_owned()));
        }
        self.events
            .borrow_mut()
            .push(EngineEvent::Destroyed(self.surface_id.clone()));
        Ok(())
    }
}

fn request(id: &str, value: f64) -> ChartCreationRequest {
    ChartCreationRequest::new(
        ChartKind::Bar,
        ChartData::new(vec!["x".to_owned()], vec![Dataset::new("s", vec![value])]),
    )
    .with_id(id)
}

fn registry(
    events: &EventLog,
    config: ChartRegistryConfig,
) -> ChartRegistry<HeadlessDocument, RecordingEngine> {
    ChartRegistry::with_config(
        HeadlessDocument::new().with_container(config.container_id.clone()),
        RecordingEngine::new(events.clone()),
        config,
    )
    .expect("registry init")
}

#[test]
fn replacing_an_id_disposes_the_previous_chart() {
    let events: EventLog = Rc::default();
    let mut registry = registry(&events, ChartRegistryConfig::new("main"));

    registry.create_chart(request("budget", 1.0)).expect("first");
    registry.create_chart(request("budget", 2.0)).expect("second");

    assert_eq!(
        *events.borrow(),
        vec![
            EngineEvent::Created("budget".to_owned()),
            EngineEvent::Created("budget".to_owned()),
            EngineEvent::Destroyed("budget".to_owned()),
        ]
    );
    assert_eq!(registry.get("budget").expect("chart").data().datasets[0].data, vec![2.0]);
}

#[test]
fn replacement_without_disposal_when_configured() {
    let events: EventLog = Rc::default();
    let config = ChartRegistryConfig::new("main").with_dispose_on_replace(false);
    let mut registry = registry(&events, config);

    registry.create_chart(request("budget", 1.0)).expect("first");
    registry.create_chart(request("budget", 2.0)).expect("second");

    assert!(
        !events
            .borrow()
            .iter()
            .any(|event| matches!(event, EngineEvent::Destroyed(_)))
    );
}

#[test]
fn update_requests_exactly_one_refresh() {
    let events: EventLog = Rc::default();
    let mut registry = registry(&events, ChartRegistryConfig::new("main"));
    registry.create_chart(request("budget", 1.0)).expect("create");

    registry
        .update_chart("budget", request("unused", 5.0).data)
        .expect("update");
    registry
        .update_chart("missing", request("unused", 9.0).data)
        .expect("unknown update");

    let updates = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, EngineEvent::Updated(_)))
        .count();
    assert_eq!(updates, 1);
}

#[test]
fn destroy_attempts_every_chart_and_reports_first_failure() {
    let events: EventLog = Rc::default();
    let mut engine = RecordingEngine::new(events.clone());
    engine.fail_destroy_for = Some("a".to_owned());
    let mut registry = ChartRegistry::initialize(
        HeadlessDocument::new().with_container("main"),
        engine,
        "main",
    )
    .expect("registry init");
    registry
        .init_charts([request("a", 1.0), request("b", 2.0)])
        .expect("create charts");

    let result = registry.destroy();

    assert!(matches!(result, Err(ChartError::Engine(_))));
    assert!(registry.is_empty());
    assert!(events.borrow().contains(&EngineEvent::Destroyed("b".to_owned())));
    registry.destroy().expect("second destroy is a no-op");
}

#[test]
fn dropping_the_registry_disposes_live_charts() {
    let events: EventLog = Rc::default();
    {
        let mut registry = registry(&events, ChartRegistryConfig::new("main"));
        registry
            .init_charts([request("a", 1.0), request("b", 2.0)])
            .expect("create charts");
    }

    let destroyed: Vec<EngineEvent> = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, EngineEvent::Destroyed(_)))
        .cloned()
        .collect();
    assert_eq!(
        destroyed,
        vec![
            EngineEvent::Destroyed("a".to_owned()),
            EngineEvent::Destroyed("b".to_owned()),
        ]
    );
}
