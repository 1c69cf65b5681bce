use travel_charts::api::{ChartRegistry, ChartRegistryConfig};
use travel_charts::render::{HeadlessDocument, HeadlessEngine};

#[test]
fn config_defaults_fill_missing_fields() {
    let config: ChartRegistryConfig =
        serde_json::from_str(r#"{"container_id": "trip-dashboard"}"#).expect("valid config");

    assert_eq!(config, ChartRegistryConfig::new("trip-dashboard"));
    assert_eq!(config.id_prefix, "chart");
    assert!(config.dispose_on_replace);
}

#[test]
fn blank_container_or_prefix_is_rejected() {
    let document = || HeadlessDocument::new().with_container("main");

    let blank_container = ChartRegistryConfig::new("  ");
    assert!(ChartRegistry::with_config(document(), HeadlessEngine::default(), blank_container).is_err());

    let blank_prefix = ChartRegistryConfig::new("main").with_id_prefix("");
    assert!(ChartRegistry::with_config(document(), HeadlessEngine::default(), blank_prefix).is_err());
}

#[test]
fn registry_reports_its_container_and_config() {
    let config = ChartRegistryConfig::new("main").with_dispose_on_replace(false);
    let registry = ChartRegistry::with_config(
        HeadlessDocument::new().with_container("main"),
        HeadlessEngine::default(),
        config.clone(),
    )
    .expect("registry init");

    assert_eq!(registry.container_id(), "main");
    assert_eq!(registry.config(), &config);
    assert!(registry.is_empty());
}
