use serde_json::json;
use travel_charts::builders::{build_budget_spec, build_expense_spec, build_weather_spec};
use travel_charts::core::{BudgetRecord, DailyForecast, ExpenseBreakdown};
use travel_charts::spec::{
    CHART_SPEC_JSON_SCHEMA_V1, ChartKind, ChartOptions, ChartSpec, LegendOptions, LegendPosition,
};

#[test]
fn budget_engine_config_uses_chartjs_shape() {
    let record = BudgetRecord {
        transport: 100.0,
        ..BudgetRecord::default()
    };
    let config = build_budget_spec(&record)
        .to_engine_config()
        .expect("serialize");

    assert_eq!(config["type"], "bar");
    assert_eq!(config["options"]["indexAxis"], "y");
    assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
    assert_eq!(config["data"]["labels"][0], "交通");
    assert_eq!(config["data"]["datasets"][0]["data"][0], 100.0);
    assert_eq!(config["data"]["datasets"][0]["label"], "预算 (元)");
    assert_eq!(
        config["data"]["datasets"][0]["backgroundColor"],
        json!(["#3498db", "#2ecc71", "#f39c12", "#e74c3c", "#9b59b6", "#1abc9c"])
    );
    assert_eq!(config["data"]["datasets"][0]["borderRadius"], 8.0);
    assert!(config["options"].get("scales").is_none());
    assert!(config["options"].get("maintainAspectRatio").is_none());
}

#[test]
fn expense_engine_config_uses_doughnut_with_right_legend() {
    let config = build_expense_spec(&ExpenseBreakdown::new().with_entry("A", 10.0))
        .to_engine_config()
        .expect("serialize");

    assert_eq!(config["type"], "doughnut");
    assert_eq!(config["options"]["plugins"]["legend"]["position"], "right");
    assert_eq!(config["data"]["datasets"][0]["borderColor"], "#ffffff");
    assert_eq!(config["data"]["datasets"][0]["backgroundColor"], json!(["#3498db"]));
}

#[test]
fn expense_palette_is_first_five_budget_colors() {
    let expenses: ExpenseBreakdown = (0..6).map(|i| (format!("c{i}"), 1.0)).collect();
    let config = build_expense_spec(&expenses)
        .to_engine_config()
        .expect("serialize");

    assert_eq!(
        config["data"]["datasets"][0]["backgroundColor"],
        json!(["#3498db", "#2ecc71", "#f39c12", "#e74c3c", "#9b59b6", "#3498db"])
    );
}

#[test]
fn weather_engine_config_serializes_nan_as_gap() {
    let days = [DailyForecast::parse("2024-05-01", "bad", "14.0").expect("valid date")];
    let config = build_weather_spec(&days)
        .to_engine_config()
        .expect("serialize");

    assert_eq!(config["type"], "line");
    assert!(config["data"]["datasets"][0]["data"][0].is_null());
    assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], false);
}

#[test]
fn weather_engine_config_uses_red_high_and_blue_low_lines() {
    let days = [DailyForecast::parse("2024-05-01", "22.5", "14.0").expect("valid date")];
    let config = build_weather_spec(&days)
        .to_engine_config()
        .expect("serialize");
    let high = &config["data"]["datasets"][0];
    let low = &config["data"]["datasets"][1];

    assert_eq!(high["label"], "最高温度");
    assert_eq!(high["borderColor"], "#e74c3c");
    assert_eq!(high["backgroundColor"], "rgba(231, 76, 60, 0.1)");
    assert_eq!(low["label"], "最低温度");
    assert_eq!(low["borderColor"], "#3498db");
    assert_eq!(low["backgroundColor"], "rgba(52, 152, 219, 0.1)");
}

#[test]
fn contract_round_trips_with_envelope_and_bare_spec() {
    let spec = build_expense_spec(
        &ExpenseBreakdown::new()
            .with_entry("住宿", 300.0)
            .with_entry("交通", 120.0),
    );
    let contract = spec.to_json_contract_v1_pretty().expect("contract json");
    let bare = spec.to_json_pretty().expect("bare json");

    assert_eq!(ChartSpec::from_json_compat_str(&contract).expect("parse contract"), spec);
    assert_eq!(ChartSpec::from_json_compat_str(&bare).expect("parse bare"), spec);
}

#[test]
fn contract_with_unknown_schema_version_is_rejected() {
    let payload = json!({
        "schema_version": CHART_SPEC_JSON_SCHEMA_V1 + 1,
        "spec": { "type": "line", "data": { "labels": [], "datasets": [] } }
    });
    let result = ChartSpec::from_json_compat_str(&payload.to_string());
    assert!(result.is_err());
}

#[test]
fn free_form_options_are_flattened_into_engine_config() {
    let spec = ChartSpec::new(ChartKind::Line, Default::default()).with_options(
        ChartOptions::responsive().with_extra("animation", json!({ "duration": 0 })),
    );
    let config = spec.to_engine_config().expect("serialize");

    assert_eq!(config["options"]["animation"]["duration"], 0);
    assert_eq!(config["options"]["responsive"], true);

    let parsed: ChartSpec = serde_json::from_value(config).expect("parse back");
    assert_eq!(parsed.options.extra["animation"], json!({ "duration": 0 }));
}

#[test]
fn donut_alias_is_accepted() {
    let input = r#"{"type": "donut", "data": {"labels": ["A"], "datasets": [{"data": [null]}]}}"#;
    let spec = ChartSpec::from_json_compat_str(input).expect("parse alias");

    assert_eq!(spec.kind, ChartKind::Doughnut);
    assert!(spec.datasets()[0].data[0].is_nan());
}

#[test]
fn legend_without_display_flag_is_shown() {
    let input = r##"{
        "type": "doughnut",
        "data": {
            "labels": ["交通", "餐饮"],
            "datasets": [{
                "data": [120, 80],
                "backgroundColor": ["#3498db", "#2ecc71"],
                "borderWidth": 2,
                "borderColor": "#fff"
            }]
        },
        "options": {
            "responsive": true,
            "plugins": { "legend": { "position": "right" } }
        }
    }"##;
    let spec = ChartSpec::from_json_compat_str(input).expect("parse doughnut config");

    assert_eq!(spec.kind, ChartKind::Doughnut);
    assert_eq!(
        spec.options.legend(),
        Some(LegendOptions::shown_at(LegendPosition::Right))
    );
    assert_eq!(spec.datasets()[0].data, vec![120.0, 80.0]);
}

#[test]
fn bare_spec_parse_error_names_the_actual_cause() {
    let err = ChartSpec::from_json_compat_str(r#"{"type": "line"}"#)
        .expect_err("data is required");
    let message = err.to_string();

    assert!(message.contains("missing field `data`"), "{message}");
    assert!(!message.contains("schema_version"), "{message}");
}
