//! Integration tests for the airmood engine

use std::process::Command;

use airmood::forecast::{AxisRange, build_comparison};
use airmood::models::{DailyAverage, DailyForecast, ModelPrediction};
use airmood::{
    AqiCategory, DashboardReport, EngineConfig, ErrorKind, FeedResponse, LocationSnapshot,
    ModelForecastResponse, MoodStatus, Pollutant, classify, compute_composite_aqi, derive_mood,
    normalize_forecast,
};
use rstest::rstest;

const FEED: &str = r#"{
    "status": "ok",
    "data": {
        "aqi": 153,
        "city": {"name": "Dhaka", "geo": [23.8103, 90.4125]},
        "forecast": {
            "daily": {
                "pm25": [
                    {"avg": 10, "day": "2024-03-01", "max": 14, "min": 6},
                    {"avg": 200, "day": "2024-03-02", "max": 230, "min": 170},
                    {"day": "2024-03-03"}
                ],
                "pm10": [
                    {"avg": 30, "day": "2024-03-01"},
                    {"avg": 180, "day": "2024-03-02"},
                    {"day": "2024-03-03"}
                ]
            }
        }
    }
}"#;

const MODEL: &str = r#"{"predictions": [
    {"date": "2024-03-01", "predicted_pm25": 12.0},
    {"date": "2024-03-02", "predicted_pm25": 150.0},
    {"date": "2024-03-03", "predicted_pm25": null}
]}"#;

#[rstest]
#[case(Some(10.0), None, None, 42, Pollutant::Pm25)]
#[case(Some(200.0), None, None, 250, Pollutant::Pm25)]
#[case(Some(10.0), Some(100.0), Some(60.0), 73, Pollutant::Pm10)]
#[case(Some(0.0), Some(0.0), Some(0.0), 0, Pollutant::Pm25)]
fn test_composite_examples(
    #[case] pm25: Option<f64>,
    #[case] pm10: Option<f64>,
    #[case] o3: Option<f64>,
    #[case] expected: u16,
    #[case] pollutant: Pollutant,
) {
    let reading = compute_composite_aqi(pm25, pm10, o3).unwrap();
    assert_eq!(reading.value, expected);
    assert_eq!(reading.contributing_pollutant, pollutant);
}

#[test]
fn test_feed_to_forecast_records() {
    let feed = FeedResponse::from_json(FEED).unwrap();
    let records = normalize_forecast(feed.daily_forecast().unwrap()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].aqi, Some(42));
    assert_eq!(records[1].aqi, Some(250));
    // No readings at all for the last day
    assert_eq!(records[2].pm25, None);
    assert_eq!(records[2].aqi, None);
    for record in &records {
        if record.pm25.is_none() {
            assert!(record.aqi.is_none());
        }
    }
}

#[test]
fn test_comparison_range_covers_both_sources() {
    let feed = FeedResponse::from_json(FEED).unwrap();
    let records = normalize_forecast(feed.daily_forecast().unwrap()).unwrap();
    let model = ModelForecastResponse::from_json(MODEL).unwrap();

    let comparison = build_comparison(&records, &model.predictions).unwrap();

    assert_eq!(comparison.api.points.len(), 3);
    assert_eq!(comparison.model.points.len(), 3);
    assert_eq!(comparison.model.points[2].aqi, None);

    let values: Vec<u16> = comparison
        .api
        .present_values()
        .chain(comparison.model.present_values())
        .collect();
    assert_eq!(values.len(), 4);
    assert!(comparison.axis.y_max >= comparison.axis.y_min);
    for value in values {
        let value = u32::from(value);
        assert!(comparison.axis.y_min <= value && value <= comparison.axis.y_max);
    }
}

#[test]
fn test_comparison_without_values_uses_default_range() {
    let records = normalize_forecast(&DailyForecast {
        pm25: vec![DailyAverage {
            day: Some("2024-03-01".to_string()),
            avg: None,
        }],
        ..DailyForecast::default()
    })
    .unwrap();
    let model = vec![ModelPrediction {
        date: "2024-03-01".to_string(),
        predicted_pm25: None,
    }];

    let comparison = build_comparison(&records, &model).unwrap();
    assert_eq!(comparison.axis, AxisRange { y_min: 0, y_max: 100 });
}

#[test]
fn test_mood_properties() {
    let mut previous = derive_mood(0);
    for aqi in (10..=600).step_by(10) {
        let scores = derive_mood(aqi);
        assert!(scores.focus <= previous.focus);
        assert!(scores.energy <= previous.energy);
        assert!(scores.mood <= previous.mood);
        previous = scores;
    }

    assert_eq!(classify(0.70), MoodStatus::Good);
    assert_eq!(classify(0.50), MoodStatus::Moderate);
    assert_eq!(classify(0.499), MoodStatus::Low);
}

#[test]
fn test_report_from_provider_payloads() {
    let feed = FeedResponse::from_json(FEED).unwrap();
    let model = ModelForecastResponse::from_json(MODEL).unwrap();
    let snapshot = LocationSnapshot::from_responses(
        &feed,
        &model,
        airmood::report::CurrentConcentrations {
            pm25: Some(200.0),
            pm10: Some(40.0),
            o3: None,
        },
    )
    .unwrap();

    let report = DashboardReport::build(&snapshot, &EngineConfig::default()).unwrap();
    let current = report.current.unwrap();
    assert_eq!(current.aqi, 250);
    assert_eq!(current.reported_aqi, Some(153));
    assert_eq!(current.category, AqiCategory::VeryUnhealthy);
    assert_eq!(report.forecast.len(), 3);
    assert!(report.mood.unwrap().needs_action());
    assert_eq!(report.location.unwrap().name, "Dhaka");
}

#[test]
fn test_report_requires_forecast() {
    let err = DashboardReport::build(&LocationSnapshot::default(), &EngineConfig::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataUnavailable);
}

#[test]
fn test_cli_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("airmood.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"warn\"\n").unwrap();
    let snapshot_path =
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/dhaka_snapshot.json");

    let output = Command::new(env!("CARGO_BIN_EXE_airmood"))
        .arg(&snapshot_path)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute airmood");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["current"]["aqi"], 153);
    assert_eq!(report["current"]["reading"]["value"], 153);
    assert_eq!(report["current"]["reading"]["contributing_pollutant"], "pm25");
    assert_eq!(report["forecast"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_without_arguments_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_airmood"))
        .output()
        .expect("Failed to execute airmood");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("<SNAPSHOT>"));
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_airmood"))
        .arg("--help")
        .output()
        .expect("Failed to execute airmood");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("air quality dashboard report"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_airmood"))
        .arg("--version")
        .output()
        .expect("Failed to execute airmood");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(airmood::VERSION));
}

#[test]
fn test_report_without_current_readings() {
    let snapshot = LocationSnapshot {
        forecast: Some(DailyForecast {
            pm25: vec![DailyAverage::new("2024-03-01", 200.0)],
            ..DailyForecast::default()
        }),
        ..LocationSnapshot::default()
    };

    let report = DashboardReport::build(&snapshot, &EngineConfig::default()).unwrap();
    assert!(report.current.is_none());
    assert!(report.mood.is_none());

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["current"].is_null());
    assert!(json["mood"].is_null());
}
