use episode_chart::config::ChartConfig;
use episode_chart::data_types::Reduce;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = ChartConfig::default();
    assert_eq!(config.data_path, PathBuf::from("Game_of_Thrones.csv"));
    assert_eq!(config.band_padding, 0.2);
    assert_eq!(config.entrance_duration(), Duration::from_millis(800));
    assert_eq!(config.stagger(), Duration::from_millis(100));
    assert_eq!(config.axis_duration(), Duration::from_millis(1000));
    assert_eq!(config.detail_reduce, Reduce::Sum);
    assert_eq!(config.margins.left, 80.0);
    assert_eq!(config.margins.bottom, 100.0);
    assert_eq!(config.bar.fill, 0x05b6e7);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = ChartConfig::from_json(
        r#"{ "data_path": "episodes.csv", "detail_reduce": "Mean", "margins": { "left": 120 } }"#,
    )
    .unwrap();
    assert_eq!(config.data_path, PathBuf::from("episodes.csv"));
    assert_eq!(config.detail_reduce, Reduce::Mean);
    assert_eq!(config.margins.left, 120.0);
    assert_eq!(config.margins.top, 50.0);
    assert_eq!(config.stagger_ms, 100);
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(ChartConfig::from_json("{ not json").is_err());
    assert!(ChartConfig::from_json(r#"{ "stagger_ms": "soon" }"#).is_err());
}

#[test]
fn test_json_round_trip() {
    let config = ChartConfig::default();
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(ChartConfig::from_json(&text).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    let err = ChartConfig::load("/nonexistent/episode-chart.json").unwrap_err();
    assert!(format!("{:?}", err).contains("failed to read config"));
}

#[test]
fn test_window_size() {
    assert_eq!(ChartConfig::default().window_size, (1280.0, 800.0));
    let config = ChartConfig::from_json(r#"{ "window_size": [640, 480] }"#).unwrap();
    assert_eq!(config.window_size, (640.0, 480.0));
}
