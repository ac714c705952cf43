use episode_chart::scales::{BandScale, ChartScale};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_band_scale_single_label() {
    let width = 600.0;
    let scale = BandScale::new(labels(&["A"]), (0.0, width), 0.2);
    assert!((scale.map("A").unwrap() - width / 6.0).abs() < 1e-3);
    assert!((scale.bandwidth() - 2.0 * width / 3.0).abs() < 1e-3);
}

#[test]
fn test_band_scale_spacing() {
    let scale = BandScale::new(labels(&["A", "B", "C"]), (0.0, 640.0), 0.2);
    // step = 640 / (3 - 0.2 + 0.4)
    let step = 640.0 / 3.2;
    assert!((scale.step() - step).abs() < 1e-3);
    assert!((scale.bandwidth() - step * 0.8).abs() < 1e-3);

    let a = scale.map("A").unwrap();
    let b = scale.map("B").unwrap();
    let c = scale.map("C").unwrap();
    assert!((b - a - step).abs() < 1e-3);
    assert!((c - b - step).abs() < 1e-3);
    // Outer padding is symmetric.
    let right_gap = 640.0 - (c + scale.bandwidth());
    assert!((a - right_gap).abs() < 1e-3);
}

#[test]
fn test_band_scale_unknown_label() {
    let scale = BandScale::new(labels(&["A"]), (0.0, 100.0), 0.2);
    assert_eq!(scale.map("Z"), None);
    assert_eq!(scale.center("Z"), None);
}

#[test]
fn test_band_scale_center() {
    let scale = BandScale::new(labels(&["A", "B"]), (0.0, 100.0), 0.2);
    let center = scale.center("B").unwrap();
    assert!((center - (scale.map("B").unwrap() + scale.bandwidth() / 2.0)).abs() < 1e-6);
}

#[test]
fn test_value_axis_is_inverted() {
    let scale = ChartScale::value_axis(100.0, 400.0);
    assert_eq!(scale.map(0.0), 400.0);
    assert_eq!(scale.map(100.0), 0.0);
    assert!((scale.map(25.0) - 300.0).abs() < 1e-3);
    assert_eq!(scale.domain(), (0.0, 100.0));
    assert_eq!(scale.range(), (400.0, 0.0));
}

#[test]
fn test_value_axis_degenerate_domain() {
    let scale = ChartScale::value_axis(0.0, 400.0);
    assert!(matches!(scale, ChartScale::Degenerate { .. }));
    // Every value sits on the baseline.
    assert_eq!(scale.map(0.0), 400.0);
    assert_eq!(scale.map(50.0), 400.0);
    assert_eq!(scale.ticks(10), vec![0.0]);
}

#[test]
fn test_value_axis_nan_input() {
    let scale = ChartScale::value_axis(100.0, 400.0);
    assert_eq!(scale.map(f64::NAN), 0.0);
}

#[test]
fn test_value_axis_ticks() {
    let scale = ChartScale::value_axis(100.0, 400.0);
    let ticks = scale.ticks(10);
    assert!(ticks.len() >= 5);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(100.0));
    assert!(ticks.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_format_tick() {
    let scale = ChartScale::value_axis(1.0, 100.0);
    assert_eq!(scale.format_tick(80.0), "80");
    assert_eq!(scale.format_tick(0.5), "0.5");
}
