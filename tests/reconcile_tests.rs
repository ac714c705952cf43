use episode_chart::animation::{BarGeometry, EntrancePlan};
use episode_chart::data_types::AggregatePair;
use episode_chart::reconcile::{diff, BarLayer, BarOp, MIN_HIT_HEIGHT};
use std::time::Duration;

const BASELINE: f32 = 400.0;

fn plan_for(pairs: &[AggregatePair]) -> EntrancePlan {
    let targets = pairs.iter().enumerate().map(|(i, p)| {
        let target = BarGeometry {
            x: i as f32 * 50.0,
            y: BASELINE - p.value as f32,
            width: 40.0,
            height: p.value as f32,
        };
        (p.label.clone(), target)
    });
    EntrancePlan::staggered(targets, Duration::from_millis(800), Duration::from_millis(100))
}

fn apply(layer: &mut BarLayer, pairs: &[AggregatePair], elapsed: Duration) {
    let ops = diff(layer.keys().collect::<Vec<_>>(), pairs.iter().map(|p| p.label.as_str()));
    layer.apply(&ops, pairs, &plan_for(pairs), BASELINE, elapsed);
}

#[test]
fn test_diff_from_empty_is_all_enters() {
    let ops = diff(Vec::<&str>::new(), vec!["A", "B"]);
    assert_eq!(
        ops,
        vec![
            BarOp::Enter { key: "A".into(), index: 0 },
            BarOp::Enter { key: "B".into(), index: 1 },
        ]
    );
}

#[test]
fn test_diff_mixed() {
    let ops = diff(vec!["A", "B", "C"], vec!["B", "D"]);
    assert_eq!(
        ops,
        vec![
            BarOp::Exit { key: "A".into() },
            BarOp::Exit { key: "C".into() },
            BarOp::Update { key: "B".into(), index: 0 },
            BarOp::Enter { key: "D".into(), index: 1 },
        ]
    );
}

#[test]
fn test_diff_to_empty_is_all_exits() {
    let ops = diff(vec!["A", "B"], Vec::<&str>::new());
    assert!(ops.iter().all(|op| matches!(op, BarOp::Exit { .. })));
    assert_eq!(ops.len(), 2);
}

#[test]
fn test_enter_starts_collapsed_on_baseline() {
    let pairs = vec![AggregatePair::new("A", 80.0), AggregatePair::new("B", 100.0)];
    let mut layer = BarLayer::default();
    apply(&mut layer, &pairs, Duration::ZERO);

    assert_eq!(layer.len(), 2);
    for shape in layer.shapes() {
        let start = shape.geometry_at(Duration::ZERO);
        assert_eq!(start.height, 0.0);
        assert_eq!(start.y, BASELINE);
        assert!(!shape.hovered);
    }

    // Staggered delays, then each bar settles on its target.
    let b = layer.get("B").unwrap();
    assert_eq!(b.transition.delay, Duration::from_millis(100));
    assert_eq!(b.geometry_at(Duration::from_millis(100)).height, 0.0);
    let settled = b.geometry_at(Duration::from_millis(900));
    assert_eq!(settled.height, 100.0);
    assert_eq!(settled.y, BASELINE - 100.0);
}

#[test]
fn test_update_moves_from_current_geometry() {
    let mut layer = BarLayer::default();
    apply(&mut layer, &[AggregatePair::new("A", 80.0)], Duration::ZERO);
    // Settle the first transition, then rebind with a new value.
    apply(&mut layer, &[AggregatePair::new("A", 20.0)], Duration::from_secs(2));

    let a = layer.get("A").unwrap();
    assert_eq!(a.transition.from.height, 80.0);
    assert_eq!(a.transition.to.height, 20.0);
    assert_eq!(a.datum.value, 20.0);
}

#[test]
fn test_exit_removes_shape() {
    let mut layer = BarLayer::default();
    apply(
        &mut layer,
        &[AggregatePair::new("A", 10.0), AggregatePair::new("B", 20.0)],
        Duration::ZERO,
    );
    apply(&mut layer, &[AggregatePair::new("B", 20.0)], Duration::from_secs(2));
    assert_eq!(layer.keys().collect::<Vec<_>>(), vec!["B"]);

    apply(&mut layer, &[], Duration::from_secs(2));
    assert!(layer.is_empty());
}

#[test]
fn test_one_shape_per_label() {
    let mut layer = BarLayer::default();
    let pairs = vec![AggregatePair::new("A", 10.0), AggregatePair::new("B", 20.0)];
    apply(&mut layer, &pairs, Duration::ZERO);
    apply(&mut layer, &pairs, Duration::from_millis(300));
    apply(&mut layer, &pairs, Duration::from_millis(300));
    assert_eq!(layer.len(), 2);
}

#[test]
fn test_hit_test_and_animation_state() {
    let mut layer = BarLayer::default();
    apply(&mut layer, &[AggregatePair::new("A", 100.0)], Duration::ZERO);

    let done = Duration::from_millis(800);
    assert!(layer.is_animating(Duration::from_millis(400)));
    assert!(!layer.is_animating(done));

    let hit = layer.hit_test(20.0, BASELINE - 50.0, done).map(|s| s.key.as_str());
    assert_eq!(hit, Some("A"));
    assert!(layer.hit_test(45.0, BASELINE - 50.0, done).is_none());
    assert!(layer.hit_test(20.0, BASELINE - 150.0, done).is_none());
}

#[test]
fn test_flat_bar_is_hit_above_baseline() {
    let mut layer = BarLayer::default();
    apply(
        &mut layer,
        &[AggregatePair::new("A", 100.0), AggregatePair::new("B", 0.0)],
        Duration::ZERO,
    );
    let done = Duration::from_secs(2);
    let b = layer.get("B").unwrap().geometry_at(done);
    assert_eq!(b.height, 0.0);

    let x = b.x + b.width / 2.0;
    let hit = layer.hit_test(x, BASELINE - 1.0, done).map(|s| s.key.as_str());
    assert_eq!(hit, Some("B"));
    let hit = layer
        .hit_test(x, BASELINE - (MIN_HIT_HEIGHT - 0.5), done)
        .map(|s| s.key.as_str());
    assert_eq!(hit, Some("B"));
    assert!(layer.hit_test(x, BASELINE - (MIN_HIT_HEIGHT + 1.0), done).is_none());
}
