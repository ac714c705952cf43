use episode_chart::animation::{
    ease_cubic_in_out, progress, BarGeometry, BarTransition, DomainTransition, EntrancePlan,
};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn test_easing_endpoints() {
    assert_eq!(ease_cubic_in_out(0.0), 0.0);
    assert_eq!(ease_cubic_in_out(1.0), 1.0);
    assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-6);
    assert!(ease_cubic_in_out(0.25) < 0.25);
    assert!(ease_cubic_in_out(0.75) > 0.75);
}

#[test]
fn test_progress_with_delay() {
    assert_eq!(progress(ms(50), ms(100), ms(800)), 0.0);
    assert!((progress(ms(500), ms(100), ms(800)) - 0.5).abs() < 1e-6);
    assert_eq!(progress(ms(5000), ms(100), ms(800)), 1.0);
    assert_eq!(progress(ms(10), Duration::ZERO, Duration::ZERO), 1.0);
}

#[test]
fn test_staggered_plan() {
    let target = BarGeometry { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
    let plan = EntrancePlan::staggered(
        (0..4).map(|i| (format!("k{}", i), target)),
        ms(800),
        ms(100),
    );
    let delays: Vec<_> = plan.steps.iter().map(|s| s.delay).collect();
    assert_eq!(delays, vec![ms(0), ms(100), ms(200), ms(300)]);
    assert_eq!(plan.total_duration(), ms(1100));
    assert_eq!(EntrancePlan::default().total_duration(), Duration::ZERO);
}

#[test]
fn test_bar_transition_sample() {
    let transition = BarTransition {
        from: BarGeometry::collapsed(10.0, 20.0, 300.0),
        to: BarGeometry { x: 10.0, y: 100.0, width: 20.0, height: 200.0 },
        delay: ms(100),
        duration: ms(800),
    };
    assert_eq!(transition.sample(ms(0)), transition.from);
    let mid = transition.sample(ms(500));
    assert!((mid.height - 100.0).abs() < 1e-3);
    assert!((mid.y + mid.height - 300.0).abs() < 1e-3);
    assert_eq!(transition.sample(ms(900)), transition.to);
    assert!(!transition.is_finished(ms(899)));
    assert!(transition.is_finished(ms(900)));
}

#[test]
fn test_domain_transition() {
    let domain = DomainTransition { from_max: 100.0, to_max: 200.0, duration: ms(1000) };
    assert_eq!(domain.sample(Duration::ZERO), 100.0);
    assert!((domain.sample(ms(500)) - 150.0).abs() < 1e-6);
    assert_eq!(domain.sample(ms(1000)), 200.0);
    assert!(domain.is_finished(ms(1000)));

    let settled = DomainTransition::settled(42.0);
    assert_eq!(settled.sample(ms(3)), 42.0);
    assert!(settled.is_finished(Duration::ZERO));
}

#[test]
fn test_hit_area_grows_flat_bars_upwards() {
    let flat = BarGeometry::collapsed(10.0, 20.0, 300.0);
    let area = flat.hit_area(8.0);
    assert_eq!(area, BarGeometry { x: 10.0, y: 292.0, width: 20.0, height: 8.0 });
    assert!(area.contains(15.0, 296.0));
    assert!(!flat.contains(15.0, 296.0));

    let tall = BarGeometry { x: 0.0, y: 100.0, width: 20.0, height: 200.0 };
    assert_eq!(tall.hit_area(8.0), tall);
}
