use episode_chart::chart::EpisodeChart;
use episode_chart::config::ChartConfig;
use episode_chart::data_types::{ChartViewState, Episode};
use episode_chart::layout::{ChartLayout, Margins};
use episode_chart::ChartView;
use gpui::{AppContext, Entity, TestAppContext};
use std::time::Duration;

fn new_chart(cx: &mut TestAppContext) -> Entity<EpisodeChart> {
    cx.update(|cx| {
        cx.new(|_| {
            let rows = vec![
                Episode::rated("A", "E1", 90.0),
                Episode::rated("A", "E2", 70.0),
                Episode::rated("B", "E3", 100.0),
            ];
            let layout = ChartLayout::from_viewport(1000.0, 600.0, Margins::default());
            EpisodeChart::new(rows, layout, ChartConfig::default())
        })
    })
}

#[gpui::test]
fn test_chart_view_holds_model(cx: &mut TestAppContext) {
    let chart_entity = new_chart(cx);
    let window = cx.add_window(|_window, cx| ChartView::new(chart_entity.clone(), cx));

    window
        .update(cx, |view, _window, _cx| {
            assert!(
                view.chart.entity_id() == chart_entity.entity_id(),
                "ChartView should hold the correct chart entity"
            );
        })
        .unwrap();
}

#[gpui::test]
fn test_drill_through_model_updates(cx: &mut TestAppContext) {
    let chart_entity = new_chart(cx);
    let _window = cx.add_window(|_window, cx| ChartView::new(chart_entity.clone(), cx));

    cx.update(|cx| {
        chart_entity.update(cx, |c, cx| {
            c.advance(Duration::from_secs(5));
            c.click("A");
            cx.notify();
        });
    });

    chart_entity.read_with(cx, |c, _| {
        assert_eq!(c.view(), &ChartViewState::Overview.drill_into("A"));
        assert_eq!(c.bars().len(), 2);
    });

    cx.update(|cx| {
        chart_entity.update(cx, |c, cx| {
            c.drill_out();
            cx.notify();
        });
    });

    chart_entity.read_with(cx, |c, _| {
        assert_eq!(c.view(), &ChartViewState::Overview);
        assert_eq!(c.aggregate().labels().collect::<Vec<_>>(), vec!["A", "B"]);
    });
}
