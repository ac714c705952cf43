//! Episode chart binary.
//!
//! Loads the episode log and opens a window with the drill-down chart.
//!
//! # Environment Variables
//!
//! - `EPISODE_CHART_CONFIG`: optional path of a JSON chart configuration
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use episode_chart::polars_source::load_episodes;
use episode_chart::{ChartConfig, ChartView};
use gpui::*;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> eyre::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config = ChartConfig::from_env()?;
    let episodes = match load_episodes(&config.data_path) {
        Ok(episodes) => episodes,
        Err(err) => {
            error!("{:?}", err);
            std::process::exit(1);
        }
    };
    info!(rows = episodes.len(), "starting episode chart");

    Application::new().run(move |cx: &mut App| {
        let (width, height) = config.window_size;
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            cx.new(|cx| ChartView::build(episodes, config, window, cx))
        });
        if let Err(err) = opened {
            error!("failed to open window: {:?}", err);
            cx.quit();
        }
    });

    Ok(())
}
