//! episode_chart: drill-down bar chart of episode ratings in GPUI

pub mod aggregation;
pub mod animation;
pub mod axis_renderer;
pub mod chart;
pub mod chart_view;
pub mod config;
pub mod data_types;
pub mod layout;
#[cfg(feature = "polars")]
pub mod polars_source;
pub mod reconcile;
pub mod scales;
pub mod theme;
pub mod utils;
pub mod view_controller;

pub use aggregation::{aggregate_by_director, aggregate_by_episode_for_director};
pub use chart::EpisodeChart;
pub use chart_view::ChartView;
pub use config::ChartConfig;
pub use data_types::{Aggregate, AggregatePair, ChartViewState, Episode};
