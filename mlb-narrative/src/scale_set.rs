//! The scales a page is drawn with.
//!
//! Built from scratch on every transition from the dataset extents and the
//! chart config, so the same page always yields the same scales.

use mlb_stats::Dataset;
use serde::Serialize;

use crate::config::ChartConfig;
use crate::page::{Page, TeamMetric};
use crate::scale::{BandScale, ColorScale, LinearScale};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleSet {
    /// Team bars: band x over team codes, linear y from zero to the max
    Bars {
        metric: TeamMetric,
        x: BandScale,
        y: LinearScale,
    },
    /// Home-run circles: distance by launch angle, sized by exit velocity,
    /// colored by pitch velocity
    Scatter {
        x: LinearScale,
        y: LinearScale,
        radius: LinearScale,
        color: ColorScale,
    },
}

impl ScaleSet {
    /// Scales for `page`. `None` for the scatter page when no home runs
    /// were loaded.
    pub fn for_page(page: Page, dataset: &Dataset, config: &ChartConfig) -> Option<ScaleSet> {
        let width = config.chart_width();
        let height = config.chart_height();

        match page.metric() {
            Some(metric) => {
                // All-zero metrics keep their bars on the baseline.
                let max = metric.extent(dataset.team_extents()).max;
                let top = if max > 0.0 { max } else { 1.0 };
                Some(ScaleSet::Bars {
                    metric,
                    x: team_band(dataset, config),
                    y: LinearScale::new([0.0, top], [height, 0.0]),
                })
            }
            None => {
                let ext = dataset.homerun_extents()?;
                let span = |e: mlb_stats::Extent| [e.min, e.max];
                Some(ScaleSet::Scatter {
                    x: LinearScale::new(span(ext.distance_ft), [0.0, width]),
                    y: LinearScale::new(span(ext.launch_angle), [height, 0.0]),
                    radius: LinearScale::new(
                        span(ext.ev_mph),
                        [config.min_radius, config.max_radius],
                    ),
                    color: ColorScale::new(
                        span(ext.pitch_mph),
                        config.low_color,
                        config.high_color,
                    ),
                })
            }
        }
    }

    pub fn is_scatter(&self) -> bool {
        matches!(self, ScaleSet::Scatter { .. })
    }
}

/// Band scale over every team code, in data order.
pub fn team_band(dataset: &Dataset, config: &ChartConfig) -> BandScale {
    BandScale::new(
        dataset.teams().iter().map(|t| t.team.clone()).collect(),
        [0.0, config.chart_width()],
        config.band_padding,
    )
}
