//! The target visual state for a page, serialized to JSON for D3.js.
//!
//! A plan lists every mark every time. Marks keep their index across
//! pages; the mark set a page does not use collapses to zero extent rather
//! than being dropped, so D3 transitions the same elements in place.

use mlb_stats::Dataset;
use serde::Serialize;

use crate::config::ChartConfig;
use crate::page::{ChartVariant, Page};
use crate::scale::{BandScale, LinearScale};
use crate::scale_set::{team_band, ScaleSet};
use crate::tooltip::format_value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMark {
    pub index: usize,
    pub team: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMark {
    pub index: usize,
    pub player: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AxisScale {
    Band { domain: Vec<String>, range: [f64; 2], padding: f64 },
    Linear { domain: [f64; 2], range: [f64; 2] },
}

impl From<&BandScale> for AxisScale {
    fn from(s: &BandScale) -> Self {
        AxisScale::Band {
            domain: s.domain.clone(),
            range: s.range,
            padding: s.padding,
        }
    }
}

impl From<&LinearScale> for AxisScale {
    fn from(s: &LinearScale) -> Self {
        AxisScale::Linear {
            domain: s.domain,
            range: s.range,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub scale: AxisScale,
    /// Axis title, annotated charts only
    pub title: Option<String>,
}

/// A labeled pointer at one mark, shown only on its own page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    pub page: Page,
    pub label: String,
    /// Anchor point in plot coordinates
    pub x: f64,
    pub y: f64,
    /// Label offset from the anchor
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
}

/// Show/hide state of the text block that goes with a page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NarrativeBlock {
    pub page: Page,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub page: Page,
    pub variant: ChartVariant,
    pub transition_ms: u64,
    /// Size of the plot rectangle; D3 translates it by `margin`
    pub margin: f64,
    pub chart_width: f64,
    pub chart_height: f64,
    pub bars: Vec<BarMark>,
    pub circles: Vec<CircleMark>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub callouts: Vec<Callout>,
    pub narrative: Vec<NarrativeBlock>,
}

impl RenderPlan {
    /// Lay out every mark, axis, callout and narrative block for `page`
    /// drawn with `scales`.
    pub fn build(
        page: Page,
        variant: ChartVariant,
        scales: &ScaleSet,
        dataset: &Dataset,
        config: &ChartConfig,
    ) -> RenderPlan {
        let annotated = variant.is_annotated();
        let (x_axis, y_axis) = match scales {
            ScaleSet::Bars { metric, x, y } => (
                AxisSpec {
                    scale: x.into(),
                    title: annotated.then(|| "Team".to_string()),
                },
                AxisSpec {
                    scale: y.into(),
                    title: annotated.then(|| metric.axis_title().to_string()),
                },
            ),
            ScaleSet::Scatter { x, y, .. } => (
                AxisSpec {
                    scale: x.into(),
                    title: annotated.then(|| "Distance (ft)".to_string()),
                },
                AxisSpec {
                    scale: y.into(),
                    title: annotated.then(|| "Launch angle (°)".to_string()),
                },
            ),
        };

        let callouts = if annotated {
            variant
                .pages()
                .iter()
                .filter_map(|&p| callout_for(p, p == page, dataset, config))
                .collect()
        } else {
            Vec::new()
        };

        RenderPlan {
            page,
            variant,
            transition_ms: config.transition_ms,
            margin: config.margin,
            chart_width: config.chart_width(),
            chart_height: config.chart_height(),
            bars: bar_marks(scales, dataset, config),
            circles: circle_marks(scales, dataset, config),
            x_axis,
            y_axis,
            callouts,
            narrative: variant
                .pages()
                .iter()
                .map(|&p| NarrativeBlock {
                    page: p,
                    active: p == page,
                })
                .collect(),
        }
    }

    pub fn active_narrative(&self) -> Option<Page> {
        self.narrative.iter().find(|b| b.active).map(|b| b.page)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn bar_marks(scales: &ScaleSet, dataset: &Dataset, config: &ChartConfig) -> Vec<BarMark> {
    let baseline = config.chart_height();
    let teams = dataset.teams();
    let band = match scales {
        ScaleSet::Bars { x, .. } => x.clone(),
        ScaleSet::Scatter { .. } => team_band(dataset, config),
    };
    let width = band.bandwidth();

    teams
        .iter()
        .enumerate()
        .map(|(index, team)| {
            let y = match scales {
                ScaleSet::Bars { metric, y, .. } => y.apply(metric.value(team)),
                ScaleSet::Scatter { .. } => baseline,
            };
            BarMark {
                index,
                team: team.team.clone(),
                x: band.position_at(index),
                y,
                width,
                height: baseline - y,
                fill: team.fill().to_string(),
            }
        })
        .collect()
}

fn circle_marks(scales: &ScaleSet, dataset: &Dataset, config: &ChartConfig) -> Vec<CircleMark> {
    dataset
        .homeruns()
        .iter()
        .enumerate()
        .map(|(index, event)| match scales {
            ScaleSet::Scatter {
                x,
                y,
                radius,
                color,
            } => CircleMark {
                index,
                player: event.player.clone(),
                cx: x.apply(event.distance_ft),
                cy: y.apply(event.launch_angle),
                r: radius.apply(event.ev_mph),
                fill: color.apply(event.pitch_mph).to_string(),
            },
            ScaleSet::Bars { .. } => CircleMark {
                index,
                player: event.player.clone(),
                cx: 0.0,
                cy: config.chart_height(),
                r: 0.0,
                fill: config.low_color.to_string(),
            },
        })
        .collect()
}

/// Callout for `page`, anchored at the top of the leading mark under that
/// page's own scales.
fn callout_for(page: Page, active: bool, dataset: &Dataset, config: &ChartConfig) -> Option<Callout> {
    let scales = ScaleSet::for_page(page, dataset, config)?;
    let (label, x, y) = match &scales {
        ScaleSet::Bars { metric, x, y } => {
            let max = metric.extent(dataset.team_extents()).max;
            let (index, team) = dataset
                .teams()
                .iter()
                .enumerate()
                .find(|(_, t)| metric.value(t) == max)?;
            let what = match page {
                Page::Page1 => "most pitches",
                Page::Page2 => "most balls in play",
                _ => "most home runs",
            };
            (
                format!("{}: {} ({})", team.team, what, format_value(max)),
                x.position_at(index) + x.bandwidth() / 2.0,
                y.apply(max),
            )
        }
        ScaleSet::Scatter { x, y, .. } => {
            let longest = dataset.homerun_extents()?.distance_ft.max;
            let event = dataset.homeruns().iter().find(|e| e.distance_ft == longest)?;
            (
                format!("{}: longest home run ({} ft)", event.player, format_value(longest)),
                x.apply(event.distance_ft),
                y.apply(event.launch_angle),
            )
        }
    };
    Some(Callout {
        page,
        label,
        x,
        y,
        dx: config.callout_dx,
        dy: config.callout_dy,
        opacity: if active { 1.0 } else { 0.0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAMS: &str = "team,pitches,inplay,homerun\nNYY,120,80,10\nBOS,95,60,7\n";
    const HOMERUNS: &str = "distance_ft,launch_angle,ev_mph,pitch_mph,player\n\
        400,25,105,90,A\n\
        450,35,115,98,B\n";

    fn plan(page: Page, variant: ChartVariant) -> RenderPlan {
        let ds = Dataset::from_csv(TEAMS, Some(HOMERUNS)).unwrap();
        let config = ChartConfig::default();
        let scales = ScaleSet::for_page(page, &ds, &config).unwrap();
        RenderPlan::build(page, variant, &scales, &ds, &config)
    }

    #[test]
    fn test_bar_page_collapses_circles() {
        let p = plan(Page::Page1, ChartVariant::Annotated);
        assert_eq!(p.bars.len(), 2);
        assert_eq!(p.bars[0].height, 300.0);
        assert_eq!(p.bars[0].y, 0.0);
        // two bands over 600px with 0.25 padding: step 266.67, bandwidth 200
        assert!((p.bars[0].width - 200.0).abs() < 1e-9);
        assert!((p.bars[0].x - 600.0 / 2.25 * 0.25).abs() < 1e-9);
        let last = &p.bars[1];
        assert!(last.x > p.bars[0].x + p.bars[0].width);
        assert!(last.x + last.width <= p.chart_width + 1e-9);
        assert_eq!(p.bars[0].fill, "#132448");
        assert_eq!(p.circles.len(), 2);
        assert!(p.circles.iter().all(|c| c.r == 0.0));
    }

    #[test]
    fn test_scatter_page_collapses_bars() {
        let p = plan(Page::Page4, ChartVariant::Annotated);
        assert!(p.bars.iter().all(|b| b.height == 0.0 && b.y == 300.0));
        assert_eq!(p.circles[0].cx, 0.0);
        assert_eq!(p.circles[1].cx, 600.0);
        assert_eq!(p.circles[1].cy, 0.0);
        assert_eq!(p.circles[0].r, 3.0);
        assert_eq!(p.circles[1].r, 12.0);
        assert_eq!(p.circles[1].fill, "#d73027");
    }

    #[test]
    fn test_callout_opacity_follows_page() {
        let p = plan(Page::Page3, ChartVariant::Annotated);
        assert_eq!(p.callouts.len(), 4);
        for callout in &p.callouts {
            let expected = if callout.page == Page::Page3 { 1.0 } else { 0.0 };
            assert_eq!(callout.opacity, expected, "{callout:?}");
        }
        let hr = p.callouts.iter().find(|c| c.page == Page::Page3).unwrap();
        assert_eq!(hr.label, "NYY: most home runs (10)");
        let longest = p.callouts.iter().find(|c| c.page == Page::Page4).unwrap();
        assert_eq!(longest.label, "B: longest home run (450 ft)");
    }

    #[test]
    fn test_plain_variant_has_no_annotations() {
        let p = plan(Page::Page2, ChartVariant::Plain);
        assert!(p.callouts.is_empty());
        assert_eq!(p.x_axis.title, None);
        assert_eq!(p.y_axis.title, None);
        assert_eq!(p.narrative.len(), 4);
    }

    #[test]
    fn test_axis_titles() {
        let p = plan(Page::Page2, ChartVariant::Annotated);
        assert_eq!(p.x_axis.title.as_deref(), Some("Team"));
        assert_eq!(p.y_axis.title.as_deref(), Some("Balls in play"));
        let p = plan(Page::Page4, ChartVariant::Annotated);
        assert_eq!(p.x_axis.title.as_deref(), Some("Distance (ft)"));
        assert_eq!(
            p.x_axis.scale,
            AxisScale::Linear {
                domain: [400.0, 450.0],
                range: [0.0, 600.0]
            }
        );
    }

    #[test]
    fn test_all_zero_bars_have_no_height() {
        let ds = Dataset::from_csv(
            "team,pitches,inplay,homerun\nNYY,120,0,0\nBOS,95,0,0\n",
            Some(HOMERUNS),
        )
        .unwrap();
        let config = ChartConfig::default();
        for page in [Page::Page2, Page::Page3] {
            let scales = ScaleSet::for_page(page, &ds, &config).unwrap();
            let p = RenderPlan::build(page, ChartVariant::Plain, &scales, &ds, &config);
            assert!(
                p.bars.iter().all(|b| b.height == 0.0 && b.y == 300.0),
                "page {page:?}: {:?}",
                p.bars
            );
        }
    }

    #[test]
    fn test_json_shape() {
        let json = plan(Page::Page1, ChartVariant::Annotated).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["page"], "1");
        assert_eq!(value["transition_ms"], 1000);
        assert_eq!(value["x_axis"]["scale"]["kind"], "band");
        assert_eq!(value["narrative"][0]["active"], true);
    }
}
