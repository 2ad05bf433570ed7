//! The figure D3 draws the narrative chart into.

use dioxus::prelude::*;
use mlb_narrative::ChartConfig;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the render plan is applied to
    pub id: String,
    /// Geometry of the chart, used to reserve its space before the SVG exists
    pub config: ChartConfig,
    /// Source line under the chart
    #[props(default = String::new())]
    pub caption: String,
}

/// Reserves the chart's full SVG area so the page does not jump when D3
/// draws the first plan.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = figure_style(&props.config);

    rsx! {
        figure {
            style: "{style}",
            div { id: "{props.id}" }
            if !props.caption.is_empty() {
                figcaption {
                    style: "font-size: 11px; color: #888; text-align: right;",
                    "{props.caption}"
                }
            }
        }
    }
}

fn figure_style(config: &ChartConfig) -> String {
    format!(
        "margin: 0; max-width: {}px; min-height: {}px; position: relative;",
        config.width, config.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_reserves_chart_area() {
        assert_eq!(
            figure_style(&ChartConfig::default()),
            "margin: 0; max-width: 700px; min-height: 400px; position: relative;"
        );
    }
}
