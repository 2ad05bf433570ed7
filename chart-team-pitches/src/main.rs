//! Pitches thrown by team
//!
//! A single static bar chart, one bar per team colored with the team's
//! primary color. Hovering a bar shows the team logo, its pitch count and
//! its average pitch velocity.

use dioxus::prelude::*;
use mlb_chart_ui::components::{ChartContainer, ChartHeader, LoadError, LoadingNotice, Tooltip};
use mlb_chart_ui::js_bridge;
use mlb_chart_ui::state::AppState;
use mlb_narrative::{ChartConfig, ChartEvent, ChartVariant, NarrativeController};
use mlb_stats::team::PITCHES_BY_TEAM_CSV;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "team-pitches-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("team-pitches-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(CHART_CONTAINER_ID));

    use_effect(move || {
        js_bridge::init_charts();
        match NarrativeController::from_csv(
            ChartConfig::default(),
            ChartVariant::Single,
            PITCHES_BY_TEAM_CSV,
            None,
        ) {
            Ok(controller) => state.start(controller),
            Err(e) => state.fail(e.to_string()),
        }
    });

    use_future(move || async move {
        let mut events = js_bridge::event_channel();
        while let Ok(event) = events.recv::<ChartEvent>().await {
            state.dispatch(event);
        }
        log::warn!("Chart event channel closed");
    });

    rsx! {
        document::Script { src: js_bridge::D3_SRC }

        div {
            style: "max-width: 760px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "Pitches by Team".to_string(),
                subtitle: "Hover a bar for average pitch velocity".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                LoadError {
                    dataset: "pitches by team".to_string(),
                    message: err.clone(),
                }
            } else {
                if *state.loading.read() {
                    LoadingNotice { dataset: "pitches_by_team.csv".to_string() }
                }
                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    config: ChartConfig::default(),
                }
            }
        }

        Tooltip {}
    }
}
