//! Pitches, balls in play and home runs by team
//!
//! A four-page narrative over one chart. The first three pages are team bar
//! charts; the fourth is a scatter of the season's notable home runs
//! (distance by launch angle, sized by exit velocity, colored by pitch speed).
//!
//! Data flow:
//! 1. `mlb-stats` embeds `team_stats.csv` and `homeruns.csv` at compile time.
//! 2. On mount: parse both into a `NarrativeController` and draw page 1.
//! 3. Nav clicks and D3 pointer events become `ChartEvent`s; the controller's
//!    updates drive the D3 transition, the narrative panel and the tooltip.

use dioxus::prelude::*;
use mlb_chart_ui::components::{
    ChartContainer, ChartHeader, LoadError, LoadingNotice, NarrativePanel, NarrativeText, PageNav,
    Tooltip,
};
use mlb_chart_ui::js_bridge;
use mlb_chart_ui::state::AppState;
use mlb_narrative::{ChartConfig, ChartEvent, ChartVariant, NarrativeController, Page};
use mlb_stats::homerun::HOMERUNS_CSV;
use mlb_stats::team::TEAM_STATS_CSV;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "narrative-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("narrative-root"))
        .launch(App);
}

fn narrative_texts() -> Vec<NarrativeText> {
    vec![
        NarrativeText {
            page: Page::Page1,
            title: "Every team throws a lot of pitches",
            body: "Over a full season each staff throws well over twenty thousand pitches. \
                   The spread between the busiest and the most efficient staffs is only a few percent.",
        },
        NarrativeText {
            page: Page::Page2,
            title: "Few of them are put in play",
            body: "Fewer than one pitch in five ends up as a ball in play. \
                   Strikeouts, walks and foul balls account for the rest.",
        },
        NarrativeText {
            page: Page::Page3,
            title: "Fewer still leave the park",
            body: "Home runs are a rounding error next to pitch counts, \
                   yet the gap between the top and bottom teams is wider than on either earlier page.",
        },
        NarrativeText {
            page: Page::Page4,
            title: "What a home run looks like",
            body: "The longest home runs pair a high exit velocity with a launch angle in the high twenties. \
                   Hover a circle for the batter and the speed of the pitch.",
        },
    ]
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(CHART_CONTAINER_ID));

    // ─── Effect: parse the embedded CSVs once on mount and draw page 1 ───
    use_effect(move || {
        js_bridge::init_charts();
        match NarrativeController::from_csv(
            ChartConfig::default(),
            ChartVariant::Annotated,
            TEAM_STATS_CSV,
            Some(HOMERUNS_CSV),
        ) {
            Ok(controller) => state.start(controller),
            Err(e) => state.fail(e.to_string()),
        }
    });

    // ─── Pointer events from D3 ───
    use_future(move || async move {
        let mut events = js_bridge::event_channel();
        loop {
            match events.recv::<ChartEvent>().await {
                Ok(event) => state.dispatch(event),
                Err(e) => {
                    log::warn!("Chart event channel closed: {:?}", e);
                    break;
                }
            }
        }
    });

    // ─── Render ───
    rsx! {
        document::Script { src: js_bridge::D3_SRC }

        div {
            style: "max-width: 760px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "From pitch to home run".to_string(),
                subtitle: "MLB regular season, by team".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                LoadError {
                    dataset: "team and home run".to_string(),
                    message: err.clone(),
                }
            } else {
                if *state.loading.read() {
                    LoadingNotice { dataset: "team_stats.csv and homeruns.csv".to_string() }
                } else {
                    PageNav { pages: Page::ALL.to_vec() }
                }

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    config: ChartConfig::default(),
                    caption: "Sample season data, one row per team and per home run".to_string(),
                }

                NarrativePanel { texts: narrative_texts() }
            }
        }

        Tooltip {}
    }
}
