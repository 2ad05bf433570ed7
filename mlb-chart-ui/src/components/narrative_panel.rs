//! Narrative text blocks, one per page; only the active page's block shows.

use crate::state::AppState;
use dioxus::prelude::*;
use mlb_narrative::Page;

/// Text that goes with one page of the narrative.
#[derive(Clone, PartialEq)]
pub struct NarrativeText {
    pub page: Page,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Props, Clone, PartialEq)]
pub struct NarrativePanelProps {
    pub texts: Vec<NarrativeText>,
}

#[component]
pub fn NarrativePanel(props: NarrativePanelProps) -> Element {
    let state = use_context::<AppState>();
    let blocks = state.narrative.read().clone();
    let is_active = |page: Page| blocks.iter().any(|b| b.page == page && b.active);

    rsx! {
        div {
            class: "narrative",
            for text in props.texts.iter() {
                div {
                    key: "{text.page.token()}",
                    "data-page": text.page.token(),
                    class: if is_active(text.page) { "narrative-block active" } else { "narrative-block" },
                    style: if is_active(text.page) { "display: block;" } else { "display: none;" },
                    h4 { style: "margin: 8px 0 4px 0;", "{text.title}" }
                    p { style: "margin: 0; font-size: 14px; line-height: 1.4;", "{text.body}" }
                }
            }
        }
    }
}
