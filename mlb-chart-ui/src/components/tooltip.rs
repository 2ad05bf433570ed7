//! Hover tooltip, positioned in page coordinates.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let tooltip = (state.tooltip)();
    let visibility = if tooltip.visible { "visible" } else { "hidden" };

    rsx! {
        div {
            class: "tooltip",
            style: "position: absolute; visibility: {visibility}; top: {tooltip.top}px; left: {tooltip.left}px; padding: 6px 10px; background: #fff; border: 1px solid #ccc; border-radius: 4px; font-size: 12px; pointer-events: none;",
            dangerous_inner_html: "{tooltip.html}",
        }
    }
}
