//! Shown in place of the chart when its data failed to load.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadErrorProps {
    /// Which embedded data set failed, e.g. "team stats"
    pub dataset: String,
    /// The parse or validation error
    pub message: String,
}

#[component]
pub fn LoadError(props: LoadErrorProps) -> Element {
    rsx! {
        div {
            "role": "alert",
            style: "padding: 12px 16px; margin: 8px 0; border-left: 4px solid #bd3039; background: #fbeaea; color: #5c1a1d;",
            p {
                style: "margin: 0 0 4px 0; font-weight: 600;",
                "Could not load the {props.dataset} data"
            }
            code { style: "font-size: 12px;", "{props.message}" }
        }
    }
}
