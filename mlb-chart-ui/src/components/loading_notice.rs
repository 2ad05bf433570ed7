use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingNoticeProps {
    pub dataset: String,
}

/// One-line status shown above the (still empty) chart while the
/// embedded CSV is parsed.
#[component]
pub fn LoadingNotice(props: LoadingNoticeProps) -> Element {
    rsx! {
        p {
            style: "margin: 8px 0; font-size: 13px; color: #666; font-style: italic;",
            "Reading {props.dataset}..."
        }
    }
}
