//! Navigation controls for switching narrative pages.

use crate::state::AppState;
use dioxus::prelude::*;
use mlb_narrative::{ChartEvent, Page};

#[derive(Props, Clone, PartialEq)]
pub struct PageNavProps {
    /// Pages to offer, in order
    pub pages: Vec<Page>,
}

/// One button per page. Each carries its page token in `data-page` and
/// forwards it to the controller untouched on click.
#[component]
pub fn PageNav(props: PageNavProps) -> Element {
    let state = use_context::<AppState>();
    let current = (state.page)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px;",
            for page in props.pages.iter().copied() {
                button {
                    key: "{page.token()}",
                    "data-page": page.token(),
                    style: if page == current {
                        "padding: 4px 12px; font-weight: bold; background: #132448; color: #fff; border: 1px solid #132448; border-radius: 4px;"
                    } else {
                        "padding: 4px 12px; background: #fff; color: #132448; border: 1px solid #132448; border-radius: 4px;"
                    },
                    onclick: move |_| {
                        let mut state = state;
                        state.dispatch(ChartEvent::Navigate {
                            page: page.token().to_string(),
                        });
                    },
                    "{page.label()}"
                }
            }
        }
    }
}
