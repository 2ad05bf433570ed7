//! Reusable Dioxus RSX components for MLB chart apps.

mod chart_container;
mod chart_header;
mod load_error;
mod loading_notice;
mod narrative_panel;
mod page_nav;
mod tooltip;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use load_error::LoadError;
pub use loading_notice::LoadingNotice;
pub use narrative_panel::{NarrativePanel, NarrativeText};
pub use page_nav::PageNav;
pub use tooltip::Tooltip;
