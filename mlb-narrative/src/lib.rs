//! Scales, tooltips and the page state machine behind the MLB narrative charts.
//!
//! This crate provides:
//! - `config`: chart geometry and styling (`ChartConfig`)
//! - `scale`: linear, band and color scales
//! - `page`: the chart pages and which variants show them
//! - `scale_set`: the scales each page is drawn with
//! - `tooltip`: tooltip HTML and pointer-driven tooltip state
//! - `plan`: the serializable target state handed to D3.js
//! - `controller`: `NarrativeController`, which owns all of the above

pub mod config;
pub mod controller;
pub mod error;
pub mod page;
pub mod plan;
pub mod scale;
pub mod scale_set;
pub mod tooltip;

pub use config::{ChartConfig, Rgb};
pub use controller::{ChartEvent, MarkId, NarrativeController, Update};
pub use error::NarrativeError;
pub use page::{ChartVariant, Page, TeamMetric};
pub use plan::RenderPlan;
pub use scale_set::ScaleSet;
pub use tooltip::TooltipState;
