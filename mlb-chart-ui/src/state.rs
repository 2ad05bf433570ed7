//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The `NarrativeController` inside is the only owner of chart state; the
//! other signals mirror what its last update said so components re-render.

use dioxus::prelude::*;
use mlb_narrative::plan::NarrativeBlock;
use mlb_narrative::{ChartEvent, NarrativeController, Page, TooltipState, Update};

use crate::js_bridge;

/// Shared application state for all MLB chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// DOM id of the D3 chart container
    pub chart_id: &'static str,
    /// Chart state machine (None until data is loaded)
    pub controller: Signal<Option<NarrativeController>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Page currently shown
    pub page: Signal<Page>,
    /// Show/hide state of each narrative text block
    pub narrative: Signal<Vec<NarrativeBlock>>,
    /// Tooltip position, visibility and content
    pub tooltip: Signal<TooltipState>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new(chart_id: &'static str) -> Self {
        Self {
            chart_id,
            controller: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            page: Signal::new(Page::Page1),
            narrative: Signal::new(Vec::new()),
            tooltip: Signal::new(TooltipState::default()),
        }
    }

    /// Install a freshly loaded controller and draw its first page.
    pub fn start(&mut self, controller: NarrativeController) {
        let plan = controller.render_plan();
        self.controller.set(Some(controller));
        self.loading.set(false);
        self.apply(Update::Transition(plan));
    }

    /// Record a load failure; nothing is drawn.
    pub fn fail(&mut self, message: String) {
        log::error!("Chart failed to load: {}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }

    /// Forward an event to the controller and apply the result.
    pub fn dispatch(&mut self, event: ChartEvent) {
        let update = {
            let mut controller = self.controller.write();
            match controller.as_mut() {
                Some(c) => c.dispatch(event),
                None => return,
            }
        };
        self.apply(update);
    }

    fn apply(&mut self, update: Update) {
        match update {
            Update::Transition(plan) => {
                self.page.set(plan.page);
                self.narrative.set(plan.narrative.clone());
                match plan.to_json() {
                    Ok(json) => js_bridge::render_narrative_chart(self.chart_id, &json),
                    Err(e) => log::error!("Failed to serialize render plan: {}", e),
                }
            }
            Update::Tooltip(tooltip) => self.tooltip.set(tooltip),
            Update::None => {}
        }
    }
}
