//! The narrative chart state machine.
//!
//! `NarrativeController` owns the dataset, the current page, its scales and
//! the tooltip. The front end forwards typed [`ChartEvent`]s to
//! [`NarrativeController::dispatch`] and applies whatever [`Update`] comes
//! back; it keeps no chart state of its own.

use log::{debug, info};
use mlb_stats::{Dataset, Datum};
use serde::Deserialize;

use crate::config::ChartConfig;
use crate::error::NarrativeError;
use crate::page::{ChartVariant, Page};
use crate::plan::RenderPlan;
use crate::scale_set::ScaleSet;
use crate::tooltip::{homerun_tooltip, team_tooltip, TooltipState};

/// Identity of a rendered mark: its row index within its mark set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum MarkId {
    Bar(usize),
    Circle(usize),
}

/// Input from the front end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartEvent {
    /// A nav control was clicked; `page` is its opaque page token
    Navigate { page: String },
    PointerEnter { mark: MarkId },
    /// Pointer moved over a mark, at page coordinates `(x, y)`
    PointerMove { mark: MarkId, x: f64, y: f64 },
    PointerLeave { mark: MarkId },
}

/// What the front end has to apply after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Transition every mark, axis, callout and narrative block
    Transition(RenderPlan),
    /// Redraw the tooltip
    Tooltip(TooltipState),
    /// Nothing changed
    None,
}

pub struct NarrativeController {
    config: ChartConfig,
    variant: ChartVariant,
    dataset: Dataset,
    page: Page,
    scales: ScaleSet,
    tooltip: TooltipState,
}

impl NarrativeController {
    /// Build a controller on `Page1`.
    ///
    /// Four-page variants need home-run data for the scatter page.
    pub fn new(
        config: ChartConfig,
        variant: ChartVariant,
        dataset: Dataset,
    ) -> Result<Self, NarrativeError> {
        let mut scales = None;
        for &page in variant.pages() {
            let s = ScaleSet::for_page(page, &dataset, &config)
                .ok_or(NarrativeError::MissingData("home run"))?;
            if page == Page::Page1 {
                scales = Some(s);
            }
        }
        let scales = scales.ok_or(NarrativeError::MissingData("team"))?;
        info!(
            "Narrative chart ready: {:?}, {} teams, {} home runs",
            variant,
            dataset.teams().len(),
            dataset.homeruns().len()
        );
        Ok(Self {
            config,
            variant,
            dataset,
            page: Page::Page1,
            scales,
            tooltip: TooltipState::default(),
        })
    }

    /// Parse the embedded CSV data and build a controller.
    pub fn from_csv(
        config: ChartConfig,
        variant: ChartVariant,
        teams_csv: &str,
        homeruns_csv: Option<&str>,
    ) -> Result<Self, NarrativeError> {
        let dataset = Dataset::from_csv(teams_csv, homeruns_csv)?;
        Self::new(config, variant, dataset)
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn variant(&self) -> ChartVariant {
        self.variant
    }

    pub fn scales(&self) -> &ScaleSet {
        &self.scales
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Target visual state for the current page.
    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan::build(
            self.page,
            self.variant,
            &self.scales,
            &self.dataset,
            &self.config,
        )
    }

    /// Switch to the page named by `token` and return its plan.
    ///
    /// Tokens that name no page of this variant are ignored.
    pub fn navigate(&mut self, token: &str) -> Option<RenderPlan> {
        let Some(page) = Page::from_token(token).filter(|p| self.variant.has_page(*p)) else {
            debug!("Ignoring unrecognized page token {:?}", token);
            return None;
        };
        let scales = ScaleSet::for_page(page, &self.dataset, &self.config)?;
        debug!("Navigating {:?} -> {:?}", self.page, page);
        self.page = page;
        self.scales = scales;
        Some(self.render_plan())
    }

    /// The row a mark is bound to.
    pub fn datum(&self, mark: MarkId) -> Option<Datum> {
        match mark {
            MarkId::Bar(i) => self.dataset.teams().get(i).cloned().map(Datum::Team),
            MarkId::Circle(i) => self.dataset.homeruns().get(i).cloned().map(Datum::Homerun),
        }
    }

    /// Tooltip HTML for a mark, or `None` when no such mark exists.
    pub fn tooltip_html(&self, mark: MarkId) -> Option<String> {
        match self.datum(mark)? {
            Datum::Team(team) => Some(team_tooltip(
                &team,
                self.dataset.team_extents(),
                self.variant,
                &self.config.image_dir,
            )),
            Datum::Homerun(event) => Some(homerun_tooltip(
                &event,
                self.dataset.homerun_extents()?,
            )),
        }
    }

    fn has_mark(&self, mark: MarkId) -> bool {
        match mark {
            MarkId::Bar(i) => i < self.dataset.teams().len(),
            MarkId::Circle(i) => i < self.dataset.homeruns().len(),
        }
    }

    /// Handle one front-end event.
    pub fn dispatch(&mut self, event: ChartEvent) -> Update {
        match event {
            ChartEvent::Navigate { page } => match self.navigate(&page) {
                Some(plan) => Update::Transition(plan),
                None => Update::None,
            },
            ChartEvent::PointerEnter { mark } if self.has_mark(mark) => {
                self.tooltip.visible = true;
                Update::Tooltip(self.tooltip.clone())
            }
            ChartEvent::PointerMove { mark, x, y } => match self.tooltip_html(mark) {
                Some(html) => {
                    self.tooltip.left = x + self.config.tooltip_offset_x;
                    self.tooltip.top = y + self.config.tooltip_offset_y;
                    self.tooltip.html = html;
                    Update::Tooltip(self.tooltip.clone())
                }
                None => Update::None,
            },
            ChartEvent::PointerLeave { .. } => {
                self.tooltip.visible = false;
                Update::Tooltip(self.tooltip.clone())
            }
            ChartEvent::PointerEnter { .. } => Update::None,
        }
    }
}
