use serde::{Deserialize, Serialize};

/// One view of the narrative. Serialized as the page token the nav
/// controls carry (`"1"`..`"4"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    /// Pitches by team
    #[serde(rename = "1")]
    Page1,
    /// Balls in play by team
    #[serde(rename = "2")]
    Page2,
    /// Home runs by team
    #[serde(rename = "3")]
    Page3,
    /// Batted-ball scatter of individual home runs
    #[serde(rename = "4")]
    Page4,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Page1, Page::Page2, Page::Page3, Page::Page4];

    /// Match a nav control's page token. Unknown tokens give `None`.
    pub fn from_token(token: &str) -> Option<Page> {
        match token.trim() {
            "1" => Some(Page::Page1),
            "2" => Some(Page::Page2),
            "3" => Some(Page::Page3),
            "4" => Some(Page::Page4),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Page::Page1 => "1",
            Page::Page2 => "2",
            Page::Page3 => "3",
            Page::Page4 => "4",
        }
    }

    /// The team metric drawn as bars, or `None` for the scatter page.
    pub fn metric(self) -> Option<TeamMetric> {
        match self {
            Page::Page1 => Some(TeamMetric::Pitches),
            Page::Page2 => Some(TeamMetric::InPlay),
            Page::Page3 => Some(TeamMetric::Homeruns),
            Page::Page4 => None,
        }
    }

    /// Label for the nav control.
    pub fn label(self) -> &'static str {
        match self {
            Page::Page1 => "Pitches",
            Page::Page2 => "In play",
            Page::Page3 => "Home runs",
            Page::Page4 => "Batted balls",
        }
    }
}

/// A per-team number a bar page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamMetric {
    Pitches,
    InPlay,
    Homeruns,
}

impl TeamMetric {
    pub fn value(self, team: &mlb_stats::TeamAggregate) -> f64 {
        match self {
            TeamMetric::Pitches => team.pitches,
            TeamMetric::InPlay => team.inplay,
            TeamMetric::Homeruns => team.homerun,
        }
    }

    pub fn extent(self, extents: &mlb_stats::TeamExtents) -> mlb_stats::Extent {
        match self {
            TeamMetric::Pitches => extents.pitches,
            TeamMetric::InPlay => extents.inplay,
            TeamMetric::Homeruns => extents.homerun,
        }
    }

    /// Y-axis title in the annotated chart.
    pub fn axis_title(self) -> &'static str {
        match self {
            TeamMetric::Pitches => "Pitches",
            TeamMetric::InPlay => "Balls in play",
            TeamMetric::Homeruns => "Home runs",
        }
    }
}

/// Which of the chart scripts' feature sets is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartVariant {
    /// One static bar chart (pitches by team, with velocity)
    Single,
    /// Four pages, bars and circles, no annotations
    Plain,
    /// Four pages with axis titles and callouts
    Annotated,
}

impl ChartVariant {
    pub fn pages(self) -> &'static [Page] {
        match self {
            ChartVariant::Single => &[Page::Page1],
            ChartVariant::Plain | ChartVariant::Annotated => &Page::ALL,
        }
    }

    pub fn has_page(self, page: Page) -> bool {
        self.pages().contains(&page)
    }

    pub fn is_annotated(self) -> bool {
        self == ChartVariant::Annotated
    }
}
