//! The loaded chart data and its precomputed extrema.
//!
//! A [`Dataset`] is built once at startup and never mutated afterwards.
//! Tooltips compare each datum against the extents stored here to decide
//! whether it gets a superlative marker.

use log::info;
use serde::Serialize;

use crate::error::{Result, StatsError};
use crate::homerun::HomerunEvent;
use crate::team::TeamAggregate;

/// Closed set of row shapes a mark can be bound to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Datum {
    Team(TeamAggregate),
    Homerun(HomerunEvent),
}

/// Min/max of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Extent of the given values, or `None` when there are none.
    pub fn of<I>(values: I) -> Option<Extent>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Extent { min: v, max: v }),
            Some(e) => Some(Extent {
                min: e.min.min(v),
                max: e.max.max(v),
            }),
        })
    }

    /// True when `value` ties the maximum.
    pub fn is_max(&self, value: f64) -> bool {
        value == self.max
    }
}

/// Per-field maxima across all teams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamExtents {
    pub pitches: Extent,
    pub inplay: Extent,
    pub homerun: Extent,
    pub velocity: Option<Extent>,
}

impl TeamExtents {
    pub fn from_teams(teams: &[TeamAggregate]) -> Result<TeamExtents> {
        fn field(teams: &[TeamAggregate], f: fn(&TeamAggregate) -> f64) -> Result<Extent> {
            Extent::of(teams.iter().map(f)).ok_or(StatsError::Empty("team"))
        }
        Ok(TeamExtents {
            pitches: field(teams, |t| t.pitches)?,
            inplay: field(teams, |t| t.inplay)?,
            homerun: field(teams, |t| t.homerun)?,
            velocity: Extent::of(teams.iter().filter_map(|t| t.velocity)),
        })
    }
}

/// Per-field min/max across all home runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HomerunExtents {
    pub distance_ft: Extent,
    pub launch_angle: Extent,
    pub ev_mph: Extent,
    pub pitch_mph: Extent,
}

impl HomerunExtents {
    pub fn from_events(events: &[HomerunEvent]) -> Option<HomerunExtents> {
        fn field(events: &[HomerunEvent], f: fn(&HomerunEvent) -> f64) -> Option<Extent> {
            Extent::of(events.iter().map(f))
        }
        Some(HomerunExtents {
            distance_ft: field(events, |e| e.distance_ft)?,
            launch_angle: field(events, |e| e.launch_angle)?,
            ev_mph: field(events, |e| e.ev_mph)?,
            pitch_mph: field(events, |e| e.pitch_mph)?,
        })
    }
}

/// Everything the charts render, loaded once.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    teams: Vec<TeamAggregate>,
    homeruns: Vec<HomerunEvent>,
    team_extents: TeamExtents,
    homerun_extents: Option<HomerunExtents>,
}

impl Dataset {
    /// Build a dataset from already-parsed rows. `teams` must not be empty.
    pub fn new(teams: Vec<TeamAggregate>, homeruns: Vec<HomerunEvent>) -> Result<Dataset> {
        let team_extents = TeamExtents::from_teams(&teams)?;
        let homerun_extents = HomerunExtents::from_events(&homeruns);
        Ok(Dataset {
            teams,
            homeruns,
            team_extents,
            homerun_extents,
        })
    }

    /// Parse team CSV text and, optionally, home-run CSV text.
    pub fn from_csv(teams_csv: &str, homeruns_csv: Option<&str>) -> Result<Dataset> {
        let teams = TeamAggregate::parse_csv(teams_csv)?;
        let homeruns = match homeruns_csv {
            Some(csv_object) => HomerunEvent::parse_csv(csv_object)?,
            None => Vec::new(),
        };
        info!(
            "Loaded {} teams and {} home runs",
            teams.len(),
            homeruns.len()
        );
        Dataset::new(teams, homeruns)
    }

    pub fn teams(&self) -> &[TeamAggregate] {
        &self.teams
    }

    pub fn homeruns(&self) -> &[HomerunEvent] {
        &self.homeruns
    }

    pub fn team_extents(&self) -> &TeamExtents {
        &self.team_extents
    }

    /// `None` when no home runs were loaded.
    pub fn homerun_extents(&self) -> Option<&HomerunExtents> {
        self.homerun_extents.as_ref()
    }

    /// Team codes present in the data that have no entry in the color table.
    pub fn unknown_team_codes(&self) -> Vec<&str> {
        self.teams
            .iter()
            .map(|t| t.team.as_str())
            .filter(|code| crate::team::team_color(code).is_none())
            .collect()
    }
}
