use csv::{ReaderBuilder, Trim};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};

/// Embedded per-team aggregates for the narrative chart.
pub static TEAM_STATS_CSV: &str = include_str!("../../fixtures/team_stats.csv");

/// Embedded pitches-by-team data (with average velocity) for the single chart.
pub static PITCHES_BY_TEAM_CSV: &str = include_str!("../../fixtures/pitches_by_team.csv");

/// Fill used for a team code missing from [`TEAM_COLORS`].
pub const FALLBACK_COLOR: &str = "#9e9e9e";

/// Primary display color for every MLB team code.
pub const TEAM_COLORS: [(&str, &str); 30] = [
    ("ATL", "#ce1141"),
    ("AZ", "#a71930"),
    ("BAL", "#df4601"),
    ("BOS", "#bd3039"),
    ("CHC", "#0e3386"),
    ("CIN", "#c6011f"),
    ("CLE", "#e31937"),
    ("COL", "#33006f"),
    ("CWS", "#000000"),
    ("DET", "#182d55"),
    ("HOU", "#002d62"),
    ("KC", "#174885"),
    ("LAA", "#ba0021"),
    ("LAD", "#005a9c"),
    ("MIA", "#ff6600"),
    ("MIL", "#0a2351"),
    ("MIN", "#002b5c"),
    ("NYM", "#ff5910"),
    ("NYY", "#132448"),
    ("OAK", "#003831"),
    ("PHI", "#e81828"),
    ("PIT", "#fdb827"),
    ("SD", "#002d62"),
    ("SEA", "#005c5c"),
    ("SF", "#fd5a1e"),
    ("STL", "#c41e3a"),
    ("TB", "#8fbce6"),
    ("TEX", "#003278"),
    ("TOR", "#134a8e"),
    ("WSH", "#ab0003"),
];

/// Look up the color for a team code, if it is a known team.
pub fn team_color(team: &str) -> Option<&'static str> {
    TEAM_COLORS
        .iter()
        .find(|(code, _)| *code == team)
        .map(|(_, color)| *color)
}

/// Color to fill a team's mark with. Unknown codes get [`FALLBACK_COLOR`].
pub fn team_fill(team: &str) -> &'static str {
    team_color(team).unwrap_or_else(|| {
        warn!("No color for team code {:?}, using fallback", team);
        FALLBACK_COLOR
    })
}

/// Season aggregates for one team.
///
/// The single chart's data file names the team column `player_name` and
/// carries `velocity` instead of `inplay`/`homerun`; both shapes load into
/// this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAggregate {
    #[serde(alias = "player_name")]
    pub team: String,
    pub pitches: f64,
    #[serde(default)]
    pub inplay: f64,
    #[serde(default)]
    pub homerun: f64,
    /// Average pitch velocity in mph
    #[serde(default)]
    pub velocity: Option<f64>,
}

impl TeamAggregate {
    /// Parse team rows from CSV text with a header line.
    ///
    /// Every row must deserialize and every number must be finite;
    /// the first bad row fails the whole load.
    pub fn parse_csv(csv_object: &str) -> Result<Vec<TeamAggregate>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());

        let mut teams = Vec::new();
        for (row, result) in rdr.deserialize::<TeamAggregate>().enumerate() {
            let team = result?;
            team.validate(row + 1)?;
            teams.push(team);
        }
        if teams.is_empty() {
            return Err(StatsError::Empty("team"));
        }
        Ok(teams)
    }

    fn validate(&self, row: usize) -> Result<()> {
        let fields = [
            ("pitches", Some(self.pitches)),
            ("inplay", Some(self.inplay)),
            ("homerun", Some(self.homerun)),
            ("velocity", self.velocity),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(StatsError::InvalidValue { row, field, value });
                }
            }
        }
        Ok(())
    }

    /// Display fill for this team's bar.
    pub fn fill(&self) -> &'static str {
        team_fill(&self.team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_team_has_a_color() {
        for csv_object in [TEAM_STATS_CSV, PITCHES_BY_TEAM_CSV] {
            let teams = TeamAggregate::parse_csv(csv_object).unwrap();
            for team in &teams {
                assert!(
                    team_color(&team.team).is_some(),
                    "team {} is missing from the color table",
                    team.team
                );
            }
        }
    }

    #[test]
    fn unknown_team_falls_back_to_gray() {
        assert_eq!(team_color("XYZ"), None);
        assert_eq!(team_fill("XYZ"), FALLBACK_COLOR);
        assert_eq!(team_fill("NYY"), "#132448");
    }

    #[test]
    fn test_parse_team_stats() {
        let csv = "team,pitches,inplay,homerun\nNYY,120,80,10\nBOS,95,60,7\n";
        let teams = TeamAggregate::parse_csv(csv).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team, "NYY");
        assert_eq!(teams[0].homerun, 10.0);
        assert_eq!(teams[1].inplay, 60.0);
        assert_eq!(teams[1].velocity, None);
    }

    #[test]
    fn test_parse_player_name_variant() {
        let csv = "player_name,pitches,velocity\nSEA, 2400 ,94.6\n";
        let teams = TeamAggregate::parse_csv(csv).unwrap();
        assert_eq!(teams[0].team, "SEA");
        assert_eq!(teams[0].pitches, 2400.0);
        assert_eq!(teams[0].inplay, 0.0);
        assert_eq!(teams[0].velocity, Some(94.6));
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        let csv = "team,pitches,inplay,homerun\nNYY,lots,80,10\n";
        let err = TeamAggregate::parse_csv(csv).unwrap_err();
        assert!(matches!(err, StatsError::CsvParse(_)), "got {err:?}");
    }

    #[test]
    fn test_parse_rejects_nan() {
        let csv = "team,pitches,inplay,homerun\nNYY,NaN,80,10\n";
        let err = TeamAggregate::parse_csv(csv).unwrap_err();
        assert!(
            matches!(err, StatsError::InvalidValue { row: 1, field: "pitches", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_parse_empty_csv() {
        let err = TeamAggregate::parse_csv("team,pitches,inplay,homerun\n").unwrap_err();
        assert!(matches!(err, StatsError::Empty("team")));
    }
}
