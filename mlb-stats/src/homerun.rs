use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};

/// Embedded batted-ball data for the scatter page.
pub static HOMERUNS_CSV: &str = include_str!("../../fixtures/homeruns.csv");

/// A single home run with its Statcast batted-ball metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomerunEvent {
    pub player: String,
    /// Projected distance in feet
    pub distance_ft: f64,
    /// Launch angle in degrees
    pub launch_angle: f64,
    /// Exit velocity in mph
    pub ev_mph: f64,
    /// Velocity of the pitch that was hit, in mph
    pub pitch_mph: f64,
}

impl HomerunEvent {
    /// Parse batted-ball rows (`distance_ft,launch_angle,ev_mph,pitch_mph,player`).
    pub fn parse_csv(csv_object: &str) -> Result<Vec<HomerunEvent>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());

        let mut events = Vec::new();
        for (row, result) in rdr.deserialize::<HomerunEvent>().enumerate() {
            let event = result?;
            let fields = [
                ("distance_ft", event.distance_ft),
                ("launch_angle", event.launch_angle),
                ("ev_mph", event.ev_mph),
                ("pitch_mph", event.pitch_mph),
            ];
            if let Some((field, value)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
                return Err(StatsError::InvalidValue {
                    row: row + 1,
                    field,
                    value,
                });
            }
            events.push(event);
        }
        if events.is_empty() {
            return Err(StatsError::Empty("home run"));
        }
        Ok(events)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const STR_RESULT: &str = r#"distance_ft,launch_angle,ev_mph,pitch_mph,player
427,28,109.4,94.1,Aaron Judge
398,31,104.0,86.3,Mookie Betts
"#;

    #[test]
    fn test_parse_homeruns() {
        let events = HomerunEvent::parse_csv(STR_RESULT).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].player, "Aaron Judge");
        assert_eq!(events[0].distance_ft, 427.0);
        assert_eq!(events[1].pitch_mph, 86.3);
    }

    #[test]
    fn test_parse_embedded_fixture() {
        let events = HomerunEvent::parse_csv(HOMERUNS_CSV).unwrap();
        assert!(!events.is_empty());
    }

    #[test]
    fn test_parse_missing_column() {
        let csv = "distance_ft,launch_angle,ev_mph,player\n427,28,109.4,Aaron Judge\n";
        assert!(matches!(
            HomerunEvent::parse_csv(csv),
            Err(StatsError::CsvParse(_))
        ));
    }

    #[test]
    fn test_parse_infinite_value() {
        let csv = "distance_ft,launch_angle,ev_mph,pitch_mph,player\n427,inf,109.4,94.1,Aaron Judge\n";
        let err = HomerunEvent::parse_csv(csv).unwrap_err();
        assert!(matches!(
            err,
            StatsError::InvalidValue { field: "launch_angle", .. }
        ));
    }
}
