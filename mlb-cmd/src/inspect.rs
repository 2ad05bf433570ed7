//! Data set summary.

use std::fmt::Write;

use log::{info, warn};
use mlb_narrative::tooltip::format_value;
use mlb_stats::{Dataset, Extent, TeamAggregate};

/// Summarize team and home-run CSV text.
///
/// Lists the leader for each team metric (every team on a tie), the
/// home-run ranges and any team codes without a color.
pub fn run_inspect(teams_csv: &str, homeruns_csv: Option<&str>) -> anyhow::Result<String> {
    let dataset = Dataset::from_csv(teams_csv, homeruns_csv)?;
    let ext = dataset.team_extents();
    let mut out = String::new();

    writeln!(out, "Teams: {}", dataset.teams().len())?;
    let metrics: [(&str, fn(&TeamAggregate) -> f64, Extent); 3] = [
        ("pitches", |t| t.pitches, ext.pitches),
        ("inplay", |t| t.inplay, ext.inplay),
        ("homerun", |t| t.homerun, ext.homerun),
    ];
    for (name, value, extent) in metrics {
        let leaders: Vec<&str> = dataset
            .teams()
            .iter()
            .filter(|t| extent.is_max(value(*t)))
            .map(|t| t.team.as_str())
            .collect();
        writeln!(
            out,
            "  most {}: {} ({})",
            name,
            leaders.join(", "),
            format_value(extent.max)
        )?;
    }
    if let Some(velocity) = ext.velocity {
        writeln!(
            out,
            "  velocity: {} - {}",
            format_value(velocity.min),
            format_value(velocity.max)
        )?;
    }

    match dataset.homerun_extents() {
        Some(hr) => {
            writeln!(out, "Home runs: {}", dataset.homeruns().len())?;
            for (name, e) in [
                ("distance_ft", hr.distance_ft),
                ("launch_angle", hr.launch_angle),
                ("ev_mph", hr.ev_mph),
                ("pitch_mph", hr.pitch_mph),
            ] {
                writeln!(out, "  {}: {} - {}", name, format_value(e.min), format_value(e.max))?;
            }
        }
        None => writeln!(out, "Home runs: none")?,
    }

    let unknown = dataset.unknown_team_codes();
    if unknown.is_empty() {
        info!("All team codes have colors");
    } else {
        warn!("{} team codes have no color", unknown.len());
        writeln!(out, "Unknown team codes: {}", unknown.join(", "))?;
    }

    Ok(out.trim_end().to_string())
}
