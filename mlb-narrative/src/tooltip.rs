//! Tooltip content and pointer-driven tooltip state.
//!
//! Content depends only on the hovered datum and the dataset extents:
//! a value that ties the dataset maximum gets a superlative marker.

use mlb_stats::{Extent, HomerunEvent, HomerunExtents, TeamAggregate, TeamExtents};
use serde::Serialize;

use crate::page::ChartVariant;

/// Where the tooltip is and what it shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TooltipState {
    pub visible: bool,
    /// Page x of the tooltip's left edge
    pub left: f64,
    /// Page y of the tooltip's top edge
    pub top: f64,
    /// HTML fragment rendered inside the tooltip
    pub html: String,
}

/// Integral values print without a fractional part, others with one decimal.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Escape text for use inside an HTML fragment or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn marked(value: f64, extent: Option<&Extent>, marker: &str) -> String {
    match extent {
        Some(e) if e.is_max(value) => format!("{} ({})", format_value(value), marker),
        _ => format_value(value),
    }
}

/// Tooltip for a team bar.
pub fn team_tooltip(
    team: &TeamAggregate,
    extents: &TeamExtents,
    variant: ChartVariant,
    image_dir: &str,
) -> String {
    let code = escape_html(&team.team);
    let mut html = format!(
        "<img src=\"{}/{}.svg\" /><p>Team: {}</p><p>Pitches: {}</p>",
        escape_html(image_dir),
        code,
        code,
        marked(team.pitches, Some(&extents.pitches), "most"),
    );
    if variant != ChartVariant::Single {
        html.push_str(&format!(
            "<p>In play: {}</p><p>Homeruns: {}</p>",
            marked(team.inplay, Some(&extents.inplay), "most in play"),
            marked(team.homerun, Some(&extents.homerun), "most homeruns"),
        ));
    }
    if let Some(velocity) = team.velocity {
        html.push_str(&format!(
            "<p>Velocity: {}</p>",
            marked(velocity, extents.velocity.as_ref(), "highest")
        ));
    }
    html
}

/// Tooltip for a home-run circle.
pub fn homerun_tooltip(event: &HomerunEvent, extents: &HomerunExtents) -> String {
    format!(
        "<p>Player: {}</p><p>Distance: {} ft{}</p><p>Launch angle: {}°</p>\
         <p>Exit velocity: {} mph{}</p><p>Pitch velocity: {} mph{}</p>",
        escape_html(&event.player),
        format_value(event.distance_ft),
        superlative(event.distance_ft, &extents.distance_ft, "longest"),
        format_value(event.launch_angle),
        format_value(event.ev_mph),
        superlative(event.ev_mph, &extents.ev_mph, "highest"),
        format_value(event.pitch_mph),
        superlative(event.pitch_mph, &extents.pitch_mph, "fastest"),
    )
}

fn superlative(value: f64, extent: &Extent, marker: &str) -> String {
    if extent.is_max(value) {
        format!(" ({})", marker)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlb_stats::Dataset;

    const TEAMS: &str = "team,pitches,inplay,homerun\nNYY,120,80,10\nBOS,95,60,7\n";

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(120.0), "120");
        assert_eq!(format_value(94.55), "94.5");
        assert_eq!(format_value(-3.0), "-3");
    }

    #[test]
    fn test_most_marker_only_on_max() {
        let ds = Dataset::from_csv(TEAMS, None).unwrap();
        let nyy = team_tooltip(&ds.teams()[0], ds.team_extents(), ChartVariant::Annotated, "../img");
        let bos = team_tooltip(&ds.teams()[1], ds.team_extents(), ChartVariant::Annotated, "../img");
        assert!(nyy.contains("Pitches: 120 (most)"), "{nyy}");
        assert!(nyy.contains("Homeruns: 10 (most homeruns)"), "{nyy}");
        assert!(nyy.starts_with("<img src=\"../img/NYY.svg\" />"));
        assert!(!bos.contains("(most"), "{bos}");
    }

    #[test]
    fn test_ties_are_all_marked() {
        let ds = Dataset::from_csv(
            "team,pitches,inplay,homerun\nNYY,120,80,10\nBOS,120,60,7\n",
            None,
        )
        .unwrap();
        for team in ds.teams() {
            let html = team_tooltip(team, ds.team_extents(), ChartVariant::Plain, "img");
            assert!(html.contains("(most)"), "{html}");
        }
    }

    #[test]
    fn test_single_variant_shows_velocity() {
        let ds = Dataset::from_csv(
            "player_name,pitches,velocity\nSEA,2400,94.6\nTB,2500,93.1\n",
            None,
        )
        .unwrap();
        let sea = team_tooltip(&ds.teams()[0], ds.team_extents(), ChartVariant::Single, "../img");
        assert_eq!(
            sea,
            "<img src=\"../img/SEA.svg\" /><p>Team: SEA</p><p>Pitches: 2400</p><p>Velocity: 94.6 (highest)</p>"
        );
    }

    #[test]
    fn test_names_are_escaped() {
        assert_eq!(escape_html(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");

        let ds = Dataset::from_csv(
            "team,pitches,inplay,homerun\n\"<script>x</script>\",1,1,1\n",
            Some("distance_ft,launch_angle,ev_mph,pitch_mph,player\n400,25,105,90,O'Neil & <i>Son</i>\n"),
        )
        .unwrap();
        let team = team_tooltip(&ds.teams()[0], ds.team_extents(), ChartVariant::Plain, "img");
        assert!(!team.contains("<script>"), "{team}");
        assert!(team.contains("<p>Team: &lt;script&gt;x&lt;/script&gt;</p>"), "{team}");
        let hr = homerun_tooltip(&ds.homeruns()[0], ds.homerun_extents().unwrap());
        assert!(hr.contains("<p>Player: O'Neil &amp; &lt;i&gt;Son&lt;/i&gt;</p>"), "{hr}");
    }

    #[test]
    fn test_homerun_tooltip() {
        let ds = Dataset::from_csv(
            TEAMS,
            Some("distance_ft,launch_angle,ev_mph,pitch_mph,player\n450,28,110.5,95,Judge\n400,31,112,88,Betts\n"),
        )
        .unwrap();
        let ext = ds.homerun_extents().unwrap();
        let judge = homerun_tooltip(&ds.homeruns()[0], ext);
        assert!(judge.contains("Distance: 450 ft (longest)"), "{judge}");
        assert!(judge.contains("Exit velocity: 110.5 mph</p>"), "{judge}");
        assert!(judge.contains("Pitch velocity: 95 mph (fastest)"), "{judge}");
        let betts = homerun_tooltip(&ds.homeruns()[1], ext);
        assert!(betts.contains("Exit velocity: 112 mph (highest)"), "{betts}");
        assert!(!betts.contains("longest"));
    }
}
