//! Render plan and tooltip output.

use anyhow::{anyhow, bail};
use mlb_narrative::MarkId;

use crate::Inputs;

/// Navigate to `page` and print its render plan as JSON.
pub fn run_plan(inputs: &Inputs, page: &str, pretty: bool) -> anyhow::Result<String> {
    let mut controller = inputs.controller()?;
    let plan = controller
        .navigate(page)
        .ok_or_else(|| anyhow!("unknown page {:?} for this chart", page))?;
    Ok(if pretty {
        serde_json::to_string_pretty(&plan)?
    } else {
        plan.to_json()?
    })
}

/// Print the tooltip HTML for a mark.
pub fn run_tooltip(inputs: &Inputs, mark: &str) -> anyhow::Result<String> {
    let controller = inputs.controller()?;
    let mark = parse_mark(mark)?;
    controller
        .tooltip_html(mark)
        .ok_or_else(|| anyhow!("no mark {:?}", mark))
}

/// Parse `bar:N` or `circle:N`.
pub fn parse_mark(s: &str) -> anyhow::Result<MarkId> {
    let Some((kind, index)) = s.split_once(':') else {
        bail!("expected bar:N or circle:N, got {:?}", s);
    };
    let index: usize = index.trim().parse()?;
    match kind.trim() {
        "bar" => Ok(MarkId::Bar(index)),
        "circle" => Ok(MarkId::Circle(index)),
        other => bail!("unknown mark kind {:?}", other),
    }
}
