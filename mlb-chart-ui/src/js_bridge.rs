//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3 narrative chart lives in `assets/js/narrative-chart.js`, is embedded
//! at compile time and evaluated as a global once D3 has loaded. Pointer
//! events flow back to Rust through [`EVENT_BRIDGE_JS`], which hands them to
//! Dioxus' eval channel.

use dioxus::prelude::*;

// Embed the D3 chart JS at compile time
static NARRATIVE_CHART_JS: &str = include_str!("../assets/js/narrative-chart.js");

/// D3.js v7 from the official CDN.
pub const D3_SRC: &str = "https://d3js.org/d3.v7.min.js";

/// Installs `window.__mlbChartEvent` and keeps the eval alive so every call
/// is delivered to the Rust side with `dioxus.send`.
pub const EVENT_BRIDGE_JS: &str = r#"
    window.__mlbChartEvent = function(ev) { dioxus.send(ev); };
    await new Promise(function() {});
"#;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('MLB JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS defines `renderNarrativeChart(...)` via a `function`
/// declaration. It is evaluated at global scope with an indirect `eval()`
/// once D3 is ready and then promoted to `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!(
        "window.__mlbChartScripts = {};",
        serde_json::to_string(NARRATIVE_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__mlbChartScripts);
                    delete window.__mlbChartScripts;
                    if (typeof renderNarrativeChart !== 'undefined') window.renderNarrativeChart = renderNarrativeChart;
                    window.__mlbChartsReady = true;
                    console.log('MLB charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Escape JSON for embedding in a single-quoted JS string literal.
pub fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Apply a render plan to the chart in `container_id`.
///
/// The first call draws the marks; later calls start a named D3 transition
/// on the same elements, which interrupts and retargets one still running.
/// Polls until D3, the chart script and the container element all exist.
pub fn render_narrative_chart(container_id: &str, plan_json: &str) {
    let escaped_plan = escape_for_js(plan_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__mlbChartsReady &&
                    typeof window.renderNarrativeChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderNarrativeChart('{container_id}', '{escaped_plan}');
                    }} catch(e) {{ console.error('[MLB] renderNarrativeChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Open the channel pointer events arrive on. Keep the returned handle
/// alive for as long as events should be delivered.
pub fn event_channel() -> document::Eval {
    document::eval(EVENT_BRIDGE_JS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_for_js() {
        assert_eq!(
            escape_for_js(r#"{"player":"O'Neil \"Tex\""}"#),
            r#"{"player":"O\'Neil \\"Tex\\""}"#
        );
    }

    #[test]
    fn test_chart_script_defines_entry_points() {
        assert!(NARRATIVE_CHART_JS.contains("function renderNarrativeChart("));
        assert!(NARRATIVE_CHART_JS.contains("__mlbChartEvent"));
    }
}
