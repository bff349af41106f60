//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js drawing functions live in the host page as globals:
//! `renderWeatherLineChart(containerId, modelJson, configJson)` and
//! `renderWeatherBarChart(containerId, modelJson, configJson)`.
//! This module serializes chart models and calls those globals once D3,
//! the function and the container element are all available.

/// Global JS function drawing a `LineChartModel`.
pub const LINE_CHART_FN: &str = "renderWeatherLineChart";

/// Global JS function drawing a `BarChartModel`.
pub const BAR_CHART_FN: &str = "renderWeatherBarChart";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Weather chart JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Registry of pending draw polls, keyed by container id.
const POLLS: &str = "window.__wxPolls = window.__wxPolls || {}";

/// Cancel the pending draw for `id` (a JS string literal), if any.
fn cancel_poll(id: &str) -> String {
    format!("{POLLS}; clearInterval(window.__wxPolls[{id}]); delete window.__wxPolls[{id}];")
}

/// Build the polling call for `function_name`. Polls every 100ms until D3,
/// the render function and the container element exist, then empties the
/// container and draws. A newer call for the same container cancels the
/// older one, so only the latest dataset is ever drawn.
fn render_call(function_name: &str, container_id: &str, model_json: &str, config_json: &str) -> String {
    let id = js_string(container_id);
    let model = js_string(model_json);
    let config = js_string(config_json);
    let cancel = cancel_poll(&id);
    format!(
        r#"
        (function() {{
            {cancel}
            var poll = setInterval(function() {{
                var el = document.getElementById({id});
                if (typeof d3 !== 'undefined' &&
                    typeof window.{function_name} === 'function' &&
                    el) {{
                    clearInterval(poll);
                    delete window.__wxPolls[{id}];
                    el.innerHTML = '';
                    try {{
                        window.{function_name}({id}, {model}, {config});
                    }} catch(e) {{ console.error('[weather] {function_name} error:', e); }}
                }}
            }}, 100);
            window.__wxPolls[{id}] = poll;
        }})();
        "#,
    )
}

/// Render a multi-city line chart (temperature or precipitation).
pub fn render_line_chart(container_id: &str, model_json: &str, config_json: &str) {
    call_js(&render_call(LINE_CHART_FN, container_id, model_json, config_json));
}

/// Render the per-city precipitation bar chart.
pub fn render_bar_chart(container_id: &str, model_json: &str, config_json: &str) {
    call_js(&render_call(BAR_CHART_FN, container_id, model_json, config_json));
}

/// Remove everything drawn in the given container and drop any draw still
/// waiting for it.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_call(container_id));
}

fn destroy_call(container_id: &str) -> String {
    let id = js_string(container_id);
    format!(
        "{} var el = document.getElementById({id}); if (el) el.innerHTML = '';",
        cancel_poll(&id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_call_quotes_arguments() {
        let call = render_call(BAR_CHART_FN, "bar-chart", r#"{"city":"O'Hare"}"#, "{}");
        assert!(call.contains(r#"window.renderWeatherBarChart("bar-chart", "{\"city\":\"O'Hare\"}", "{}")"#));
        assert!(call.contains(r#"document.getElementById("bar-chart")"#));
    }

    #[test]
    fn test_render_call_clears_container_before_drawing() {
        let call = render_call(LINE_CHART_FN, "line-chart", "{}", "{}");
        let cancel = call.find(r#"clearInterval(window.__wxPolls["line-chart"])"#).unwrap();
        let poll = call.find("setInterval(").unwrap();
        let clear = call.find("el.innerHTML = '';").unwrap();
        let draw = call.find("window.renderWeatherLineChart(").unwrap();
        assert!(cancel < poll);
        assert!(poll < clear && clear < draw);
        assert!(call.contains(r#"window.__wxPolls["line-chart"] = poll;"#));
    }

    #[test]
    fn test_destroy_call_cancels_pending_draw() {
        let call = destroy_call("bar-chart");
        assert!(call.contains(r#"clearInterval(window.__wxPolls["bar-chart"])"#));
        assert!(call.contains(r#"document.getElementById("bar-chart")"#));
    }

    #[test]
    fn test_js_string_escapes_newlines() {
        assert_eq!(js_string("a\nb"), r#""a\nb""#);
    }
}
