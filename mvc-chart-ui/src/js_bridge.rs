//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The map and chart renderers live in `assets/js/*.js`. They are evaluated
//! as globals (no ES modules) once deck.gl and D3.js have loaded, and are
//! exposed via `window.*`. This module serializes the view structs and calls
//! those globals.

use serde::Serialize;
use wasm_bindgen::JsValue;

static SCATTER_MAP_JS: &str = include_str!("../assets/js/scatter-map.js");
static HEXAGON_MAP_JS: &str = include_str!("../assets/js/hexagon-map.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Render functions promoted to `window.*` once the scripts are evaluated.
const RENDER_FUNCTIONS: [&str; 5] = [
    "renderScatterMap",
    "renderHexagonMap",
    "renderBarChart",
    "renderDataTable",
    "destroyDeck",
];

fn eval(code: &str) -> Result<JsValue, JsValue> {
    js_sys::eval(code)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('MVC JS call failed:', e); }}",
        code
    );
    if let Err(e) = eval(&wrapped) {
        log::warn!("[MVC] eval failed: {:?}", e);
    }
}

/// Quote `s` as a JS string literal.
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Serialize `value` to JSON, logging and returning `None` on failure.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("[MVC] failed to serialize view: {}", e);
            None
        }
    }
}

/// Initialize the renderer scripts with a wait-for-libraries polling loop.
///
/// The scripts are evaluated at global scope via indirect eval once both
/// `deck` and `d3` exist, and each render function is promoted to `window.*`.
/// Safe to call more than once.
pub fn init_charts() {
    let all_js = [SCATTER_MAP_JS, HEXAGON_MAP_JS, BAR_CHART_JS, DATA_TABLE_JS].join("\n");
    call_js(&format!(
        "if (!window.__mvcChartsReady) {{ window.__mvcChartScripts = {}; }}",
        js_string_literal(&all_js)
    ));

    let promote: String = RENDER_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect();
    call_js(&format!(
        r#"
        (function() {{
            if (window.__mvcChartsReady || window.__mvcChartsPending) return;
            window.__mvcChartsPending = true;
            var waitForLibs = setInterval(function() {{
                if (typeof d3 !== 'undefined' && typeof deck !== 'undefined') {{
                    clearInterval(waitForLibs);
                    (0, eval)(window.__mvcChartScripts);
                    delete window.__mvcChartScripts;
                    {promote}
                    window.__mvcChartsReady = true;
                    console.log('MVC charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Call `window.<function>(container_id, args...)` once the scripts are
/// initialized and the container element exists.
fn render_when_ready(function: &str, container_id: &str, args: &[&str]) {
    let id = js_string_literal(container_id);
    let args: String = args
        .iter()
        .map(|a| format!(", {}", js_string_literal(a)))
        .collect();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__mvcChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}{args});
                    }} catch(e) {{ console.error('[MVC] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the 2D scatter map of injury-filtered points.
pub fn render_scatter_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderScatterMap", container_id, &[data_json, config_json]);
}

/// Render the 3D hexagon layer from a serialized `DeckView`.
pub fn render_hexagon_map(container_id: &str, view_json: &str) {
    render_when_ready("renderHexagonMap", container_id, &[view_json]);
}

/// Render the per-minute bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, &[data_json, config_json]);
}

/// Render a plain data table.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDataTable", container_id, &[data_json, config_json]);
}

/// Clear whatever was rendered into the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyDeck) window.destroyDeck({});",
        js_string_literal(container_id)
    ));
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
    {
        el.set_inner_html("");
    }
}
