use common::{ChartConfig, ChartError, ChartKind, ChartRenderer};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(div_id: &str) -> Result<JsValue, JsValue>;
}

/// Plotly traces for a chart.
pub fn plotly_traces(kind: ChartKind, config: &ChartConfig) -> Value {
    let traces: Vec<Value> = config
        .datasets
        .iter()
        .map(|dataset| match kind {
            ChartKind::Bar => json!({
                "type": "bar",
                "name": dataset.label,
                "x": config.labels,
                "y": dataset.data,
                "marker": {"color": dataset.background_colors},
            }),
            ChartKind::Line => {
                let shape = if dataset.tension > 0.0 { "spline" } else { "linear" };
                json!({
                    "type": "scatter",
                    "mode": "lines+markers",
                    "name": dataset.label,
                    "x": config.labels,
                    "y": dataset.data,
                    "fill": "tozeroy",
                    "fillcolor": dataset.background_colors.first(),
                    "line": {"color": dataset.border_color, "shape": shape},
                })
            }
        })
        .collect();
    Value::Array(traces)
}

pub fn plotly_layout(config: &ChartConfig) -> Value {
    json!({
        "title": {"text": config.title, "font": {"size": 16}},
        "margin": {"t": 50, "r": 10, "l": 40, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.2},
    })
}

fn to_js(value: &Value) -> Result<JsValue, String> {
    // Plain objects, not ES Maps: Plotly reads properties.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

/// Draws dashboard charts with the global `Plotly` object.
#[derive(Debug, Default)]
pub struct PlotlyRenderer;

impl ChartRenderer for PlotlyRenderer {
    /// The id of the div the plot lives in.
    type Handle = String;

    fn render(&mut self, element_id: &str, kind: ChartKind, config: &ChartConfig) -> Result<String, ChartError> {
        let failure = |reason: String| ChartError { element_id: element_id.to_string(), reason };

        let data = to_js(&plotly_traces(kind, config)).map_err(failure)?;
        let layout = to_js(&plotly_layout(config)).map_err(failure)?;
        let options = to_js(&json!({"responsive": true, "displayModeBar": false})).map_err(failure)?;

        log::trace!("Rendering {} chart into #{}", kind.as_str(), element_id);
        new_plot(element_id, data, layout, options).map_err(|e| failure(format!("{:?}", e)))?;
        Ok(element_id.to_string())
    }

    fn dispose(&mut self, handle: String) {
        if let Err(e) = purge(&handle) {
            log::warn!("Failed to purge chart #{}: {:?}", handle, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::dashboard::{efficiency_trend_chart, feed_composition_chart};

    #[test]
    fn test_bar_trace_carries_fixed_values() {
        let chart = feed_composition_chart();
        let traces = plotly_traces(chart.kind, &chart.config);

        assert_eq!(traces[0]["type"], "bar");
        assert_eq!(traces[0]["y"], json!([4.0, 1.5, 2.0, 3.5]));
        assert_eq!(traces[0]["marker"]["color"][0], "#667eea");
    }

    #[test]
    fn test_line_trace_is_smoothed() {
        let chart = efficiency_trend_chart();
        let traces = plotly_traces(chart.kind, &chart.config);

        assert_eq!(traces[0]["type"], "scatter");
        assert_eq!(traces[0]["line"]["shape"], "spline");
        assert_eq!(traces[0]["x"][11], "Month 12");
    }

    #[test]
    fn test_layout_title() {
        let chart = feed_composition_chart();
        assert_eq!(plotly_layout(&chart.config)["title"]["text"], "Feed Composition Overview");
    }
}
