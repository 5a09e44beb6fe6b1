//! Chart.js binding
//!
//! The chart configuration is produced in `ferrara-core` as JSON. The tooltip
//! label callback cannot be expressed in JSON, so it is compiled here and
//! attached to the parsed configuration before the chart is constructed.

use crate::dom;
use ferrara_core::chart::{SatisfactionChart, TOOLTIP_LABEL_CALLBACK};
use ferrara_core::{Result, SiteError};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Global constructor the charting library installs
pub const CHART_GLOBAL: &str = "Chart";

fn get(target: &JsValue, key: &str) -> Result<JsValue> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(dom::js_error)
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value).map_err(dom::js_error)?;
    Ok(())
}

/// The `Chart` constructor, if the library is loaded
pub fn chart_library() -> Result<Function> {
    let ctor = get(&js_sys::global(), CHART_GLOBAL)?;
    if ctor.is_undefined() || ctor.is_null() {
        return Err(SiteError::UnsupportedFacility("Chart.js".to_string()));
    }
    ctor.dyn_into::<Function>()
        .map_err(|_| SiteError::UnsupportedFacility("Chart.js constructor".to_string()))
}

fn attach_tooltip_label(config: &JsValue) -> Result<()> {
    let tooltip = get(&get(&get(config, "options")?, "plugins")?, "tooltip")?;
    if tooltip.is_undefined() {
        return Err(SiteError::Js("chart config has no tooltip section".to_string()));
    }
    let callbacks = Object::new();
    let label = Function::new_with_args("context", TOOLTIP_LABEL_CALLBACK);
    set(&callbacks, "label", &label)?;
    set(&tooltip, "callbacks", &callbacks)
}

/// Construct the chart on `canvas`
pub fn build_chart(canvas: &HtmlCanvasElement, chart: &SatisfactionChart) -> Result<JsValue> {
    let ctor = chart_library()?;
    let context = canvas
        .get_context("2d")
        .map_err(dom::js_error)?
        .ok_or_else(|| SiteError::UnsupportedFacility("2d canvas context".to_string()))?;

    let config = js_sys::JSON::parse(&chart.config_json()?).map_err(dom::js_error)?;
    attach_tooltip_label(&config)?;

    let instance = Reflect::construct(&ctor, &Array::of2(&context, &config))
        .map_err(dom::js_error)
        .map_err(|e| e.with_context("Failed to construct satisfaction chart"))?;
    tracing::info!(segments = chart.distribution().len(), "Satisfaction chart built");
    Ok(instance)
}
