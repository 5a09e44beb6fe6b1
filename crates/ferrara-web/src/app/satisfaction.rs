use super::Page;
use crate::{chart, dom, observer};
use ferrara_core::chart::SatisfactionChart;
use ferrara_core::Result;
use web_sys::{Element, HtmlCanvasElement};

/// Build the satisfaction chart the first time its canvas scrolls into view
pub fn init(page: &Page) -> Result<()> {
    let settings = &page.config().chart;
    let canvas: HtmlCanvasElement = dom::by_id(page.document(), &settings.canvas_id)?;
    chart::chart_library()?;
    let satisfaction = SatisfactionChart::new(settings.distribution.clone())?;

    let target: Element = canvas.clone().into();
    observer::observe_once(vec![target], settings.threshold, move |_| {
        if let Err(e) = chart::build_chart(&canvas, &satisfaction) {
            tracing::warn!(error = %e, "Failed to build satisfaction chart");
        }
    })?;
    Ok(())
}
