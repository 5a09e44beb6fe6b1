//! ferrara-web - Browser bindings for ferrara-site
//!
//! Compiled to WebAssembly and loaded by the site's pages. On start it
//! installs the panic hook and console logger, then mounts the page features
//! from `ferrara-core` once the document is parsed.

pub mod app;
pub mod chart;
pub mod dom;
pub mod observer;
pub mod timer;
pub mod toast;

use anyhow::Context;
use app::Page;
use ferrara_core::SiteConfig;
use wasm_bindgen::prelude::*;

#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(LOG_LEVEL).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("console logger already installed"));
    }

    if let Err(e) = run() {
        tracing::error!("{:#}", e);
    }
}

fn run() -> anyhow::Result<()> {
    let config = SiteConfig::embedded().context("Failed to load site configuration")?;
    let page = Page::new(config).context("Failed to access the page")?;
    let document = page.document().clone();
    dom::on_ready(&document, move || {
        page.mount();
    })
    .context("Failed to wait for the document")?;
    Ok(())
}
