//! MangaVerse Reader WASM Frontend
//!
//! Pure Rust + WASM single-page UI over the core crates. Each concern lives
//! in its own module; no business logic here, the UI calls store/index/source
//! operations and renders plain data.

pub mod bookmarks_panel;
pub mod dom;
pub mod events;
pub mod reader;
pub mod search;
pub mod state;
pub mod storage;
pub mod theme;
pub mod web3;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Restore theme before anything renders
    theme::init(&els);

    // Default views
    search::render_default(&els);
    search::render_home(&els);
    bookmarks_panel::render(&els);
    web3::render_all(&els);

    // Bind all event listeners
    events::bind_events(&els);

    Ok(())
}
