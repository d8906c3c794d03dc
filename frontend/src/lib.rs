use components::App;
use wasm_bindgen::prelude::wasm_bindgen;
use yew::Renderer;

mod components;
mod config;
mod hooks;
mod state;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Required PIN code length: {}", config::pin_length());

    Renderer::<App>::new().render();
}
