pub use crate::components::app::App;

pub mod app;
pub mod connection_summary;
pub mod pairing_form;
