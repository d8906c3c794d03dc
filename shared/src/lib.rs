pub use config::ConnectionConfig;
pub use pin::{PinLength, PinLengthError};
pub use submit::{submit, ConfigSink};

mod config;
mod pin;
mod submit;
