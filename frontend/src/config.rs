use shared::PinLength;

/// Required PIN length, baked in from `PIN_CODE_LENGTH` at build time.
pub fn pin_length() -> PinLength {
    pin_length_from(option_env!("PIN_CODE_LENGTH"))
}

pub fn log_level() -> log::Level {
    log_level_from(option_env!("LOG_LEVEL"))
}

fn pin_length_from(value: Option<&str>) -> PinLength {
    match value.map(str::parse::<PinLength>) {
        Some(Ok(length)) => length,
        Some(Err(err)) => {
            log::warn!("{}, using default of {}", err, PinLength::default());
            PinLength::default()
        }
        None => PinLength::default(),
    }
}

fn log_level_from(value: Option<&str>) -> log::Level {
    value
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_length_from_env() {
        assert_eq!(pin_length_from(Some("6")).get(), 6);
        assert_eq!(pin_length_from(None), PinLength::default());
        assert_eq!(pin_length_from(Some("six")), PinLength::default());
        assert_eq!(pin_length_from(Some("0")), PinLength::default());
    }

    #[test]
    fn test_log_level_from_env() {
        assert_eq!(log_level_from(Some("debug")), log::Level::Debug);
        assert_eq!(log_level_from(Some("WARN")), log::Level::Warn);
        assert_eq!(log_level_from(Some("loud")), log::Level::Info);
        assert_eq!(log_level_from(None), log::Level::Info);
    }
}
