use crate::pin::PinLength;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Pairing PIN plus the MQTT broker parameters collected by the pairing form.
///
/// Every `with_*` method consumes the snapshot and returns the updated one, so
/// the form never holds more than one value per field.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "snake_case")]
pub struct ConnectionConfig {
    pub pin_code: Option<String>,
    pub mqtt_host: Option<String>,
    pub mqtt_port: Option<u16>,
    pub mqtt_version: Option<u8>,
    pub mqtt_use_ssl: bool,
    pub mqtt_username: Option<String>,
    pub mqtt_password: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            pin_code: None,
            mqtt_host: None,
            mqtt_port: None,
            mqtt_version: None,
            mqtt_use_ssl: true,
            mqtt_username: None,
            mqtt_password: None,
        }
    }
}

impl ConnectionConfig {
    /// Takes the PIN only once it has exactly `length` characters. Input of any
    /// other length is discarded and the stored PIN stays as it was.
    pub fn with_pin_code(self, raw: &str, length: PinLength) -> Self {
        if !length.matches(raw) {
            return self;
        }

        Self {
            pin_code: Some(raw.to_owned()),
            ..self
        }
    }

    pub fn with_mqtt_host(self, raw: &str) -> Self {
        Self {
            mqtt_host: text(raw).map(|host| host.trim().to_owned()),
            ..self
        }
    }

    pub fn with_mqtt_port(self, raw: &str) -> Self {
        Self {
            mqtt_port: number(raw),
            ..self
        }
    }

    pub fn with_mqtt_version(self, raw: &str) -> Self {
        Self {
            mqtt_version: number(raw),
            ..self
        }
    }

    pub fn with_mqtt_use_ssl(self, checked: bool) -> Self {
        Self {
            mqtt_use_ssl: checked,
            ..self
        }
    }

    pub fn with_mqtt_username(self, raw: &str) -> Self {
        Self {
            mqtt_username: text(raw),
            ..self
        }
    }

    pub fn with_mqtt_password(self, raw: &str) -> Self {
        Self {
            mqtt_password: text(raw),
            ..self
        }
    }

    /// True when the snapshot can be handed over: PIN, host, port and
    /// version are present and the PIN has the required length.
    pub fn is_complete(&self, length: PinLength) -> bool {
        let pin_ok = self
            .pin_code
            .as_deref()
            .is_some_and(|pin| length.matches(pin));

        pin_ok
            && self.mqtt_host.is_some()
            && self.mqtt_port.is_some()
            && self.mqtt_version.is_some()
    }
}

fn text(raw: &str) -> Option<String> {
    match raw.trim() {
        "" => None,
        _ => Some(raw.to_owned()),
    }
}

fn number<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_unset<T: ToString>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map(|value| value.to_string())
                .unwrap_or_else(|| "-".to_string())
        }

        fn redacted<T>(value: &Option<T>) -> &'static str {
            match value {
                Some(_) => "***",
                None => "-",
            }
        }

        write!(
            f,
            "pin_code: {}, mqtt_host: {}, mqtt_port: {}, mqtt_version: {}, mqtt_use_ssl: {}, mqtt_username: {}, mqtt_password: {}",
            redacted(&self.pin_code),
            or_unset(&self.mqtt_host),
            or_unset(&self.mqtt_port),
            or_unset(&self.mqtt_version),
            self.mqtt_use_ssl,
            or_unset(&self.mqtt_username),
            redacted(&self.mqtt_password),
        )
    }
}
