use crate::{config::ConnectionConfig, pin::PinLength};

/// Receives the snapshot once the user submits a complete form.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSink {
    fn notify(&self, config: ConnectionConfig);
}

impl<F> ConfigSink for F
where
    F: Fn(ConnectionConfig),
{
    fn notify(&self, config: ConnectionConfig) {
        self(config)
    }
}

/// Hands `config` to `sink` if it is complete. Returns whether the sink was notified.
pub fn submit(config: &ConnectionConfig, length: PinLength, sink: &impl ConfigSink) -> bool {
    if !config.is_complete(length) {
        log::debug!("Ignoring submit of incomplete form: {}", config);
        return false;
    }

    log::info!("Connect: {}", config);
    sink.notify(config.clone());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::*;
    use serde_json::json;
    use std::cell::RefCell;

    fn six() -> PinLength {
        PinLength::new(6).unwrap()
    }

    fn form(pin: &str) -> ConnectionConfig {
        ConnectionConfig::default()
            .with_pin_code(pin, six())
            .with_mqtt_host("broker.local")
            .with_mqtt_port("8883")
            .with_mqtt_version("5")
            .with_mqtt_use_ssl(true)
            .with_mqtt_username("")
            .with_mqtt_password("")
    }

    #[test]
    fn test_submit_complete_form() {
        let config = form("123456");
        let mut sink = MockConfigSink::new();

        sink.expect_notify()
            .with(eq(config.clone()))
            .times(1)
            .returning(|_| ());

        assert!(submit(&config, six(), &sink));
    }

    #[test]
    fn test_submit_short_pin() {
        let mut sink = MockConfigSink::new();
        sink.expect_notify().times(0);

        assert!(!submit(&form("12345"), six(), &sink));
    }

    #[test]
    fn test_submit_invalid_port() {
        let mut sink = MockConfigSink::new();
        sink.expect_notify().times(0);

        let config = form("123456").with_mqtt_port("eighty");
        assert_eq!(config.mqtt_port, None);
        assert!(!submit(&config, six(), &sink));
    }

    #[test]
    fn test_submit_with_closure() {
        let received = RefCell::new(Vec::new());
        let sink = |config: ConnectionConfig| received.borrow_mut().push(config);

        assert!(submit(&form("123456"), six(), &sink));
        assert!(!submit(&form("1234"), six(), &sink));

        let received = received.into_inner();
        assert_eq!(received.len(), 1);
        assert_eq!(
            serde_json::to_value(&received[0]).unwrap(),
            json!({
                "pin_code": "123456",
                "mqtt_host": "broker.local",
                "mqtt_port": 8883,
                "mqtt_version": 5,
                "mqtt_use_ssl": true,
                "mqtt_username": null,
                "mqtt_password": null,
            })
        );
    }
}
