use shared::{ConnectionConfig, PinLength};
use std::rc::Rc;
use yew::prelude::*;

pub enum StateAction {
    PinCode(String),
    MqttHost(String),
    MqttPort(String),
    MqttVersion(String),
    MqttUseSsl(bool),
    MqttUsername(String),
    MqttPassword(String),
}

#[derive(Clone, PartialEq, Debug)]
pub struct State {
    pub pin_length: PinLength,
    pub config: ConnectionConfig,
}

impl State {
    pub fn new(pin_length: PinLength) -> Self {
        Self {
            pin_length,
            config: ConnectionConfig::default(),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.config.is_complete(self.pin_length)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(PinLength::default())
    }
}

impl Reducible for State {
    type Action = StateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let config = self.config.clone();

        let config = match action {
            StateAction::PinCode(pin) => config.with_pin_code(&pin, self.pin_length),
            StateAction::MqttHost(host) => config.with_mqtt_host(&host),
            StateAction::MqttPort(port) => config.with_mqtt_port(&port),
            StateAction::MqttVersion(version) => config.with_mqtt_version(&version),
            StateAction::MqttUseSsl(checked) => config.with_mqtt_use_ssl(checked),
            StateAction::MqttUsername(username) => config.with_mqtt_username(&username),
            StateAction::MqttPassword(password) => config.with_mqtt_password(&password),
        };

        Self {
            config,
            ..(*self).clone()
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(state: State, actions: Vec<StateAction>) -> Rc<State> {
        actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action))
    }

    fn six() -> State {
        State::new(PinLength::new(6).unwrap())
    }

    fn broker_actions() -> Vec<StateAction> {
        vec![
            StateAction::MqttHost("broker.local".into()),
            StateAction::MqttPort("8883".into()),
            StateAction::MqttVersion("5".into()),
            StateAction::MqttUsername("".into()),
            StateAction::MqttPassword("".into()),
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = six();
        assert!(!state.can_submit());
        assert!(state.config.mqtt_use_ssl);
    }

    #[test]
    fn test_pin_typed_character_by_character() {
        let mut state = Rc::new(six());
        for typed in ["1", "12", "123", "1234", "12345"] {
            state = state.reduce(StateAction::PinCode(typed.into()));
            assert_eq!(state.config.pin_code, None);
        }

        let state = state.reduce(StateAction::PinCode("123456".into()));
        assert_eq!(state.config.pin_code.as_deref(), Some("123456"));
    }

    #[test]
    fn test_pin_kept_after_wrong_length_input() {
        let mut actions = broker_actions();
        actions.push(StateAction::PinCode("123456".into()));
        actions.push(StateAction::PinCode("12345".into()));

        let state = reduce_all(six(), actions);
        assert_eq!(state.config.pin_code.as_deref(), Some("123456"));
        assert!(state.can_submit());
    }

    #[test]
    fn test_complete_form_can_submit() {
        let mut actions = broker_actions();
        actions.push(StateAction::PinCode("123456".into()));

        let state = reduce_all(six(), actions);
        assert!(state.can_submit());
        assert_eq!(state.config.mqtt_port, Some(8883));
        assert_eq!(state.config.mqtt_version, Some(5));
        assert_eq!(state.config.mqtt_username, None);
    }

    #[test]
    fn test_short_pin_cannot_submit() {
        let mut actions = broker_actions();
        actions.push(StateAction::PinCode("12345".into()));

        assert!(!reduce_all(six(), actions).can_submit());
    }

    #[test]
    fn test_non_numeric_port_cannot_submit() {
        let mut actions = broker_actions();
        actions.push(StateAction::PinCode("123456".into()));
        actions.push(StateAction::MqttPort("port".into()));

        let state = reduce_all(six(), actions);
        assert_eq!(state.config.mqtt_port, None);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_use_ssl_follows_checkbox() {
        let state = reduce_all(six(), vec![StateAction::MqttUseSsl(false)]);
        assert!(!state.config.mqtt_use_ssl);

        let state = state.reduce(StateAction::MqttUseSsl(true));
        assert!(state.config.mqtt_use_ssl);
    }
}
