use crate::state::{State, StateAction};
use shared::{submit, ConnectionConfig, PinLength};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub struct UsePairingFormReturn {
    pub state: State,
    pub on_pin_code_change: Callback<InputEvent>,
    pub on_mqtt_host_change: Callback<InputEvent>,
    pub on_mqtt_port_change: Callback<InputEvent>,
    pub on_mqtt_version_change: Callback<InputEvent>,
    pub on_mqtt_use_ssl_change: Callback<Event>,
    pub on_mqtt_username_change: Callback<InputEvent>,
    pub on_mqtt_password_change: Callback<InputEvent>,
    pub on_submit: Callback<SubmitEvent>,
}

fn on_text_input(
    state: &UseReducerHandle<State>,
    action: fn(String) -> StateAction,
) -> Callback<InputEvent> {
    let state = state.clone();

    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.dispatch(action(input.value()));
        }
    })
}

#[hook]
pub fn use_pairing_form(
    pin_length: PinLength,
    on_submit: Callback<ConnectionConfig>,
) -> UsePairingFormReturn {
    let state = use_reducer(|| State::new(pin_length));

    let on_mqtt_use_ssl_change = {
        let state = state.clone();

        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(StateAction::MqttUseSsl(input.checked()));
            }
        })
    };

    let on_submit = {
        let state = state.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let on_submit = on_submit.clone();
            let notify = move |config: ConnectionConfig| on_submit.emit(config);
            submit(&state.config, state.pin_length, &notify);
        })
    };

    UsePairingFormReturn {
        state: (*state).clone(),
        on_pin_code_change: on_text_input(&state, StateAction::PinCode),
        on_mqtt_host_change: on_text_input(&state, StateAction::MqttHost),
        on_mqtt_port_change: on_text_input(&state, StateAction::MqttPort),
        on_mqtt_version_change: on_text_input(&state, StateAction::MqttVersion),
        on_mqtt_use_ssl_change,
        on_mqtt_username_change: on_text_input(&state, StateAction::MqttUsername),
        on_mqtt_password_change: on_text_input(&state, StateAction::MqttPassword),
        on_submit,
    }
}
