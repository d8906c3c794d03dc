use crate::hooks::{use_pairing_form, UsePairingFormReturn};
use shared::{ConnectionConfig, PinLength};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub pin_length: PinLength,
    pub on_submit: Callback<ConnectionConfig>,
}

#[function_component(PairingForm)]
pub fn pairing_form(props: &Props) -> Html {
    let UsePairingFormReturn {
        state,
        on_pin_code_change,
        on_mqtt_host_change,
        on_mqtt_port_change,
        on_mqtt_version_change,
        on_mqtt_use_ssl_change,
        on_mqtt_username_change,
        on_mqtt_password_change,
        on_submit,
    } = use_pairing_form(props.pin_length, props.on_submit.clone());

    html! {
        <div class="container">
            <form id="form-input" onsubmit={on_submit}>
                <p>{ "Enter pin code:" }</p>
                <p>
                    <input
                        type="password"
                        class="form-control"
                        placeholder="Pin Code"
                        maxlength={props.pin_length.to_string()}
                        autofocus=true
                        oninput={on_pin_code_change}
                    />
                </p>
                <p>
                    <input
                        type="text"
                        class="form-control"
                        placeholder="MQTT Host"
                        required=true
                        oninput={on_mqtt_host_change}
                    />
                </p>
                <p>
                    <input
                        type="number"
                        class="form-control"
                        placeholder="MQTT Websocket Port"
                        required=true
                        oninput={on_mqtt_port_change}
                    />
                </p>
                <p>
                    <input
                        type="number"
                        class="form-control"
                        placeholder="MQTT Version"
                        required=true
                        oninput={on_mqtt_version_change}
                    />
                </p>
                <div class="form-check">
                    <label class="form-check-label">
                        <input
                            type="checkbox"
                            class="form-check-input"
                            checked={state.config.mqtt_use_ssl}
                            onchange={on_mqtt_use_ssl_change}
                        />
                        { " Use SSL" }
                    </label>
                </div>
                <p>
                    <input
                        type="text"
                        class="form-control"
                        placeholder="MQTT username (optional)"
                        oninput={on_mqtt_username_change}
                    />
                </p>
                <p>
                    <input
                        type="password"
                        class="form-control"
                        placeholder="MQTT password (optional)"
                        oninput={on_mqtt_password_change}
                    />
                </p>
                <p>
                    <button class="btn btn-light" type="submit" disabled={!state.can_submit()}>
                        { "Connect" }
                    </button>
                </p>
            </form>
        </div>
    }
}
