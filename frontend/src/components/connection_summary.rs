use shared::ConnectionConfig;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub config: ConnectionConfig,
}

fn credentials(config: &ConnectionConfig) -> String {
    match (&config.mqtt_username, config.mqtt_password.is_some()) {
        (Some(username), true) => format!("User: {} (password set)", username),
        (Some(username), false) => format!("User: {}", username),
        (None, true) => "Password only".to_string(),
        (None, false) => "Anonymous".to_string(),
    }
}

#[function_component(ConnectionSummary)]
pub fn connection_summary(props: &Props) -> Html {
    let config = &props.config;
    let address = match (&config.mqtt_host, config.mqtt_port) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.clone(),
        _ => "-".to_string(),
    };

    html! {
        <div class="connection-summary">
            <h2>{ "Pairing" }</h2>
            <ul>
                <li>{ "Broker: " }{ address }</li>
                <li>{ "MQTT version: " }{ config.mqtt_version.map(|v| v.to_string()).unwrap_or_default() }</li>
                <li>{ "SSL: " }{ if config.mqtt_use_ssl { "on" } else { "off" } }</li>
                <li>{ credentials(config) }</li>
            </ul>
        </div>
    }
}
