use super::{connection_summary::ConnectionSummary, pairing_form::PairingForm};
use crate::config;
use shared::ConnectionConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let pin_length = use_memo((), |_| config::pin_length());
    let paired = use_state(|| None::<ConnectionConfig>);

    let on_submit = {
        let paired = paired.clone();

        Callback::from(move |config: ConnectionConfig| {
            log::debug!("Received connection settings for {:?}", config.mqtt_host);
            paired.set(Some(config));
        })
    };

    html! {
        <div>
            <h1>{ "DotBot" }</h1>
            <PairingForm pin_length={*pin_length} {on_submit} />
            {
                match &*paired {
                    Some(config) => html! { <ConnectionSummary config={config.clone()} /> },
                    None => html! {},
                }
            }
        </div>
    }
}
