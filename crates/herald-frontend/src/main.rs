mod components;
mod providers;
mod runtime_config;

use components::{MessageView, MessageViewProps};

fn main() {
    herald::log::setup().expect("Failed to setup logging");

    let config = runtime_config::load();
    let props = MessageViewProps {
        config,
        source: None,
    };
    yew::Renderer::<MessageView>::with_props(props).render();
}
