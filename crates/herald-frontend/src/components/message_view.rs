use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use herald::config::ClientConfig;
use herald::lifecycle::MountGuard;
use herald::log;
use herald::view::{HEADING, MessageLoader, MessageSource, MessageState};

use crate::providers::api::Api;

/// A message source handed to the view in place of the HTTP API.
#[derive(Clone)]
pub struct SharedSource(pub Rc<dyn MessageSource>);

impl PartialEq for SharedSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageViewProps {
    pub config: ClientConfig,
    /// Replaces the HTTP API built from `config` when set.
    #[prop_or_default]
    pub source: Option<SharedSource>,
}

/// Builds the HTTP source and cancels its request when `guard` is dropped.
fn http_source(config: &ClientConfig, guard: &mut MountGuard) -> Rc<dyn MessageSource> {
    log::info!("Requesting message from {}", config.message_url());
    match AbortController::new() {
        Ok(controller) => {
            let api = Api::new(config).with_abort_signal(controller.signal());
            guard.on_teardown(move || controller.abort());
            Rc::new(api)
        }
        Err(err) => {
            log::warn!("AbortController unavailable, request cannot be cancelled: {err:?}");
            Rc::new(Api::new(config))
        }
    }
}

/// Shows the message served by the backend, fetched once when mounted.
#[function_component(MessageView)]
pub fn message_view(props: &MessageViewProps) -> Html {
    let state = use_state(MessageState::default);

    {
        let state = state.clone();
        let config = props.config.clone();
        let injected = props.source.clone();

        use_effect_with((), move |_| {
            let mut guard = MountGuard::new();
            let token = guard.token();

            let source = match injected {
                Some(SharedSource(source)) => source,
                None => http_source(&config, &mut guard),
            };

            let loader = MessageLoader::new(source);
            spawn_local(async move {
                if let Some(next) = loader.load(&token).await.into_state() {
                    state.set(next);
                }
            });

            move || drop(guard)
        });
    }

    html! {
        <div style="text-align: center; margin-top: 2rem;">
            <h1>{ HEADING }</h1>
            <p>{ state.line() }</p>
        </div>
    }
}
