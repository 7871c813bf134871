//! View model for the message view.
//!
//! Everything the message view does apart from drawing lives here, so it can
//! be exercised without a browser: the displayed state, the single fetch per
//! mount, and where failures are reported.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::{ApiError, ApiResult};
use crate::data::MessagePayload;
use crate::lifecycle::MountToken;
use crate::log;

pub const HEADING: &str = "🌐 Enterprise Full Stack App";

pub fn backend_says(message: &str) -> String {
    format!("Backend says: {message}")
}

/// What the view shows. `Loaded` is terminal for a mounted view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MessageState {
    #[default]
    Initial,
    Loaded(String),
}

impl MessageState {
    pub fn message(&self) -> &str {
        match self {
            MessageState::Initial => "",
            MessageState::Loaded(message) => message,
        }
    }

    /// The paragraph line rendered under the heading.
    pub fn line(&self) -> String {
        backend_says(self.message())
    }
}

/// Somewhere the message can be fetched from.
#[async_trait::async_trait(?Send)]
pub trait MessageSource {
    async fn fetch_message(&self) -> ApiResult<MessagePayload>;
}

#[async_trait::async_trait(?Send)]
impl<S> MessageSource for Rc<S>
where
    S: MessageSource + ?Sized,
{
    async fn fetch_message(&self) -> ApiResult<MessagePayload> {
        (**self).fetch_message().await
    }
}

/// Where failed loads are reported for developers. Never shown to the user.
pub trait DiagnosticSink {
    fn report(&self, error: &ApiError);
}

/// Reports through `tracing`, which the frontend routes to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &ApiError) {
        log::error!("Failed to load message: {error}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(String),
    Failed,
    Cancelled,
    AlreadyRequested,
}

impl LoadOutcome {
    /// The state to commit, if this outcome changes what is displayed.
    pub fn into_state(self) -> Option<MessageState> {
        match self {
            LoadOutcome::Loaded(message) => Some(MessageState::Loaded(message)),
            _ => None,
        }
    }
}

/// Loads the message for one mounted view.
///
/// A loader issues at most one request over its lifetime. Results that
/// arrive after the view's [`MountToken`] is unmounted are dropped without
/// being reported.
pub struct MessageLoader<S, D = TracingSink> {
    source: S,
    sink: D,
    requested: Cell<bool>,
}

impl<S> MessageLoader<S>
where
    S: MessageSource,
{
    pub fn new(source: S) -> Self {
        Self::with_sink(source, TracingSink)
    }
}

impl<S, D> MessageLoader<S, D>
where
    S: MessageSource,
    D: DiagnosticSink,
{
    pub fn with_sink(source: S, sink: D) -> Self {
        Self {
            source,
            sink,
            requested: Cell::new(false),
        }
    }

    pub async fn load(&self, token: &MountToken) -> LoadOutcome {
        if self.requested.replace(true) {
            log::warn!("Message already requested for this view, not fetching again");
            return LoadOutcome::AlreadyRequested;
        }
        if !token.is_mounted() {
            log::debug!("View unmounted before the message request started");
            return LoadOutcome::Cancelled;
        }

        let result = self.source.fetch_message().await;

        if !token.is_mounted() {
            log::debug!("View unmounted while the message was loading, dropping result");
            return LoadOutcome::Cancelled;
        }

        match result {
            Ok(payload) => {
                log::debug!("Message loaded: {:?}", payload.message);
                LoadOutcome::Loaded(payload.message)
            }
            Err(err) => {
                self.sink.report(&err);
                LoadOutcome::Failed
            }
        }
    }
}
