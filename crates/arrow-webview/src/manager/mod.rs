//! WebView lifecycle management.
//!
//! `WebViewManager` builds one `wry::WebView` per top-level window and
//! collects the events those WebViews emit.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Callback that nudges the host event loop after an event is queued.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// FIFO queue shared between the WebView callbacks and the event loop.
#[derive(Clone)]
pub(crate) struct EventSink {
    events: Arc<Mutex<Vec<WebViewEvent>>>,
    waker: Option<Waker>,
}

impl EventSink {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            waker: None,
        }
    }

    /// Queue an event and wake the event loop.
    pub(crate) fn push(&self, event: WebViewEvent) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(event);
        }
        if let Some(wake) = &self.waker {
            wake();
        }
    }

    fn drain(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut evts) => std::mem::take(&mut *evts),
            Err(_) => Vec::new(),
        }
    }
}

/// Builds WebViews and owns the event queue they report into.
pub struct WebViewManager {
    sink: EventSink,
    /// Optional content provider for the `arrow://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            sink: EventSink::new(),
            content_provider: None,
        }
    }

    /// Install a callback invoked every time an event is queued.
    ///
    /// Only affects WebViews created after the call.
    pub fn set_waker(&mut self, waker: Waker) {
        self.sink.waker = Some(waker);
    }

    /// Drain all pending events, oldest first.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.sink.drain()
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
