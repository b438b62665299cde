use arrow_common::WindowKey;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::navigation::is_navigation_allowed;

use super::{EventSink, WebViewManager};

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        sink: EventSink,
        window: WindowKey,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // The bridge only ever posts JSON; anything else did not come from it
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    %window,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(%window, body_len = body.len(), "IPC message from JS");
            sink.push(WebViewEvent::IpcMessage { window, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        sink: EventSink,
        window: WindowKey,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%window, ?state, url = %url, "page load");
            sink.push(WebViewEvent::PageLoad { window, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        sink: EventSink,
        window: WindowKey,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(%window, title = %title, "title changed");
            sink.push(WebViewEvent::TitleChanged { window, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        window: WindowKey,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(%window, url = %url, "navigation blocked: scheme not allowed");
                return false;
            }

            debug!(%window, url = %url, "navigation allowed");
            true
        })
    }
}
