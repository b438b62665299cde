//! Routing of queued WebView events to the shell context.

use arrow_common::WindowKey;
use arrow_webview::{IpcMessage, PageLoadState, ShellCommand, WebViewEvent};

use super::context::{HostWindow, RelayOutcome, ShellContext};
use super::core::BrowserApp;

impl BrowserApp {
    /// Drain the WebView queue and handle every event in arrival order.
    pub(super) fn dispatch_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            dispatch_event(&mut self.context, self.dynamic_title, event);
        }
    }
}

/// Apply one WebView event to the shell.
fn dispatch_event<W: HostWindow>(
    context: &mut ShellContext<W>,
    dynamic_title: bool,
    event: WebViewEvent,
) {
    match event {
        WebViewEvent::IpcMessage { window, body } => {
            route_ipc(context, window, &body);
        }
        WebViewEvent::TitleChanged { window, title } => {
            if !dynamic_title || title.is_empty() {
                return;
            }
            if let Some(w) = context.window_mut(window) {
                w.set_title(&title);
            }
        }
        WebViewEvent::PageLoad { window, state, url } => {
            if state != PageLoadState::Finished {
                return;
            }
            if let Some(w) = context.window_mut(window) {
                tracing::debug!(%window, url = %url, "page committed");
                w.set_current_url(url);
            }
        }
    }
}

/// Decode a raw bridge message from `window` and run its command.
///
/// Returns `None` when the body never became a command.
fn route_ipc<W: HostWindow>(
    context: &mut ShellContext<W>,
    window: WindowKey,
    body: &str,
) -> Option<RelayOutcome> {
    let Some(msg) = IpcMessage::from_json(body) else {
        tracing::warn!(
            %window,
            body_len = body.len(),
            "IPC message rejected: failed to parse"
        );
        return None;
    };

    let Some(command) = ShellCommand::from_ipc(&msg) else {
        tracing::warn!(%window, kind = %msg.kind, "IPC message rejected: unknown kind");
        return None;
    };

    tracing::debug!(%window, kind = command.kind(), "IPC command dispatched");
    Some(context.handle_command(window, command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::context::{DiscardReason, QuitPolicy, WindowOptions};
    use crate::shell::testing::{FakeHost, FakeWindow};
    use arrow_webview::WebViewConfig;

    const START: &str = "https://www.google.com";
    const OURS: WindowKey = WindowKey(1);

    fn ready() -> ShellContext<FakeWindow> {
        let options = WindowOptions {
            title: "Broken Arrow (v0.1)".into(),
            width: 1200,
            height: 800,
            webview: WebViewConfig::default(),
        };
        let mut ctx = ShellContext::new(options, START, QuitPolicy::default());
        ctx.on_ready(&mut FakeHost::default()).unwrap();
        ctx
    }

    fn window(ctx: &ShellContext<FakeWindow>) -> &FakeWindow {
        ctx.window().unwrap()
    }

    fn ipc(window: WindowKey, body: &str) -> WebViewEvent {
        WebViewEvent::IpcMessage {
            window,
            body: body.into(),
        }
    }

    // -- IPC --

    #[test]
    fn bridge_body_from_our_window_loads_once() {
        let mut ctx = ready();
        dispatch_event(
            &mut ctx,
            true,
            ipc(OURS, r#"{"kind":"open-url","payload":"  example.com "}"#),
        );
        assert_eq!(window(&ctx).loads, [START, "https://example.com"]);
    }

    #[test]
    fn route_ipc_reports_the_relay_outcome() {
        let mut ctx = ready();
        assert_eq!(
            route_ipc(&mut ctx, OURS, r#"{"kind":"open-url","payload":"http://a.b"}"#),
            Some(RelayOutcome::Navigated("http://a.b".into()))
        );
        assert_eq!(
            route_ipc(&mut ctx, OURS, r#"{"kind":"open-url","payload":"   "}"#),
            Some(RelayOutcome::Discarded(DiscardReason::EmptyAddress))
        );
    }

    #[test]
    fn bridge_body_from_a_foreign_window_is_dropped() {
        let mut ctx = ready();
        assert_eq!(
            route_ipc(&mut ctx, WindowKey(5), r#"{"kind":"open-url","payload":"example.com"}"#),
            Some(RelayOutcome::Discarded(DiscardReason::UnknownWindow))
        );
        assert_eq!(window(&ctx).loads, [START]);
    }

    #[test]
    fn malformed_or_unknown_bodies_run_nothing() {
        let mut ctx = ready();
        for body in [
            "not json",
            r#"{"payload":"example.com"}"#,
            r#"{"kind":"eval","payload":"example.com"}"#,
        ] {
            assert_eq!(route_ipc(&mut ctx, OURS, body), None, "{body}");
            dispatch_event(&mut ctx, true, ipc(OURS, body));
        }
        assert_eq!(window(&ctx).loads, [START]);
    }

    #[test]
    fn events_apply_in_arrival_order() {
        let mut ctx = ready();
        for host in ["a.example", "b.example", "c.example"] {
            let body = format!(r#"{{"kind":"open-url","payload":"{host}"}}"#);
            dispatch_event(&mut ctx, true, ipc(OURS, &body));
        }
        assert_eq!(
            window(&ctx).loads,
            [
                START,
                "https://a.example",
                "https://b.example",
                "https://c.example"
            ]
        );
    }

    // -- title --

    fn title(window: WindowKey, title: &str) -> WebViewEvent {
        WebViewEvent::TitleChanged {
            window,
            title: title.into(),
        }
    }

    #[test]
    fn dynamic_title_follows_the_document() {
        let mut ctx = ready();
        dispatch_event(&mut ctx, true, title(OURS, "Example Domain"));
        assert_eq!(window(&ctx).title, "Example Domain");
    }

    #[test]
    fn empty_document_title_keeps_the_window_title() {
        let mut ctx = ready();
        dispatch_event(&mut ctx, true, title(OURS, ""));
        assert_eq!(window(&ctx).title, "Broken Arrow (v0.1)");
    }

    #[test]
    fn static_title_ignores_the_document() {
        let mut ctx = ready();
        dispatch_event(&mut ctx, false, title(OURS, "Example Domain"));
        assert_eq!(window(&ctx).title, "Broken Arrow (v0.1)");
    }

    #[test]
    fn title_from_a_foreign_window_is_ignored() {
        let mut ctx = ready();
        dispatch_event(&mut ctx, true, title(WindowKey(9), "Elsewhere"));
        assert_eq!(window(&ctx).title, "Broken Arrow (v0.1)");
    }

    // -- address tracking --

    fn page_load(state: PageLoadState, url: &str) -> WebViewEvent {
        WebViewEvent::PageLoad {
            window: OURS,
            state,
            url: url.into(),
        }
    }

    #[test]
    fn finished_load_records_the_committed_url() {
        let mut ctx = ready();
        dispatch_event(
            &mut ctx,
            true,
            page_load(PageLoadState::Finished, "https://www.google.com/search?q=x"),
        );
        assert_eq!(window(&ctx).current_url, "https://www.google.com/search?q=x");
    }

    #[test]
    fn started_load_does_not_move_the_address() {
        let mut ctx = ready();
        dispatch_event(
            &mut ctx,
            true,
            page_load(PageLoadState::Started, "https://redirect.example"),
        );
        assert_eq!(window(&ctx).current_url, START);
    }
}
