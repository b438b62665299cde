use std::borrow::Cow;
use std::sync::Arc;

use arrow_common::WindowKey;
use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::{BackgroundThrottlingPolicy, WebViewBuilder};

use crate::content::{request_path, ContentProvider};
use crate::ipc::bridge_script;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a WebView that fills `window`.
    ///
    /// Nothing is loaded yet; the caller issues the first `load_url` so that
    /// every navigation goes through the same path.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        key: WindowKey,
        window: &W,
        config: &WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let throttling = if config.background_throttling {
            BackgroundThrottlingPolicy::Throttle
        } else {
            BackgroundThrottlingPolicy::Disabled
        };

        let script = bridge_script(config.spellcheck);

        let mut builder = WebViewBuilder::new()
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_background_throttling(throttling)
            .with_initialization_script(&script)
            .with_focused(true);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, self.sink.clone(), key);
        builder = Self::attach_page_load_handler(builder, self.sink.clone(), key);
        builder = Self::attach_title_handler(builder, self.sink.clone(), key);
        builder = Self::attach_navigation_handler(builder, key);
        builder = self.attach_custom_protocol(builder);

        let webview = builder.build(window)?;

        debug!(%key, devtools = config.devtools, "WebView created");

        Ok(WebViewHandle {
            webview,
            window: key,
            current_url: "about:blank".to_string(),
        })
    }

    /// Set the content provider for serving bundled assets via `arrow://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol("arrow".to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = request_path(&uri);

                match cp.resolve(path) {
                    Some((mime, data)) => respond(200, &mime, data.into_owned()),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        respond(404, "text/plain", b"Not Found".to_vec())
                    }
                }
            });
        }
        builder
    }
}

fn respond(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", "arrow://localhost")
        .body(Cow::from(body))
        .unwrap_or_else(|e| {
            warn!(error = %e, "custom protocol: failed to build response");
            Response::new(Cow::from(Vec::new()))
        })
}
