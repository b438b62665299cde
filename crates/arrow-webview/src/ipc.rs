//! IPC protocol between page content and the shell.
//!
//! Messages flow one way only: JavaScript calls
//! `window.browserAPI.openURL(url)`, the bridge serializes it into
//! `{"kind": "open-url", "payload": "<url>"}` and posts it through
//! `window.ipc.postMessage`, which reaches the WebView's `ipc_handler`.
//! Nothing is ever sent back.

use serde::Deserialize;

/// Message kind for navigation requests.
pub const OPEN_URL_KIND: &str = "open-url";

/// A raw IPC message from JavaScript.
#[derive(Debug, Clone, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload. Absent payloads deserialize as `None`.
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string or any other JSON value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

impl IpcPayload {
    /// Read the payload as a candidate address.
    ///
    /// Scalars are stringified like JavaScript's `String(x)`; `null`,
    /// objects and arrays become the empty string.
    pub fn to_address(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Json(serde_json::Value::String(s)) => s.clone(),
            Self::Json(serde_json::Value::Number(n)) => n.to_string(),
            Self::Json(serde_json::Value::Bool(b)) => b.to_string(),
            Self::Json(_) | Self::None => String::new(),
        }
    }
}

/// Typed command decoded from an IPC message.
///
/// One-way: the shell never acknowledges a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Navigate the sender's window. `url` is the raw, un-normalized input.
    OpenUrl { url: String },
}

impl ShellCommand {
    /// Map an IPC message to a command. Unknown kinds yield `None`.
    pub fn from_ipc(msg: &IpcMessage) -> Option<Self> {
        match msg.kind.as_str() {
            OPEN_URL_KIND => Some(Self::OpenUrl {
                url: msg.payload.to_address(),
            }),
            _ => None,
        }
    }

    /// The IPC kind this command travels as.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenUrl { .. } => OPEN_URL_KIND,
        }
    }
}

/// The one capability exposed to page content.
///
/// Defines a frozen, non-configurable `window.browserAPI` whose only member
/// is `openURL(url)`. `String(url || "")` mirrors how the payload is
/// coerced before it crosses the boundary.
const BRIDGE_SCRIPT: &str = r#"
(function() {
    var api = Object.freeze({
        openURL: function(url) {
            window.ipc.postMessage(JSON.stringify({
                kind: "open-url",
                payload: String(url || "")
            }));
        }
    });
    Object.defineProperty(window, "browserAPI", {
        value: api,
        writable: false,
        configurable: false,
        enumerable: true
    });
})();
"#;

const SPELLCHECK_OFF_SCRIPT: &str = r#"
document.addEventListener("DOMContentLoaded", function() {
    document.documentElement.spellcheck = false;
});
"#;

/// Build the initialization script injected into every WebView.
///
/// This is the only script the shell injects. Spell-check suppression rides
/// along in the same script because the engine exposes no setting for it.
pub fn bridge_script(spellcheck: bool) -> String {
    if spellcheck {
        BRIDGE_SCRIPT.to_string()
    } else {
        format!("{BRIDGE_SCRIPT}{SPELLCHECK_OFF_SCRIPT}")
    }
}
