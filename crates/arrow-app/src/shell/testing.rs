//! In-memory host used by the shell's unit tests.

use arrow_common::{ShellError, WindowKey};
use arrow_webview::HistoryStep;

use super::context::{BrowserHost, HostWindow, WindowOptions};

pub struct FakeWindow {
    pub key: WindowKey,
    pub loads: Vec<String>,
    pub history: Vec<HistoryStep>,
    pub title: String,
    pub current_url: String,
    pub fail_loads: bool,
}

impl HostWindow for FakeWindow {
    fn key(&self) -> WindowKey {
        self.key
    }

    fn load_url(&mut self, url: &str) -> Result<(), ShellError> {
        if self.fail_loads {
            return Err(ShellError::WebView("engine gone".into()));
        }
        self.loads.push(url.to_string());
        self.current_url = url.to_string();
        Ok(())
    }

    fn step_history(&mut self, step: HistoryStep) -> Result<(), ShellError> {
        if self.fail_loads {
            return Err(ShellError::WebView("engine gone".into()));
        }
        self.history.push(step);
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn current_url(&self) -> &str {
        &self.current_url
    }

    fn set_current_url(&mut self, url: String) {
        self.current_url = url;
    }
}

/// Opens `FakeWindow`s keyed 1, 2, 3... in creation order.
#[derive(Default)]
pub struct FakeHost {
    pub opened: Vec<WindowOptions>,
    pub fail_open: bool,
    pub fail_loads: bool,
}

impl BrowserHost for FakeHost {
    type Window = FakeWindow;

    fn open_window(&mut self, options: &WindowOptions) -> Result<FakeWindow, ShellError> {
        if self.fail_open {
            return Err(ShellError::Window("no display".into()));
        }
        self.opened.push(options.clone());
        Ok(FakeWindow {
            key: WindowKey(self.opened.len() as u64),
            loads: Vec::new(),
            history: Vec::new(),
            title: options.title.clone(),
            current_url: "about:blank".into(),
            fail_loads: self.fail_loads,
        })
    }
}
