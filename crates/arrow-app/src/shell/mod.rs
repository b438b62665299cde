//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the event
//! loop, feeding lifecycle events and WebView IPC into [`ShellContext`].

mod context;
mod core;
mod dispatch;
mod event_handler;
mod host;
mod keys;

#[cfg(test)]
mod testing;

pub use core::{BrowserApp, ShellEvent};
