//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use arrow_common::WindowKey;

use super::context::{lifecycle_step, HostSignal, LifecycleAction, LifecycleStep};
use super::core::{BrowserApp, ShellEvent};
use super::host::{window_key, WinitHost};
use super::keys::{key_name, nav_action, KeyMods};
use crate::toolkit;

impl ApplicationHandler<ShellEvent> for BrowserApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.handle_host_signal(event_loop, HostSignal::Resumed);
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: ShellEvent) {
        match event {
            ShellEvent::WebViewActivity => self.dispatch_webview_events(),
            ShellEvent::Reopen => self.handle_host_signal(event_loop, HostSignal::Reopen),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let key = window_key(window_id);

        match event {
            WindowEvent::CloseRequested => {
                if !self.context.on_window_closed(key) {
                    return;
                }
                tracing::info!(%key, "window closed");

                if self.context.window_count() == 0 {
                    match self.context.on_all_windows_closed() {
                        LifecycleAction::Quit => event_loop.exit(),
                        LifecycleAction::KeepRunning if toolkit::CAN_REOPEN => {
                            tracing::info!("all windows closed; staying resident");
                        }
                        LifecycleAction::KeepRunning => {
                            tracing::warn!(
                                "all windows closed; staying resident, but this platform \
                                 has no way to reopen one"
                            );
                        }
                    }
                }
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(w) = self.context.window_mut(key) {
                        w.fit_webview(size);
                    }
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(key, event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(toolkit::pump());
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        tracing::info!("Initiating shutdown");
        // Drop the WebView and its window while the loop is still alive
        drop(self.context.take_window());
        self.webviews.drain_events();
    }
}

impl BrowserApp {
    /// Run "ready" or "activate" for a platform signal.
    fn handle_host_signal(&mut self, event_loop: &ActiveEventLoop, signal: HostSignal) {
        let step = lifecycle_step(self.started, signal);
        let mut host = WinitHost::new(event_loop, &self.webviews);

        let result = match step {
            LifecycleStep::Ready => {
                self.started = true;
                tracing::info!(
                    quit_on_all_windows_closed = self.context.policy().quit_on_all_windows_closed,
                    "shell ready"
                );
                self.context.on_ready(&mut host)
            }
            LifecycleStep::Activate => self.context.on_activate(&mut host).map(|created| {
                if created {
                    tracing::info!(?signal, "window recreated on activate");
                }
            }),
        };

        if let Err(e) = result {
            tracing::error!("Failed to create window: {e}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    /// Map a key press to a navigation shortcut and apply it.
    fn handle_keyboard_input(&mut self, window: WindowKey, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            repeat,
            ..
        } = event;
        if state != ElementState::Pressed || repeat {
            return;
        }

        let Some(name) = key_name(&logical_key) else {
            return;
        };
        let mods = KeyMods::from(self.modifiers);

        if let Some(action) = nav_action(&name, mods, cfg!(target_os = "macos")) {
            tracing::debug!(%window, ?action, "navigation shortcut");
            self.context.apply_nav(window, action);
        }
    }
}
