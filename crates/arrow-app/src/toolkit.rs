//! Platform toolkit glue.
//!
//! On Linux, wry renders through WebKitGTK, which only makes progress while
//! the GTK main context is iterated. winit knows nothing about GTK, so the
//! loop wakes on a short timer and drains pending GTK events. Elsewhere the
//! loop sleeps until something happens.
//!
//! On macOS, winit does not forward dock icon clicks. The reopen hook adds
//! `applicationShouldHandleReopen:hasVisibleWindows:` to winit's application
//! delegate and turns each call into [`ShellEvent::Reopen`].

use arrow_common::ShellError;
use winit::event_loop::{ControlFlow, EventLoopProxy};

use crate::shell::ShellEvent;

#[cfg(target_os = "linux")]
const GTK_PUMP_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

/// Whether the platform can ask a resident app for a new window.
pub const CAN_REOPEN: bool = cfg!(target_os = "macos");

/// Initialize the toolkit before any WebView is built.
#[cfg(target_os = "linux")]
pub fn init() -> Result<(), ShellError> {
    gtk::init().map_err(|e| ShellError::WebView(format!("GTK init failed: {e}")))
}

#[cfg(not(target_os = "linux"))]
pub fn init() -> Result<(), ShellError> {
    Ok(())
}

/// Run pending toolkit work and return how long the loop may sleep.
#[cfg(target_os = "linux")]
pub fn pump() -> ControlFlow {
    while gtk::events_pending() {
        gtk::main_iteration_do(false);
    }
    ControlFlow::wait_duration(GTK_PUMP_INTERVAL)
}

#[cfg(not(target_os = "linux"))]
pub fn pump() -> ControlFlow {
    ControlFlow::Wait
}

/// Route the platform's reopen request to the event loop.
///
/// Must run after the event loop is built (winit installs its delegate
/// then) and before it starts.
#[cfg(target_os = "macos")]
pub fn install_reopen_hook(proxy: EventLoopProxy<ShellEvent>) -> Result<(), ShellError> {
    reopen::install(proxy)
}

#[cfg(not(target_os = "macos"))]
pub fn install_reopen_hook(_proxy: EventLoopProxy<ShellEvent>) -> Result<(), ShellError> {
    Ok(())
}

#[cfg(target_os = "macos")]
mod reopen {
    use std::ffi::CStr;
    use std::sync::{Mutex, OnceLock};

    use arrow_common::ShellError;
    use objc::runtime::{class_addMethod, object_getClass, Class, Imp, Object, Sel, BOOL, NO, YES};
    use objc::{msg_send, sel, sel_impl};
    use winit::event_loop::EventLoopProxy;

    use crate::shell::ShellEvent;

    static PROXY: OnceLock<Mutex<EventLoopProxy<ShellEvent>>> = OnceLock::new();

    // BOOL is a signed char on x86_64 and a C bool on Apple silicon
    #[cfg(target_arch = "aarch64")]
    const REOPEN_TYPES: &CStr = c"B@:@B";
    #[cfg(not(target_arch = "aarch64"))]
    const REOPEN_TYPES: &CStr = c"c@:@c";

    type ReopenFn = extern "C" fn(&Object, Sel, *mut Object, BOOL) -> BOOL;

    // SAFETY: called by AppKit on the main thread. Panics must not unwind
    // across the FFI boundary.
    extern "C" fn should_handle_reopen(
        _this: &Object,
        _sel: Sel,
        _app: *mut Object,
        _has_visible_windows: BOOL,
    ) -> BOOL {
        let _ = std::panic::catch_unwind(|| {
            if let Some(Ok(proxy)) = PROXY.get().map(|p| p.lock()) {
                // Closed loop means we are shutting down
                let _ = proxy.send_event(ShellEvent::Reopen);
            }
        });
        YES
    }

    pub fn install(proxy: EventLoopProxy<ShellEvent>) -> Result<(), ShellError> {
        if PROXY.set(Mutex::new(proxy)).is_err() {
            return Ok(());
        }

        unsafe {
            let app_class = Class::get("NSApplication")
                .ok_or_else(|| ShellError::Window("NSApplication class not found".into()))?;
            let app: *mut Object = msg_send![app_class, sharedApplication];
            let delegate: *mut Object = msg_send![app, delegate];
            if delegate.is_null() {
                return Err(ShellError::Window(
                    "application delegate not installed yet".into(),
                ));
            }

            let class = object_getClass(delegate) as *mut Class;
            let imp: Imp = std::mem::transmute::<ReopenFn, Imp>(should_handle_reopen);
            let added = class_addMethod(
                class,
                sel!(applicationShouldHandleReopen:hasVisibleWindows:),
                imp,
                REOPEN_TYPES.as_ptr(),
            );
            if added == NO {
                return Err(ShellError::Window(
                    "application delegate already handles reopen".into(),
                ));
            }

            // AppKit caches which optional delegate methods exist when the
            // delegate is assigned
            let _: () = msg_send![app, setDelegate: std::ptr::null_mut::<Object>()];
            let _: () = msg_send![app, setDelegate: delegate];
        }

        tracing::debug!("dock reopen hook installed");
        Ok(())
    }
}
