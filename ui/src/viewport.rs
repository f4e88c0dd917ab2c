use app_shell::is_mobile_width;
use leptos::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Read the current viewport class from the window width. Falls back to
/// desktop when no width is available.
#[cfg(target_arch = "wasm32")]
pub fn check_viewport() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(is_mobile_width)
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn check_viewport() -> bool {
    false
}

/// Classify the viewport on mount and on every `resize` event, pushing the
/// result into `on_change`. The listener lives for the mounted shell and is
/// detached when the owning scope is disposed.
#[cfg(target_arch = "wasm32")]
pub fn use_viewport_monitor(on_change: impl Fn(bool) + Clone + 'static) {
    create_effect(move |_| {
        on_change(check_viewport());

        let Some(win) = window() else {
            web_sys::console::error_1(&"viewport monitor: no window".into());
            return;
        };

        let listener = on_change.clone();
        let cb = Rc::new(Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
            move |_: web_sys::Event| {
                listener(check_viewport());
            },
        )));
        let _ = win
            .add_event_listener_with_callback("resize", cb.as_ref().as_ref().unchecked_ref());
        on_cleanup({
            let cb = cb.clone();
            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        cb.as_ref().as_ref().unchecked_ref(),
                    );
                }
            }
        });
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_viewport_monitor(on_change: impl Fn(bool) + Clone + 'static) {
    create_effect(move |_| on_change(check_viewport()));
}
