//! Back To Top Component
//!
//! Floating control that appears after the page scrolls past a threshold
//! and smooth-scrolls back to the top when activated.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Scroll distance in pixels before the control appears
const SHOW_AFTER_PX: f64 = 300.0;

/// Bind a passive window scroll listener that tracks the threshold.
/// The closure lives for the page's lifetime; no unbind is needed in a
/// single-view app.
fn bind_scroll_listener(set_visible: WriteSignal<bool>) {
    use wasm_bindgen::closure::Closure;

    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(win) = web_sys::window() {
            let y = win.scroll_y().unwrap_or(0.0);
            set_visible.set(y > SHOW_AFTER_PX);
        }
    });

    if let Some(win) = web_sys::window() {
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(true);
        let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &opts,
        );
    }
    on_scroll.forget();
}

/// Floating "back to top" button
#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);
    bind_scroll_listener(set_visible);

    let scroll_to_top = move |_| {
        if let Some(win) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        }
    };

    let btn_class = move || {
        if visible.get() { "back-to-top visible" } else { "back-to-top" }
    };

    view! {
        <button
            class=btn_class
            on:click=scroll_to_top
            aria-label="Quay về đầu trang"
            title="Quay về đầu trang"
        >
            "↑"
        </button>
    }
}
