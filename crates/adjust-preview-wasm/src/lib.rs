//! Adjust Preview WASM - WebAssembly bindings for the adjustment preview engine
//!
//! This crate exposes adjust-preview-core to the teaching site's local
//! adjustment widget.
//!
//! # Module Structure
//!
//! - `session` - The editing session: pointer events, sliders, commands, overlay
//! - `listener` - Window-level drag listeners driven by JS callbacks
//! - `types` - Name parsing for tools, sliders and handles
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsAdjustmentSession } from '@adjust-preview/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsAdjustmentSession(imageUrl, undefined, attach, detach);
//! session.select_tool('radial');
//! session.set_tone('exposure', -40);
//! console.log(session.overlay_css(overlay.clientWidth, overlay.clientHeight));
//! ```
//!
//! # Diagnostics
//!
//! The engine logs through `tracing` and this crate installs no subscriber,
//! so those events are dropped unless the embedding build sets one up.
//! Rejections that matter to the page are reported on the console directly:
//! invalid preset objects with `console.warn`, ignored presses with
//! `console.debug`, failing listener callbacks with `console.warn`.

use wasm_bindgen::prelude::*;

mod listener;
mod session;
mod types;

// Re-export public types
pub use session::{builtin_presets, JsAdjustmentSession};

/// Initialize the WASM module (called automatically on load)
///
/// Routes Rust panics, including the engine's debug assertions, to
/// `console.error`.
#[wasm_bindgen(start)]
pub fn init() {
    install_panic_hook();
}

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("adjust-preview panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
