//! Listener host backed by JavaScript callbacks.
//!
//! The page supplies two functions when it creates a session:
//!
//! ```typescript
//! const attach = (id: number, kind: 'move' | 'end') => {
//!   const handler = kind === 'move' ? onWindowMove : onWindowUp;
//!   const type = kind === 'move' ? 'pointermove' : 'pointerup';
//!   handlers.set(id, [type, handler]);
//!   window.addEventListener(type, handler);
//! };
//! const detach = (id: number) => {
//!   const [type, handler] = handlers.get(id);
//!   window.removeEventListener(type, handler);
//!   handlers.delete(id);
//! };
//! ```
//!
//! The engine calls them when a gesture opens and when it closes, on every
//! exit path.

use adjust_preview_core::interaction::{ListenerHost, ListenerId, ListenerKind};
use std::cell::Cell;
use wasm_bindgen::prelude::*;

pub struct JsListenerHost {
    attach: js_sys::Function,
    detach: js_sys::Function,
    next_id: Cell<u32>,
}

impl JsListenerHost {
    pub fn new(attach: js_sys::Function, detach: js_sys::Function) -> Self {
        Self {
            attach,
            detach,
            next_id: Cell::new(0),
        }
    }
}

impl ListenerHost for JsListenerHost {
    fn attach(&self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));

        let result = self.attach.call2(
            &JsValue::NULL,
            &JsValue::from(id.0),
            &JsValue::from_str(kind.as_str()),
        );
        if let Err(err) = result {
            web_sys::console::warn_2(&JsValue::from_str("listener attach callback failed:"), &err);
        }
        id
    }

    fn detach(&self, id: ListenerId) {
        if let Err(err) = self.detach.call1(&JsValue::NULL, &JsValue::from(id.0)) {
            web_sys::console::warn_2(&JsValue::from_str("listener detach callback failed:"), &err);
        }
    }
}
