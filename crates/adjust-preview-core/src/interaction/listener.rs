//! Scoped pointer listener registration.
//!
//! While a gesture is open the host must deliver move and end notifications
//! even when the pointer wanders off the surface (in a browser, by listening
//! on `window`). Those registrations are held by a [`ListenerScope`], which
//! releases them when dropped, so every way a gesture can finish (release,
//! leave, tool switch, teardown of the controller) detaches them.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle for one registered listener, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

/// The notification a listener delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerKind {
    Move,
    End,
}

impl ListenerKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::End => "end",
        }
    }
}

/// Something that can register and unregister pointer listeners.
///
/// Calls happen on the event thread only, hence `&self`; implementations
/// keep their bookkeeping in `Cell`/`RefCell`.
pub trait ListenerHost {
    fn attach(&self, kind: ListenerKind) -> ListenerId;
    fn detach(&self, id: ListenerId);
}

/// Move and end listeners held for the lifetime of one gesture.
pub struct ListenerScope<H: ListenerHost> {
    host: Rc<H>,
    ids: [ListenerId; 2],
}

impl<H: ListenerHost> ListenerScope<H> {
    pub fn acquire(host: &Rc<H>) -> Self {
        let move_id = host.attach(ListenerKind::Move);
        let end_id = host.attach(ListenerKind::End);
        Self {
            host: Rc::clone(host),
            ids: [move_id, end_id],
        }
    }

    pub fn ids(&self) -> [ListenerId; 2] {
        self.ids
    }
}

impl<H: ListenerHost> Drop for ListenerScope<H> {
    fn drop(&mut self) {
        for id in self.ids {
            self.host.detach(id);
        }
    }
}

impl<H: ListenerHost> std::fmt::Debug for ListenerScope<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerScope")
            .field("ids", &self.ids)
            .finish()
    }
}

/// In-memory listener bookkeeping.
///
/// Useful for native hosts that dispatch pointer events themselves, and for
/// checking that registrations are balanced.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: Cell<u32>,
    attached: RefCell<Vec<(ListenerId, ListenerKind)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently registered.
    pub fn outstanding(&self) -> usize {
        self.attached.borrow().len()
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.attached.borrow().iter().any(|(_, k)| *k == kind)
    }
}

impl ListenerHost for ListenerRegistry {
    fn attach(&self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));
        self.attached.borrow_mut().push((id, kind));
        id
    }

    fn detach(&self, id: ListenerId) {
        self.attached.borrow_mut().retain(|(attached, _)| *attached != id);
    }
}
