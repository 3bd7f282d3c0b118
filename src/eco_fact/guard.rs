use std::cell::Cell;
use std::rc::Rc;

/// Latch allowing at most one eco-fact request at a time.
#[derive(Clone, Debug, Default)]
pub struct InFlightGuard {
    held: Rc<Cell<bool>>,
}

impl PartialEq for InFlightGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.held, &other.held)
    }
}

/// Releases the guard when dropped.
#[derive(Debug)]
pub struct InFlightTicket {
    held: Rc<Cell<bool>>,
}

impl InFlightGuard {
    pub fn try_acquire(&self) -> Option<InFlightTicket> {
        if self.held.replace(true) {
            return None;
        }
        Some(InFlightTicket {
            held: self.held.clone(),
        })
    }

    pub fn is_held(&self) -> bool {
        self.held.get()
    }
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.held.set(false);
    }
}
