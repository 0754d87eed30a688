use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Identifies one mounted control within a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub usize);

#[derive(Debug, Default)]
struct Registrations {
    next_token: u64,
    active: HashMap<ControlId, u64>,
}

/// Which controls currently receive key events.
///
/// Registrations are scoped: [`KeyListeners::attach`] hands back a
/// [`ListenerGuard`] and the registration lives exactly as long as that guard.
/// Attaching again for the same control supersedes the old registration, and
/// the superseded guard's drop leaves the new one in place.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    inner: Rc<RefCell<Registrations>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, control: ControlId) -> ListenerGuard {
        let mut inner = self.inner.borrow_mut();
        inner.next_token += 1;
        let token = inner.next_token;
        if inner.active.insert(control, token).is_some() {
            log::debug!("key listener for {control:?} replaced");
        } else {
            log::debug!("key listener for {control:?} attached");
        }
        ListenerGuard {
            registry: Rc::downgrade(&self.inner),
            control,
            token,
        }
    }

    pub fn is_listening(&self, control: ControlId) -> bool {
        self.inner.borrow().active.contains_key(&control)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps one key listener registered until dropped.
#[derive(Debug)]
pub struct ListenerGuard {
    registry: Weak<RefCell<Registrations>>,
    control: ControlId,
    token: u64,
}

impl ListenerGuard {
    pub fn control(&self) -> ControlId {
        self.control
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut inner = registry.borrow_mut();
        if inner.active.get(&self.control) == Some(&self.token) {
            inner.active.remove(&self.control);
            log::debug!("key listener for {:?} detached", self.control);
        }
    }
}
