//! Mount lifetime tracking for view side effects.
//!
//! A [`MountGuard`] lives as long as the view that started an effect. Async
//! work spawned by the effect holds a [`MountToken`] and checks it before
//! touching view state, so nothing is written after the view is gone.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

type TeardownHook = Box<dyn FnOnce()>;

pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
    teardown: Vec<TeardownHook>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
            teardown: Vec::new(),
        }
    }

    pub fn token(&self) -> MountToken {
        MountToken {
            mounted: self.mounted.clone(),
        }
    }

    /// Registers `hook` to run when the guard is dropped, after all tokens
    /// have been marked unmounted.
    pub fn on_teardown(&mut self, hook: impl FnOnce() + 'static) {
        self.teardown.push(Box::new(hook));
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.mounted.set(false);
        for hook in self.teardown.drain(..) {
            hook();
        }
    }
}

impl fmt::Debug for MountGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountGuard")
            .field("mounted", &self.mounted.get())
            .field("teardown_hooks", &self.teardown.len())
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct MountToken {
    mounted: Rc<Cell<bool>>,
}

impl MountToken {
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}
