use std::any::Any;

use log::debug;

/// A handle to a solver session, handed out to the host.
///
/// Sessions are not implemented yet: a handle is created uninitialised, owns no solver state, and
/// [`SolverHandle::release`] can be called any number of times. It is released when dropped as
/// well, so a handle reclaimed by the host's garbage collector goes through the same cleanup.
#[derive(Default)]
pub struct SolverHandle {
    initialized: bool,
    session: Option<Box<dyn Any + Send + Sync>>,
}

impl SolverHandle {
    pub fn new() -> SolverHandle {
        SolverHandle {
            initialized: false,
            session: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn release(&mut self) {
        if self.initialized {
            debug!("releasing solver session");
        }

        self.session = None;
        self.initialized = false;
    }
}

impl std::fmt::Debug for SolverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverHandle")
            .field("initialized", &self.initialized)
            .field("has_session", &self.session.is_some())
            .finish()
    }
}

impl Drop for SolverHandle {
    fn drop(&mut self) {
        self.release();
    }
}
