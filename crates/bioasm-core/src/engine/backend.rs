use std::sync::{Arc, OnceLock, RwLock};

/// A process-lifetime backend slot: a lazily constructed default plus an
/// explicit replacement.
///
/// The default is built at most once even under concurrent first use
/// (`OnceLock`). `replace` swaps the instance used by future lookups;
/// callers that already captured an `Arc` keep using it, so an in-flight
/// resolution is never disrupted by a swap.
pub(crate) struct BackendSlot<T: ?Sized> {
    factory: Box<dyn Fn() -> Arc<T> + Send + Sync>,
    default: OnceLock<Arc<T>>,
    replacement: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized> BackendSlot<T> {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            default: OnceLock::new(),
            replacement: RwLock::new(None),
        }
    }

    /// The backend to use for a new resolution.
    pub fn current(&self) -> Arc<T> {
        if let Some(replacement) = self
            .replacement
            .read()
            .expect("backend lock poisoned")
            .as_ref()
        {
            return Arc::clone(replacement);
        }
        Arc::clone(self.default.get_or_init(|| (self.factory)()))
    }

    /// Replaces the backend for all future lookups.
    pub fn replace(&self, backend: Arc<T>) {
        *self.replacement.write().expect("backend lock poisoned") = Some(backend);
    }

    /// Clears a replacement, falling back to the (lazily built) default.
    pub fn clear(&self) {
        *self.replacement.write().expect("backend lock poisoned") = None;
    }
}
